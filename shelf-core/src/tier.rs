//! Account tiers and the features they unlock.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tier {
    #[default]
    Free,
    Premium,
}

/// Features that are only available on some tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Statistics,
    CsvExport,
}

impl Feature {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Statistics => "Statistics",
            Self::CsvExport => "CSV export",
        }
    }
}

impl Tier {
    pub fn allows(&self, feature: Feature) -> bool {
        match (self, feature) {
            (Self::Premium, _) => true,
            (Self::Free, Feature::Statistics | Feature::CsvExport) => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Premium => "premium",
        }
    }

    /// Parse a tier name; anything unrecognized is the free tier.
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "premium" | "pro" => Self::Premium,
            _ => Self::Free,
        }
    }
}
