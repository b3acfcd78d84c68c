//! Item kinds, field descriptors, and the trait every catalog item implements.
//!
//! Each item kind has its own closed field enumeration. A field knows how it
//! is matched by the filter engine, how its sort key is derived, and whether
//! its values go through a controlled vocabulary before aggregation.

use std::fmt::Debug;
use std::hash::Hash;

use crate::stats::Vocabulary;

/// The four kinds of catalog items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemKind {
    Book,
    Movie,
    Game,
    Record,
}

const ALL_KINDS: &[ItemKind] = &[
    ItemKind::Book,
    ItemKind::Movie,
    ItemKind::Game,
    ItemKind::Record,
];

impl ItemKind {
    /// Canonical short name, also used as the store collection name.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Book => "books",
            Self::Movie => "movies",
            Self::Game => "games",
            Self::Record => "records",
        }
    }

    /// Human-readable singular name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Book => "Book",
            Self::Movie => "Movie",
            Self::Game => "Game",
            Self::Record => "Record",
        }
    }

    /// All accepted names for this kind (case-insensitive matching).
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Book => &["books", "book", "library", "ksiazki"],
            Self::Movie => &["movies", "movie", "films", "film", "filmy"],
            Self::Game => &["games", "game", "gry"],
            Self::Record => &["records", "record", "music", "albums", "vinyl", "plyty"],
        }
    }

    /// Default file name offered when exporting this kind.
    pub fn export_file_name(&self) -> &'static str {
        match self {
            Self::Book => "library_export.csv",
            Self::Movie => "movies_export.csv",
            Self::Game => "games_export.csv",
            Self::Record => "records_export.csv",
        }
    }

    pub fn all() -> &'static [ItemKind] {
        ALL_KINDS
    }
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into an `ItemKind`.
#[derive(Debug, Clone)]
pub struct KindParseError(pub String);

impl std::fmt::Display for KindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown item kind: '{}'", self.0)
    }
}

impl std::error::Error for KindParseError {}

impl std::str::FromStr for ItemKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.aliases().contains(&lower.as_str()))
            .ok_or_else(|| KindParseError(s.to_string()))
    }
}

/// How the filter engine compares a field against its filter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Case-insensitive substring containment.
    Contains,
    /// Integer equality of the trimmed values. Missing or unparseable item
    /// values never match.
    Exact,
}

/// How the sort engine derives a comparable key from a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Lower-cased string.
    Text,
    /// Parsed integer, 0 on parse failure.
    Integer,
    /// Raw string, compared lexicographically (ISO `yyyy-MM-dd` sorts correctly).
    Date,
}

/// A field of one item kind.
pub trait Field: Copy + Eq + Ord + Hash + Debug + 'static {
    /// Every field in declaration order. Export columns follow this order.
    fn all() -> &'static [Self];

    /// The title field, used as the default and fallback sort key.
    fn title() -> Self;

    /// Stable identifier used in stored documents and on the command line.
    fn name(&self) -> &'static str;

    /// Column header for exports and tables.
    fn label(&self) -> &'static str;

    fn rule(&self) -> MatchRule {
        MatchRule::Contains
    }

    fn key_kind(&self) -> KeyKind {
        KeyKind::Text
    }

    /// Controlled vocabulary applied before aggregation, if any.
    fn vocabulary(&self) -> Option<Vocabulary> {
        None
    }

    /// Look a field up by identifier or label, ignoring case.
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().iter().copied().find(|f| {
            f.name().eq_ignore_ascii_case(name) || f.label().eq_ignore_ascii_case(name)
        })
    }
}

/// A catalog entry of a specific kind.
///
/// Attribute values are plain strings; a blank string means the value is
/// missing. The store assigns `id` and it never changes afterwards.
pub trait CatalogItem: Clone + Debug + Default {
    type Field: Field;

    const KIND: ItemKind;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);

    fn owner_id(&self) -> &str;

    fn set_owner_id(&mut self, owner_id: String);

    /// Reference to the stored cover image, blank when there is none.
    fn cover(&self) -> &str;

    fn set_cover(&mut self, cover: String);

    fn get(&self, field: Self::Field) -> &str;

    fn set(&mut self, field: Self::Field, value: String);

    /// Display title.
    fn title(&self) -> &str {
        self.get(Self::Field::title())
    }

    /// Export row in field declaration order.
    fn export_row(&self) -> Vec<String> {
        Self::Field::all()
            .iter()
            .map(|&f| self.get(f).to_string())
            .collect()
    }
}

/// Export header in field declaration order.
pub fn export_headers<F: Field>() -> Vec<String> {
    F::all().iter().map(|f| f.label().to_string()).collect()
}
