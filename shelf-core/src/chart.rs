//! Pie chart layout for aggregation results.

use crate::stats::Aggregation;

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb` form.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Fixed slice palette. Slices take colors by position, wrapping after ten.
pub const PALETTE: [Rgb; 10] = [
    Rgb(0xe5, 0x73, 0x73),
    Rgb(0x64, 0xb5, 0xf6),
    Rgb(0x81, 0xc7, 0x84),
    Rgb(0xff, 0xd5, 0x4f),
    Rgb(0xba, 0x68, 0xc8),
    Rgb(0x4d, 0xd0, 0xe1),
    Rgb(0xff, 0x8a, 0x65),
    Rgb(0xa1, 0x88, 0x7f),
    Rgb(0x90, 0xa4, 0xae),
    Rgb(0xf0, 0x62, 0x92),
];

/// Palette color for the slice at `index`.
pub fn palette_color(index: usize) -> Rgb {
    PALETTE[index % PALETTE.len()]
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    /// Degrees, measured from the start of the first slice.
    pub start_angle: f32,
    pub sweep_angle: f32,
    pub color: Rgb,
}

impl PieSlice {
    /// Share of the whole, in percent.
    pub fn percent(&self) -> f32 {
        self.sweep_angle / 360.0 * 100.0
    }
}

/// Lay out slices in the aggregation's iteration order.
///
/// Each slice sweeps `360 * count / total` degrees. An empty aggregation
/// yields no slices.
pub fn pie_slices(aggregation: &Aggregation) -> Vec<PieSlice> {
    let total = aggregation.total();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0f32;
    aggregation
        .counts
        .iter()
        .enumerate()
        .map(|(i, (label, &count))| {
            let sweep = 360.0 * count as f32 / total as f32;
            let slice = PieSlice {
                label: label.clone(),
                count,
                start_angle: start,
                sweep_angle: sweep,
                color: palette_color(i),
            };
            start += sweep;
            slice
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(pairs: &[(&str, usize)]) -> Aggregation {
        Aggregation {
            counts: pairs.iter().map(|(l, c)| (l.to_string(), *c)).collect(),
            dropped: 0,
        }
    }

    #[test]
    fn sweeps_are_proportional() {
        let slices = pie_slices(&agg(&[("a", 1), ("b", 3)]));
        assert_eq!(slices.len(), 2);
        assert!((slices[0].sweep_angle - 90.0).abs() < 1e-4);
        assert!((slices[1].sweep_angle - 270.0).abs() < 1e-4);
        assert!((slices[1].start_angle - 90.0).abs() < 1e-4);
        assert!((slices[1].percent() - 75.0).abs() < 1e-3);
    }

    #[test]
    fn sweeps_cover_full_circle() {
        let slices = pie_slices(&agg(&[("a", 1), ("b", 1), ("c", 1)]));
        let sum: f32 = slices.iter().map(|s| s.sweep_angle).sum();
        assert!((sum - 360.0).abs() < 1e-3);
    }

    #[test]
    fn colors_cycle_by_position() {
        let pairs: Vec<(String, usize)> = (0..12).map(|i| (format!("g{:02}", i), 1)).collect();
        let refs: Vec<(&str, usize)> = pairs.iter().map(|(l, c)| (l.as_str(), *c)).collect();
        let slices = pie_slices(&agg(&refs));
        assert_eq!(slices[0].color, PALETTE[0]);
        assert_eq!(slices[9].color, PALETTE[9]);
        assert_eq!(slices[10].color, PALETTE[0]);
        assert_eq!(slices[11].color, PALETTE[1]);
    }

    #[test]
    fn same_data_gets_same_colors() {
        let a = pie_slices(&agg(&[("rock", 2), ("jazz", 1)]));
        let b = pie_slices(&agg(&[("jazz", 1), ("rock", 2)]));
        assert_eq!(a, b);
    }

    #[test]
    fn empty_aggregation_has_no_slices() {
        assert!(pie_slices(&Aggregation::default()).is_empty());
    }

    #[test]
    fn hex_format() {
        assert_eq!(Rgb(0xe5, 0x73, 0x73).hex(), "#e57373");
    }
}
