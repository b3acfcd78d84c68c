//! Aggregation engine for the statistics charts.
//!
//! Items are grouped by the lower-cased, trimmed value of one field.
//! Fields with a controlled [`Vocabulary`] are canonicalized first: values
//! that match neither a canonical key nor one of its synonyms are dropped
//! from that aggregation. Blank values always land in the [`UNKNOWN_LABEL`]
//! bucket.

use std::collections::BTreeMap;

use crate::item::{CatalogItem, Field};

/// Bucket label for blank or missing values.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Controlled vocabularies applied before grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vocabulary {
    ReadingStatus,
    BookFormat,
    MovieFormat,
    WatchStatus,
    PlayStatus,
    GamePlatform,
    RecordFormat,
}

type Table = &'static [(&'static str, &'static [&'static str])];

const READING_STATUS: Table = &[
    ("read", &["finished", "przeczytana", "przeczytane", "przeczytany"]),
    ("reading", &["in progress", "currently reading", "czytam", "w trakcie"]),
    (
        "to_read",
        &["to read", "want to read", "unread", "do przeczytania", "chcę przeczytać"],
    ),
    ("abandoned", &["dnf", "did not finish", "porzucona", "porzucone"]),
];

const BOOK_FORMAT: Table = &[
    ("paperback", &["softcover", "miękka okładka", "miekka okladka"]),
    ("hardcover", &["hardback", "twarda okładka", "twarda okladka"]),
    ("ebook", &["e-book", "kindle", "epub"]),
    ("audiobook", &["audio", "audiobook mp3", "książka audio"]),
];

const MOVIE_FORMAT: Table = &[
    ("dvd", &[]),
    ("blu-ray", &["bluray", "blu ray", "bd"]),
    ("4k", &["4k uhd", "uhd", "ultra hd"]),
    ("vhs", &["kaseta vhs"]),
    ("digital", &["streaming", "cyfrowy", "cyfrowa"]),
];

const WATCH_STATUS: Table = &[
    ("watched", &["seen", "obejrzany", "obejrzane"]),
    ("watching", &["oglądam", "ogladam", "w trakcie"]),
    ("to_watch", &["to watch", "watchlist", "do obejrzenia"]),
];

const PLAY_STATUS: Table = &[
    ("played", &["completed", "finished", "ukończona", "ukonczona"]),
    ("playing", &["gram", "w trakcie"]),
    ("to_play", &["to play", "backlog", "do zagrania"]),
];

const GAME_PLATFORM: Table = &[
    ("pc", &["windows", "steam", "komputer", "mac", "linux"]),
    (
        "playstation",
        &["ps1", "psx", "ps2", "ps3", "ps4", "ps5", "psp", "ps vita"],
    ),
    (
        "xbox",
        &["xbox 360", "xbox one", "xbox series x", "xbox series s"],
    ),
    (
        "nintendo",
        &[
            "switch",
            "nintendo switch",
            "wii",
            "wii u",
            "3ds",
            "ds",
            "game boy",
            "gba",
            "gamecube",
            "n64",
            "snes",
            "nes",
        ],
    ),
    (
        "board",
        &[
            "board game",
            "tabletop",
            "card game",
            "planszowa",
            "gra planszowa",
            "planszówka",
            "planszowka",
            "karciana",
        ],
    ),
    ("mobile", &["android", "ios", "telefon"]),
];

const RECORD_FORMAT: Table = &[
    ("vinyl", &["lp", "ep", "winyl", "płyta winylowa", "12\"", "7\""]),
    ("cd", &["compact disc", "płyta cd", "plyta cd"]),
    ("cassette", &["tape", "kaseta", "mc"]),
    ("digital", &["mp3", "flac", "streaming", "cyfrowy"]),
];

impl Vocabulary {
    fn table(&self) -> Table {
        match self {
            Self::ReadingStatus => READING_STATUS,
            Self::BookFormat => BOOK_FORMAT,
            Self::MovieFormat => MOVIE_FORMAT,
            Self::WatchStatus => WATCH_STATUS,
            Self::PlayStatus => PLAY_STATUS,
            Self::GamePlatform => GAME_PLATFORM,
            Self::RecordFormat => RECORD_FORMAT,
        }
    }

    /// The recognized category keys, in table order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.table().iter().map(|(key, _)| *key).collect()
    }

    /// Map a raw stored value to its canonical key.
    ///
    /// Matching ignores case and surrounding whitespace. Returns `None` for
    /// values that are not recognized.
    pub fn canonicalize(&self, raw: &str) -> Option<&'static str> {
        let value = raw.trim().to_lowercase();
        self.table()
            .iter()
            .find(|(key, synonyms)| *key == value || synonyms.contains(&value.as_str()))
            .map(|(key, _)| *key)
    }
}

/// Counts per category label.
///
/// Labels iterate in sorted order, so the same data always produces the
/// same legend order and color assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub counts: BTreeMap<String, usize>,
    /// Items left out because their value was not in the field's vocabulary.
    pub dropped: usize,
}

impl Aggregation {
    /// Sum of all bucket counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Buckets ordered by descending count, ties by label.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.counts.iter().map(|(l, c)| (l.as_str(), *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Compute the category label for one value, or `None` if it is dropped.
pub fn category_label(field: impl Field, raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(UNKNOWN_LABEL.to_string());
    }
    match field.vocabulary() {
        Some(vocab) => vocab.canonicalize(trimmed).map(str::to_string),
        None => Some(trimmed.to_lowercase()),
    }
}

/// Group `items` by `field` and count each group.
pub fn aggregate<T: CatalogItem>(items: &[T], field: T::Field) -> Aggregation {
    let mut result = Aggregation::default();
    for item in items {
        match category_label(field, item.get(field)) {
            Some(label) => *result.counts.entry(label).or_insert(0) += 1,
            None => result.dropped += 1,
        }
    }
    if result.dropped > 0 {
        log::debug!(
            "stats: dropped {} unrecognized '{}' value(s)",
            result.dropped,
            field.name()
        );
    }
    result
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
