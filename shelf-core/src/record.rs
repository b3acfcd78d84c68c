use crate::item::{CatalogItem, Field, ItemKind, KeyKind, MatchRule};
use crate::stats::Vocabulary;

/// A music record (album, single, EP).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub owner_id: String,
    pub cover: String,
    pub title: String,
    pub artist: String,
    pub genre: String,
    pub label: String,
    pub release_date: String,
    pub format: String,
    /// Number of tracks.
    pub tracks: String,
    pub rating: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordField {
    Title,
    Artist,
    Genre,
    Label,
    ReleaseDate,
    Format,
    Tracks,
    Rating,
    Notes,
}

const ALL_RECORD_FIELDS: &[RecordField] = &[
    RecordField::Title,
    RecordField::Artist,
    RecordField::Genre,
    RecordField::Label,
    RecordField::ReleaseDate,
    RecordField::Format,
    RecordField::Tracks,
    RecordField::Rating,
    RecordField::Notes,
];

impl Field for RecordField {
    fn all() -> &'static [Self] {
        ALL_RECORD_FIELDS
    }

    fn title() -> Self {
        Self::Title
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Artist => "artist",
            Self::Genre => "genre",
            Self::Label => "label",
            Self::ReleaseDate => "release_date",
            Self::Format => "format",
            Self::Tracks => "tracks",
            Self::Rating => "rating",
            Self::Notes => "notes",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Artist => "Artist",
            Self::Genre => "Genre",
            Self::Label => "Label",
            Self::ReleaseDate => "Release Date",
            Self::Format => "Format",
            Self::Tracks => "Tracks",
            Self::Rating => "Rating",
            Self::Notes => "Notes",
        }
    }

    fn rule(&self) -> MatchRule {
        match self {
            Self::Tracks | Self::Rating => MatchRule::Exact,
            _ => MatchRule::Contains,
        }
    }

    fn key_kind(&self) -> KeyKind {
        match self {
            Self::Tracks | Self::Rating => KeyKind::Integer,
            Self::ReleaseDate => KeyKind::Date,
            _ => KeyKind::Text,
        }
    }

    fn vocabulary(&self) -> Option<Vocabulary> {
        match self {
            Self::Format => Some(Vocabulary::RecordFormat),
            _ => None,
        }
    }
}

impl CatalogItem for Record {
    type Field = RecordField;

    const KIND: ItemKind = ItemKind::Record;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn owner_id(&self) -> &str {
        &self.owner_id
    }

    fn set_owner_id(&mut self, owner_id: String) {
        self.owner_id = owner_id;
    }

    fn cover(&self) -> &str {
        &self.cover
    }

    fn set_cover(&mut self, cover: String) {
        self.cover = cover;
    }

    fn get(&self, field: RecordField) -> &str {
        match field {
            RecordField::Title => &self.title,
            RecordField::Artist => &self.artist,
            RecordField::Genre => &self.genre,
            RecordField::Label => &self.label,
            RecordField::ReleaseDate => &self.release_date,
            RecordField::Format => &self.format,
            RecordField::Tracks => &self.tracks,
            RecordField::Rating => &self.rating,
            RecordField::Notes => &self.notes,
        }
    }

    fn set(&mut self, field: RecordField, value: String) {
        let slot = match field {
            RecordField::Title => &mut self.title,
            RecordField::Artist => &mut self.artist,
            RecordField::Genre => &mut self.genre,
            RecordField::Label => &mut self.label,
            RecordField::ReleaseDate => &mut self.release_date,
            RecordField::Format => &mut self.format,
            RecordField::Tracks => &mut self.tracks,
            RecordField::Rating => &mut self.rating,
            RecordField::Notes => &mut self.notes,
        };
        *slot = value;
    }
}
