use crate::item::{CatalogItem, Field, ItemKind, KeyKind, MatchRule};
use crate::stats::Vocabulary;

/// A movie on the owner's shelf.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub owner_id: String,
    pub cover: String,
    pub title: String,
    pub director: String,
    pub genre: String,
    pub language: String,
    pub release_date: String,
    /// Runtime in minutes.
    pub runtime: String,
    pub format: String,
    pub status: String,
    pub rating: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MovieField {
    Title,
    Director,
    Genre,
    Language,
    ReleaseDate,
    Runtime,
    Format,
    Status,
    Rating,
    Notes,
}

const ALL_MOVIE_FIELDS: &[MovieField] = &[
    MovieField::Title,
    MovieField::Director,
    MovieField::Genre,
    MovieField::Language,
    MovieField::ReleaseDate,
    MovieField::Runtime,
    MovieField::Format,
    MovieField::Status,
    MovieField::Rating,
    MovieField::Notes,
];

impl Field for MovieField {
    fn all() -> &'static [Self] {
        ALL_MOVIE_FIELDS
    }

    fn title() -> Self {
        Self::Title
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Director => "director",
            Self::Genre => "genre",
            Self::Language => "language",
            Self::ReleaseDate => "release_date",
            Self::Runtime => "runtime",
            Self::Format => "format",
            Self::Status => "status",
            Self::Rating => "rating",
            Self::Notes => "notes",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Director => "Director",
            Self::Genre => "Genre",
            Self::Language => "Language",
            Self::ReleaseDate => "Release Date",
            Self::Runtime => "Runtime",
            Self::Format => "Format",
            Self::Status => "Watch Status",
            Self::Rating => "Rating",
            Self::Notes => "Notes",
        }
    }

    fn rule(&self) -> MatchRule {
        match self {
            Self::Runtime | Self::Rating => MatchRule::Exact,
            _ => MatchRule::Contains,
        }
    }

    fn key_kind(&self) -> KeyKind {
        match self {
            Self::Runtime | Self::Rating => KeyKind::Integer,
            Self::ReleaseDate => KeyKind::Date,
            _ => KeyKind::Text,
        }
    }

    fn vocabulary(&self) -> Option<Vocabulary> {
        match self {
            Self::Format => Some(Vocabulary::MovieFormat),
            Self::Status => Some(Vocabulary::WatchStatus),
            _ => None,
        }
    }
}

impl CatalogItem for Movie {
    type Field = MovieField;

    const KIND: ItemKind = ItemKind::Movie;

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

    fn get(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Director => &self.director,
            MovieField::Genre => &self.genre,
            MovieField::Language => &self.language,
            MovieField::ReleaseDate => &self.release_date,
            MovieField::Runtime => &self.runtime,
            MovieField::Format => &self.format,
            MovieField::Status => &self.status,
            MovieField::Rating => &self.rating,
            MovieField::Notes => &self.notes,
        }
    }

    fn set(&mut self, field: MovieField, value: String) {
        let slot = match field {
            MovieField::Title => &mut self.title,
            MovieField::Director => &mut self.director,
            MovieField::Genre => &mut self.genre,
            MovieField::Language => &mut self.language,
            MovieField::ReleaseDate => &mut self.release_date,
            MovieField::Runtime => &mut self.runtime,
            MovieField::Format => &mut self.format,
            MovieField::Status => &mut self.status,
            MovieField::Rating => &mut self.rating,
            MovieField::Notes => &mut self.notes,
        };
        *slot = value;
    }
}
