use crate::item::{CatalogItem, Field, ItemKind, KeyKind, MatchRule};
use crate::stats::Vocabulary;

/// A book in the owner's library.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub owner_id: String,
    pub cover: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publisher: String,
    pub language: String,
    pub isbn: String,
    pub pages: String,
    /// Publication date, `yyyy-MM-dd` when entered through the form.
    pub published: String,
    /// Reading status.
    pub status: String,
    pub format: String,
    pub rating: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookField {
    Title,
    Author,
    Genre,
    Publisher,
    Language,
    Isbn,
    Pages,
    Published,
    Status,
    Format,
    Rating,
    Notes,
}

const ALL_BOOK_FIELDS: &[BookField] = &[
    BookField::Title,
    BookField::Author,
    BookField::Genre,
    BookField::Publisher,
    BookField::Language,
    BookField::Isbn,
    BookField::Pages,
    BookField::Published,
    BookField::Status,
    BookField::Format,
    BookField::Rating,
    BookField::Notes,
];

impl Field for BookField {
    fn all() -> &'static [Self] {
        ALL_BOOK_FIELDS
    }

    fn title() -> Self {
        Self::Title
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
            Self::Publisher => "publisher",
            Self::Language => "language",
            Self::Isbn => "isbn",
            Self::Pages => "pages",
            Self::Published => "published",
            Self::Status => "status",
            Self::Format => "format",
            Self::Rating => "rating",
            Self::Notes => "notes",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Author => "Author",
            Self::Genre => "Genre",
            Self::Publisher => "Publisher",
            Self::Language => "Language",
            Self::Isbn => "ISBN",
            Self::Pages => "Page Count",
            Self::Published => "Published",
            Self::Status => "Reading Status",
            Self::Format => "Format",
            Self::Rating => "Rating",
            Self::Notes => "Notes",
        }
    }

    fn rule(&self) -> MatchRule {
        match self {
            Self::Pages | Self::Rating => MatchRule::Exact,
            _ => MatchRule::Contains,
        }
    }

    fn key_kind(&self) -> KeyKind {
        match self {
            Self::Pages | Self::Rating => KeyKind::Integer,
            Self::Published => KeyKind::Date,
            _ => KeyKind::Text,
        }
    }

    fn vocabulary(&self) -> Option<Vocabulary> {
        match self {
            Self::Status => Some(Vocabulary::ReadingStatus),
            Self::Format => Some(Vocabulary::BookFormat),
            _ => None,
        }
    }
}

impl CatalogItem for Book {
    type Field = BookField;

    const KIND: ItemKind = ItemKind::Book;

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

    fn get(&self, field: BookField) -> &str {
        match field {
            BookField::Title => &self.title,
            BookField::Author => &self.author,
            BookField::Genre => &self.genre,
            BookField::Publisher => &self.publisher,
            BookField::Language => &self.language,
            BookField::Isbn => &self.isbn,
            BookField::Pages => &self.pages,
            BookField::Published => &self.published,
            BookField::Status => &self.status,
            BookField::Format => &self.format,
            BookField::Rating => &self.rating,
            BookField::Notes => &self.notes,
        }
    }

    fn set(&mut self, field: BookField, value: String) {
        let slot = match field {
            BookField::Title => &mut self.title,
            BookField::Author => &mut self.author,
            BookField::Genre => &mut self.genre,
            BookField::Publisher => &mut self.publisher,
            BookField::Language => &mut self.language,
            BookField::Isbn => &mut self.isbn,
            BookField::Pages => &mut self.pages,
            BookField::Published => &mut self.published,
            BookField::Status => &mut self.status,
            BookField::Format => &mut self.format,
            BookField::Rating => &mut self.rating,
            BookField::Notes => &mut self.notes,
        };
        *slot = value;
    }
}
