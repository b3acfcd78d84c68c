use crate::item::{CatalogItem, Field, ItemKind, KeyKind, MatchRule};
use crate::stats::Vocabulary;

/// A board or video game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub owner_id: String,
    pub cover: String,
    pub title: String,
    pub developer: String,
    pub genre: String,
    pub platform: String,
    pub min_players: String,
    pub max_players: String,
    pub release_date: String,
    pub status: String,
    pub rating: String,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GameField {
    Title,
    Developer,
    Genre,
    Platform,
    MinPlayers,
    MaxPlayers,
    ReleaseDate,
    Status,
    Rating,
    Notes,
}

const ALL_GAME_FIELDS: &[GameField] = &[
    GameField::Title,
    GameField::Developer,
    GameField::Genre,
    GameField::Platform,
    GameField::MinPlayers,
    GameField::MaxPlayers,
    GameField::ReleaseDate,
    GameField::Status,
    GameField::Rating,
    GameField::Notes,
];

impl Field for GameField {
    fn all() -> &'static [Self] {
        ALL_GAME_FIELDS
    }

    fn title() -> Self {
        Self::Title
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Developer => "developer",
            Self::Genre => "genre",
            Self::Platform => "platform",
            Self::MinPlayers => "min_players",
            Self::MaxPlayers => "max_players",
            Self::ReleaseDate => "release_date",
            Self::Status => "status",
            Self::Rating => "rating",
            Self::Notes => "notes",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Developer => "Developer",
            Self::Genre => "Genre",
            Self::Platform => "Platform",
            Self::MinPlayers => "Min Players",
            Self::MaxPlayers => "Max Players",
            Self::ReleaseDate => "Release Date",
            Self::Status => "Play Status",
            Self::Rating => "Rating",
            Self::Notes => "Notes",
        }
    }

    fn rule(&self) -> MatchRule {
        match self {
            Self::MinPlayers | Self::MaxPlayers | Self::Rating => MatchRule::Exact,
            _ => MatchRule::Contains,
        }
    }

    fn key_kind(&self) -> KeyKind {
        match self {
            Self::MinPlayers | Self::MaxPlayers | Self::Rating => KeyKind::Integer,
            Self::ReleaseDate => KeyKind::Date,
            _ => KeyKind::Text,
        }
    }

    fn vocabulary(&self) -> Option<Vocabulary> {
        match self {
            Self::Platform => Some(Vocabulary::GamePlatform),
            Self::Status => Some(Vocabulary::PlayStatus),
            _ => None,
        }
    }
}

impl CatalogItem for Game {
    type Field = GameField;

    const KIND: ItemKind = ItemKind::Game;

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

    fn get(&self, field: GameField) -> &str {
        match field {
            GameField::Title => &self.title,
            GameField::Developer => &self.developer,
            GameField::Genre => &self.genre,
            GameField::Platform => &self.platform,
            GameField::MinPlayers => &self.min_players,
            GameField::MaxPlayers => &self.max_players,
            GameField::ReleaseDate => &self.release_date,
            GameField::Status => &self.status,
            GameField::Rating => &self.rating,
            GameField::Notes => &self.notes,
        }
    }

    fn set(&mut self, field: GameField, value: String) {
        let slot = match field {
            GameField::Title => &mut self.title,
            GameField::Developer => &mut self.developer,
            GameField::Genre => &mut self.genre,
            GameField::Platform => &mut self.platform,
            GameField::MinPlayers => &mut self.min_players,
            GameField::MaxPlayers => &mut self.max_players,
            GameField::ReleaseDate => &mut self.release_date,
            GameField::Status => &mut self.status,
            GameField::Rating => &mut self.rating,
            GameField::Notes => &mut self.notes,
        };
        *slot = value;
    }
}
