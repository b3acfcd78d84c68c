//! Sort engine.
//!
//! Items are ordered by a single field. Descending order is the exact
//! reversal of the stable ascending order, so ties come out in the reverse
//! of their ascending order.

use crate::filter::parse_int;
use crate::item::{CatalogItem, Field, KeyKind};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parse a direction, treating anything unrecognized as ascending.
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "desc" | "descending" | "down" | "malejaco" => Self::Descending,
            _ => Self::Ascending,
        }
    }
}

/// Field and direction for one list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<F: Field> {
    pub field: F,
    pub direction: Direction,
}

impl<F: Field> Default for SortSpec<F> {
    fn default() -> Self {
        Self {
            field: F::title(),
            direction: Direction::Ascending,
        }
    }
}

impl<F: Field> SortSpec<F> {
    pub fn new(field: F, direction: Direction) -> Self {
        Self { field, direction }
    }

    pub fn ascending(field: F) -> Self {
        Self::new(field, Direction::Ascending)
    }

    pub fn descending(field: F) -> Self {
        Self::new(field, Direction::Descending)
    }

    /// Build a spec from loosely-typed names. Unknown fields fall back to title.
    pub fn from_names(field: &str, direction: &str) -> Self {
        let field = F::from_name(field).unwrap_or_else(|| {
            log::debug!("sort: unknown field '{}', using title", field);
            F::title()
        });
        Self::new(field, Direction::from_str_loose(direction))
    }
}

/// Comparable key derived from one field value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Text(String),
    Integer(i64),
    Raw(String),
}

fn sort_key(kind: KeyKind, value: &str) -> SortKey {
    match kind {
        KeyKind::Text => SortKey::Text(value.to_lowercase()),
        KeyKind::Integer => SortKey::Integer(parse_int(value).unwrap_or(0)),
        KeyKind::Date => SortKey::Raw(value.to_string()),
    }
}

/// Return a sorted copy of `items`.
pub fn sort_items<T: CatalogItem>(items: &[T], spec: &SortSpec<T::Field>) -> Vec<T> {
    let kind = spec.field.key_kind();
    let mut sorted = items.to_vec();
    // stable
    sorted.sort_by_cached_key(|item| sort_key(kind, item.get(spec.field)));
    if spec.direction == Direction::Descending {
        sorted.reverse();
    }
    sorted
}

#[cfg(test)]
#[path = "tests/sort_tests.rs"]
mod tests;
