//! Core data model and list pipeline for the media shelf.
//!
//! Defines the four item kinds (books, movies, games, records), their field
//! enumerations, and the pure functions behind every list view: filtering,
//! sorting, aggregation for statistics charts, and CSV export. Nothing in
//! this crate performs I/O; stores and frontends live in `shelf-db`,
//! `shelf-lib` and `shelf-cli`.

pub mod book;
pub mod chart;
pub mod document;
pub mod export;
pub mod filter;
pub mod game;
pub mod isbn;
pub mod item;
pub mod movie;
pub mod record;
pub mod sort;
pub mod stats;
pub mod tier;

pub use book::{Book, BookField};
pub use chart::{PALETTE, PieSlice, Rgb, pie_slices};
pub use document::Document;
pub use export::{ExportError, export_items, export_table, generate_csv_content};
pub use filter::{FilterState, filter_items};
pub use game::{Game, GameField};
pub use item::{CatalogItem, Field, ItemKind, KeyKind, KindParseError, MatchRule};
pub use movie::{Movie, MovieField};
pub use record::{Record, RecordField};
pub use sort::{Direction, SortSpec, sort_items};
pub use stats::{Aggregation, UNKNOWN_LABEL, Vocabulary, aggregate};
pub use tier::{Feature, Tier};

/// The visible list for a view: `sort(filter(items))`.
pub fn visible_items<T: CatalogItem>(
    items: &[T],
    filter: &FilterState<T::Field>,
    sort: &SortSpec<T::Field>,
) -> Vec<T> {
    sort_items(&filter_items(items, filter), sort)
}
