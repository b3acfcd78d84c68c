//! SQLite-backed document store for catalog items.
//!
//! Each item is stored as a JSON field map in one `items` table, keyed by
//! (collection, id) and indexed by owner id. Frontends use the
//! [`ItemStore`] trait so the backing store can be swapped.

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{
    ID_LEN, StoreError, delete_document, generate_id, insert_document, update_document,
    wipe_collection,
};
pub use queries::{count_by_kind, fetch_by_owner, find_document};
pub use schema::{SchemaError, open_database, open_memory};
pub use store::{ItemStore, SqliteStore};
