//! The item store seam and its SQLite implementation.
//!
//! List views only talk to [`ItemStore`]. Every query is scoped by owner id
//! except lookups by document id.

use std::path::Path;

use rusqlite::Connection;
use serde_json::{Map, Value};
use shelf_core::document::fields_of;
use shelf_core::{CatalogItem, Document, ItemKind};

use crate::operations::{self, StoreError};
use crate::queries;
use crate::schema;

/// A document store holding items of every kind.
pub trait ItemStore {
    fn fetch_documents(
        &self,
        kind: ItemKind,
        owner_id: &str,
    ) -> Result<Vec<Document>, StoreError>;

    fn get_document(&self, kind: ItemKind, id: &str) -> Result<Option<Document>, StoreError>;

    /// Store a new document and return its assigned id.
    fn insert_document(
        &self,
        kind: ItemKind,
        owner_id: &str,
        fields: Map<String, Value>,
    ) -> Result<String, StoreError>;

    /// Overwrite every field of an existing document.
    fn update_document(
        &self,
        kind: ItemKind,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError>;

    fn delete_document(&self, kind: ItemKind, id: &str) -> Result<bool, StoreError>;

    /// Delete every document of `kind` owned by `owner_id`.
    fn wipe(&self, kind: ItemKind, owner_id: &str) -> Result<usize, StoreError>;

    /// All items of type `T` owned by `owner_id`.
    fn fetch_all<T: CatalogItem>(&self, owner_id: &str) -> Result<Vec<T>, StoreError>
    where
        Self: Sized,
    {
        let docs = self.fetch_documents(T::KIND, owner_id)?;
        Ok(docs.iter().map(Document::decode::<T>).collect())
    }

    fn get<T: CatalogItem>(&self, id: &str) -> Result<Option<T>, StoreError>
    where
        Self: Sized,
    {
        Ok(self.get_document(T::KIND, id)?.map(|d| d.decode()))
    }

    /// Insert `item` under its owner id and return the assigned id.
    fn insert<T: CatalogItem>(&self, item: &T) -> Result<String, StoreError>
    where
        Self: Sized,
    {
        self.insert_document(T::KIND, item.owner_id(), fields_of(item))
    }

    /// Insert every item and return the assigned ids in order.
    ///
    /// Stores that support it insert all or nothing.
    fn insert_all<T: CatalogItem>(&self, items: &[T]) -> Result<Vec<String>, StoreError>
    where
        Self: Sized,
    {
        items.iter().map(|item| self.insert(item)).collect()
    }

    /// Overwrite the stored copy of `item`, matched by id.
    fn update<T: CatalogItem>(&self, item: &T) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        self.update_document(T::KIND, item.id(), fields_of(item))
    }
}

/// [`ItemStore`] backed by a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_database(path)?,
        })
    }

    /// In-memory store with the full schema.
    pub fn open_memory() -> Result<Self, StoreError> {
        Ok(Self {
            conn: schema::open_memory()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Item counts per kind for one owner.
    pub fn counts(&self, owner_id: &str) -> Result<Vec<(ItemKind, i64)>, StoreError> {
        queries::count_by_kind(&self.conn, owner_id)
    }
}

impl ItemStore for SqliteStore {
    fn fetch_documents(
        &self,
        kind: ItemKind,
        owner_id: &str,
    ) -> Result<Vec<Document>, StoreError> {
        queries::fetch_by_owner(&self.conn, kind, owner_id)
    }

    fn get_document(&self, kind: ItemKind, id: &str) -> Result<Option<Document>, StoreError> {
        queries::find_document(&self.conn, kind, id)
    }

    fn insert_document(
        &self,
        kind: ItemKind,
        owner_id: &str,
        fields: Map<String, Value>,
    ) -> Result<String, StoreError> {
        operations::insert_document(&self.conn, kind, owner_id, fields)
    }

    /// Inserts inside one transaction; a failing item rolls back the batch.
    fn insert_all<T: CatalogItem>(&self, items: &[T]) -> Result<Vec<String>, StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            ids.push(operations::insert_document(
                &tx,
                T::KIND,
                item.owner_id(),
                fields_of(item),
            )?);
        }
        tx.commit()?;
        Ok(ids)
    }

    fn update_document(
        &self,
        kind: ItemKind,
        id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), StoreError> {
        operations::update_document(&self.conn, kind, id, fields)
    }

    fn delete_document(&self, kind: ItemKind, id: &str) -> Result<bool, StoreError> {
        operations::delete_document(&self.conn, kind, id)
    }

    fn wipe(&self, kind: ItemKind, owner_id: &str) -> Result<usize, StoreError> {
        operations::wipe_collection(&self.conn, kind, owner_id)
    }
}
