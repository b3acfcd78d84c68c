//! Write operations: insert, overwrite, delete and wipe documents.

use std::sync::atomic::{AtomicU64, Ordering};

use rusqlite::{Connection, OptionalExtension, params};
use serde_json::{Map, Value};
use sha2::{Digest, Sha256};
use shelf_core::ItemKind;
use shelf_core::document::OWNER_KEY;
use thiserror::Error;

use crate::schema::SchemaError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("Malformed document body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{kind} '{id}' not found")]
    NotFound { kind: ItemKind, id: String },
    #[error("Owner id must not be blank")]
    MissingOwner,
}

/// Length of generated document ids.
pub const ID_LEN: usize = 20;

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Generate a fresh document id for `owner_id`.
///
/// Hex digest of the owner, the current time and a process-wide counter,
/// truncated to [`ID_LEN`] characters.
pub fn generate_id(owner_id: &str) -> String {
    let nanos = chrono::Utc::now()
        .timestamp_nanos_opt()
        .unwrap_or_default();
    let counter = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut hasher = Sha256::new();
    hasher.update(owner_id.as_bytes());
    hasher.update(nanos.to_le_bytes());
    hasher.update(counter.to_le_bytes());
    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
    hex[..ID_LEN].to_string()
}

/// Insert a new document and return its generated id.
///
/// The owner id is written both to the indexed column and into the body.
pub fn insert_document(
    conn: &Connection,
    kind: ItemKind,
    owner_id: &str,
    mut fields: Map<String, Value>,
) -> Result<String, StoreError> {
    if owner_id.trim().is_empty() {
        return Err(StoreError::MissingOwner);
    }
    fields.insert(OWNER_KEY.to_string(), Value::String(owner_id.to_string()));
    let body = serde_json::to_string(&fields)?;
    let id = generate_id(owner_id);

    conn.execute(
        "INSERT INTO items (collection, id, owner_id, body) VALUES (?1, ?2, ?3, ?4)",
        params![kind.short_name(), id, owner_id, body],
    )?;
    log::debug!("Inserted {} '{}' for {}", kind.short_name(), id, owner_id);
    Ok(id)
}

/// Overwrite every field of an existing document.
///
/// The owner never changes: the body's owner key is reset to the stored one.
pub fn update_document(
    conn: &Connection,
    kind: ItemKind,
    id: &str,
    mut fields: Map<String, Value>,
) -> Result<(), StoreError> {
    let owner: Option<String> = conn
        .query_row(
            "SELECT owner_id FROM items WHERE collection = ?1 AND id = ?2",
            params![kind.short_name(), id],
            |row| row.get(0),
        )
        .optional()?;
    let owner = owner.ok_or_else(|| StoreError::NotFound {
        kind,
        id: id.to_string(),
    })?;

    fields.insert(OWNER_KEY.to_string(), Value::String(owner));
    let body = serde_json::to_string(&fields)?;
    conn.execute(
        "UPDATE items SET body = ?3, updated_at = datetime('now')
         WHERE collection = ?1 AND id = ?2",
        params![kind.short_name(), id, body],
    )?;
    Ok(())
}

/// Delete one document. Returns whether it existed.
pub fn delete_document(conn: &Connection, kind: ItemKind, id: &str) -> Result<bool, StoreError> {
    let n = conn.execute(
        "DELETE FROM items WHERE collection = ?1 AND id = ?2",
        params![kind.short_name(), id],
    )?;
    Ok(n > 0)
}

/// Delete every document of one kind belonging to `owner_id`.
pub fn wipe_collection(
    conn: &Connection,
    kind: ItemKind,
    owner_id: &str,
) -> Result<usize, StoreError> {
    let n = conn.execute(
        "DELETE FROM items WHERE collection = ?1 AND owner_id = ?2",
        params![kind.short_name(), owner_id],
    )?;
    log::info!("Removed {} {} for {}", n, kind.short_name(), owner_id);
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique_hex() {
        let a = generate_id("owner");
        let b = generate_id("owner");
        assert_eq!(a.len(), ID_LEN);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
