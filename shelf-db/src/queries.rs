//! Read queries for stored documents.

use rusqlite::{Connection, OptionalExtension, params};
use serde_json::{Map, Value};
use shelf_core::{Document, ItemKind};
use shelf_core::document::OWNER_KEY;

use crate::operations::StoreError;

/// All documents of one kind owned by `owner_id`, in insertion order.
pub fn fetch_by_owner(
    conn: &Connection,
    kind: ItemKind,
    owner_id: &str,
) -> Result<Vec<Document>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, owner_id, body FROM items
         WHERE collection = ?1 AND owner_id = ?2
         ORDER BY rowid",
    )?;
    let rows = stmt.query_map(params![kind.short_name(), owner_id], read_row)?;
    let rows = rows.collect::<Result<Vec<_>, _>>()?;
    rows.into_iter()
        .map(|(id, owner, body)| to_document(id, owner, &body))
        .collect()
}

/// Look up one document by id.
pub fn find_document(
    conn: &Connection,
    kind: ItemKind,
    id: &str,
) -> Result<Option<Document>, StoreError> {
    let row = conn
        .query_row(
            "SELECT id, owner_id, body FROM items WHERE collection = ?1 AND id = ?2",
            params![kind.short_name(), id],
            read_row,
        )
        .optional()?;
    row.map(|(id, owner, body)| to_document(id, owner, &body))
        .transpose()
}

/// Number of documents per kind for one owner.
pub fn count_by_kind(
    conn: &Connection,
    owner_id: &str,
) -> Result<Vec<(ItemKind, i64)>, StoreError> {
    ItemKind::all()
        .iter()
        .map(|&kind| -> Result<(ItemKind, i64), StoreError> {
            let n: i64 = conn.query_row(
                "SELECT COUNT(*) FROM items WHERE collection = ?1 AND owner_id = ?2",
                params![kind.short_name(), owner_id],
                |r| r.get(0),
            )?;
            Ok((kind, n))
        })
        .collect()
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn read_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(String, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn to_document(id: String, owner: String, body: &str) -> Result<Document, StoreError> {
    let mut fields: Map<String, Value> = serde_json::from_str(body)?;
    fields.insert(OWNER_KEY.to_string(), Value::String(owner));
    Ok(Document::new(id, fields))
}
