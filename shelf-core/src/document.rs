//! Conversion between stored documents and typed items.
//!
//! A document is a flat map of field name to string, number, boolean or
//! null, keyed by an id assigned by the store. Every value is carried into
//! the item as a string: numbers are rendered, booleans become
//! `"true"`/`"false"` and nulls become blank. Unknown keys are ignored.

use serde_json::{Map, Number, Value};

use crate::item::{CatalogItem, Field};

/// Document key holding the owner id.
pub const OWNER_KEY: &str = "owner_id";
/// Document key holding the cover image reference.
pub const COVER_KEY: &str = "cover";

/// A stored record: opaque id plus its field map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }

    /// String form of one field, blank when missing.
    pub fn text(&self, key: &str) -> String {
        self.fields.get(key).map(value_to_text).unwrap_or_default()
    }

    /// Decode into a typed item.
    pub fn decode<T: CatalogItem>(&self) -> T {
        let mut item = T::default();
        item.set_id(self.id.clone());
        item.set_owner_id(self.text(OWNER_KEY));
        item.set_cover(self.text(COVER_KEY));
        for &field in T::Field::all() {
            item.set(field, self.text(field.name()));
        }
        item
    }

    /// Encode a typed item. The id is carried alongside, not inside, the map.
    pub fn encode<T: CatalogItem>(item: &T) -> Self {
        Self::new(item.id(), fields_of(item))
    }
}

/// Field map for an item, including owner and cover keys.
pub fn fields_of<T: CatalogItem>(item: &T) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert(OWNER_KEY.to_string(), Value::String(item.owner_id().to_string()));
    fields.insert(COVER_KEY.to_string(), Value::String(item.cover().to_string()));
    for &field in T::Field::all() {
        fields.insert(
            field.name().to_string(),
            Value::String(item.get(field).to_string()),
        );
    }
    fields
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_to_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => {
            log::debug!("document: ignoring nested value {}", value);
            String::new()
        }
    }
}

/// Whole floats render without a fraction (`6.0` becomes `"6"`) so they
/// match and sort like the integers they stand for.
fn number_to_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
