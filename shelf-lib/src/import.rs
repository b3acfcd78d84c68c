//! Bulk item import from YAML or JSON files.
//!
//! An import file is a list of items of one kind, written with the field
//! identifiers used in stored documents:
//!
//! ```yaml
//! - title: Solaris
//!   author: Stanisław Lem
//!   pages: 204
//! ```
//!
//! Numbers and booleans are accepted and stored as strings. Ids and owner
//! ids in the file are ignored; every imported item gets a fresh id and the
//! importing owner.

use std::path::Path;

use serde_json::{Map, Value};
use shelf_core::{CatalogItem, Document};
use shelf_db::{ItemStore, StoreError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yml::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Entry {0} is not a mapping of field names to values")]
    NotAMapping(usize),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Input syntax, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    Yaml,
    Json,
}

impl ImportFormat {
    /// `.json` files are JSON; everything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse import text into items of type `T`.
pub fn parse_items<T: CatalogItem>(text: &str, format: ImportFormat) -> Result<Vec<T>, ImportError> {
    let entries: Vec<Value> = match format {
        ImportFormat::Yaml => serde_yml::from_str(text)?,
        ImportFormat::Json => serde_json::from_str(text)?,
    };
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Value::Object(fields) => Ok(decode_entry(fields)),
            _ => Err(ImportError::NotAMapping(i + 1)),
        })
        .collect()
}

/// Read and parse an import file.
pub fn load_items<T: CatalogItem>(path: &Path) -> Result<Vec<T>, ImportError> {
    let text = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_items(&text, ImportFormat::from_path(path))
}

/// Insert `items` into `store` under `owner_id`. Returns the new ids.
///
/// Either every item is stored or none is.
pub fn import_items<T: CatalogItem, S: ItemStore>(
    store: &S,
    owner_id: &str,
    mut items: Vec<T>,
) -> Result<Vec<String>, ImportError> {
    for item in &mut items {
        item.set_owner_id(owner_id.to_string());
    }
    let ids = store.insert_all(&items)?;
    log::debug!("Imported {} {} for {}", ids.len(), T::KIND, owner_id);
    Ok(ids)
}

fn decode_entry<T: CatalogItem>(fields: Map<String, Value>) -> T {
    let mut item: T = Document::new("", fields).decode();
    item.set_id(String::new());
    item.set_owner_id(String::new());
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_core::{Book, Game};
    use shelf_db::SqliteStore;
    use tempfile::TempDir;

    const BOOKS_YAML: &str = "\
- title: Solaris
  author: Stanisław Lem
  pages: 204
  owner_id: someone-else
- title: Eden
  rating: 4
  notes: \"first contact, again\"
";

    #[test]
    fn yaml_entries_become_items() {
        let books: Vec<Book> = parse_items(BOOKS_YAML, ImportFormat::Yaml).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Solaris");
        assert_eq!(books[0].pages, "204");
        assert_eq!(books[0].owner_id, "");
        assert_eq!(books[1].rating, "4");
        assert_eq!(books[1].author, "");
        assert_eq!(books[1].notes, "first contact, again");
    }

    #[test]
    fn json_entries_become_items() {
        let text = r#"[{"title": "Gloomhaven", "min_players": 1, "max_players": 4}]"#;
        let games: Vec<Game> = parse_items(text, ImportFormat::Json).unwrap();
        assert_eq!(games[0].min_players, "1");
        assert_eq!(games[0].max_players, "4");
    }

    #[test]
    fn non_mapping_entry_is_rejected() {
        let err = parse_items::<Book>("- title: Ok\n- just a string\n", ImportFormat::Yaml)
            .unwrap_err();
        assert!(matches!(err, ImportError::NotAMapping(2)));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(ImportFormat::from_path(Path::new("a.JSON")), ImportFormat::Json);
        assert_eq!(ImportFormat::from_path(Path::new("a.yml")), ImportFormat::Yaml);
        assert_eq!(ImportFormat::from_path(Path::new("a")), ImportFormat::Yaml);
    }

    #[test]
    fn import_assigns_owner_and_ids() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("books.yaml");
        std::fs::write(&path, BOOKS_YAML).unwrap();

        let store = SqliteStore::open_memory().unwrap();
        let books: Vec<Book> = load_items(&path).unwrap();
        let ids = import_items(&store, "alice", books).unwrap();
        assert_eq!(ids.len(), 2);

        let stored: Vec<Book> = store.fetch_all("alice").unwrap();
        assert_eq!(stored.len(), 2);
        assert!(stored.iter().all(|b| b.owner_id == "alice"));
        let none: Vec<Book> = store.fetch_all("someone-else").unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn blank_owner_imports_nothing() {
        let store = SqliteStore::open_memory().unwrap();
        let books: Vec<Book> = parse_items(BOOKS_YAML, ImportFormat::Yaml).unwrap();
        let err = import_items(&store, "  ", books).unwrap_err();
        assert!(matches!(err, ImportError::Store(StoreError::MissingOwner)));
        assert!(store.fetch_all::<Book>("  ").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = load_items::<Book>(&tmp.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }
}
