//! Shared application settings (account, library database, output folders).
//!
//! The settings file is `~/.config/media-shelf/settings.toml`. Values are
//! deserialized into [`Settings`] and written back with a surgical `toml::Value`
//! update so keys written by other tools are preserved.

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use shelf_core::Tier;
use thiserror::Error;

const APP_DIR: &str = "media-shelf";

/// Every key the `config` command may set, as `section.name`.
pub const KEYS: &[&str] = &[
    "account.owner_id",
    "account.tier",
    "library.database",
    "export.directory",
    "covers.directory",
];

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Unknown setting '{0}'")]
    UnknownKey(String),
    #[error("[{0}] in settings.toml is not a table")]
    NotATable(String),
    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Values read from `settings.toml`. Blank strings are treated as unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub owner_id: Option<String>,
    pub tier: Tier,
    pub database: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub covers_dir: Option<PathBuf>,
}

/// Canonical path to the settings file: `~/.config/media-shelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join(APP_DIR).join("settings.toml")
}

/// Load settings from the canonical file.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_path())
}

/// On-disk layout of `settings.toml`. Tables and keys not listed here are
/// ignored on load and left untouched on save.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SettingsFile {
    account: AccountSection,
    library: LibrarySection,
    export: DirectorySection,
    covers: DirectorySection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AccountSection {
    owner_id: Option<String>,
    tier: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LibrarySection {
    database: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DirectorySection {
    directory: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<SettingsFile> for Settings {
    fn from(file: SettingsFile) -> Self {
        Self {
            owner_id: non_blank(file.account.owner_id),
            tier: non_blank(file.account.tier)
                .map(|t| Tier::from_str_loose(&t))
                .unwrap_or_default(),
            database: non_blank(file.library.database).map(PathBuf::from),
            export_dir: non_blank(file.export.directory).map(PathBuf::from),
            covers_dir: non_blank(file.covers.directory).map(PathBuf::from),
        }
    }
}

/// Load settings from `path`, returning defaults if missing or corrupt.
pub fn load_settings_from(path: &Path) -> Settings {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str::<SettingsFile>(&contents)
            .map(Settings::from)
            .unwrap_or_else(|e| {
                log::warn!("Failed to parse settings at {}: {}", path.display(), e);
                Settings::default()
            }),
        Err(_) => Settings::default(),
    }
}

/// Set (or clear, with `None`) one `section.name` key in the canonical file.
pub fn save_setting(key: &str, value: Option<&str>) -> Result<(), SettingsError> {
    save_setting_in(&settings_path(), key, value)
}

/// Set (or clear) one key in the settings file at `path`.
///
/// Only the named key is touched; everything else in the file survives.
pub fn save_setting_in(path: &Path, key: &str, value: Option<&str>) -> Result<(), SettingsError> {
    if !KEYS.contains(&key) {
        return Err(SettingsError::UnknownKey(key.to_string()));
    }
    let Some((section, name)) = key.split_once('.') else {
        return Err(SettingsError::UnknownKey(key.to_string()));
    };

    let mut doc: toml::Value = match std::fs::read_to_string(path) {
        Ok(contents) => contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default())),
        Err(_) => toml::Value::Table(Default::default()),
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| SettingsError::NotATable("root".to_string()))?;
    let section_value = table
        .entry(section)
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let section_table = section_value
        .as_table_mut()
        .ok_or_else(|| SettingsError::NotATable(section.to_string()))?;

    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => {
            section_table.insert(name.to_string(), toml::Value::String(v.to_string()));
        }
        None => {
            section_table.remove(name);
        }
    }

    // Write atomically
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc)?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, path)?;

    log::debug!("Saved {} in {}", key, path.display());
    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}

/// Resolve the database file using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. Saved `library.database`
/// 3. `<data dir>/media-shelf/shelf.db`
pub fn resolve_database_path(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_override
        .or_else(|| settings.database.clone())
        .unwrap_or_else(|| data_dir().join("shelf.db"))
}

/// Resolve the export folder: CLI override, saved `export.directory`, the
/// user's download folder, then the working directory.
pub fn resolve_export_dir(cli_override: Option<PathBuf>, settings: &Settings) -> PathBuf {
    cli_override
        .or_else(|| settings.export_dir.clone())
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve the cover blob folder: saved `covers.directory`, else
/// `<data dir>/media-shelf/covers`.
pub fn resolve_covers_dir(settings: &Settings) -> PathBuf {
    settings
        .covers_dir
        .clone()
        .unwrap_or_else(|| data_dir().join("covers"))
}

fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

#[cfg(test)]
#[path = "tests/settings_tests.rs"]
mod tests;
