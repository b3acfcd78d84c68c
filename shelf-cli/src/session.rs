//! Per-invocation state shared by item commands.

use std::path::PathBuf;

use shelf_core::{Feature, Tier};
use shelf_db::SqliteStore;
use shelf_lib::Settings;
use shelf_lib::settings::resolve_database_path;

use crate::CliError;

pub(crate) struct Session {
    pub settings: Settings,
    pub store: SqliteStore,
    pub owner: String,
    pub db_path: PathBuf,
}

impl Session {
    /// Load settings, resolve the owner and open the database.
    pub(crate) fn open(db: Option<PathBuf>, owner: Option<String>) -> Result<Self, CliError> {
        let settings = shelf_lib::load_settings();
        let owner = owner
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .or_else(|| settings.owner_id.clone())
            .ok_or_else(|| {
                CliError::config(
                    "No owner id set. Pass --owner or run 'shelf config set account.owner_id <id>'",
                )
            })?;

        let db_path = resolve_database_path(db, &settings);
        log::debug!("Opening {} for owner {}", db_path.display(), owner);
        let store = SqliteStore::open(&db_path).map_err(|e| {
            CliError::database(format!("Failed to open {}: {}", db_path.display(), e))
        })?;

        Ok(Self {
            settings,
            store,
            owner,
            db_path,
        })
    }

    pub(crate) fn tier(&self) -> Tier {
        self.settings.tier
    }

    /// Fail with [`CliError::FeatureLocked`] unless the tier allows `feature`.
    pub(crate) fn require(&self, feature: Feature) -> Result<(), CliError> {
        if self.tier().allows(feature) {
            Ok(())
        } else {
            Err(CliError::FeatureLocked(feature.display_name().to_string()))
        }
    }
}
