use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_core::CatalogItem;
use shelf_lib::{import_items, load_items};

use crate::CliError;
use crate::session::Session;

pub(crate) fn run_import<T: CatalogItem>(session: &Session, path: &Path) -> Result<(), CliError> {
    let items: Vec<T> = load_items(path).map_err(|e| CliError::import(e.to_string()))?;
    if items.is_empty() {
        log::warn!("{} contains no items", path.display());
        return Ok(());
    }

    let ids = import_items(&session.store, &session.owner, items)
        .map_err(|e| CliError::import(e.to_string()))?;

    log::info!(
        "{} {} item(s) into {}",
        "Imported".if_supports_color(Stdout, |t| t.green()),
        ids.len(),
        T::KIND.display_name().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}
