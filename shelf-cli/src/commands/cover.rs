use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_core::CatalogItem;
use shelf_db::ItemStore;
use shelf_lib::settings::resolve_covers_dir;
use shelf_lib::covers::cover_path;
use shelf_lib::{CoverOptions, store_cover};

use crate::CliError;
use crate::session::Session;

use super::items::load_owned;

pub(crate) fn run_cover<T: CatalogItem>(
    session: &Session,
    id: &str,
    image: &Path,
) -> Result<(), CliError> {
    let mut item = load_owned::<T>(session, id)?;
    let bytes = std::fs::read(image)?;
    let dir = resolve_covers_dir(&session.settings);

    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(|e| CliError::runtime(format!("Failed to create tokio runtime: {}", e)))?;
    let name = rt
        .block_on(store_cover(bytes, dir.clone(), CoverOptions::default()))
        .map_err(|e| CliError::runtime(format!("Failed to store cover: {}", e)))?;

    item.set_cover(name.clone());
    session
        .store
        .update(&item)
        .map_err(|e| CliError::database(format!("Failed to update item: {}", e)))?;

    log::info!(
        "{} cover for {}",
        "Attached".if_supports_color(Stdout, |t| t.green()),
        item.title().if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!(
        "  {}",
        cover_path(&dir, &name)
            .display()
            .if_supports_color(Stdout, |t| t.dimmed())
    );
    Ok(())
}
