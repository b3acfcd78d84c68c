//! Add, edit, delete and wipe.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_core::{CatalogItem, ItemKind, isbn};
use shelf_db::ItemStore;

use crate::CliError;
use crate::session::Session;

use super::apply_fields;

pub(crate) fn run_add<T: CatalogItem>(
    session: &Session,
    fields: &[(String, String)],
) -> Result<(), CliError> {
    let mut item = T::default();
    apply_fields(&mut item, fields)?;
    item.set_owner_id(session.owner.clone());
    warn_on_bad_isbn(T::KIND, fields);

    let id = session
        .store
        .insert(&item)
        .map_err(|e| CliError::database(format!("Failed to add item: {}", e)))?;

    log::info!(
        "{} {} {}",
        "Added".if_supports_color(Stdout, |t| t.green()),
        item.title().if_supports_color(Stdout, |t| t.bold()),
        format!("({})", id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}

pub(crate) fn run_edit<T: CatalogItem>(
    session: &Session,
    id: &str,
    fields: &[(String, String)],
) -> Result<(), CliError> {
    let mut item = load_owned::<T>(session, id)?;
    apply_fields(&mut item, fields)?;
    warn_on_bad_isbn(T::KIND, fields);

    session
        .store
        .update(&item)
        .map_err(|e| CliError::database(format!("Failed to update item: {}", e)))?;

    log::info!(
        "{} {}",
        "Updated".if_supports_color(Stdout, |t| t.green()),
        item.title().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

pub(crate) fn run_delete<T: CatalogItem>(session: &Session, id: &str) -> Result<(), CliError> {
    let item = load_owned::<T>(session, id)?;
    session
        .store
        .delete_document(T::KIND, id)
        .map_err(|e| CliError::database(format!("Failed to delete item: {}", e)))?;

    log::info!(
        "{} {}",
        "Deleted".if_supports_color(Stdout, |t| t.yellow()),
        item.title().if_supports_color(Stdout, |t| t.bold()),
    );
    Ok(())
}

pub(crate) fn run_wipe(session: &Session, kind: ItemKind, yes: bool) -> Result<(), CliError> {
    if !yes {
        log::warn!(
            "This deletes every item in {} for {}. Re-run with --yes to confirm.",
            kind,
            session.owner
        );
        return Ok(());
    }

    let removed = session
        .store
        .wipe(kind, &session.owner)
        .map_err(|e| CliError::database(format!("Failed to wipe {}: {}", kind, e)))?;

    log::info!(
        "{} {} item(s) from {}",
        "Removed".if_supports_color(Stdout, |t| t.yellow()),
        removed,
        kind,
    );
    Ok(())
}

/// Fetch an item by id, treating items of other owners as missing.
pub(crate) fn load_owned<T: CatalogItem>(session: &Session, id: &str) -> Result<T, CliError> {
    let item: Option<T> = session
        .store
        .get(id)
        .map_err(|e| CliError::database(format!("Failed to read item: {}", e)))?;
    item.filter(|i| i.owner_id() == session.owner)
        .ok_or_else(|| CliError::not_found(T::KIND, id))
}

fn warn_on_bad_isbn(kind: ItemKind, fields: &[(String, String)]) {
    if kind != ItemKind::Book {
        return;
    }
    for (name, value) in fields {
        if name.eq_ignore_ascii_case("isbn") && !value.trim().is_empty() && !isbn::is_valid_isbn(value)
        {
            log::warn!("'{}' does not look like a valid ISBN", value.trim());
        }
    }
}
