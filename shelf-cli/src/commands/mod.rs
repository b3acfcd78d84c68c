pub(crate) mod config;
pub(crate) mod cover;
pub(crate) mod export;
pub(crate) mod import;
pub(crate) mod isbn;
pub(crate) mod items;
pub(crate) mod list;
pub(crate) mod stats;

use shelf_core::{CatalogItem, Field, ItemKind, SortSpec};
use shelf_lib::ListView;

use crate::CliError;
use crate::cli_types::ViewArgs;
use crate::session::Session;

/// Look up a field of `kind` by name or label.
pub(crate) fn resolve_field<F: Field>(kind: ItemKind, name: &str) -> Result<F, CliError> {
    F::from_name(name).ok_or_else(|| CliError::UnknownField {
        kind: kind.to_string(),
        name: name.to_string(),
        known: F::all()
            .iter()
            .map(|f| f.name())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Build a list view from CLI filter/sort arguments and fetch its items.
pub(crate) fn load_view<T: CatalogItem>(
    session: &Session,
    args: &ViewArgs,
) -> Result<ListView<T>, CliError> {
    let mut view = ListView::new(session.owner.clone());
    for (name, value) in &args.filters {
        let field = resolve_field::<T::Field>(T::KIND, name)?;
        view.set_filter(field, value.clone());
    }
    view.set_sort(sort_spec::<T>(args));
    view.refresh(&session.store);
    Ok(view)
}

/// Sort requested on the command line. An unknown field sorts by title.
pub(crate) fn sort_spec<T: CatalogItem>(args: &ViewArgs) -> SortSpec<T::Field> {
    let direction = if args.desc { "desc" } else { "asc" };
    match &args.sort {
        Some(name) => {
            if T::Field::from_name(name).is_none() {
                log::warn!("No {} field named '{}', sorting by title", T::KIND, name);
            }
            SortSpec::from_names(name, direction)
        }
        None => SortSpec::from_names(T::Field::title().name(), direction),
    }
}

/// Set each `field=value` pair on `item`.
pub(crate) fn apply_fields<T: CatalogItem>(
    item: &mut T,
    fields: &[(String, String)],
) -> Result<(), CliError> {
    for (name, value) in fields {
        let field = resolve_field::<T::Field>(T::KIND, name)?;
        item.set(field, value.trim().to_string());
    }
    Ok(())
}

/// Non-blank fields other than the title, as `Label: value`.
pub(crate) fn item_details<T: CatalogItem>(item: &T) -> String {
    T::Field::all()
        .iter()
        .filter(|&&f| f != T::Field::title())
        .filter_map(|&f| {
            let value = item.get(f).trim();
            (!value.is_empty()).then(|| format!("{}: {}", f.label(), value))
        })
        .collect::<Vec<_>>()
        .join(", ")
}
