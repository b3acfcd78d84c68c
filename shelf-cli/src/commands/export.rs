use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_core::export::CSV_MIME_TYPE;
use shelf_core::{CatalogItem, Feature};
use shelf_lib::settings::resolve_export_dir;
use shelf_lib::write_export;

use crate::CliError;
use crate::cli_types::ViewArgs;
use crate::session::Session;

use super::load_view;

pub(crate) fn run_export<T: CatalogItem>(
    session: &Session,
    args: &ViewArgs,
    dir: Option<PathBuf>,
    file_name: Option<String>,
) -> Result<(), CliError> {
    session.require(Feature::CsvExport)?;

    let view = load_view::<T>(session, args)?;
    if let Some(message) = view.message() {
        return Err(CliError::database(message));
    }

    let csv = view
        .export_csv()
        .map_err(|e| CliError::export(e.to_string()))?;
    let dir = resolve_export_dir(dir, &session.settings);
    let file_name = file_name.unwrap_or_else(|| T::KIND.export_file_name().to_string());
    let path = write_export(&dir, &file_name, &csv).map_err(|e| CliError::export(e.to_string()))?;

    log::info!(
        "{} {} item(s) to {} {}",
        "Exported".if_supports_color(Stdout, |t| t.green()),
        view.visible().len(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", CSV_MIME_TYPE).if_supports_color(Stdout, |t| t.dimmed()),
    );
    Ok(())
}
