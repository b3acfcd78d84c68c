use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_core::{CatalogItem, Field};

use crate::CliError;
use crate::cli_types::ViewArgs;
use crate::session::Session;

use super::{item_details, load_view};

pub(crate) fn run_list<T: CatalogItem>(session: &Session, args: &ViewArgs) -> Result<(), CliError> {
    let view = load_view::<T>(session, args)?;

    if let Some(message) = view.message() {
        log::warn!("{}", message);
    }

    let visible = view.visible();
    let sort = view.sort();
    log::info!(
        "{} {}",
        T::KIND.display_name().if_supports_color(Stdout, |t| t.bold()),
        format!("(sorted by {}, {})", sort.field.label(), sort.direction.as_str())
            .if_supports_color(Stdout, |t| t.dimmed()),
    );
    crate::log_blank();

    if view.is_empty() {
        if view.items().is_empty() {
            log::info!("  Nothing here yet. Add one with 'shelf add {}'.", T::KIND.short_name());
        } else {
            log::info!("  No items match the filter.");
        }
        return Ok(());
    }

    for item in &visible {
        let title = if item.title().trim().is_empty() {
            "(untitled)"
        } else {
            item.title()
        };
        log::info!(
            "  {}  {}",
            item.id().if_supports_color(Stdout, |t| t.dimmed()),
            title.if_supports_color(Stdout, |t| t.bold()),
        );
        let details = item_details(item);
        if !details.is_empty() {
            log::info!("        {}", details);
        }
    }

    crate::log_blank();
    log::info!("  {} of {} shown", visible.len(), view.items().len());
    Ok(())
}
