use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_core::{CatalogItem, Feature, Field, pie_slices};
use shelf_lib::ListView;

use crate::CliError;
use crate::session::Session;

use super::resolve_field;

/// Width of the longest bar, in characters.
const BAR_WIDTH: usize = 30;

pub(crate) fn run_stats<T: CatalogItem>(session: &Session, field_name: &str) -> Result<(), CliError> {
    session.require(Feature::Statistics)?;
    let field = resolve_field::<T::Field>(T::KIND, field_name)?;

    let mut view: ListView<T> = ListView::new(session.owner.clone());
    view.refresh(&session.store);
    if let Some(message) = view.message() {
        log::warn!("{}", message);
    }

    let aggregation = view.aggregate(field);
    log::info!(
        "{} by {}",
        T::KIND.display_name().if_supports_color(Stdout, |t| t.bold()),
        field.label().if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();

    if aggregation.is_empty() {
        log::info!("  No data to chart.");
        return Ok(());
    }

    let slices = pie_slices(&aggregation);
    let max = slices.iter().map(|s| s.count).max().unwrap_or(1).max(1);
    let label_width = slices.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);

    for slice in &slices {
        let bar = "█".repeat((slice.count * BAR_WIDTH).div_ceil(max));
        let color = slice.color;
        log::info!(
            "  {:<width$}  {}  {:>4}  {:>5.1}%",
            slice.label,
            bar.if_supports_color(Stdout, |t| t.truecolor(color.0, color.1, color.2)),
            slice.count,
            slice.percent(),
            width = label_width,
        );
    }

    crate::log_blank();
    log::info!("  Total: {}", aggregation.total());
    if let Some((label, count)) = aggregation.ranked().first() {
        log::info!("  Most common: {} ({})", label, count);
    }
    if aggregation.dropped > 0 {
        log::info!(
            "  {}",
            format!(
                "{} item(s) with unrecognized values not charted",
                aggregation.dropped
            )
            .if_supports_color(Stdout, |t| t.dimmed()),
        );
        if let Some(vocabulary) = field.vocabulary() {
            log::info!(
                "  {}",
                format!("Recognized values: {}", vocabulary.keys().join(", "))
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
    Ok(())
}
