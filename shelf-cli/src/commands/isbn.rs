use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_core::isbn::{is_valid_isbn, isbn10_to_isbn13, normalize_isbn};

pub(crate) fn run_isbn(code: &str) {
    let normalized = normalize_isbn(code);
    if !is_valid_isbn(&normalized) {
        log::warn!("{} is not a valid ISBN-10 or ISBN-13", code.trim());
        return;
    }

    log::info!(
        "{} {}",
        normalized.if_supports_color(Stdout, |t| t.bold()),
        "(valid)".if_supports_color(Stdout, |t| t.green()),
    );
    if let Some(isbn13) = isbn10_to_isbn13(&normalized) {
        log::info!("  ISBN-13: {}", isbn13);
    }
}
