use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use shelf_lib::settings::{
    KEYS, load_settings_string, resolve_covers_dir, resolve_database_path, resolve_export_dir,
};
use shelf_lib::{load_settings, save_setting, settings_path};

use crate::CliError;

/// Show the settings file and the values each command will use.
pub(crate) fn run_config_show() {
    let path = settings_path();
    let settings = load_settings();

    log::info!(
        "{}",
        "Media Shelf Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let unset = || "(not set)".if_supports_color(Stdout, |t| t.dimmed()).to_string();
    log::info!(
        "  Owner id:   {}",
        settings.owner_id.clone().unwrap_or_else(unset)
    );
    log::info!("  Tier:       {}", settings.tier.as_str());
    log::info!(
        "  Database:   {}",
        resolve_database_path(None, &settings).display()
    );
    log::info!(
        "  Export dir: {}",
        resolve_export_dir(None, &settings).display()
    );
    log::info!("  Covers dir: {}", resolve_covers_dir(&settings).display());

    if let Some(contents) = load_settings_string() {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line.if_supports_color(Stdout, |t| t.dimmed()));
        }
    }
}

pub(crate) fn run_config_set(key: &str, value: Option<&str>) -> Result<(), CliError> {
    save_setting(key, value).map_err(|e| {
        CliError::config(format!("{} (keys: {})", e, KEYS.join(", ")))
    })?;
    match value {
        Some(v) => log::info!(
            "{} {} = {}",
            "Saved".if_supports_color(Stdout, |t| t.green()),
            key.if_supports_color(Stdout, |t| t.bold()),
            v,
        ),
        None => log::info!(
            "{} {}",
            "Removed".if_supports_color(Stdout, |t| t.yellow()),
            key.if_supports_color(Stdout, |t| t.bold()),
        ),
    }
    Ok(())
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}
