//! media-shelf CLI
//!
//! Command-line interface for cataloguing books, movies, games and records.

use std::io::Write;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Call `$func::<T>(args...)` with the item type matching `$kind`.
macro_rules! with_item_type {
    ($kind:expr, $($func:ident)::+ ( $($arg:expr),* $(,)? )) => {
        match $kind {
            shelf_core::ItemKind::Book => $($func)::+::<shelf_core::Book>($($arg),*),
            shelf_core::ItemKind::Movie => $($func)::+::<shelf_core::Movie>($($arg),*),
            shelf_core::ItemKind::Game => $($func)::+::<shelf_core::Game>($($arg),*),
            shelf_core::ItemKind::Record => $($func)::+::<shelf_core::Record>($($arg),*),
        }
    };
}

mod cli_types;
mod commands;
mod error;
mod session;

pub(crate) use error::CliError;

use cli_types::{Cli, Commands, ConfigAction};
use commands::{config, cover, export, import, isbn, items, list, stats};
use session::Session;

/// Emit an empty info line (section spacing in command output).
pub(crate) fn log_blank() {
    log::info!("");
}

fn init_logging(quiet: bool, verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else if quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout);

    if !verbose {
        // Plain output for normal use; warnings and errors get a colored tag.
        builder.format(|buf, record| match record.level() {
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Isbn { code } => {
            isbn::run_isbn(&code);
            Ok(())
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                config::run_config_show();
                Ok(())
            }
            ConfigAction::Set { key, value } => config::run_config_set(&key, Some(&value)),
            ConfigAction::Unset { key } => config::run_config_set(&key, None),
            ConfigAction::Path => {
                config::run_config_path();
                Ok(())
            }
        },
        command => {
            let session = Session::open(cli.db, cli.owner)?;
            log::debug!(
                "Using {} as {} ({} tier)",
                session.db_path.display(),
                session.owner,
                session.tier().as_str()
            );
            run_item_command(&session, command)
        }
    }
}

fn run_item_command(session: &Session, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::List { kind, view } => with_item_type!(kind, list::run_list(session, &view)),
        Commands::Add { kind, fields } => with_item_type!(kind, items::run_add(session, &fields)),
        Commands::Edit { kind, id, fields } => {
            with_item_type!(kind, items::run_edit(session, &id, &fields))
        }
        Commands::Delete { kind, id } => with_item_type!(kind, items::run_delete(session, &id)),
        Commands::Wipe { kind, yes } => items::run_wipe(session, kind, yes),
        Commands::Stats { kind, field } => {
            with_item_type!(kind, stats::run_stats(session, &field))
        }
        Commands::Export {
            kind,
            view,
            dir,
            file_name,
        } => with_item_type!(kind, export::run_export(session, &view, dir, file_name)),
        Commands::Import { kind, path } => {
            with_item_type!(kind, import::run_import(session, &path))
        }
        Commands::Cover { kind, id, image } => {
            with_item_type!(kind, cover::run_cover(session, &id, &image))
        }
        Commands::Isbn { .. } | Commands::Config { .. } => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
