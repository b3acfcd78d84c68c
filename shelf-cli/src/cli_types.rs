//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use shelf_core::ItemKind;

#[derive(Parser)]
#[command(name = "shelf")]
#[command(about = "Catalog your books, movies, games and records", long_about = None)]
pub(crate) struct Cli {
    /// Database file (defaults to library.database in settings.toml)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Owner id whose items are shown (defaults to account.owner_id)
    #[arg(short, long, global = true)]
    pub owner: Option<String>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filter and sort arguments shared by commands that show a list.
#[derive(Args, Clone, Default)]
pub(crate) struct ViewArgs {
    /// Field filter as field=value; repeat for more (e.g. -f title=dune -f rating=5)
    #[arg(short, long = "filter", value_parser = parse_assignment)]
    pub filters: Vec<(String, String)>,

    /// Field to sort by, as a name or label (default: title)
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Sort in descending order
    #[arg(long)]
    pub desc: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List items of one kind (books, movies, games, records)
    List {
        kind: ItemKind,

        #[command(flatten)]
        view: ViewArgs,
    },

    /// Add an item from field=value pairs
    Add {
        kind: ItemKind,

        /// Field values, e.g. title=Solaris "author=Stanisław Lem" pages=204
        #[arg(value_parser = parse_assignment, required = true)]
        fields: Vec<(String, String)>,
    },

    /// Change fields of an existing item (an empty value clears the field)
    Edit {
        kind: ItemKind,

        /// Item id as shown by `list`
        id: String,

        #[arg(value_parser = parse_assignment, required = true)]
        fields: Vec<(String, String)>,
    },

    /// Delete one item
    Delete { kind: ItemKind, id: String },

    /// Delete every item of one kind for the current owner
    Wipe {
        kind: ItemKind,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show category counts for one field (premium)
    Stats {
        kind: ItemKind,

        /// Field to group by, e.g. genre, status, format
        field: String,
    },

    /// Export the filtered, sorted list to CSV (premium)
    Export {
        kind: ItemKind,

        #[command(flatten)]
        view: ViewArgs,

        /// Output directory (defaults to export.directory, then Downloads)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Output file name (defaults to <kind>_export.csv)
        #[arg(long)]
        file_name: Option<String>,
    },

    /// Import items from a YAML or JSON list
    Import { kind: ItemKind, path: PathBuf },

    /// Compress an image and attach it as an item's cover
    Cover {
        kind: ItemKind,
        id: String,
        image: PathBuf,
    },

    /// Validate and normalize an ISBN
    Isbn { code: String },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the settings file and resolved values
    Show,

    /// Set a key (account.owner_id, account.tier, library.database,
    /// export.directory, covers.directory)
    Set { key: String, value: String },

    /// Remove a key
    Unset { key: String },

    /// Print the settings file path
    Path,
}

/// Parse a `field=value` argument. The value may be empty.
pub(crate) fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (field, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected field=value, got '{s}'"))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(format!("missing field name in '{s}'"));
    }
    Ok((field.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn assignment_splits_on_first_equals() {
        assert_eq!(
            parse_assignment("notes=a=b").unwrap(),
            ("notes".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_assignment("rating=").unwrap(),
            ("rating".to_string(), String::new())
        );
        assert!(parse_assignment("title").is_err());
        assert!(parse_assignment("=x").is_err());
    }

    #[test]
    fn list_accepts_aliases_and_view_args() {
        let cli = Cli::try_parse_from([
            "shelf", "list", "ksiazki", "-f", "title=dune", "--sort", "rating", "--desc",
        ])
        .unwrap();
        match cli.command {
            Commands::List { kind, view } => {
                assert_eq!(kind, ItemKind::Book);
                assert_eq!(view.filters, vec![("title".to_string(), "dune".to_string())]);
                assert_eq!(view.sort.as_deref(), Some("rating"));
                assert!(view.desc);
            }
            _ => panic!("expected list"),
        }
    }
}
