use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Field name not known for the item kind
    #[error("Unknown field '{name}' for {kind} (try one of: {known})")]
    UnknownField {
        kind: String,
        name: String,
        known: String,
    },

    /// No item with the given id for the current owner
    #[error("No item with id {id} in {kind}")]
    NotFound { kind: String, id: String },

    /// Feature needs a higher account tier
    #[error("{0} is a premium feature; run 'shelf config set account.tier premium' to unlock it")]
    FeatureLocked(String),

    /// Export failed
    #[error("Export error: {0}")]
    Export(String),

    /// Import failed
    #[error("Import error: {0}")]
    Import(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(kind: impl std::fmt::Display, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind: kind.to_string(),
            id: id.into(),
        }
    }

    pub(crate) fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    pub(crate) fn import(msg: impl Into<String>) -> Self {
        Self::Import(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}
