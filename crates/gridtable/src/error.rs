//! Error types for table construction, configuration and output.

use thiserror::Error;

/// Errors that can occur when building, configuring or printing a table.
#[derive(Debug, Error)]
pub enum TableError {
    /// Two header values share the same name; column lookup must stay one-to-one.
    #[error("duplicate column name: '{0}'")]
    DuplicateColumn(String),

    /// A configuration entry refers to a column the table does not have.
    #[error("unknown column in configuration: '{0}'")]
    UnknownColumn(String),

    /// The YAML configuration could not be parsed.
    #[error("invalid table configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    /// A configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
