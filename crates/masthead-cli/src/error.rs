//! Error types for the CLI application.

use masthead_domain::ModelError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Domain model error
    #[error("{0}")]
    Model(#[from] ModelError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Line editor error
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Entity reference did not match anything
    #[error("No {kind} matches '{reference}'")]
    NotFound {
        /// Entity kind that was looked up
        kind: &'static str,
        /// Reference as typed by the user
        reference: String,
    },

    /// A script line failed
    #[error("Line {line}: {source}")]
    Script {
        /// 1-based line number in the script
        line: usize,
        /// Underlying failure
        source: Box<CliError>,
    },
}
