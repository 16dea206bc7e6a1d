//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Redaction engine error
    #[error("Redaction error: {0}")]
    Engine(#[from] redactor_engine::RedactorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Malformed glob pattern
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No files matched the input patterns
    #[error("No input files matched: {0}")]
    NoInputFiles(String),
}
