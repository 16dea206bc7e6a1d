//! Error types for the redaction engine

use thiserror::Error;

/// Errors that can occur while detecting or redacting
#[derive(Error, Debug)]
pub enum RedactorError {
    /// Entity recognizer failed for the document
    #[error("Recognizer error: {0}")]
    Recognizer(String),

    /// Postal-address parser failed or was asked for an unsupported country
    #[error("Address parser error: {0}")]
    AddressParser(String),

    /// A built-in pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
