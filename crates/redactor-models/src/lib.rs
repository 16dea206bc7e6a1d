//! Redactor Model Adapters
//!
//! Concrete implementations of the capability traits from `redactor-domain`.
//!
//! # Architecture
//!
//! The entity recognizer and the sentence-embedding model run out of process.
//! This crate talks to them over HTTP and ships deterministic mocks with the
//! same interface for tests.
//!
//! # Adapters
//!
//! - `HttpEntityRecognizer`: JSON-over-HTTP named-entity recognition service
//! - `OllamaEmbedder`: Ollama's `/api/embed` endpoint
//! - `MockRecognizer`, `MockEmbedder`: deterministic doubles
//!
//! # Examples
//!
//! ```
//! use redactor_models::{MockRecognizer, cosine_similarity};
//! use redactor_domain::traits::EntityRecognizer;
//! use redactor_domain::EntityLabel;
//!
//! let recognizer = MockRecognizer::new().with_phrase(EntityLabel::Person, "Ada Lovelace");
//! let entities = recognizer.recognize("Ada Lovelace wrote the notes.").unwrap();
//! assert_eq!(entities.len(), 1);
//!
//! assert!((cosine_similarity(&[1.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < 1e-6);
//! ```

#![warn(missing_docs)]

pub mod embedding;
mod http;
pub mod ner;

use thiserror::Error;

pub use embedding::{cosine_similarity, MockEmbedder, OllamaEmbedder};
pub use http::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
pub use ner::{HttpEntityRecognizer, MockRecognizer};

/// Errors that can occur while calling a model
#[derive(Error, Debug)]
pub enum ModelError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response could not be decoded or was inconsistent with the request
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available on the service
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Input rejected before calling the model
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error
    #[error("Model error: {0}")]
    Other(String),
}

impl From<reqwest::Error> for ModelError {
    fn from(e: reqwest::Error) -> Self {
        ModelError::Communication(e.to_string())
    }
}
