//! Trait definitions for external models
//!
//! These traits are the seam between detection logic and the models it
//! consumes. Implementations live in `redactor-models` and `redactor-engine`.

use crate::{Entity, ParsedAddress};

/// Named-entity recognizer
///
/// Implemented by the infrastructure layer (redactor-models)
pub trait EntityRecognizer {
    /// Error type for recognition
    type Error;

    /// Tag `text`, returning entities whose spans are byte offsets into `text`
    fn recognize(&self, text: &str) -> Result<Vec<Entity>, Self::Error>;
}

/// Sentence-embedding model
///
/// Implemented by the infrastructure layer (redactor-models)
pub trait Embedder {
    /// Error type for embedding
    type Error;

    /// Embed a single piece of text
    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error>;

    /// Embed several texts, one vector per input in the same order
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
        texts.iter().map(|text| self.embed(text)).collect()
    }
}

/// Postal-address parser
///
/// Implemented by the application layer (redactor-engine)
pub trait AddressParser {
    /// Error type for parsing
    type Error;

    /// Find addresses in `text` for the given ISO 3166-1 alpha-2 country code
    fn parse(&self, text: &str, country: &str) -> Result<Vec<ParsedAddress>, Self::Error>;
}
