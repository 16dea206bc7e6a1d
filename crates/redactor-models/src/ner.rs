//! Named-entity recognition adapters
//!
//! The recognizer service is expected to speak a small JSON contract:
//!
//! ```text
//! POST {endpoint}/ner   {"text": "..."}
//! 200                   {"entities": [{"label": "PERSON", "start_char": 0, "end_char": 10}]}
//! ```
//!
//! Offsets on the wire are character indices (what most NLP toolkits report).
//! They are converted to byte offsets before leaving this module.

use crate::http::{self, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::ModelError;
use redactor_domain::traits::EntityRecognizer;
use redactor_domain::{Entity, EntityLabel, Span};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};

/// Default recognizer endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

/// Entity as it appears on the wire, with character offsets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireEntity {
    /// Recognizer label, e.g. `PERSON`
    pub label: String,
    /// Start offset in characters
    pub start_char: usize,
    /// End offset in characters (exclusive)
    pub end_char: usize,
}

#[derive(Serialize)]
struct NerRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct NerResponse {
    entities: Vec<WireEntity>,
}

/// Convert character-offset entities into byte-offset [`Entity`] values
///
/// Entities that are empty or run past the end of `text` are dropped.
pub fn entities_from_char_offsets(text: &str, wire: Vec<WireEntity>) -> Vec<Entity> {
    let mut boundaries: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
    boundaries.push(text.len());

    wire.into_iter()
        .filter_map(|e| {
            let start = boundaries.get(e.start_char).copied();
            let end = boundaries.get(e.end_char).copied();
            match (start, end) {
                (Some(start), Some(end)) => {
                    Entity::from_offsets(EntityLabel::parse(&e.label), start, end)
                }
                _ => {
                    warn!(
                        "Dropping {} entity with out-of-range offsets [{}, {})",
                        e.label, e.start_char, e.end_char
                    );
                    None
                }
            }
        })
        .collect()
}

/// Recognizer backed by an HTTP entity-recognition service
pub struct HttpEntityRecognizer {
    endpoint: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
}

impl HttpEntityRecognizer {
    /// Create a recognizer for the service at `endpoint`
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use redactor_models::HttpEntityRecognizer;
    ///
    /// let recognizer = HttpEntityRecognizer::new("http://localhost:8000").unwrap();
    /// ```
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ModelError> {
        Self::with_timeout(endpoint, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a recognizer with a custom request timeout
    pub fn with_timeout(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self, ModelError> {
        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client: http::build_client(timeout_secs)?,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Set the maximum number of attempts per request
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Configured endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EntityRecognizer for HttpEntityRecognizer {
    type Error = ModelError;

    fn recognize(&self, text: &str) -> Result<Vec<Entity>, Self::Error> {
        let url = format!("{}/ner", self.endpoint);
        let response: NerResponse =
            http::post_json(&self.client, &url, &NerRequest { text }, self.max_retries, "ner")?;
        debug!("Recognizer returned {} entities", response.entities.len());
        Ok(entities_from_char_offsets(text, response.entities))
    }
}

/// Deterministic recognizer for tests
///
/// Returns a fixed entity list, plus an entity for every occurrence of each
/// registered phrase in the input.
///
/// # Examples
///
/// ```
/// use redactor_models::MockRecognizer;
/// use redactor_domain::traits::EntityRecognizer;
/// use redactor_domain::EntityLabel;
///
/// let recognizer = MockRecognizer::new()
///     .with_phrase(EntityLabel::Date, "next Tuesday");
/// let entities = recognizer.recognize("See you next Tuesday").unwrap();
/// assert_eq!(entities[0].span.start, 8);
/// ```
#[derive(Debug, Default)]
pub struct MockRecognizer {
    fixed: Vec<Entity>,
    phrases: Vec<(EntityLabel, String)>,
    responses: HashMap<String, Vec<Entity>>,
    failures: HashSet<String>,
    call_count: AtomicUsize,
}

impl MockRecognizer {
    /// Create a recognizer that finds nothing
    pub fn new() -> Self {
        Self::default()
    }

    /// Always return these entities, whatever the text
    pub fn with_entities(mut self, entities: Vec<Entity>) -> Self {
        self.fixed = entities;
        self
    }

    /// Tag every occurrence of `phrase` with `label`
    pub fn with_phrase(mut self, label: EntityLabel, phrase: impl Into<String>) -> Self {
        self.phrases.push((label, phrase.into()));
        self
    }

    /// Return exactly `entities` when called with `text`
    pub fn with_response(mut self, text: impl Into<String>, entities: Vec<Entity>) -> Self {
        self.responses.insert(text.into(), entities);
        self
    }

    /// Fail when called with `text`
    pub fn with_failure(mut self, text: impl Into<String>) -> Self {
        self.failures.insert(text.into());
        self
    }

    /// Number of times `recognize` was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl EntityRecognizer for MockRecognizer {
    type Error = ModelError;

    fn recognize(&self, text: &str) -> Result<Vec<Entity>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.failures.contains(text) {
            return Err(ModelError::Other("Mock error".to_string()));
        }
        if let Some(entities) = self.responses.get(text) {
            return Ok(entities.clone());
        }

        let mut entities = self.fixed.clone();
        for (label, phrase) in &self.phrases {
            if phrase.is_empty() {
                continue;
            }
            for (start, matched) in text.match_indices(phrase.as_str()) {
                if let Some(span) = Span::new(start, start + matched.len()) {
                    entities.push(Entity::new(label.clone(), span));
                }
            }
        }
        Ok(entities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(label: &str, start: usize, end: usize) -> WireEntity {
        WireEntity {
            label: label.to_string(),
            start_char: start,
            end_char: end,
        }
    }

    #[test]
    fn test_char_offsets_ascii() {
        let text = "John Smith called.";
        let entities = entities_from_char_offsets(text, vec![wire("PERSON", 0, 10)]);
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].label, EntityLabel::Person);
        assert_eq!(entities[0].span.slice(text), Some("John Smith"));
    }

    #[test]
    fn test_char_offsets_multibyte() {
        let text = "Café owner José Núñez";
        // "José Núñez" starts at char 11
        let entities = entities_from_char_offsets(text, vec![wire("PERSON", 11, 21)]);
        assert_eq!(entities[0].span.slice(text), Some("José Núñez"));
    }

    #[test]
    fn test_char_offsets_out_of_range_dropped() {
        let text = "short";
        let entities = entities_from_char_offsets(
            text,
            vec![wire("DATE", 2, 40), wire("DATE", 3, 3), wire("DATE", 0, 5)],
        );
        assert_eq!(entities.len(), 1);
        assert_eq!(entities[0].span, Span::new(0, 5).unwrap());
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{"entities": [{"label": "GPE", "start_char": 3, "end_char": 9}]}"#;
        let response: NerResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.entities.len(), 1);
        assert_eq!(response.entities[0].label, "GPE");
    }

    #[test]
    fn test_http_recognizer_creation() {
        let recognizer = HttpEntityRecognizer::new("http://localhost:8000/").unwrap();
        assert_eq!(recognizer.endpoint(), "http://localhost:8000");
        assert_eq!(recognizer.max_retries, DEFAULT_MAX_RETRIES);

        let recognizer = recognizer.with_max_retries(0);
        assert_eq!(recognizer.max_retries, 1);
    }

    #[test]
    fn test_http_recognizer_unreachable() {
        let recognizer = HttpEntityRecognizer::with_timeout("http://127.0.0.1:9", 2)
            .unwrap()
            .with_max_retries(1);
        let result = recognizer.recognize("John Smith");
        assert!(matches!(result, Err(ModelError::Communication(_))));
    }

    #[test]
    fn test_mock_phrases_and_fixed() {
        let recognizer = MockRecognizer::new()
            .with_entities(vec![Entity::from_offsets(EntityLabel::Gpe, 0, 2).unwrap()])
            .with_phrase(EntityLabel::Person, "Ann");
        let entities = recognizer.recognize("NY: Ann met Ann").unwrap();
        assert_eq!(entities.len(), 3);
        assert_eq!(recognizer.call_count(), 1);
    }

    #[test]
    fn test_mock_response_and_failure() {
        let canned = vec![Entity::from_offsets(EntityLabel::Date, 0, 4).unwrap()];
        let recognizer = MockRecognizer::new()
            .with_response("2024", canned.clone())
            .with_failure("boom");

        assert_eq!(recognizer.recognize("2024").unwrap(), canned);
        assert!(recognizer.recognize("boom").is_err());
        assert_eq!(recognizer.call_count(), 2);
    }
}
