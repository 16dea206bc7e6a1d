//! Sentence embeddings for semantic concept matching
//!
//! # Architecture
//!
//! - **OllamaEmbedder**: calls a local Ollama instance (`/api/embed`)
//! - **MockEmbedder**: fixed vectors per text, hash-based fallback
//!
//! # Examples
//!
//! ```rust
//! use redactor_models::{MockEmbedder, cosine_similarity};
//! use redactor_domain::traits::Embedder;
//!
//! let model = MockEmbedder::new(64);
//! let a = model.embed("The sky is blue").unwrap();
//! let b = model.embed("The sky is blue").unwrap();
//! assert_eq!(a, b);
//! assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-5);
//! ```

use crate::http::{self, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::ModelError;
pub use redactor_domain::cosine_similarity;
use redactor_domain::traits::Embedder;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default embedding model (MiniLM-L6, 384 dimensions)
pub const DEFAULT_MODEL: &str = "all-minilm";

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

/// Embedder backed by Ollama's embedding API
pub struct OllamaEmbedder {
    endpoint: String,
    model: String,
    client: reqwest::blocking::Client,
    max_retries: u32,
}

impl OllamaEmbedder {
    /// Create a new embedder
    ///
    /// # Parameters
    ///
    /// - `endpoint`: Ollama API endpoint (e.g., "http://localhost:11434")
    /// - `model`: embedding model to use (e.g., "all-minilm")
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use redactor_models::OllamaEmbedder;
    ///
    /// let embedder = OllamaEmbedder::new("http://localhost:11434", "all-minilm").unwrap();
    /// ```
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, ModelError> {
        Self::with_timeout(endpoint, model, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a new embedder with a custom request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Result<Self, ModelError> {
        Ok(Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            model: model.into(),
            client: http::build_client(timeout_secs)?,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create an embedder for the default endpoint and model
    pub fn default_endpoint() -> Result<Self, ModelError> {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    /// Set the maximum number of attempts per request
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries.max(1);
        self
    }

    /// Configured model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Embedder for OllamaEmbedder {
    type Error = ModelError;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error> {
        self.embed_batch(&[text])?
            .pop()
            .ok_or_else(|| ModelError::InvalidResponse("No embedding returned".to_string()))
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, Self::Error> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/api/embed", self.endpoint);
        let request = EmbedRequest {
            model: &self.model,
            input: texts,
        };
        let response: EmbedResponse =
            http::post_json(&self.client, &url, &request, self.max_retries, &self.model)?;

        if response.embeddings.len() != texts.len() {
            return Err(ModelError::InvalidResponse(format!(
                "Expected {} embeddings, got {}",
                texts.len(),
                response.embeddings.len()
            )));
        }
        Ok(response.embeddings)
    }
}

/// Deterministic embedder for tests
///
/// Texts registered with [`MockEmbedder::with_vector`] get that exact vector.
/// Anything else is hashed into a pseudo-random unit vector, so equal texts
/// embed identically and different texts are roughly orthogonal.
#[derive(Debug)]
pub struct MockEmbedder {
    dimension: usize,
    vectors: HashMap<String, Vec<f32>>,
    failures: HashSet<String>,
    call_count: AtomicUsize,
}

impl MockEmbedder {
    /// Create a mock producing `dimension`-sized vectors
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: HashMap::new(),
            failures: HashSet::new(),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Return `vector` whenever `text` is embedded
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }

    /// Fail whenever `text` is embedded
    pub fn with_failure(mut self, text: impl Into<String>) -> Self {
        self.failures.insert(text.into());
        self
    }

    /// Number of individual texts embedded so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Hash text with a seed to get a deterministic value in [-1, 1]
    fn hash_with_seed(text: &str, seed: u64) -> f32 {
        let mut hasher = DefaultHasher::new();
        text.hash(&mut hasher);
        seed.hash(&mut hasher);
        let hash_value = hasher.finish();

        let normalized = (hash_value as f64 / u64::MAX as f64) * 2.0 - 1.0;
        normalized as f32
    }
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new(384)
    }
}

impl Embedder for MockEmbedder {
    type Error = ModelError;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if self.failures.contains(text) {
            return Err(ModelError::Other("Mock error".to_string()));
        }
        if let Some(vector) = self.vectors.get(text) {
            return Ok(vector.clone());
        }
        if text.is_empty() {
            return Err(ModelError::InvalidInput(
                "Empty text cannot be embedded".to_string(),
            ));
        }

        let mut embedding: Vec<f32> = (0..self.dimension)
            .map(|i| Self::hash_with_seed(text, i as u64))
            .collect();

        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if magnitude > 0.0 {
            for value in &mut embedding {
                *value /= magnitude;
            }
        }

        Ok(embedding)
    }
}
