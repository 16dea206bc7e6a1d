//! Configuration for the redaction engine

use serde::{Deserialize, Serialize};

/// Default block character used to obscure redacted text
pub const DEFAULT_REDACTION_CHAR: char = '█';

/// Which categories to redact in a run
///
/// A fixed pipeline consults these flags; every enabled detector runs over
/// the same immutable text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionOptions {
    /// Person names (recognizer) and e-mail local parts
    pub names: bool,

    /// Dates (recognizer and patterns)
    pub dates: bool,

    /// Phone numbers (patterns)
    pub phones: bool,

    /// Postal addresses (patterns, recognizer, address parser)
    pub address: bool,

    /// Concept phrases; lines mentioning them are redacted whole
    pub concepts: Vec<String>,
}

impl RedactionOptions {
    /// Options with every fixed category enabled and no concepts
    pub fn all() -> Self {
        Self {
            names: true,
            dates: true,
            phones: true,
            address: true,
            concepts: Vec::new(),
        }
    }

    /// Add a concept phrase
    pub fn with_concept(mut self, concept: impl Into<String>) -> Self {
        self.concepts.push(concept.into());
        self
    }

    /// True if at least one category is enabled
    pub fn any_enabled(&self) -> bool {
        self.names || self.dates || self.phones || self.address || !self.concepts.is_empty()
    }

    /// True if an enabled category consumes recognizer output
    pub fn needs_entities(&self) -> bool {
        self.names || self.dates || self.address
    }
}

/// Tunables for detection and rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Character written once per redacted character
    pub redaction_char: char,

    /// Cosine similarity a concept must exceed to match a line semantically
    pub similarity_threshold: f32,

    /// Characters inspected on each side of an address candidate
    pub context_window: usize,

    /// Keywords, one of which must appear (as a substring, lowercased) in the
    /// context window for an address pattern match to count
    pub address_indicators: Vec<String>,

    /// Country codes the postal-address parser runs for, in order
    pub postal_countries: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            redaction_char: DEFAULT_REDACTION_CHAR,
            similarity_threshold: 0.45,
            context_window: 30,
            address_indicators: ["street", "st", "ave", "road", "floor", "suite"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            postal_countries: ["US", "CA", "GB"].iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl EngineConfig {
    /// Strict preset: lower similarity bar and wider address context
    pub fn strict() -> Self {
        Self {
            similarity_threshold: 0.35,
            context_window: 50,
            ..Self::default()
        }
    }

    /// Lenient preset: fewer semantic matches and a tighter address context
    pub fn lenient() -> Self {
        Self {
            similarity_threshold: 0.6,
            context_window: 20,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.redaction_char.is_control() || self.redaction_char.is_whitespace() {
            return Err(format!(
                "redaction_char {:?} must be a visible character",
                self.redaction_char
            ));
        }
        if !(-1.0..=1.0).contains(&self.similarity_threshold) {
            return Err(format!(
                "similarity_threshold {} out of range [-1.0, 1.0]",
                self.similarity_threshold
            ));
        }
        if self.context_window == 0 {
            return Err("context_window must be greater than 0".to_string());
        }
        if self.address_indicators.iter().any(|k| k.trim().is_empty()) {
            return Err("address_indicators must not contain blank keywords".to_string());
        }
        for code in &self.postal_countries {
            if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(format!("postal country '{}' is not a two-letter code", code));
            }
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
