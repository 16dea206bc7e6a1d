//! Redaction statistics for a batch run

use crate::error::RedactorError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts accumulated across every document in a batch
///
/// Passed by `&mut` into each redaction call. Counts already recorded for
/// a document that later fails are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionStats {
    /// Person names and redacted e-mail local parts
    pub names_count: usize,

    /// Dates from the recognizer and from patterns
    pub dates_count: usize,

    /// Phone numbers
    pub phones_count: usize,

    /// Address candidates from every address signal
    pub addresses_count: usize,

    /// Matched lines per concept phrase
    pub concepts: BTreeMap<String, usize>,

    /// Documents successfully written
    pub files_processed: usize,
}

/// Serialized form of [`RedactionStats`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    /// Documents successfully written
    pub files_processed: usize,
    /// Sum of every counter, computed when the report is built
    pub total_words_redacted: usize,
    /// Person names and e-mail local parts
    pub names_redacted: usize,
    /// Dates
    pub dates_redacted: usize,
    /// Phone numbers
    pub phones_redacted: usize,
    /// Addresses
    pub addresses_redacted: usize,
    /// Matched lines per concept phrase
    pub concepts_redacted: BTreeMap<String, usize>,
}

impl RedactionStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a redacted name or e-mail
    pub fn record_name(&mut self) {
        self.names_count += 1;
    }

    /// Record a redacted date
    pub fn record_date(&mut self) {
        self.dates_count += 1;
    }

    /// Record a redacted phone number
    pub fn record_phone(&mut self) {
        self.phones_count += 1;
    }

    /// Record a redacted address
    pub fn record_address(&mut self) {
        self.addresses_count += 1;
    }

    /// Record a line matched against `concept`
    pub fn record_concept(&mut self, concept: &str) {
        *self.concepts.entry(concept.to_string()).or_insert(0) += 1;
    }

    /// Record a document written successfully
    pub fn record_file(&mut self) {
        self.files_processed += 1;
    }

    /// Total redactions across all categories
    pub fn total_redacted(&self) -> usize {
        self.names_count
            + self.dates_count
            + self.phones_count
            + self.addresses_count
            + self.concepts.values().sum::<usize>()
    }

    /// Snapshot the counters into a report
    pub fn report(&self) -> StatsReport {
        StatsReport {
            files_processed: self.files_processed,
            total_words_redacted: self.total_redacted(),
            names_redacted: self.names_count,
            dates_redacted: self.dates_count,
            phones_redacted: self.phones_count,
            addresses_redacted: self.addresses_count,
            concepts_redacted: self.concepts.clone(),
        }
    }

    /// Pretty-printed JSON report
    pub fn to_json(&self) -> Result<String, RedactorError> {
        Ok(serde_json::to_string_pretty(&self.report())?)
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Redaction Summary".to_string(),
            "=================".to_string(),
            format!("Files processed: {}", self.files_processed),
            format!("Names: {}", self.names_count),
            format!("Dates: {}", self.dates_count),
            format!("Phones: {}", self.phones_count),
            format!("Addresses: {}", self.addresses_count),
        ];

        if !self.concepts.is_empty() {
            lines.push("Concepts:".to_string());
            for (concept, count) in &self.concepts {
                lines.push(format!("  {}: {}", concept, count));
            }
        }

        lines.push(format!("Total redacted: {}", self.total_redacted()));
        lines.join("\n")
    }
}
