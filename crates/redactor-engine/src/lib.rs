//! Redactor Engine
//!
//! Detects sensitive spans in plain text and renders redacted copies.
//!
//! # Architecture
//!
//! ```text
//! text ─┬─ names ────┐
//!       ├─ dates ────┤
//!       ├─ phones ───┼─ union ─> RedactionPlan ─> apply ─> redacted text
//!       ├─ address ──┤
//!       └─ concepts ─┘
//! ```
//!
//! Every enabled detector reads the same immutable text and entity list and
//! proposes spans as byte ranges into that text. [`RedactionPlan`] sorts the
//! union, drops overlaps (first span wins) and renders the result in one
//! pass, writing one redaction character per original character.
//!
//! Counts accumulate in a [`RedactionStats`] owned by the caller.
//!
//! # Example Usage
//!
//! ```
//! use redactor_domain::EntityLabel;
//! use redactor_engine::{EngineConfig, RedactionOptions, RedactionStats, Redactor};
//! use redactor_models::{MockEmbedder, MockRecognizer};
//!
//! let recognizer = MockRecognizer::new().with_phrase(EntityLabel::Person, "Ada");
//! let redactor: Redactor<_, MockEmbedder> =
//!     Redactor::new(Some(recognizer), None, EngineConfig::default()).unwrap();
//!
//! let options = RedactionOptions { names: true, ..Default::default() };
//! let mut stats = RedactionStats::new();
//! let output = redactor.redact("Ada wrote to ada.l@example.com", &options, &mut stats).unwrap();
//!
//! assert_eq!(output, "███ wrote to ███.█@example.com");
//! assert_eq!(stats.names_count, 2);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod detectors;
pub mod error;
pub mod patterns;
pub mod postal;
pub mod reconcile;
pub mod redactor;
pub mod stats;


pub use config::{EngineConfig, RedactionOptions, DEFAULT_REDACTION_CHAR};
pub use error::RedactorError;
pub use patterns::PatternLibrary;
pub use postal::PostalParser;
pub use reconcile::RedactionPlan;
pub use redactor::Redactor;
pub use stats::{RedactionStats, StatsReport};
