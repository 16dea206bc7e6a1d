//! Redactor Domain Layer
//!
//! Value types and capability traits shared by every other crate in the
//! workspace. This crate has no external dependencies.
//!
//! ## Key Concepts
//!
//! - **Span**: a half-open byte range into the original document
//! - **Entity**: a labelled span proposed by a named-entity recognizer
//! - **ConceptMatch**: a whole line matched against a user-defined concept
//! - **ParsedAddress**: a postal address rendered by an address parser
//!
//! ## Architecture
//!
//! The recognizer, embedding model and postal-address parser are external
//! collaborators. They are reached only through the traits in [`traits`], so
//! concrete models can be swapped without touching detection or merging.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod address;
pub mod concept;
pub mod entity;
pub mod similarity;
pub mod span;
pub mod traits;

// Re-exports for convenience
pub use address::ParsedAddress;
pub use concept::{ConceptMatch, MatchKind};
pub use entity::{Entity, EntityLabel};
pub use similarity::cosine_similarity;
pub use span::Span;
