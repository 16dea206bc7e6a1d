//! Concept matches - whole lines tied to a user-supplied phrase

use crate::span::Span;

/// How a line was tied to a concept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Case-insensitive substring containment
    Exact,
    /// Embedding similarity above the configured threshold
    Semantic,
}

/// A line matched against one of the configured concepts
///
/// At most one concept is recorded per line. Exact matches are tried first
/// and win over any semantic candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptMatch {
    /// The concept phrase as configured by the user
    pub concept: String,
    /// The whole line, excluding its line feed
    pub line: Span,
    /// Which tier produced the match
    pub kind: MatchKind,
    /// Cosine similarity for semantic matches
    pub similarity: Option<f32>,
}

impl ConceptMatch {
    /// An exact (substring) match
    pub fn exact(concept: impl Into<String>, line: Span) -> Self {
        Self {
            concept: concept.into(),
            line,
            kind: MatchKind::Exact,
            similarity: None,
        }
    }

    /// A semantic (embedding) match with its similarity score
    pub fn semantic(concept: impl Into<String>, line: Span, similarity: f32) -> Self {
        Self {
            concept: concept.into(),
            line,
            kind: MatchKind::Semantic,
            similarity: Some(similarity),
        }
    }
}
