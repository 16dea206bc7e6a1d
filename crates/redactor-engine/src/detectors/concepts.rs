//! Concept lines
//!
//! A line is matched against the configured concept phrases in two tiers.
//! Case-insensitive containment is tried first. Only when no phrase is
//! contained, and an embedder is available, is the line compared to every
//! phrase by cosine similarity.

use crate::stats::RedactionStats;
use redactor_domain::traits::Embedder;
use redactor_domain::{cosine_similarity, ConceptMatch, Span};
use std::fmt::Display;
use tracing::{debug, warn};

/// Match each non-blank line of `text` against `concepts`
///
/// At most one match is returned per line. Embedding failures are logged
/// and leave the line unmatched.
pub fn find_matches<E>(
    text: &str,
    concepts: &[String],
    embedder: Option<&E>,
    threshold: f32,
) -> Vec<ConceptMatch>
where
    E: Embedder,
    E::Error: Display,
{
    let mut matches = Vec::new();
    if concepts.is_empty() {
        return matches;
    }

    let lowered: Vec<String> = concepts.iter().map(|c| c.to_lowercase()).collect();
    let mut semantic = embedder.map(|e| SemanticMatcher::new(e, concepts));
    let mut offset = 0;

    for line in text.split('\n') {
        let line_start = offset;
        offset += line.len() + 1;

        if line.trim().is_empty() {
            continue;
        }
        let Some(span) = Span::new(line_start, line_start + line.len()) else {
            continue;
        };
        let line_lower = line.to_lowercase();

        if let Some(i) = lowered.iter().position(|c| line_lower.contains(c.as_str())) {
            matches.push(ConceptMatch::exact(&concepts[i], span));
            continue;
        }

        if let Some(matcher) = semantic.as_mut() {
            if let Some((i, similarity)) = matcher.best_match(&line_lower) {
                if similarity > threshold {
                    debug!(
                        "Line {} matched '{}' semantically ({:.3})",
                        span, concepts[i], similarity
                    );
                    matches.push(ConceptMatch::semantic(&concepts[i], span, similarity));
                }
            }
        }
    }

    matches
}

/// Line spans for every concept match, counting each against its concept
pub fn detect<E>(
    text: &str,
    concepts: &[String],
    embedder: Option<&E>,
    threshold: f32,
    stats: &mut RedactionStats,
) -> Vec<Span>
where
    E: Embedder,
    E::Error: Display,
{
    find_matches(text, concepts, embedder, threshold)
        .into_iter()
        .map(|m| {
            stats.record_concept(&m.concept);
            m.line
        })
        .collect()
}

/// Embeds the concept phrases once, on the first line that needs them
struct SemanticMatcher<'a, E> {
    embedder: &'a E,
    concepts: &'a [String],
    vectors: Option<Vec<Vec<f32>>>,
}

impl<'a, E> SemanticMatcher<'a, E>
where
    E: Embedder,
    E::Error: Display,
{
    fn new(embedder: &'a E, concepts: &'a [String]) -> Self {
        Self {
            embedder,
            concepts,
            vectors: None,
        }
    }

    /// Index and similarity of the closest concept; earliest wins ties
    fn best_match(&mut self, line: &str) -> Option<(usize, f32)> {
        let line_vector = match self.embedder.embed(line) {
            Ok(v) => v,
            Err(e) => {
                warn!("Embedding failed for line, leaving it unmatched: {}", e);
                return None;
            }
        };

        if self.vectors.is_none() {
            let phrases: Vec<&str> = self.concepts.iter().map(String::as_str).collect();
            match self.embedder.embed_batch(&phrases) {
                Ok(vectors) => self.vectors = Some(vectors),
                Err(e) => {
                    warn!("Embedding concepts failed, leaving line unmatched: {}", e);
                    return None;
                }
            }
        }

        let mut best: Option<(usize, f32)> = None;
        for (i, vector) in self.vectors.as_deref().unwrap_or_default().iter().enumerate() {
            let similarity = cosine_similarity(&line_vector, vector);
            if best.is_none_or(|(_, s)| similarity > s) {
                best = Some((i, similarity));
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactor_domain::MatchKind;
    use redactor_models::MockEmbedder;

    fn concepts(phrases: &[&str]) -> Vec<String> {
        phrases.iter().map(|s| s.to_string()).collect()
    }

    fn wine_embedder() -> MockEmbedder {
        MockEmbedder::new(3)
            .with_vector("wine", vec![1.0, 0.0, 0.0])
            .with_vector("cheese", vec![0.0, 1.0, 0.0])
            .with_vector("a fine vineyard indeed.", vec![0.9, 0.1, 0.3])
            .with_vector("completely unrelated text.", vec![0.1, 0.2, 0.95])
    }

    #[test]
    fn test_exact_match_case_insensitive() {
        let text = "We drank WINE.\nNothing here.";
        let matches = find_matches::<MockEmbedder>(text, &concepts(&["wine"]), None, 0.45);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].kind, MatchKind::Exact);
        assert_eq!(matches[0].line, Span::new(0, 14).unwrap());
    }

    #[test]
    fn test_first_concept_wins() {
        let text = "wine and cheese";
        let matches = find_matches::<MockEmbedder>(text, &concepts(&["cheese", "wine"]), None, 0.45);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].concept, "cheese");
    }

    #[test]
    fn test_line_offsets_include_separator() {
        let text = "first\n\n  \nthird has wine\n";
        let matches = find_matches::<MockEmbedder>(text, &concepts(&["wine"]), None, 0.45);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line.slice(text), Some("third has wine"));
    }

    #[test]
    fn test_semantic_match() {
        let embedder = wine_embedder();
        let text = "A fine vineyard indeed.\nCompletely unrelated text.";
        let matches = find_matches(text, &concepts(&["wine", "cheese"]), Some(&embedder), 0.45);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].concept, "wine");
        assert_eq!(matches[0].kind, MatchKind::Semantic);
        assert!(matches[0].similarity.unwrap() > 0.45);
        assert_eq!(matches[0].line.slice(text), Some("A fine vineyard indeed."));
    }

    #[test]
    fn test_concepts_embedded_once_per_document() {
        let embedder = wine_embedder();
        let text = "A fine vineyard indeed.\nCompletely unrelated text.\nwine list";
        find_matches(text, &concepts(&["wine", "cheese"]), Some(&embedder), 0.45);

        // Two lines plus two concept phrases; the exact line never embeds
        assert_eq!(embedder.call_count(), 4);
    }

    #[test]
    fn test_embedding_failure_is_not_fatal() {
        let embedder = wine_embedder().with_failure("broken line");
        let text = "broken line\nA fine vineyard indeed.";
        let matches = find_matches(text, &concepts(&["wine"]), Some(&embedder), 0.45);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line.slice(text), Some("A fine vineyard indeed."));
    }

    #[test]
    fn test_threshold_is_strict() {
        let embedder = MockEmbedder::new(2)
            .with_vector("wine", vec![1.0, 0.0])
            .with_vector("orthogonal", vec![0.0, 1.0]);
        let matches = find_matches("orthogonal", &concepts(&["wine"]), Some(&embedder), 0.0);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_detect_counts_per_concept() {
        let text = "wine\ncheese\nmore wine";
        let mut stats = RedactionStats::new();
        let spans = detect::<MockEmbedder>(text, &concepts(&["wine", "cheese"]), None, 0.45, &mut stats);
        assert_eq!(spans.len(), 3);
        assert_eq!(stats.concepts.get("wine"), Some(&2));
        assert_eq!(stats.concepts.get("cheese"), Some(&1));
    }
}
