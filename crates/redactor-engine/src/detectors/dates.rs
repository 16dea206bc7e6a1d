//! Dates from the recognizer and from patterns

use crate::patterns::PatternLibrary;
use crate::stats::RedactionStats;
use redactor_domain::{Entity, EntityLabel, Span};

/// Spans for DATE entities and date pattern matches
///
/// Both sources count independently, so a date found by both counts twice.
pub fn detect(
    text: &str,
    entities: &[Entity],
    patterns: &PatternLibrary,
    stats: &mut RedactionStats,
) -> Vec<Span> {
    let mut spans: Vec<Span> = entities
        .iter()
        .filter(|e| e.label == EntityLabel::Date)
        .map(|e| e.span)
        .collect();
    spans.extend(patterns.dates(text));

    for _ in &spans {
        stats.record_date();
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_and_pattern_both_count() {
        let text = "Due 2024-01-31, see you next Tuesday.";
        let iso = text.find("2024").unwrap();
        let tuesday = text.find("next Tuesday").unwrap();
        let entities = vec![
            Entity::from_offsets(EntityLabel::Date, iso, iso + 10).unwrap(),
            Entity::from_offsets(EntityLabel::Date, tuesday, tuesday + 12).unwrap(),
            Entity::from_offsets(EntityLabel::Person, 0, 3).unwrap(),
        ];
        let mut stats = RedactionStats::new();
        let spans = detect(text, &entities, &PatternLibrary::new().unwrap(), &mut stats);

        assert_eq!(spans.len(), 3);
        assert_eq!(stats.dates_count, 3);
    }

    #[test]
    fn test_no_dates() {
        let mut stats = RedactionStats::new();
        let spans = detect("plain words", &[], &PatternLibrary::new().unwrap(), &mut stats);
        assert!(spans.is_empty());
        assert_eq!(stats.dates_count, 0);
    }
}
