//! Phone numbers

use crate::patterns::PatternLibrary;
use crate::stats::RedactionStats;
use redactor_domain::Span;

/// Spans for phone-shaped digit runs
///
/// No length or checksum validation is done; anything with the shape of a
/// phone number is redacted.
pub fn detect(text: &str, patterns: &PatternLibrary, stats: &mut RedactionStats) -> Vec<Span> {
    let spans = patterns.phones(text);
    for _ in &spans {
        stats.record_phone();
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_match_counted() {
        let text = "Office 123-456-7890, mobile 1-123-456-7890.";
        let mut stats = RedactionStats::new();
        let spans = detect(text, &PatternLibrary::new().unwrap(), &mut stats);

        let found: Vec<_> = spans.iter().filter_map(|s| s.slice(text)).collect();
        assert_eq!(found, vec!["123-456-7890", "1-123-456-7890"]);
        assert_eq!(stats.phones_count, 2);
    }
}
