//! Person names and e-mail local parts

use crate::patterns::PatternLibrary;
use crate::stats::RedactionStats;
use redactor_domain::{Entity, EntityLabel, Span};

/// Spans for every PERSON entity plus the alphabetic runs of every e-mail
/// local part
///
/// An e-mail whose local part has no letters is left alone and not counted.
/// Other e-mails count once each, however many runs they contribute.
pub fn detect(
    text: &str,
    entities: &[Entity],
    patterns: &PatternLibrary,
    stats: &mut RedactionStats,
) -> Vec<Span> {
    let mut spans = Vec::new();

    for entity in entities.iter().filter(|e| e.label == EntityLabel::Person) {
        spans.push(entity.span);
        stats.record_name();
    }

    for captures in patterns.email_regex().captures_iter(text) {
        let Some(local) = captures.get(1) else {
            continue;
        };
        let runs: Vec<Span> = alphabetic_runs(local.as_str())
            .into_iter()
            .map(|run| run.offset(local.start()))
            .collect();
        if runs.is_empty() {
            continue;
        }
        spans.extend(runs);
        stats.record_name();
    }

    spans
}

/// Obscure the letters of an e-mail's local part
///
/// Digits, punctuation and the domain are kept. Input without `@` is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use redactor_engine::detectors::names::redact_email;
///
/// assert_eq!(redact_email("john.smith@company.com", '█'), "████.█████@company.com");
/// assert_eq!(redact_email("not.an.email", '█'), "not.an.email");
/// ```
pub fn redact_email(email: &str, redaction_char: char) -> String {
    let Some((local, domain)) = email.split_once('@') else {
        return email.to_string();
    };
    let local: String = local
        .chars()
        .map(|c| if c.is_alphabetic() { redaction_char } else { c })
        .collect();
    format!("{}@{}", local, domain)
}

/// Rewrite every e-mail address in `text` with [`redact_email`]
///
/// Returns the rewritten text and the number of addresses that changed.
pub fn redact_emails_in_text(
    text: &str,
    patterns: &PatternLibrary,
    redaction_char: char,
) -> (String, usize) {
    let mut changed = 0;
    let rewritten = patterns
        .email_regex()
        .replace_all(text, |captures: &regex::Captures<'_>| {
            let original = &captures[0];
            let redacted = redact_email(original, redaction_char);
            if redacted != original {
                changed += 1;
            }
            redacted
        });
    (rewritten.into_owned(), changed)
}

fn alphabetic_runs(s: &str) -> Vec<Span> {
    let mut runs = Vec::new();
    let mut run_start = None;

    for (i, c) in s.char_indices() {
        match (c.is_alphabetic(), run_start) {
            (true, None) => run_start = Some(i),
            (false, Some(start)) => {
                runs.extend(Span::new(start, i));
                run_start = None;
            }
            _ => {}
        }
    }
    if let Some(start) = run_start {
        runs.extend(Span::new(start, s.len()));
    }

    runs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RedactionPlan;

    fn library() -> PatternLibrary {
        PatternLibrary::new().unwrap()
    }

    #[test]
    fn test_redact_email() {
        assert_eq!(redact_email("john.smith@company.com", '█'), "████.█████@company.com");
        assert_eq!(redact_email("test.user123@domain.com", '█'), "████.████123@domain.com");
        assert_eq!(redact_email("not.an.email", '█'), "not.an.email");
        assert_eq!(redact_email("", '█'), "");
    }

    #[test]
    fn test_alphabetic_runs() {
        let runs = alphabetic_runs("ab.c12de");
        assert_eq!(
            runs,
            vec![
                Span::new(0, 2).unwrap(),
                Span::new(3, 4).unwrap(),
                Span::new(6, 8).unwrap()
            ]
        );
        assert!(alphabetic_runs("12.34").is_empty());
    }

    #[test]
    fn test_person_entities_counted() {
        let text = "Alice met Bob";
        let entities = vec![
            Entity::from_offsets(EntityLabel::Person, 0, 5).unwrap(),
            Entity::from_offsets(EntityLabel::Gpe, 6, 9).unwrap(),
            Entity::from_offsets(EntityLabel::Person, 10, 13).unwrap(),
        ];
        let mut stats = RedactionStats::new();
        let spans = detect(text, &entities, &library(), &mut stats);
        assert_eq!(spans.len(), 2);
        assert_eq!(stats.names_count, 2);
    }

    #[test]
    fn test_email_spans_match_redact_email() {
        let patterns = library();
        let text = "Contact test.user123@domain.com or 4242@numbers.org today.";
        let mut stats = RedactionStats::new();
        let spans = detect(text, &[], &patterns, &mut stats);

        // Numeric local part: untouched and uncounted
        assert_eq!(stats.names_count, 1);

        let rendered = RedactionPlan::from_spans(spans).apply(text, '█');
        let (rewritten, changed) = redact_emails_in_text(text, &patterns, '█');
        assert_eq!(rendered, rewritten);
        assert_eq!(changed, 1);
        assert!(rendered.contains("████.████123@domain.com"));
        assert!(rendered.contains("4242@numbers.org"));
    }

    #[test]
    fn test_email_offsets_unshifted_by_earlier_matches() {
        let text = "a@x.io then Bob then bb@y.io";
        let bob = text.find("Bob").unwrap();
        let entities = vec![Entity::from_offsets(EntityLabel::Person, bob, bob + 3).unwrap()];
        let mut stats = RedactionStats::new();
        let spans = detect(text, &entities, &library(), &mut stats);

        let rendered = RedactionPlan::from_spans(spans).apply(text, '#');
        assert_eq!(rendered, "#@x.io then ### then ##@y.io");
        assert_eq!(stats.names_count, 3);
    }
}
