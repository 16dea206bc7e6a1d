//! Per-category detectors
//!
//! Each detector reads the immutable document text (and, where relevant,
//! the recognizer output), records one count per proposed span, and returns
//! its spans. Overlaps between or within categories are left for
//! [`RedactionPlan`](crate::RedactionPlan) to resolve.

pub mod addresses;
pub mod concepts;
pub mod dates;
pub mod names;
pub mod phones;

use redactor_domain::Span;

/// The text around `span`, extended by up to `radius` characters each side
///
/// Always cut on character boundaries.
pub(crate) fn context_window(text: &str, span: Span, radius: usize) -> &str {
    let start = text
        .get(..span.start)
        .and_then(|before| before.char_indices().rev().take(radius).last())
        .map_or(span.start, |(i, _)| i);

    let end = text
        .get(span.end..)
        .and_then(|after| after.char_indices().nth(radius))
        .map_or(text.len(), |(i, _)| span.end + i);

    text.get(start..end).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_window_clamps_to_text() {
        let text = "abc XYZ def";
        let span = Span::new(4, 7).unwrap();
        assert_eq!(context_window(text, span, 30), text);
    }

    #[test]
    fn test_context_window_radius() {
        let text = "0123456789XYZ0123456789";
        let span = Span::new(10, 13).unwrap();
        assert_eq!(context_window(text, span, 3), "789XYZ012");
    }

    #[test]
    fn test_context_window_multibyte() {
        let text = "ééé ZIP ééé";
        let start = text.find("ZIP").unwrap();
        let span = Span::new(start, start + 3).unwrap();
        assert_eq!(context_window(text, span, 2), "é ZIP é");
    }
}
