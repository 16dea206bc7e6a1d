//! Span reconciliation and rendering
//!
//! Detectors propose spans independently, so the raw set may contain
//! duplicates and overlaps. [`RedactionPlan::from_spans`] turns it into an
//! ordered, non-overlapping list; [`RedactionPlan::apply`] renders that list
//! over the original text in a single pass.

use redactor_domain::Span;
use tracing::warn;

/// Ordered, non-overlapping spans ready to be applied to one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionPlan {
    spans: Vec<Span>,
}

impl RedactionPlan {
    /// Build a plan from an arbitrary set of spans
    ///
    /// Spans are sorted by `(start, end)`. Walking in that order, a span that
    /// starts before the end of the last accepted span is dropped whole:
    /// the earlier span wins and nothing is trimmed or merged.
    ///
    /// # Examples
    ///
    /// ```
    /// use redactor_domain::Span;
    /// use redactor_engine::RedactionPlan;
    ///
    /// let plan = RedactionPlan::from_spans(vec![
    ///     Span::new(3, 8).unwrap(),
    ///     Span::new(0, 5).unwrap(),
    /// ]);
    /// assert_eq!(plan.spans(), &[Span::new(0, 5).unwrap()]);
    /// ```
    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        let mut sorted: Vec<Span> = spans.into_iter().collect();
        sorted.sort();

        let mut accepted: Vec<Span> = Vec::with_capacity(sorted.len());
        for span in sorted {
            if accepted.last().is_some_and(|last| last.overlaps(&span)) {
                continue;
            }
            accepted.push(span);
        }

        Self { spans: accepted }
    }

    /// Accepted spans in ascending order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Number of accepted spans
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// True if nothing will be redacted
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Render `text` with every planned span obscured
    ///
    /// Each redacted character becomes one `redaction_char`, so the output
    /// has as many characters as the input. Spans that do not fall on
    /// character boundaries of `text` are skipped.
    pub fn apply(&self, text: &str, redaction_char: char) -> String {
        let mut output = String::with_capacity(text.len());
        let mut last_end = 0;

        for span in &self.spans {
            let (Some(gap), Some(hidden)) = (text.get(last_end..span.start), span.slice(text))
            else {
                warn!("Skipping span {} outside document bounds", span);
                continue;
            };
            output.push_str(gap);
            output.extend(std::iter::repeat_n(redaction_char, hidden.chars().count()));
            last_end = span.end;
        }

        output.push_str(text.get(last_end..).unwrap_or_default());
        output
    }
}
