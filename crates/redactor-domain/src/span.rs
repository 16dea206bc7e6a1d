//! Span module - the unit every detector produces

use std::fmt;
use std::ops::Range;

/// Half-open byte range `[start, end)` into the original document text
///
/// Spans are always expressed against the unmodified input, whichever
/// detector produced them. Ordering is by `start`, then by `end`, which is the
/// order the reconciler walks them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Span {
    /// Inclusive start offset
    pub start: usize,
    /// Exclusive end offset
    pub end: usize,
}

impl Span {
    /// Create a span, returning `None` when the range is empty or inverted
    ///
    /// # Examples
    ///
    /// ```
    /// use redactor_domain::Span;
    ///
    /// assert!(Span::new(0, 5).is_some());
    /// assert!(Span::new(5, 5).is_none());
    /// ```
    pub fn new(start: usize, end: usize) -> Option<Self> {
        if start < end {
            Some(Self { start, end })
        } else {
            None
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false for spans built with [`Span::new`]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The span as a `Range` suitable for slicing
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether two spans share at least one byte
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Shift the span right by `offset` bytes
    pub fn offset(&self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }

    /// Slice `text` with this span
    ///
    /// Returns `None` if the span runs past the end of `text` or does not
    /// fall on UTF-8 character boundaries.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.range())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn new_span_is_never_empty(start in 0usize..1000, end in 0usize..1000) {
            match Span::new(start, end) {
                Some(span) => prop_assert!(span.len() > 0),
                None => prop_assert!(start >= end),
            }
        }

        #[test]
        fn offset_preserves_length(start in 0usize..500, len in 1usize..500, shift in 0usize..500) {
            let span = Span::new(start, start + len).unwrap();
            prop_assert_eq!(span.offset(shift).len(), len);
        }
    }
}
