//! Classified source spans.
//!
//! A [`Span`] records a category and a byte range; it never copies text.

use std::fmt;
use std::ops::Range;

use crate::Category;

/// Classified byte range of the source text.
///
/// Layout: `start` is inclusive and `end` exclusive, so the inclusive last
/// offset of a span is [`Span::last`]. The tokenizer never emits empty spans.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Span {
    pub category: Category,
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(category: Category, start: usize, end: usize) -> Self {
        Span {
            category,
            start,
            end,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Offset of the last byte covered by this span.
    ///
    /// Returns `None` for an empty span.
    #[inline]
    pub const fn last(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.end - 1)
        }
    }

    /// Move the start back to `start`, keeping the end.
    #[inline]
    #[must_use]
    pub fn extend_back_to(self, start: usize) -> Span {
        Span {
            start: self.start.min(start),
            ..self
        }
    }

    /// Convert to a `std::ops::Range`.
    #[inline]
    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The source text covered by this span.
    ///
    /// Returns an empty string if the range does not fall on character
    /// boundaries of `text` (spans from another source).
    #[inline]
    pub fn text<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.to_range()).unwrap_or_default()
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {}..{}", self.category, self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
