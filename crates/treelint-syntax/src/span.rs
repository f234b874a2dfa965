//! Byte spans and line/column resolution.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open byte range `start..end` into a source text.
///
/// Spans are the only positional information stored on tree nodes; they are
/// resolved to line/column pairs on demand through [`LineIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset of the first character covered by the span.
    pub start: usize,
    /// Byte offset one past the last character covered by the span.
    pub end: usize,
}

impl Span {
    /// Creates a span covering `start..end`.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    /// Creates a zero-length span at `offset`.
    #[must_use]
    pub fn empty(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(&self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn join(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Precomputed newline offsets for a source text.
///
/// Building the index is a single pass over the text; every subsequent
/// [`line_col`](LineIndex::line_col) lookup is a binary search.
#[derive(Debug, Clone)]
pub struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    /// Indexes `text` for line/column lookups.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in text.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self { line_starts }
    }

    /// Resolves a byte offset to a 1-indexed `(line, column)` pair.
    ///
    /// Offsets past the end of the text resolve to the last line.
    #[must_use]
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let col = offset - self.line_starts[line - 1] + 1;
        (line, col)
    }

    /// Number of lines in the indexed text.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_covers_both_spans() {
        let a = Span::new(4, 10);
        let b = Span::new(8, 20);
        assert_eq!(a.join(b), Span::new(4, 20));
        assert_eq!(b.join(a), Span::new(4, 20));
    }

    #[test]
    fn contains_is_inclusive_of_bounds() {
        let outer = Span::new(2, 10);
        assert!(outer.contains(Span::new(2, 10)));
        assert!(outer.contains(Span::new(5, 7)));
        assert!(!outer.contains(Span::new(1, 5)));
        assert!(!outer.contains(Span::new(5, 11)));
    }

    #[test]
    fn line_col_first_line() {
        let index = LineIndex::new("abc\ndef");
        assert_eq!(index.line_col(0), (1, 1));
        assert_eq!(index.line_col(2), (1, 3));
    }

    #[test]
    fn line_col_after_newline() {
        let index = LineIndex::new("abc\ndef\nghi");
        assert_eq!(index.line_col(4), (2, 1));
        assert_eq!(index.line_col(9), (3, 2));
    }

    #[test]
    fn line_col_past_end_clamps_to_last_line() {
        let index = LineIndex::new("ab\ncd");
        assert_eq!(index.line_col(5), (2, 3));
    }

    #[test]
    fn empty_text_is_one_line() {
        let index = LineIndex::new("");
        assert_eq!(index.line_count(), 1);
        assert_eq!(index.line_col(0), (1, 1));
    }
}
