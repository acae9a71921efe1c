//! The [`Span`] offset range.

use std::fmt;
use std::ops::Range;

use crate::word::WORD_BYTES;

/// A half-open range of word offsets into an arena, representing one
/// number's magnitude, least significant word first.
///
/// Spans are lightweight, non-owning index ranges: the arena owns every
/// word, and spans are carved from it without overlap. `end - begin` is
/// the word-length; an empty span (`begin == end`) represents the value
/// zero.
///
/// A span is *normalized* when its most significant word is non-zero
/// (or the span is empty). The codec and the engine only ever hand
/// normalized spans back to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Offset of the least significant word.
    pub begin: usize,
    /// One past the offset of the most significant word.
    pub end: usize,
}

impl Span {
    /// Create a span over `[begin, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `begin > end`.
    pub fn new(begin: usize, end: usize) -> Self {
        assert!(begin <= end, "span begin {begin} exceeds end {end}");
        Self { begin, end }
    }

    /// The empty span anchored at `at`, representing zero.
    pub fn empty_at(at: usize) -> Self {
        Self { begin: at, end: at }
    }

    /// Word-length of the span.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Whether the span is empty (the value zero).
    pub fn is_empty(&self) -> bool {
        self.end == self.begin
    }

    /// The same span with its length set to `n` words.
    pub fn resized(&self, n: usize) -> Self {
        Self {
            begin: self.begin,
            end: self.begin + n,
        }
    }

    /// The underlying index range, for slicing arena storage.
    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// `begin` in the byte-oriented addressing unit of byte-addressed
    /// kernels.
    pub fn byte_begin(&self) -> usize {
        self.begin * WORD_BYTES
    }

    /// `end` in the byte-oriented addressing unit of byte-addressed
    /// kernels.
    pub fn byte_end(&self) -> usize {
        self.end * WORD_BYTES
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}
