//! The [`WordArena`] bump allocator.

use myriad_core::{CapacityError, Span, Word};

/// Bump-allocated word storage shared by all spans in one request.
///
/// The arena is a flat, pre-sized buffer of [`Word`]s with a monotonic
/// cursor. [`allocate`](WordArena::allocate) carves non-overlapping
/// [`Span`]s forward from the cursor; there is no individual
/// deallocation. A request's total word usage is bounded (two operands
/// plus at most one result no larger than the sum of the operand
/// lengths), so capacity is fixed up front and exhaustion is a request
/// failure, not a growth trigger.
///
/// The backing buffer doubles as the kernel's operand addressing space:
/// arithmetic primitives receive the whole storage slice via
/// [`storage_mut`](WordArena::storage_mut) and address operands by span
/// offsets into it.
pub struct WordArena {
    /// Backing storage. Fixed size for the arena's lifetime.
    words: Vec<Word>,
    /// Next free word offset.
    cursor: usize,
}

impl WordArena {
    /// Create an arena with a fixed capacity of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
            cursor: 0,
        }
    }

    /// Allocate exactly `n` words, advancing the cursor.
    ///
    /// The returned span starts at the previous cursor position, so two
    /// consecutive allocations are contiguous. Contents are not zeroed
    /// on reuse after [`reset`](WordArena::reset); callers that need
    /// zeroed storage fill the span themselves.
    pub fn allocate(&mut self, n: usize) -> Result<Span, CapacityError> {
        let available = self.remaining();
        if n > available {
            return Err(CapacityError {
                requested: n,
                available,
            });
        }
        let span = Span::new(self.cursor, self.cursor + n);
        self.cursor += n;
        Ok(span)
    }

    /// Read a span's words, least significant first.
    ///
    /// # Panics
    ///
    /// Panics if the span extends past the arena capacity. Spans
    /// obtained from [`allocate`](WordArena::allocate) are always in
    /// bounds.
    pub fn words(&self, span: Span) -> &[Word] {
        &self.words[span.range()]
    }

    /// Mutable view of a span's words.
    ///
    /// # Panics
    ///
    /// Panics if the span extends past the arena capacity.
    pub fn words_mut(&mut self, span: Span) -> &mut [Word] {
        &mut self.words[span.range()]
    }

    /// The whole backing buffer, for span-addressed kernel primitives.
    pub fn storage(&self) -> &[Word] {
        &self.words
    }

    /// Mutable view of the whole backing buffer.
    pub fn storage_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    /// Number of words allocated so far.
    pub fn used(&self) -> usize {
        self.cursor
    }

    /// Number of words still available.
    pub fn remaining(&self) -> usize {
        self.words.len() - self.cursor
    }

    /// Total capacity in words.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<Word>()
    }

    /// Discard all spans at once by rewinding the cursor.
    ///
    /// Does not zero the backing storage; previously carved spans must
    /// not be used afterwards.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}
