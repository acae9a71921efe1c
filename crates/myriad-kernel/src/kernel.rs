//! The [`Kernel`] trait.

use myriad_core::{Span, Word};

/// The five arithmetic primitives consumed by the engine.
///
/// All methods operate in place on word spans addressed by offsets
/// into `words`, the arena's whole backing slice (the arena and the
/// kernel's operand addressing space are the same memory). Operand
/// spans must be normalized on input and are disjoint by construction.
///
/// # Contract
///
/// - Methods are deterministic and synchronous; none blocks or yields.
/// - `&self`: kernels are stateless between calls. Scratch space used
///   inside a call is the implementation's own business.
/// - Preconditions are the caller's responsibility (the engine enforces
///   operand ordering and divisor checks); violating them may panic but
///   never corrupts memory outside the given slice.
///
/// # Object safety
///
/// The trait is object-safe; an engine can hold a `Box<dyn Kernel>`.
pub trait Kernel {
    /// Add `b` into `a` word by word, propagating the carry across all
    /// of `a`'s words.
    ///
    /// Requires `a.len() >= b.len()`. Returns the carry-out bit: when
    /// `true`, the most significant word of the true result is a
    /// literal `1` which did NOT fit into `a` — the caller must append
    /// it immediately after `a` and extend the span by one word.
    fn add_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool;

    /// Subtract `b` from `a` in place, borrowing across words.
    ///
    /// Requires `a.len() >= b.len()`. Returns the borrow-out bit: when
    /// `false`, `a` holds the correct result; when `true`, the true
    /// result is negative and `a` holds its absolute value (the
    /// radix-complement wraparound has already been undone).
    fn sub_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool;

    /// Compute the full product of `a` and `b` into `out`.
    ///
    /// Requires `out.len() >= a.len() + b.len()` and `out` pre-zeroed:
    /// the primitive adds partial products into existing contents
    /// rather than overwriting. The result is read back from `out`
    /// after the call.
    fn mul_into(&self, words: &mut [Word], a: Span, b: Span, out: Span);

    /// Truncating integer division, overwriting the low words of `a`
    /// with the quotient.
    ///
    /// Requires `b` non-empty. Returns the quotient's word-length
    /// (before normalization); the caller resizes `a` to it.
    fn div_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize;

    /// Remainder of truncating division, overwriting the low words of
    /// `a`.
    ///
    /// Requires `b` non-empty. Returns the remainder's word-length
    /// (before normalization); the caller resizes `a` to it.
    fn mod_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize;
}

impl<K: Kernel + ?Sized> Kernel for &K {
    fn add_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool {
        (**self).add_in_place(words, a, b)
    }

    fn sub_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool {
        (**self).sub_in_place(words, a, b)
    }

    fn mul_into(&self, words: &mut [Word], a: Span, b: Span, out: Span) {
        (**self).mul_into(words, a, b, out)
    }

    fn div_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize {
        (**self).div_in_place(words, a, b)
    }

    fn mod_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize {
        (**self).mod_in_place(words, a, b)
    }
}
