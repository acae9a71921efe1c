//! Byte-offset adaptation for kernels with byte-oriented addressing.
//!
//! The concrete kernel instance this engine was built against exposes
//! its primitives over a flat memory region addressed in *bytes*, while
//! spans count in *words*. [`KernelBridge`] closes that gap: it
//! implements [`Kernel`] on top of any [`RawKernel`] purely by scaling
//! offsets by [`WORD_BYTES`]. The scaling is an artifact of the
//! substitution, not a design requirement; a word-addressed kernel can
//! implement [`Kernel`] directly.

use myriad_core::{Span, Word, WORD_BYTES};

use crate::kernel::Kernel;

/// The byte-addressed primitive ABI of the external kernel.
///
/// `memory` is the kernel's flat addressable region (the same storage
/// the arena is carved from); all `*_begin`/`*_end` arguments are byte
/// offsets into it, always word-aligned. Semantics and preconditions
/// of each method match the corresponding [`Kernel`] method.
pub trait RawKernel {
    /// Byte-addressed [`Kernel::add_in_place`]. Returns the carry-out
    /// bit.
    fn add(
        &self,
        memory: &mut [Word],
        a_begin: usize,
        a_end: usize,
        b_begin: usize,
        b_end: usize,
    ) -> bool;

    /// Byte-addressed [`Kernel::sub_in_place`]. Returns the borrow-out
    /// bit.
    fn sub(
        &self,
        memory: &mut [Word],
        a_begin: usize,
        a_end: usize,
        b_begin: usize,
        b_end: usize,
    ) -> bool;

    /// Byte-addressed [`Kernel::mul_into`]. `out_begin` is the byte
    /// offset of the pre-zeroed output buffer.
    fn mul(
        &self,
        memory: &mut [Word],
        a_begin: usize,
        a_end: usize,
        b_begin: usize,
        b_end: usize,
        out_begin: usize,
    );

    /// Byte-addressed [`Kernel::div_in_place`]. Returns the quotient's
    /// word-length (lengths stay in words even though offsets are in
    /// bytes, matching the observed ABI).
    fn div(
        &self,
        memory: &mut [Word],
        a_begin: usize,
        a_end: usize,
        b_begin: usize,
        b_end: usize,
    ) -> usize;

    /// Byte-addressed [`Kernel::mod_in_place`]. Returns the
    /// remainder's word-length.
    fn rem(
        &self,
        memory: &mut [Word],
        a_begin: usize,
        a_end: usize,
        b_begin: usize,
        b_end: usize,
    ) -> usize;
}

/// Adapter implementing [`Kernel`] over a [`RawKernel`].
///
/// Adds no logic beyond translating word offsets to the raw kernel's
/// byte addressing.
pub struct KernelBridge<R> {
    raw: R,
}

impl<R: RawKernel> KernelBridge<R> {
    /// Wrap a byte-addressed kernel.
    pub fn new(raw: R) -> Self {
        Self { raw }
    }

    /// The wrapped raw kernel.
    pub fn raw(&self) -> &R {
        &self.raw
    }
}

impl<R: RawKernel> Kernel for KernelBridge<R> {
    fn add_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool {
        self.raw.add(
            words,
            a.byte_begin(),
            a.byte_end(),
            b.byte_begin(),
            b.byte_end(),
        )
    }

    fn sub_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool {
        self.raw.sub(
            words,
            a.byte_begin(),
            a.byte_end(),
            b.byte_begin(),
            b.byte_end(),
        )
    }

    fn mul_into(&self, words: &mut [Word], a: Span, b: Span, out: Span) {
        self.raw.mul(
            words,
            a.byte_begin(),
            a.byte_end(),
            b.byte_begin(),
            b.byte_end(),
            out.byte_begin(),
        );
    }

    fn div_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize {
        self.raw.div(
            words,
            a.byte_begin(),
            a.byte_end(),
            b.byte_begin(),
            b.byte_end(),
        )
    }

    fn mod_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize {
        self.raw.rem(
            words,
            a.byte_begin(),
            a.byte_end(),
            b.byte_begin(),
            b.byte_end(),
        )
    }
}
