//! The [`Engine`] and its per-operation dispatch logic.

use myriad_arena::WordArena;
use myriad_codec as codec;
use myriad_core::{ComputeError, Span};
use myriad_kernel::Kernel;

use crate::{EngineConfig, Op};

/// A magnitude span plus its out-of-band sign.
///
/// Only subtraction can set `negative`; every other operation works on
/// and produces unsigned magnitudes.
#[derive(Clone, Copy, Debug)]
struct Outcome {
    span: Span,
    negative: bool,
}

/// Reorder operands so the longer-or-equal one comes first, as the
/// add/sub primitives require.
///
/// Pure value-returning step: the `swapped` flag feeds the sign
/// bookkeeping for subtraction instead of any shared mutable state.
fn ordered_longest_first(a: Span, b: Span) -> (Span, Span, bool) {
    if a.len() >= b.len() {
        (a, b, false)
    } else {
        (b, a, true)
    }
}

/// The operation dispatcher: decimal text in, decimal text out.
///
/// Each call to [`compute`](Engine::compute) runs one request through
/// three phases — parse, compute, stringify — against a fresh
/// [`WordArena`]. The engine itself is stateless between requests and
/// can be reused freely; it is not meant to be shared across threads
/// mid-request (requests never suspend, so there is nothing to share).
pub struct Engine<K> {
    kernel: K,
    config: EngineConfig,
}

impl<K: Kernel> Engine<K> {
    /// Create an engine with the default arena capacity.
    pub fn new(kernel: K) -> Self {
        Self::with_config(kernel, EngineConfig::default())
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(kernel: K, config: EngineConfig) -> Self {
        Self { kernel, config }
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one compute request.
    ///
    /// Decodes both operands into a fresh arena (left operand first,
    /// so the two spans are contiguous), dispatches on `op`, and
    /// renders the signed result. A `-` is prepended iff the operation
    /// reported a negative sign *and* the magnitude is non-zero, so
    /// there is never a negative zero.
    ///
    /// # Errors
    ///
    /// Any [`ComputeError`]; see the error taxonomy. Errors abort the
    /// request with no partial result and the request's arena is
    /// discarded with it.
    pub fn compute(&self, lhs: &str, op: Op, rhs: &str) -> Result<String, ComputeError> {
        let mut arena = WordArena::new(self.config.arena_words);
        let a = codec::decode(lhs, &mut arena)?;
        let b = codec::decode(rhs, &mut arena)?;

        let outcome = match op {
            Op::Add => self.add(&mut arena, a, b)?,
            Op::Sub => self.sub(&mut arena, a, b),
            Op::Mul => self.mul(&mut arena, a, b)?,
            Op::Div => self.div(&mut arena, a, b)?,
            Op::Mod => self.modulo(&mut arena, a, b)?,
        };

        let magnitude = codec::encode(&arena, outcome.span);
        if outcome.negative {
            Ok(format!("-{magnitude}"))
        } else {
            Ok(magnitude)
        }
    }

    /// [`compute`](Engine::compute) with a textual operation tag, as
    /// received from a request interface.
    pub fn compute_tag(&self, lhs: &str, tag: &str, rhs: &str) -> Result<String, ComputeError> {
        self.compute(lhs, tag.parse()?, rhs)
    }

    fn add(&self, arena: &mut WordArena, a: Span, b: Span) -> Result<Outcome, ComputeError> {
        let (hi, lo, _) = ordered_longest_first(a, b);
        let carry = self.kernel.add_in_place(arena.storage_mut(), hi, lo);
        let span = if carry {
            // The literal carry word goes immediately after `hi`. When
            // `hi` is the left operand that position is `lo`'s least
            // significant word, which is dead after the add; when `hi`
            // sits at the arena cursor, the word must be allocated.
            if hi.end == arena.used() {
                arena.allocate(1)?;
            }
            arena.storage_mut()[hi.end] = 1;
            hi.resized(hi.len() + 1)
        } else {
            // Addition of normalized inputs cannot leave a most
            // significant zero word, so no normalization pass.
            hi
        };
        Ok(Outcome {
            span,
            negative: false,
        })
    }

    fn sub(&self, arena: &mut WordArena, a: Span, b: Span) -> Outcome {
        let (hi, lo, swapped) = ordered_longest_first(a, b);
        let borrow = self.kernel.sub_in_place(arena.storage_mut(), hi, lo);
        let span = codec::normalize(arena, hi);
        Outcome {
            span,
            // A reorder flips the roles, a borrow flips the true sign;
            // together they cancel. Zero stays non-negative.
            negative: (swapped ^ borrow) && !span.is_empty(),
        }
    }

    fn mul(&self, arena: &mut WordArena, a: Span, b: Span) -> Result<Outcome, ComputeError> {
        let out = arena.allocate(a.len() + b.len())?;
        // The primitive adds into the output buffer, so clear any
        // stale arena contents first.
        codec::zero_fill(arena, out);
        self.kernel.mul_into(arena.storage_mut(), a, b, out);
        Ok(Outcome {
            span: codec::normalize(arena, out),
            negative: false,
        })
    }

    fn div(&self, arena: &mut WordArena, a: Span, b: Span) -> Result<Outcome, ComputeError> {
        if b.is_empty() {
            return Err(ComputeError::DivisionByZero);
        }
        let len = self.kernel.div_in_place(arena.storage_mut(), a, b);
        Ok(Outcome {
            span: codec::normalize(arena, a.resized(len)),
            negative: false,
        })
    }

    fn modulo(&self, arena: &mut WordArena, a: Span, b: Span) -> Result<Outcome, ComputeError> {
        if b.is_empty() {
            return Err(ComputeError::DivisionByZero);
        }
        let len = self.kernel.mod_in_place(arena.storage_mut(), a, b);
        Ok(Outcome {
            span: codec::normalize(arena, a.resized(len)),
            negative: false,
        })
    }
}
