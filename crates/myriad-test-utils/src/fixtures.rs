//! Reusable kernel test fixtures.

use std::cell::RefCell;

use myriad_core::{Span, Word};
use myriad_kernel::{Kernel, SoftwareKernel};

/// One recorded primitive invocation: which primitive ran and the
/// operand spans it received (after any dispatcher reordering).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelCall {
    /// Primitive name: `"add"`, `"sub"`, `"mul"`, `"div"` or `"mod"`.
    pub primitive: &'static str,
    /// First operand span as seen by the kernel.
    pub a: Span,
    /// Second operand span as seen by the kernel.
    pub b: Span,
}

/// A [`Kernel`] that computes via [`SoftwareKernel`] and records every
/// call.
///
/// Single-threaded by design, like the engine itself; the call log
/// lives in a `RefCell`.
#[derive(Debug, Default)]
pub struct RecordingKernel {
    inner: SoftwareKernel,
    calls: RefCell<Vec<KernelCall>>,
}

impl RecordingKernel {
    /// All recorded calls, oldest first.
    pub fn calls(&self) -> Vec<KernelCall> {
        self.calls.borrow().clone()
    }

    /// Operand spans of the most recent call, if any primitive ran.
    pub fn last_operands(&self) -> Option<(Span, Span)> {
        self.calls.borrow().last().map(|call| (call.a, call.b))
    }

    fn record(&self, primitive: &'static str, a: Span, b: Span) {
        self.calls.borrow_mut().push(KernelCall { primitive, a, b });
    }
}

impl Kernel for RecordingKernel {
    fn add_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool {
        self.record("add", a, b);
        self.inner.add_in_place(words, a, b)
    }

    fn sub_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool {
        self.record("sub", a, b);
        self.inner.sub_in_place(words, a, b)
    }

    fn mul_into(&self, words: &mut [Word], a: Span, b: Span, out: Span) {
        self.record("mul", a, b);
        self.inner.mul_into(words, a, b, out)
    }

    fn div_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize {
        self.record("div", a, b);
        self.inner.div_in_place(words, a, b)
    }

    fn mod_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize {
        self.record("mod", a, b);
        self.inner.mod_in_place(words, a, b)
    }
}

/// A [`Kernel`] that panics on any call.
///
/// Use where a request must fail (or complete) without ever reaching
/// the kernel, e.g. malformed operands or a zero divisor.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanickingKernel;

impl Kernel for PanickingKernel {
    fn add_in_place(&self, _words: &mut [Word], _a: Span, _b: Span) -> bool {
        panic!("add_in_place reached the kernel");
    }

    fn sub_in_place(&self, _words: &mut [Word], _a: Span, _b: Span) -> bool {
        panic!("sub_in_place reached the kernel");
    }

    fn mul_into(&self, _words: &mut [Word], _a: Span, _b: Span, _out: Span) {
        panic!("mul_into reached the kernel");
    }

    fn div_in_place(&self, _words: &mut [Word], _a: Span, _b: Span) -> usize {
        panic!("div_in_place reached the kernel");
    }

    fn mod_in_place(&self, _words: &mut [Word], _a: Span, _b: Span) -> usize {
        panic!("mod_in_place reached the kernel");
    }
}
