//! Shared kernel fixtures for Myriad tests.
//!
//! - [`RecordingKernel`] — delegates to the software kernel while
//!   logging every call, for asserting dispatcher behavior (operand
//!   reordering, which primitive ran, how often).
//! - [`PanickingKernel`] — fails loudly if any primitive is reached,
//!   for asserting that validation happens before kernel dispatch.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod fixtures;

pub use fixtures::{KernelCall, PanickingKernel, RecordingKernel};
