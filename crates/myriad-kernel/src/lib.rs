//! Arithmetic kernel seam and reference kernel for Myriad.
//!
//! The [`Kernel`] trait is the narrow, stable interface to the five
//! external arithmetic primitives. The engine is written against this
//! seam, so the real kernel (however it is hosted) can be substituted
//! without touching the adapter logic, and tests can run against an
//! in-process implementation.
//!
//! Two implementations live here:
//!
//! - [`SoftwareKernel`]: a complete in-process reference kernel
//!   implementing all five primitives over arena storage.
//! - [`KernelBridge`]: an adapter over a [`RawKernel`], the
//!   byte-addressed ABI exposed by kernels that address a flat byte
//!   memory. The bridge adds no logic beyond scaling word offsets to
//!   byte offsets.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod bridge;
mod kernel;
mod software;

pub use bridge::{KernelBridge, RawKernel};
pub use kernel::Kernel;
pub use software::SoftwareKernel;
