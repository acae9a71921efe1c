//! Myriad: arbitrary-precision decimal arithmetic over a word arena
//! and a pluggable kernel.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Myriad sub-crates. For most users, adding `myriad` as a
//! single dependency is sufficient.
//!
//! Numbers are little-endian sequences of base-10000 words carved from
//! a single bump-allocated arena per request; arithmetic runs through
//! the [`Kernel`](kernel::Kernel) seam, so the bundled software kernel
//! can be swapped for an external one without touching the engine.
//!
//! # Quick start
//!
//! ```rust
//! use myriad::prelude::*;
//!
//! let engine = Engine::new(SoftwareKernel);
//!
//! let sum = engine
//!     .compute(
//!         "76202983060594244005608103922128835",
//!         Op::Add,
//!         "998644324631202810324180654468",
//!     )
//!     .unwrap();
//! assert_eq!(sum, "76203981704918875208418428102783303");
//!
//! // Subtraction is the one signed operation.
//! assert_eq!(engine.compute("5", Op::Sub, "9").unwrap(), "-4");
//!
//! // Tags from a request interface work too.
//! assert_eq!(engine.compute_tag("100", "mod", "7").unwrap(), "2");
//!
//! // Division by zero is a request error, not a panic.
//! assert!(matches!(
//!     engine.compute("7", Op::Div, "0"),
//!     Err(ComputeError::DivisionByZero)
//! ));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `myriad-core` | `Word`, radix constants, `Span`, errors |
//! | [`arena`] | `myriad-arena` | `WordArena` bump allocator |
//! | [`codec`] | `myriad-codec` | decimal text ↔ word span conversion |
//! | [`kernel`] | `myriad-kernel` | `Kernel` seam, software kernel, byte bridge |
//! | [`engine`] | `myriad-engine` | `Engine`, `Op`, `EngineConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and errors (`myriad-core`).
pub use myriad_core as types;

/// Word arena storage (`myriad-arena`).
pub use myriad_arena as arena;

/// Decimal text codec (`myriad-codec`).
pub use myriad_codec as codec;

/// Kernel seam and implementations (`myriad-kernel`).
pub use myriad_kernel as kernel;

/// Operation dispatcher (`myriad-engine`).
pub use myriad_engine as engine;

/// The commonly used subset of the API.
pub mod prelude {
    pub use myriad_arena::WordArena;
    pub use myriad_core::{
        CapacityError, CodecError, ComputeError, Span, Word, RADIX, RADIX_DIGITS,
    };
    pub use myriad_engine::{Engine, EngineConfig, Op};
    pub use myriad_kernel::{Kernel, KernelBridge, RawKernel, SoftwareKernel};
}
