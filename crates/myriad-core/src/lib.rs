//! Core types and errors for the Myriad decimal word engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Myriad workspace:
//! the [`Word`] digit-group type and radix constants, the [`Span`]
//! offset range, and the error taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod span;
pub mod word;

pub use error::{CapacityError, CodecError, ComputeError};
pub use span::Span;
pub use word::{Word, RADIX, RADIX_DIGITS, WORD_BYTES};
