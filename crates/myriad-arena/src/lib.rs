//! Single-request bump-allocated word arena for Myriad.
//!
//! One [`WordArena`] backs exactly one top-level compute request: the
//! operand spans are carved from it during parsing, the result span is
//! carved immediately after, and the whole arena is discarded (or
//! [`reset`](WordArena::reset)) once the result string has been
//! produced. Allocation is a monotonic bump pointer; nothing is ever
//! freed or reused within a request. The workload is strictly
//! "allocate forward, discard all at once", so no general-purpose
//! memory management is needed.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod arena;

pub use arena::WordArena;
