//! Decimal text to word-span codec for Myriad.
//!
//! Lossless conversion between decimal strings and little-endian
//! radix-10000 word spans in a [`WordArena`](myriad_arena::WordArena).
//! Because the radix is a power of ten, the codec is a fixed-width
//! grouping/ungrouping operation: four decimal digits per word, no
//! carries. Carries only ever occur inside the kernel's arithmetic
//! primitives.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod codec;

pub use codec::{decode, encode, normalize, zero_fill};
