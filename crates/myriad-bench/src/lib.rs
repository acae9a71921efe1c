//! Benchmark profiles and utilities for the Myriad decimal word
//! engine.
//!
//! Provides deterministic operand generation so benchmark runs are
//! comparable across machines and commits.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// A seeded RNG for reproducible operand streams.
pub fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Generate a random decimal operand of exactly `digits` digits
/// (no leading zero unless `digits == 1`).
pub fn random_operand(rng: &mut ChaCha8Rng, digits: usize) -> String {
    assert!(digits > 0, "operand needs at least one digit");
    let mut out = String::with_capacity(digits);
    out.push(char::from(b'0' + rng.random_range(1..10u8)));
    for _ in 1..digits {
        out.push(char::from(b'0' + rng.random_range(0..10u8)));
    }
    out
}

/// Generate `count` operand pairs of `digits` digits each.
pub fn operand_pairs(seed: u64, count: usize, digits: usize) -> Vec<(String, String)> {
    let mut rng = rng(seed);
    (0..count)
        .map(|_| {
            (
                random_operand(&mut rng, digits),
                random_operand(&mut rng, digits),
            )
        })
        .collect()
}
