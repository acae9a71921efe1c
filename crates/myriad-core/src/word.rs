//! The [`Word`] type and radix constants.
//!
//! A number is stored as a little-endian sequence of base-10000 digit
//! groups: word 0 is the *least* significant group. The radix is fixed
//! so that one word maps to exactly four decimal digits, which makes the
//! text codec a plain fixed-width grouping operation with no multi-word
//! carries of its own.

/// A single digit group in `[0, RADIX)`.
///
/// `u16` comfortably holds values up to 9999. Word sequences never
/// encode sign; negative results are represented out-of-band by the
/// engine's sign flag.
pub type Word = u16;

/// The positional base each word is taken modulo.
pub const RADIX: Word = 10_000;

/// Decimal digit width of one word (`log10(RADIX)`).
pub const RADIX_DIGITS: usize = 4;

/// Size of one word in the byte-oriented addressing unit used by
/// byte-addressed kernels. See `myriad-kernel`'s bridge module.
pub const WORD_BYTES: usize = std::mem::size_of::<Word>();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radix_matches_digit_width() {
        assert_eq!(10u64.pow(RADIX_DIGITS as u32), u64::from(RADIX));
    }

    #[test]
    fn max_word_fits() {
        let max: Word = RADIX - 1;
        assert_eq!(max, 9999);
    }

    #[test]
    fn word_is_two_bytes() {
        assert_eq!(WORD_BYTES, 2);
    }
}
