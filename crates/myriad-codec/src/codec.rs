//! Word-span encode/decode and span maintenance helpers.

use std::fmt::Write as _;

use myriad_arena::WordArena;
use myriad_core::{CodecError, Span, Word, RADIX_DIGITS};

/// Decode decimal text into a word span at the arena cursor.
///
/// Leading ASCII `0`s are stripped first; the remainder must be all
/// ASCII digits (the empty remainder is the value zero and yields an
/// empty span). The digit string is partitioned into
/// [`RADIX_DIGITS`]-wide groups counting from the least significant
/// end; each group becomes one word.
///
/// On success the arena cursor is left advanced past the span, so a
/// second call places a second operand contiguously.
///
/// # Errors
///
/// - [`CodecError::InvalidFormat`] if a non-digit character appears
///   anywhere in the text.
/// - [`CodecError::Capacity`] if the required words exceed the arena's
///   remaining capacity.
pub fn decode(text: &str, arena: &mut WordArena) -> Result<Span, CodecError> {
    let bytes = text.as_bytes();
    let mut start = 0;
    while start < bytes.len() && bytes[start] == b'0' {
        start += 1;
    }
    let digits = &bytes[start..];
    if let Some(pos) = digits.iter().position(|b| !b.is_ascii_digit()) {
        return Err(CodecError::InvalidFormat {
            position: start + pos,
        });
    }

    let n_words = digits.len().div_ceil(RADIX_DIGITS);
    let span = arena.allocate(n_words)?;

    let mut end = digits.len();
    for word in arena.words_mut(span) {
        let begin = end.saturating_sub(RADIX_DIGITS);
        let mut value: Word = 0;
        for &b in &digits[begin..end] {
            value = value * 10 + Word::from(b - b'0');
        }
        *word = value;
        end = begin;
    }
    Ok(span)
}

/// Render a span as decimal text.
///
/// The empty span encodes to `"0"`. Otherwise the most significant
/// word is rendered without padding and every less significant word is
/// zero-padded to [`RADIX_DIGITS`] digits. Composed with
/// [`decode`], this reproduces the input minus any leading zeros.
pub fn encode(arena: &WordArena, span: Span) -> String {
    if span.is_empty() {
        return "0".to_string();
    }
    let words = arena.words(span);
    let mut out = String::with_capacity(span.len() * RADIX_DIGITS);
    let mut rest = words.iter().rev();
    let most_significant = rest.next().unwrap();
    write!(out, "{most_significant}").unwrap();
    for word in rest {
        write!(out, "{word:0width$}", width = RADIX_DIGITS).unwrap();
    }
    out
}

/// Shrink a span past its most significant zero words.
///
/// Pure: arena contents are untouched. The result of normalizing a
/// span of all zeros is the empty span at `span.begin`.
pub fn normalize(arena: &WordArena, span: Span) -> Span {
    let words = arena.words(span);
    let mut end = words.len();
    while end > 0 && words[end - 1] == 0 {
        end -= 1;
    }
    span.resized(end)
}

/// Zero every word in a span.
///
/// Used to prepare kernel output buffers: the multiplication primitive
/// adds into existing contents rather than overwriting.
pub fn zero_fill(arena: &mut WordArena, span: Span) {
    arena.words_mut(span).fill(0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use myriad_core::CapacityError;

    fn arena() -> WordArena {
        WordArena::new(64)
    }

    #[test]
    fn decode_groups_from_least_significant_end() {
        let mut arena = arena();
        let span = decode("123456789", &mut arena).unwrap();
        // 1 2345 6789, little-endian words.
        assert_eq!(arena.words(span), &[6789, 2345, 1]);
    }

    #[test]
    fn decode_exact_group_boundary() {
        let mut arena = arena();
        let span = decode("10000", &mut arena).unwrap();
        assert_eq!(arena.words(span), &[0, 1]);
    }

    #[test]
    fn decode_strips_leading_zeros() {
        let mut arena = arena();
        let span = decode("000042", &mut arena).unwrap();
        assert_eq!(arena.words(span), &[42]);
    }

    #[test]
    fn empty_and_all_zero_decode_to_empty_span() {
        let mut arena = arena();
        let a = decode("", &mut arena).unwrap();
        let b = decode("000", &mut arena).unwrap();
        assert!(a.is_empty());
        assert!(b.is_empty());
        assert_eq!(arena.used(), 0);
    }

    #[test]
    fn decode_advances_cursor_for_second_operand() {
        let mut arena = arena();
        let a = decode("12345678", &mut arena).unwrap();
        let b = decode("9", &mut arena).unwrap();
        assert_eq!(a, Span::new(0, 2));
        assert_eq!(b, Span::new(2, 3));
    }

    #[test]
    fn non_digit_is_rejected_with_position() {
        let mut arena = arena();
        let err = decode("12a3", &mut arena).unwrap_err();
        assert_eq!(err, CodecError::InvalidFormat { position: 2 });
        // Leading zeros do not legitimize a later non-digit.
        let err = decode("00x", &mut arena).unwrap_err();
        assert_eq!(err, CodecError::InvalidFormat { position: 2 });
        let err = decode("-5", &mut arena).unwrap_err();
        assert_eq!(err, CodecError::InvalidFormat { position: 0 });
    }

    #[test]
    fn capacity_boundary_is_exact() {
        // 8 digits = 2 words. Fits in a 2-word arena, not in 1.
        let mut small = WordArena::new(2);
        assert!(decode("12345678", &mut small).is_ok());

        let mut tiny = WordArena::new(1);
        let err = decode("12345678", &mut tiny).unwrap_err();
        assert_eq!(
            err,
            CodecError::Capacity(CapacityError {
                requested: 2,
                available: 1,
            })
        );
    }

    #[test]
    fn encode_zero_pads_inner_words() {
        let mut arena = arena();
        let span = decode("10000", &mut arena).unwrap();
        assert_eq!(encode(&arena, span), "10000");
        let span = decode("100000001", &mut arena).unwrap();
        assert_eq!(encode(&arena, span), "100000001");
    }

    #[test]
    fn encode_empty_span_is_zero() {
        let arena = arena();
        assert_eq!(encode(&arena, Span::empty_at(0)), "0");
    }

    #[test]
    fn normalize_drops_most_significant_zero_words() {
        let mut arena = arena();
        let span = arena.allocate(3).unwrap();
        arena.words_mut(span).copy_from_slice(&[5, 0, 0]);
        let norm = normalize(&arena, span);
        assert_eq!(norm, span.resized(1));
        // Pure: the original words survive.
        assert_eq!(arena.words(span), &[5, 0, 0]);
    }

    #[test]
    fn normalize_all_zero_span_is_empty() {
        let mut arena = arena();
        let span = arena.allocate(2).unwrap();
        let norm = normalize(&arena, span);
        assert!(norm.is_empty());
        assert_eq!(norm.begin, span.begin);
    }

    #[test]
    fn zero_fill_clears_stale_words() {
        let mut arena = arena();
        let span = arena.allocate(4).unwrap();
        arena.words_mut(span).fill(9999);
        zero_fill(&mut arena, span);
        assert!(arena.words(span).iter().all(|&w| w == 0));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn strip_leading_zeros(s: &str) -> String {
            let stripped = s.trim_start_matches('0');
            if stripped.is_empty() {
                "0".to_string()
            } else {
                stripped.to_string()
            }
        }

        proptest! {
            #[test]
            fn round_trip_canonical(digits in "[1-9][0-9]{0,40}") {
                let mut arena = WordArena::new(32);
                let span = decode(&digits, &mut arena).unwrap();
                prop_assert_eq!(encode(&arena, span), digits);
            }

            #[test]
            fn round_trip_strips_leading_zeros(digits in "0{0,6}[0-9]{0,40}") {
                let mut arena = WordArena::new(32);
                let span = decode(&digits, &mut arena).unwrap();
                prop_assert_eq!(encode(&arena, span), strip_leading_zeros(&digits));
            }

            #[test]
            fn decoded_spans_are_normalized(digits in "[0-9]{0,40}") {
                let mut arena = WordArena::new(32);
                let span = decode(&digits, &mut arena).unwrap();
                prop_assert_eq!(normalize(&arena, span), span);
            }
        }
    }
}
