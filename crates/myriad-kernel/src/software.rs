//! In-process reference implementation of the [`Kernel`] primitives.

use smallvec::{smallvec, SmallVec};

use myriad_core::{Span, Word, RADIX};

use crate::kernel::Kernel;

/// Double-word working width. Products of two words plus a carry stay
/// below `RADIX^2 + RADIX`, well within `u32`.
const RADIX_32: u32 = RADIX as u32;

/// Inline capacity for operand snapshots and division scratch.
/// Operands up to 32 decimal digits stay off the heap.
type WordBuf = SmallVec<[Word; 8]>;

/// Reference arithmetic kernel.
///
/// A faithful in-process stand-in for the external kernel: classic
/// schoolbook algorithms over little-endian base-10000 words, with a
/// binary search on each trial digit during long division. Secondary
/// operands are snapshotted into scratch buffers before mutation, so
/// the implementation never aliases within the arena slice.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftwareKernel;

/// Add with carry: `*a += b + carry`, returning the new carry.
fn adc(a: &mut Word, b: Word, carry: bool) -> bool {
    let x = u32::from(*a) + u32::from(b) + u32::from(carry);
    if x >= RADIX_32 {
        *a = (x - RADIX_32) as Word;
        true
    } else {
        *a = x as Word;
        false
    }
}

/// Subtract with borrow: `*a -= b + borrow`, returning the new borrow.
fn sbb(a: &mut Word, b: Word, borrow: bool) -> bool {
    let x = i32::from(*a) - i32::from(b) - i32::from(borrow);
    if x < 0 {
        *a = (x + i32::from(RADIX)) as Word;
        true
    } else {
        *a = x as Word;
        false
    }
}

/// Copy a span's words into a scratch buffer, dropping most
/// significant zero words.
fn snapshot_normalized(words: &[Word], span: Span) -> WordBuf {
    let mut buf = WordBuf::from_slice(&words[span.range()]);
    while buf.last() == Some(&0) {
        buf.pop();
    }
    buf
}

/// Add `a * b` into `out`, where `out` already holds lower-round
/// partial sums. The carry ripple past `a.len() + 1` words is bounded
/// because the total product fits the output buffer.
fn long_mul_round(a: &[Word], b: Word, out: &mut [Word]) {
    let mut mul_carry: u32 = 0;
    let mut add_carry = false;
    let mut i = 0;
    for &av in a {
        let x = u32::from(av) * u32::from(b) + mul_carry;
        let w = (x % RADIX_32) as Word;
        mul_carry = x / RADIX_32;
        add_carry = adc(&mut out[i], w, add_carry);
        i += 1;
    }
    if mul_carry != 0 {
        add_carry = adc(&mut out[i], mul_carry as Word, add_carry);
        i += 1;
    }
    if add_carry {
        while out[i] == RADIX - 1 {
            out[i] = 0;
            i += 1;
        }
        out[i] += 1;
    }
}

/// Divide `a` in place by a single word, returning the remainder.
fn divmod_word(a: &mut [Word], b: Word) -> Word {
    let mut rem: u32 = 0;
    for w in a.iter_mut().rev() {
        let x = u32::from(*w) + RADIX_32 * rem;
        *w = (x / u32::from(b)) as Word;
        rem = x % u32::from(b);
    }
    rem as Word
}

/// Remainder of `a` divided by a single word; `a` is not modified.
fn mod_word(a: &[Word], b: Word) -> Word {
    let mut rem: u32 = 0;
    for &w in a.iter().rev() {
        rem = (u32::from(w) + RADIX_32 * rem) % u32::from(b);
    }
    rem as Word
}

/// The two most significant words of `w` combined: `hi * RADIX + lo`.
/// Requires `w.len() >= 2`.
fn high2(w: &[Word]) -> u32 {
    u32::from(w[w.len() - 1]) * RADIX_32 + u32::from(w[w.len() - 2])
}

/// Is `x < y * z`? Requires `x` and `z` normalized and
/// `x.len() >= z.len()`.
fn x_less_yz(x: &[Word], y: Word, z: &[Word]) -> bool {
    let mut mul_carry: u32 = 0;
    let mut borrow = false;
    let mut i = 0;
    for &zv in z {
        let t = u32::from(zv) * u32::from(y) + mul_carry;
        let r = t % RADIX_32;
        mul_carry = t / RADIX_32;
        borrow = u32::from(x[i]) < r + u32::from(borrow);
        i += 1;
    }
    if mul_carry != 0 {
        if i == x.len() {
            return true;
        }
        borrow = u32::from(x[i]) < mul_carry + u32::from(borrow);
        i += 1;
    }
    if !borrow {
        return false;
    }
    x[i..].iter().all(|&w| w == 0)
}

/// Subtract `y * z` from `x` in place. Requires the result to be
/// non-negative, i.e. `!x_less_yz(x, y, z)`.
fn x_sub_yz(x: &mut [Word], y: Word, z: &[Word]) {
    let mut mul_carry: u32 = 0;
    let mut borrow = false;
    let mut i = 0;
    for &zv in z {
        let t = u32::from(zv) * u32::from(y) + mul_carry;
        let r = (t % RADIX_32) as Word;
        mul_carry = t / RADIX_32;
        borrow = sbb(&mut x[i], r, borrow);
        i += 1;
    }
    if mul_carry != 0 {
        borrow = sbb(&mut x[i], mul_carry as Word, borrow);
        i += 1;
    }
    if borrow {
        while x[i] == 0 {
            x[i] = RADIX - 1;
            i += 1;
        }
        x[i] -= 1;
    }
}

/// One round of long division: find the largest single-word `q` with
/// `q * b <= r`, subtract `q * b` from `r`, return `q`.
///
/// Requires `r` and `b` normalized, `b.len() >= 2`, and the quotient
/// of the round to fit in one word.
fn long_div_round(r: &mut [Word], b: &[Word]) -> Word {
    let nr = r.len();
    let nb = b.len();
    if nr < nb {
        return 0;
    }

    let r_hi = high2(r);
    // When the remainder window is one word longer than the divisor,
    // the divisor's implied top word is zero, so its high pair
    // degenerates to the single most significant word.
    let b_hi = if nr == nb {
        high2(b)
    } else {
        u32::from(b[nb - 1])
    };

    // Bounds on the trial digit, then binary search between them.
    // Invariant: lbound <= q < rbound.
    let rbound_raw = (r_hi + 1) / b_hi + 1;
    let mut rbound = rbound_raw.min(RADIX_32) as Word;
    let mut lbound = (r_hi / (b_hi + 1)) as Word;
    while rbound - lbound > 1 {
        let mid = (lbound + rbound) / 2;
        if x_less_yz(r, mid, b) {
            rbound = mid;
        } else {
            lbound = mid;
        }
    }
    x_sub_yz(r, lbound, b);
    lbound
}

impl Kernel for SoftwareKernel {
    fn add_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool {
        debug_assert!(a.len() >= b.len(), "add requires len(a) >= len(b)");
        let bw = WordBuf::from_slice(&words[b.range()]);
        let aw = &mut words[a.range()];

        let mut carry = false;
        let mut i = 0;
        for &bv in &bw {
            carry = adc(&mut aw[i], bv, carry);
            i += 1;
        }
        while carry && i < aw.len() {
            let x = aw[i] + 1;
            if x != RADIX {
                aw[i] = x;
                carry = false;
            } else {
                aw[i] = 0;
            }
            i += 1;
        }
        carry
    }

    fn sub_in_place(&self, words: &mut [Word], a: Span, b: Span) -> bool {
        debug_assert!(a.len() >= b.len(), "sub requires len(a) >= len(b)");
        let bw = WordBuf::from_slice(&words[b.range()]);
        let aw = &mut words[a.range()];

        let mut borrow = false;
        let mut i = 0;
        for &bv in &bw {
            borrow = sbb(&mut aw[i], bv, borrow);
            i += 1;
        }
        while borrow && i < aw.len() {
            let v = aw[i];
            if v != 0 {
                aw[i] = v - 1;
                borrow = false;
            } else {
                aw[i] = RADIX - 1;
            }
            i += 1;
        }
        if !borrow {
            return false;
        }

        // Borrow out of the top word: what `a` holds is the radix
        // complement of the true (negative) result. Uncomplement it to
        // recover the absolute value: skip trailing zeros (subtracting
        // zero from zero needs no borrow), take RADIX - v at the first
        // non-zero word, RADIX - 1 - v above it. A borrow-out
        // guarantees at least one non-zero word exists.
        let mut j = 0;
        while aw[j] == 0 {
            j += 1;
        }
        aw[j] = RADIX - aw[j];
        j += 1;
        while j < aw.len() {
            aw[j] = RADIX - 1 - aw[j];
            j += 1;
        }
        true
    }

    fn mul_into(&self, words: &mut [Word], a: Span, b: Span, out: Span) {
        debug_assert!(
            out.len() >= a.len() + b.len(),
            "mul output must hold len(a) + len(b) words"
        );
        let mut aw = WordBuf::from_slice(&words[a.range()]);
        let mut bw = WordBuf::from_slice(&words[b.range()]);
        // The round loop favors a long multiplicand and a short
        // multiplier.
        if aw.len() < bw.len() {
            std::mem::swap(&mut aw, &mut bw);
        }
        if bw.is_empty() {
            return;
        }
        let out_w = &mut words[out.range()];
        for (round, &bv) in bw.iter().enumerate() {
            long_mul_round(&aw, bv, &mut out_w[round..]);
        }
    }

    fn div_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize {
        let bw = snapshot_normalized(words, b);
        debug_assert!(!bw.is_empty(), "division by zero");
        let aw = &mut words[a.range()];

        if bw.len() == 1 {
            divmod_word(aw, bw[0]);
            return aw.len();
        }

        // Long division over a sliding remainder window, most
        // significant dividend word first. The window lives in scratch
        // so quotient digits can overwrite the dividend as we go.
        let na = aw.len();
        let mut rem: SmallVec<[Word; 16]> = smallvec![0; na];
        let mut r_begin = na;
        let mut r_end = na;
        for i in (0..na).rev() {
            r_begin -= 1;
            rem[r_begin] = aw[i];
            while r_end > r_begin && rem[r_end - 1] == 0 {
                r_end -= 1;
            }
            aw[i] = long_div_round(&mut rem[r_begin..r_end], &bw);
        }
        na
    }

    fn mod_in_place(&self, words: &mut [Word], a: Span, b: Span) -> usize {
        let bw = snapshot_normalized(words, b);
        debug_assert!(!bw.is_empty(), "division by zero");
        let aw = &mut words[a.range()];

        if bw.len() == 1 {
            let rem = mod_word(aw, bw[0]);
            if !aw.is_empty() {
                aw[0] = rem;
                aw[1..].fill(0);
            }
            return aw.len();
        }

        // In-place variant: each round reduces the top of `a` modulo
        // `b`, discarding the quotient digit. What remains in the low
        // words is the remainder.
        let mut end = aw.len();
        let mut cur = aw.len();
        while cur > 0 {
            cur -= 1;
            while end > cur && aw[end - 1] == 0 {
                end -= 1;
            }
            long_div_round(&mut aw[cur..end], &bw);
        }
        aw.len()
    }
}
