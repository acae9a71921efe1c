//! End-to-end compute requests against the software kernel.

use myriad_core::{CapacityError, ComputeError};
use myriad_engine::{Engine, EngineConfig, Op};
use myriad_kernel::SoftwareKernel;
use myriad_test_utils::PanickingKernel;

fn engine() -> Engine<SoftwareKernel> {
    Engine::new(SoftwareKernel)
}

#[test]
fn adds_the_demo_operands() {
    assert_eq!(
        engine()
            .compute(
                "76202983060594244005608103922128835",
                Op::Add,
                "998644324631202810324180654468",
            )
            .unwrap(),
        "76203981704918875208418428102783303"
    );
}

#[test]
fn addition_is_commutative() {
    let engine = engine();
    let ab = engine.compute("99999999", Op::Add, "12345").unwrap();
    let ba = engine.compute("12345", Op::Add, "99999999").unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab, "100012344");
}

#[test]
fn zero_is_the_additive_identity() {
    let engine = engine();
    assert_eq!(engine.compute("987654321", Op::Add, "0").unwrap(), "987654321");
    assert_eq!(engine.compute("0", Op::Add, "987654321").unwrap(), "987654321");
    assert_eq!(engine.compute("0", Op::Add, "0").unwrap(), "0");
}

#[test]
fn subtraction_yields_signed_results() {
    let engine = engine();
    assert_eq!(engine.compute("5", Op::Sub, "9").unwrap(), "-4");
    assert_eq!(engine.compute("9", Op::Sub, "5").unwrap(), "4");
    assert_eq!(engine.compute("5", Op::Sub, "5").unwrap(), "0");
}

#[test]
fn subtraction_across_word_boundaries() {
    let engine = engine();
    assert_eq!(
        engine.compute("10000000000000", Op::Sub, "1").unwrap(),
        "9999999999999"
    );
    assert_eq!(
        engine.compute("1", Op::Sub, "10000000000000").unwrap(),
        "-9999999999999"
    );
}

#[test]
fn multiplication_handles_zero_uniformly() {
    let engine = engine();
    assert_eq!(engine.compute("12345", Op::Mul, "0").unwrap(), "0");
    assert_eq!(engine.compute("0", Op::Mul, "12345").unwrap(), "0");
    assert_eq!(engine.compute("0", Op::Mul, "0").unwrap(), "0");
}

#[test]
fn multiplication_is_commutative() {
    let engine = engine();
    let ab = engine
        .compute("123456789123456789", Op::Mul, "987654321")
        .unwrap();
    let ba = engine
        .compute("987654321", Op::Mul, "123456789123456789")
        .unwrap();
    assert_eq!(ab, ba);
    assert_eq!(ab, "121932631234567900112635269");
}

#[test]
fn division_truncates() {
    let engine = engine();
    assert_eq!(engine.compute("100", Op::Div, "7").unwrap(), "14");
    assert_eq!(engine.compute("100", Op::Mod, "7").unwrap(), "2");
    assert_eq!(engine.compute("6", Op::Div, "7").unwrap(), "0");
    assert_eq!(engine.compute("6", Op::Mod, "7").unwrap(), "6");
}

#[test]
fn division_by_zero_fails_for_every_dividend() {
    // The divisor check precedes kernel dispatch, so even a kernel
    // that cannot run any primitive sees these requests fail cleanly.
    let engine = Engine::new(PanickingKernel);
    for dividend in ["7", "0", "99999999999999999999"] {
        assert_eq!(
            engine.compute(dividend, Op::Div, "0").unwrap_err(),
            ComputeError::DivisionByZero
        );
        assert_eq!(
            engine.compute(dividend, Op::Mod, "0").unwrap_err(),
            ComputeError::DivisionByZero
        );
    }
}

#[test]
fn malformed_operands_are_rejected() {
    let engine = Engine::new(PanickingKernel);
    for bad in ["12a3", "1.5", "-5", "0x10", "٣"] {
        match engine.compute(bad, Op::Add, "1") {
            Err(ComputeError::InvalidOperand(_)) => {}
            other => panic!("expected InvalidOperand for {bad:?}, got {other:?}"),
        }
    }
}

#[test]
fn empty_and_all_zero_operands_decode_to_zero() {
    let engine = engine();
    assert_eq!(engine.compute("", Op::Add, "000").unwrap(), "0");
    assert_eq!(engine.compute("007", Op::Add, "0005").unwrap(), "12");
}

#[test]
fn capacity_boundary_is_exact() {
    // 12 digits need exactly 3 words.
    let three_words = Engine::with_config(SoftwareKernel, EngineConfig { arena_words: 3 });
    assert_eq!(
        three_words
            .compute("999999999999", Op::Add, "")
            .unwrap(),
        "999999999999"
    );

    let two_words = Engine::with_config(SoftwareKernel, EngineConfig { arena_words: 2 });
    assert_eq!(
        two_words.compute("999999999999", Op::Add, "").unwrap_err(),
        ComputeError::Capacity(CapacityError {
            requested: 3,
            available: 2,
        })
    );
}

#[test]
fn result_allocation_respects_capacity() {
    // Operands fit (1 word each) but the 2-word product does not.
    let engine = Engine::with_config(SoftwareKernel, EngineConfig { arena_words: 3 });
    assert_eq!(
        engine.compute("9999", Op::Mul, "9999").unwrap_err(),
        ComputeError::Capacity(CapacityError {
            requested: 2,
            available: 1,
        })
    );
}

#[test]
fn unknown_operation_tags_are_rejected() {
    let engine = Engine::new(PanickingKernel);
    let err = engine.compute_tag("1", "pow", "2").unwrap_err();
    assert_eq!(
        err,
        ComputeError::UnknownOperation {
            tag: "pow".to_string(),
        }
    );
}

#[test]
fn tagged_requests_match_typed_requests() {
    let engine = engine();
    assert_eq!(engine.compute_tag("100", "div", "7").unwrap(), "14");
    assert_eq!(engine.compute_tag("5", "sub", "9").unwrap(), "-4");
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn add_and_mul_are_commutative(x: u128, y in 0u128..1u128 << 64) {
            let engine = engine();
            let (xs, ys) = (x.to_string(), y.to_string());
            prop_assert_eq!(
                engine.compute(&xs, Op::Add, &ys).unwrap(),
                engine.compute(&ys, Op::Add, &xs).unwrap()
            );
            prop_assert_eq!(
                engine.compute(&xs, Op::Mul, &ys).unwrap(),
                engine.compute(&ys, Op::Mul, &xs).unwrap()
            );
        }

        #[test]
        fn sub_matches_sign_law(x: u128, y: u128) {
            let engine = engine();
            let got = engine.compute(&x.to_string(), Op::Sub, &y.to_string()).unwrap();
            let expected = if x >= y {
                (x - y).to_string()
            } else {
                format!("-{}", y - x)
            };
            prop_assert_eq!(got, expected);
        }

        #[test]
        fn sub_of_self_is_unsigned_zero(x: u128) {
            let engine = engine();
            let xs = x.to_string();
            prop_assert_eq!(engine.compute(&xs, Op::Sub, &xs).unwrap(), "0");
        }

        #[test]
        fn div_mod_reconstruct_the_dividend(x: u128, y in 1u128..u128::MAX) {
            let engine = engine();
            let (xs, ys) = (x.to_string(), y.to_string());
            let quotient: u128 = engine.compute(&xs, Op::Div, &ys).unwrap().parse().unwrap();
            let remainder: u128 = engine.compute(&xs, Op::Mod, &ys).unwrap().parse().unwrap();
            prop_assert_eq!(quotient, x / y);
            prop_assert_eq!(remainder, x % y);
            prop_assert!(remainder < y);
            prop_assert_eq!(quotient * y + remainder, x);
        }

        #[test]
        fn arithmetic_matches_u128(x in 0u128..1u128 << 64, y in 0u128..1u128 << 64) {
            let engine = engine();
            let (xs, ys) = (x.to_string(), y.to_string());
            prop_assert_eq!(engine.compute(&xs, Op::Add, &ys).unwrap(), (x + y).to_string());
            prop_assert_eq!(engine.compute(&xs, Op::Mul, &ys).unwrap(), (x * y).to_string());
        }
    }
}
