use hylambda::boolean::decode_bool;
use hylambda::numeral::*;
use hylambda::value::{Value, curry2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

fn rng() -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(0x42)
}

fn truth(b: &Value) -> bool {
    decode_bool(b).expect("comparison should produce a boolean")
}

#[test]
fn zero_and_successors() {
    assert_eq!(decode(&zero()), 0);
    let mut n = zero();
    for expected in 1..=16 {
        n = succ(&n);
        assert_eq!(decode(&n), expected);
    }
    assert_eq!(decode(&from_usize(9)), 9);
}

#[test]
fn concrete_arithmetic() {
    let one = succ(&zero());
    let two = succ(&one);
    let three = succ(&two);

    assert_eq!(decode(&add(&one, &two)), 3);
    assert_eq!(decode(&mult(&two, &three)), 6);
    assert_eq!(decode(&pow(&two, &three)), 8);
    assert_eq!(decode(&pow(&three, &zero())), 1);
}

#[test]
fn predecessor_saturates_at_zero() {
    assert_eq!(decode(&pred(&zero())), 0);
    assert_eq!(decode(&pred(&pred(&zero()))), 0);
    assert_eq!(decode(&sub(&from_usize(2), &from_usize(5))), 0);
}

#[test]
fn arithmetic_matches_host_integers() {
    let mut rng = rng();
    for _ in 0..48 {
        let (a, b) = (rng.random_range(0..12usize), rng.random_range(0..12usize));
        let (m, n) = (from_usize(a), from_usize(b));

        assert_eq!(decode(&add(&m, &n)), a + b, "{a} + {b}");
        assert_eq!(decode(&mult(&m, &n)), a * b, "{a} * {b}");
        assert_eq!(decode(&sub(&m, &n)), a.saturating_sub(b), "{a} - {b}");
        assert_eq!(decode(&pred(&succ(&m))), a);
        assert_eq!(decode(&max(&m, &n)), a.max(b));
        assert_eq!(decode(&min(&m, &n)), a.min(b));
    }
}

#[test]
fn powers_match_host_integers() {
    for a in 0..4usize {
        for b in 0..4u32 {
            let expected = a.pow(b);
            assert_eq!(
                decode(&pow(&from_usize(a), &from_usize(b as usize))),
                expected,
                "{a}^{b}"
            );
        }
    }
}

#[test]
fn comparisons_match_host_integers() {
    let mut rng = rng();
    for _ in 0..48 {
        let (a, b) = (rng.random_range(0..10usize), rng.random_range(0..10usize));
        let (m, n) = (from_usize(a), from_usize(b));

        assert_eq!(truth(&is_zero(&m)), a == 0);
        assert_eq!(truth(&less_than(&m, &n)), a <= b, "{a} <= {b}");
        assert_eq!(truth(&strictly_less_than(&m, &n)), a < b, "{a} < {b}");
        assert_eq!(truth(&greater_than(&m, &n)), a > b, "{a} > {b}");
        assert_eq!(truth(&equal(&m, &n)), a == b, "{a} == {b}");
    }
}

#[test]
fn is_zero_selects_branches() {
    let yes = hylambda::value::terminal();
    let no = hylambda::value::terminal();

    let picked = is_zero(&zero()).apply2(yes.clone(), no.clone());
    assert!(picked.ptr_eq(&yes));

    let picked = is_zero(&from_usize(4)).apply2(yes.clone(), no.clone());
    assert!(picked.ptr_eq(&no));
}

#[test]
fn first_class_successor_and_predecessor() {
    let three = from_usize(3);
    assert_eq!(decode(&succ_fn().apply(three.clone())), 4);
    assert_eq!(decode(&pred_fn().apply(three)), 2);
}

#[test]
fn try_decode_accepts_numerals() {
    let n = mult(&from_usize(3), &sub(&from_usize(5), &from_usize(1)));
    assert_eq!(try_decode(&n).unwrap(), 12);
    assert_eq!(try_decode(&zero()).unwrap(), 0);
}

#[test]
fn try_decode_rejects_values_that_drop_the_terminal() {
    // Ignores both arguments and returns something unrelated.
    let constant = curry2(|_, _| Value::new(|x| x));
    let err = try_decode(&constant).unwrap_err();
    assert!(err.is_not_a_numeral());

    // Applies the terminal itself, which must not fault.
    let misuse = curry2(|_, x| x.apply(Value::new(|y| y)));
    assert!(try_decode(&misuse).is_err());
    assert_eq!(decode(&misuse), 0);
}
