//! Church numerals: `n` is "apply `f` n times to `x`".
//!
//! Role
//! - Construction via [`zero`] and [`succ`], arithmetic and comparisons built purely
//!   from application. Results of comparisons are Church booleans.
//! - [`decode`] and [`try_decode`] are the boundary back to host integers.
//!
//! Predecessor
//! - [`pred`] threads a wrapper through `n` shifting steps
//!   `g ↦ λh. h(g(f))`, starting from the constant `λu. x` and finally handing the
//!   identity to the last wrapper. The first step discards one application of `f`,
//!   so the result applies `f` exactly `n - 1` times, and `pred(zero) = zero`.
//!
//! Complexity
//! - Everything is unary. `decode(n)` nests `n` calls; `sub(m, n)` applies `pred`
//!   `n` times, each pass walking `m`.
use std::cell::Cell;
use std::rc::Rc;

use log::trace;

use crate::boolean::{and, cond, ff, not, tt};
use crate::combinators::{i, k, ki};
use crate::utils::error::{LambdaError, LambdaResult};
use crate::value::{Value, curry2, terminal};

/// `zero(f)(x) = x`.
pub fn zero() -> Value {
    ki()
}

/// `succ(n)(f)(x) = f(n(f)(x))`.
pub fn succ(n: &Value) -> Value {
    let n = n.clone();
    curry2(move |f, x| f.apply(n.apply2(f.clone(), x)))
}

/// First-class [`succ`].
pub fn succ_fn() -> Value {
    Value::new(|n| succ(&n))
}

/// Encode a host integer as `n` successors of [`zero`].
pub fn from_usize(n: usize) -> Value {
    (0..n).fold(zero(), |acc, _| succ(&acc))
}

/// Run `n` against a counting function and a fresh terminal marker. Returns the
/// count together with whatever `n` produced in place of the marker.
fn count_applications(n: &Value) -> (usize, Value, Value) {
    let count = Rc::new(Cell::new(0usize));
    let counter = {
        let count = Rc::clone(&count);
        Value::new(move |x| {
            count.set(count.get() + 1);
            x
        })
    };
    let start = terminal();
    let out = n.apply2(counter, start.clone());
    (count.get(), start, out)
}

/// Observe a numeral as a host integer by counting applications.
///
/// Only meaningful for numerals built from [`zero`] and [`succ`] (or operations on
/// them). A value that ignores its first argument decodes to `0` whatever it
/// represents; use [`try_decode`] to detect such misuse.
pub fn decode(n: &Value) -> usize {
    let (count, _, _) = count_applications(n);
    trace!("Decoded numeral {:?} to {}", n, count);
    count
}

/// Like [`decode`], but fails with [`LambdaError::NotANumeral`] when the terminal
/// marker did not come back untouched.
pub fn try_decode(n: &Value) -> LambdaResult<usize> {
    let (count, start, out) = count_applications(n);
    if out.ptr_eq(&start) {
        Ok(count)
    } else {
        trace!(
            "Value {:?} did not thread the terminal through ({} applications counted)",
            n, count
        );
        Err(LambdaError::NotANumeral { count })
    }
}

/// `add(m, n)(f)(x) = m(f)(n(f)(x))`.
pub fn add(m: &Value, n: &Value) -> Value {
    let (m, n) = (m.clone(), n.clone());
    curry2(move |f, x| m.apply2(f.clone(), n.apply2(f, x)))
}

/// `mult(m, n)(f) = m(n(f))`.
pub fn mult(m: &Value, n: &Value) -> Value {
    let (m, n) = (m.clone(), n.clone());
    Value::new(move |f| m.apply(n.apply(f)))
}

/// `pow(m, n) = n(m)`, i.e. `m` raised to the power `n`.
pub fn pow(m: &Value, n: &Value) -> Value {
    n.apply(m.clone())
}

/// Predecessor, saturating at zero.
pub fn pred(n: &Value) -> Value {
    let n = n.clone();
    curry2(move |f, x| {
        let shift = curry2(move |g, h| h.apply(g.apply(f.clone())));
        n.apply2(shift, k().apply(x)).apply(i())
    })
}

/// First-class [`pred`].
pub fn pred_fn() -> Value {
    Value::new(|n| pred(&n))
}

/// `sub(m, n) = n(pred)(m)`, saturating at zero.
pub fn sub(m: &Value, n: &Value) -> Value {
    n.apply2(pred_fn(), m.clone())
}

/// `isZero(n) = n(λx. false)(true)`.
pub fn is_zero(n: &Value) -> Value {
    n.apply2(k().apply(ff()), tt())
}

/// `isZero(sub(m, n))`: true when `m <= n`.
pub fn less_than(m: &Value, n: &Value) -> Value {
    is_zero(&sub(m, n))
}

/// True when `m < n`.
pub fn strictly_less_than(m: &Value, n: &Value) -> Value {
    not(&is_zero(&sub(n, m)))
}

/// True when `m > n`.
pub fn greater_than(m: &Value, n: &Value) -> Value {
    strictly_less_than(n, m)
}

/// `and(isZero(sub(m, n)), isZero(sub(n, m)))`.
pub fn equal(m: &Value, n: &Value) -> Value {
    and(&is_zero(&sub(m, n)), &is_zero(&sub(n, m)))
}

/// Larger of the two numerals.
pub fn max(m: &Value, n: &Value) -> Value {
    cond(&less_than(m, n), n, m)
}

/// Smaller of the two numerals.
pub fn min(m: &Value, n: &Value) -> Value {
    cond(&less_than(m, n), m, n)
}
