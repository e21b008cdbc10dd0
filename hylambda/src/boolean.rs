//! Church booleans and conditionals.
//!
//! A boolean is a two-argument curried selector: `tt` keeps the first argument and
//! `ff` the second. Conditionals are plain application of the boolean.
//!
//! Deferred branches
//! - [`cond`] receives both branches already built. That is fine for plain values,
//!   but a branch that recurses would be constructed before the selection happens.
//! - [`cond_deferred`] takes host thunks instead. Each is wrapped with
//!   [`Value::deferred`], the boolean selects one wrapper and only that wrapper is
//!   forced.
use log::trace;

use crate::combinators::{k, ki};
use crate::utils::error::{LambdaError, LambdaResult};
use crate::value::{Value, curry2, terminal};

/// `true(x)(y) = x`.
pub fn tt() -> Value {
    k()
}

/// `false(x)(y) = y`.
pub fn ff() -> Value {
    ki()
}

/// Eager conditional: `cond(c, t, e) = c(t)(e)`.
pub fn cond(c: &Value, then: &Value, otherwise: &Value) -> Value {
    c.apply2(then.clone(), otherwise.clone())
}

/// Conditional with deferred branches; only the selected thunk runs.
pub fn cond_deferred<T, E>(c: &Value, then: T, otherwise: E) -> Value
where
    T: Fn() -> Value + 'static,
    E: Fn() -> Value + 'static,
{
    c.apply2(Value::deferred(then), Value::deferred(otherwise)).force()
}

/// `and(a, b)(x)(y) = a(b(x)(y))(y)`.
pub fn and(a: &Value, b: &Value) -> Value {
    let (a, b) = (a.clone(), b.clone());
    curry2(move |x, y| a.apply2(b.apply2(x, y.clone()), y))
}

/// `or(a, b)(x)(y) = a(x)(b(x)(y))`.
pub fn or(a: &Value, b: &Value) -> Value {
    let (a, b) = (a.clone(), b.clone());
    curry2(move |x, y| a.apply2(x.clone(), b.apply2(x, y)))
}

/// `not(a)(x)(y) = a(y)(x)`.
pub fn not(a: &Value) -> Value {
    let a = a.clone();
    curry2(move |x, y| a.apply2(y, x))
}

/// `xor(a, b)(x)(y) = a(b(y)(x))(b(x)(y))`.
pub fn xor(a: &Value, b: &Value) -> Value {
    let (a, b) = (a.clone(), b.clone());
    curry2(move |x, y| a.apply2(b.apply2(y.clone(), x.clone()), b.apply2(x, y)))
}

/// Observe a Church boolean as a host `bool`.
///
/// The boolean is applied to two distinct terminal markers; whichever comes back
/// identifies it. Anything else is reported as [`LambdaError::NotABoolean`].
pub fn decode_bool(b: &Value) -> LambdaResult<bool> {
    let on_true = terminal();
    let on_false = terminal();
    let selected = b.apply2(on_true.clone(), on_false.clone());

    if selected.ptr_eq(&on_true) {
        Ok(true)
    } else if selected.ptr_eq(&on_false) {
        Ok(false)
    } else {
        trace!("Value {:?} selected neither marker when decoded as a boolean", b);
        Err(LambdaError::NotABoolean)
    }
}
