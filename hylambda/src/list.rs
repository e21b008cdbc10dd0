//! Lists as nested pairs.
//!
//! Shape
//! - `nil = pair(true, true)`, `cons(h, t) = pair(false, pair(h, t))`.
//! - The first slot is always a boolean tag: `true` marks the empty list.
//! - [`head`] and [`tail`] of [`nil`] yield unspecified values; check [`is_nil`]
//!   first.
//!
//! Every recursive operation here goes through [`cond_deferred`] so that the
//! recursive branch is only built once the list is known to be non-empty.
use log::trace;

use crate::boolean::{cond_deferred, decode_bool, ff, or, tt};
use crate::higher::fold;
use crate::numeral::{is_zero, pred, succ, zero};
use crate::pair::{first, pair, second};
use crate::utils::conf::EvalConfig;
use crate::utils::error::{LambdaError, LambdaResult};
use crate::value::{Value, curry2};

thread_local! {
    static NIL: Value = pair(&tt(), &tt());
}

/// The empty list. Built once per thread on first use and shared afterwards.
pub fn nil() -> Value {
    NIL.with(Value::clone)
}

/// `cons(h, t) = pair(false, pair(h, t))`.
pub fn cons(h: &Value, t: &Value) -> Value {
    pair(&ff(), &pair(h, t))
}

/// `isNil(l) = first(l)`.
pub fn is_nil(l: &Value) -> Value {
    first(l)
}

/// `head(l) = first(second(l))`.
pub fn head(l: &Value) -> Value {
    first(&second(l))
}

/// `tail(l) = second(second(l))`.
pub fn tail(l: &Value) -> Value {
    second(&second(l))
}

/// Tail that stays on [`nil`] instead of producing an unspecified value.
fn tail_or_nil(l: &Value) -> Value {
    let l = l.clone();
    let rest = l.clone();
    cond_deferred(&is_nil(&l), move || l.clone(), move || tail(&rest))
}

/// First-class tail, saturating on [`nil`].
pub fn tail_fn() -> Value {
    Value::new(|l| tail_or_nil(&l))
}

/// Build a list from host-side values, preserving order.
pub fn from_values<I>(values: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    let values: Vec<Value> = values.into_iter().collect();
    values
        .iter()
        .rev()
        .fold(nil(), |acc, value| cons(value, &acc))
}

/// Walk a list into a host vector.
///
/// Fails with [`LambdaError::ListTooLong`] once more than `config.max_list_len`
/// nodes have been visited, and with [`LambdaError::NotABoolean`] if a node tag is
/// not a boolean.
pub fn to_vec(list: &Value, config: &EvalConfig) -> LambdaResult<Vec<Value>> {
    let mut out = Vec::new();
    let mut cursor = list.clone();

    while !decode_bool(&is_nil(&cursor))? {
        if out.len() >= config.max_list_len {
            trace!(
                "List walk stopped after {} nodes (limit {})",
                out.len(),
                config.max_list_len
            );
            return Err(LambdaError::ListTooLong {
                limit: config.max_list_len,
            });
        }
        out.push(head(&cursor));
        cursor = tail(&cursor);
    }

    Ok(out)
}

/// Number of elements, as a numeral.
pub fn length(list: &Value) -> Value {
    fold(&curry2(|acc, _| succ(&acc)), &zero(), list)
}

/// Concatenate `l1` and `l2`.
pub fn append(l1: &Value, l2: &Value) -> Value {
    let (l1, l2) = (l1.clone(), l2.clone());
    let rest = l2.clone();
    cond_deferred(&is_nil(&l1), move || rest.clone(), move || {
        cons(&head(&l1), &append(&tail(&l1), &l2))
    })
}

/// Reverse the list with a left fold.
pub fn reverse(list: &Value) -> Value {
    fold(&curry2(|acc, x| cons(&x, &acc)), &nil(), list)
}

/// Drop the first `n` elements (a numeral); stops early on [`nil`].
pub fn drop(list: &Value, n: &Value) -> Value {
    n.apply2(tail_fn(), list.clone())
}

/// Element at index `n` (a numeral). Unspecified when `n` is out of range.
pub fn nth(list: &Value, n: &Value) -> Value {
    head(&drop(list, n))
}

/// Keep at most the first `n` elements (a numeral).
pub fn take(list: &Value, n: &Value) -> Value {
    let (list, n) = (list.clone(), n.clone());
    let stop = or(&is_nil(&list), &is_zero(&n));
    cond_deferred(&stop, nil, move || {
        cons(&head(&list), &take(&tail(&list), &pred(&n)))
    })
}
