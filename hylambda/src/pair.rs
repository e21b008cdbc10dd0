//! Immutable two-slot containers selected with boolean-shaped projections.
use crate::combinators::{k, ki};
use crate::value::Value;

/// `pair(x, y)(f) = f(x)(y)`.
pub fn pair(x: &Value, y: &Value) -> Value {
    let (x, y) = (x.clone(), y.clone());
    Value::new(move |f| f.apply2(x.clone(), y.clone()))
}

/// `first(p) = p(K)`.
pub fn first(p: &Value) -> Value {
    p.apply(k())
}

/// `second(p) = p(KI)`.
pub fn second(p: &Value) -> Value {
    p.apply(ki())
}
