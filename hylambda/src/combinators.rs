//! Closed combinators built directly on [`Value`].
//!
//! `K` and `KI` double as the Church booleans and as the pair projections.
use crate::value::{Value, curry2, curry3};

/// Identity: `I(x) = x`.
pub fn i() -> Value {
    Value::new(|x| x)
}

/// Constant: `K(x)(y) = x`.
pub fn k() -> Value {
    curry2(|x, _| x)
}

/// Kite: `KI(x)(y) = y`.
pub fn ki() -> Value {
    curry2(|_, y| y)
}

/// Composition: `B(f)(g)(x) = f(g(x))`.
pub fn b() -> Value {
    curry3(|f, g, x| f.apply(g.apply(x)))
}

/// Substitution: `S(x)(y)(z) = x(z)(y(z))`.
pub fn s() -> Value {
    curry3(|x, y, z| x.apply(z.clone()).apply(y.apply(z)))
}
