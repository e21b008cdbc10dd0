//! Strict-safe fixed-point combinator and recursive definitions built on it.
//!
//! The textbook `Y = λf. (λx. f(x(x)))(λx. f(x(x)))` diverges under eager
//! evaluation: `x(x)` is evaluated before `f` ever runs. The variant used here wraps
//! the self-application in one more abstraction, `λy. x(x)(y)`, so it only happens
//! once the recursive call is actually applied to an argument.
//!
//! Generators receive "the recursive call" as their first argument and must only
//! apply it inside a deferred branch.
use crate::boolean::cond_deferred;
use crate::numeral::{is_zero, mult, pred, strictly_less_than, sub, succ, zero};
use crate::value::{Value, curry2};

/// `Y(f) = (λx. f(λy. x(x)(y)))(λx. f(λy. x(x)(y)))`.
pub fn y() -> Value {
    Value::new(|f| {
        let half = Value::new(move |x| {
            f.apply(Value::new(move |arg| x.apply(x.clone()).apply(arg)))
        });
        half.apply(half.clone())
    })
}

/// `fix(f) = Y(f)`, which behaves as `f(fix(f))`.
pub fn fix(generator: &Value) -> Value {
    y().apply(generator.clone())
}

/// `Y(λself. λn. if(isZero(n), 1, deferred: mult(n, self(pred(n)))))`.
pub fn factorial() -> Value {
    fix(&Value::new(|this| {
        Value::new(move |n| {
            let (this, m) = (this.clone(), n.clone());
            cond_deferred(
                &is_zero(&n),
                || succ(&zero()),
                move || mult(&m, &this.apply(pred(&m))),
            )
        })
    }))
}

/// Curried `λm. λn. m / n` by repeated subtraction. Division by zero yields zero.
pub fn divide() -> Value {
    fix(&Value::new(|this| {
        curry2(move |m, n| {
            let this = this.clone();
            cond_deferred(&is_zero(&n), zero, move || {
                let (this, m, n) = (this.clone(), m.clone(), n.clone());
                cond_deferred(&strictly_less_than(&m, &n), zero, move || {
                    succ(&this.apply2(sub(&m, &n), n.clone()))
                })
            })
        })
    }))
}

/// Curried `λm. λn. m mod n` by repeated subtraction. Modulo zero yields zero.
pub fn remainder() -> Value {
    fix(&Value::new(|this| {
        curry2(move |m, n| {
            let this = this.clone();
            cond_deferred(&is_zero(&n), zero, move || {
                let (this, m, n) = (this.clone(), m.clone(), n.clone());
                let small = m.clone();
                cond_deferred(
                    &strictly_less_than(&m, &n),
                    move || small.clone(),
                    move || this.apply2(sub(&m, &n), n.clone()),
                )
            })
        })
    }))
}

/// `m / n` for numerals; see [`divide`].
pub fn div(m: &Value, n: &Value) -> Value {
    divide().apply2(m.clone(), n.clone())
}

/// `m mod n` for numerals; see [`remainder`].
pub fn rem(m: &Value, n: &Value) -> Value {
    remainder().apply2(m.clone(), n.clone())
}
