//! Higher-order traversals over Church lists.
//!
//! `f` and `pred` are universal values applied curried: `f(x)`, `pred(x)` and, for
//! folds, `f(acc)(x)`. Predicates return Church booleans.
//!
//! Both branches of every conditional here are deferred. Building the recursive
//! branch eagerly would recurse on the tail of the empty list forever, whichever
//! branch the condition ends up selecting.
use crate::boolean::cond_deferred;
use crate::list::{cons, head, is_nil, nil, tail};
use crate::value::Value;

/// Apply `f` to every element, preserving order.
pub fn map(f: &Value, list: &Value) -> Value {
    let (f, list) = (f.clone(), list.clone());
    cond_deferred(&is_nil(&list), nil, move || {
        cons(&f.apply(head(&list)), &map(&f, &tail(&list)))
    })
}

/// Keep the elements for which `pred` selects true, preserving order.
pub fn filter(pred: &Value, list: &Value) -> Value {
    let (pred, list) = (pred.clone(), list.clone());
    cond_deferred(&is_nil(&list), nil, move || {
        let (x, rest) = (head(&list), tail(&list));
        let keep = {
            let (pred, x, rest) = (pred.clone(), x.clone(), rest.clone());
            move || cons(&x, &filter(&pred, &rest))
        };
        let skip = {
            let pred = pred.clone();
            move || filter(&pred, &rest)
        };
        cond_deferred(&pred.apply(x), keep, skip)
    })
}

/// Left fold: `acc = f(acc)(x)` for each element, left to right.
pub fn fold(f: &Value, acc: &Value, list: &Value) -> Value {
    let (f, acc, list) = (f.clone(), acc.clone(), list.clone());
    let done = acc.clone();
    cond_deferred(&is_nil(&list), move || done.clone(), move || {
        fold(&f, &f.apply2(acc.clone(), head(&list)), &tail(&list))
    })
}

/// Right fold: `f(x0)(f(x1)(... f(xn)(acc)))`.
pub fn fold_right(f: &Value, acc: &Value, list: &Value) -> Value {
    let (f, acc, list) = (f.clone(), acc.clone(), list.clone());
    let done = acc.clone();
    cond_deferred(&is_nil(&list), move || done.clone(), move || {
        f.apply2(head(&list), fold_right(&f, &acc, &tail(&list)))
    })
}
