//! Hylambda: data and control expressed with a single closure type.
//!
//! Every entity in this crate is a [`value::Value`], a function from one value to
//! another. Booleans, numerals, pairs and lists are Church encodings built on top of
//! it, and recursion is provided by a strict-safe fixed-point combinator.
//!
//! Evaluation model
//!  - Rust evaluates arguments before a call, so conditionals whose branches recurse
//!    take host thunks (see [`boolean::cond_deferred`]) and only the selected branch
//!    is ever constructed.
//!  - Numerals are unary and list operations are linear-recursive. Stack depth grows
//!    with the magnitude of the inputs; [`runner::run_with_stack`] runs a computation
//!    on a thread with a configurable stack.
//!
//! Boundaries
//!  - [`numeral::decode`], [`boolean::decode_bool`] and [`list::to_vec`] are the only
//!    places where host integers, booleans or vectors are observed.
//!
//! Example
//! ```
//! use hylambda::prelude::*;
//!
//! let one = succ(&zero());
//! let two = succ(&one);
//! assert_eq!(decode(&add(&one, &two)), 3);
//! assert_eq!(decode(&factorial().apply(from_usize(3))), 6);
//! ```

/// Universal value, currying helpers and the decode terminal marker.
pub mod value;
/// I, K, KI and the composition combinators.
pub mod combinators;
/// Church booleans and (deferred) conditionals.
pub mod boolean;
/// Church numerals, arithmetic and comparisons.
pub mod numeral;
/// Two-slot containers.
pub mod pair;
/// Lists as nested pairs.
pub mod list;
/// Map, filter and folds over lists.
pub mod higher;
/// Fixed-point combinator and recursive definitions built on it.
pub mod fix;
/// Runs evaluations on a thread with a configured stack size.
pub mod runner;
/// Crate-wide constants.
pub mod magic;
/// Errors and configuration.
pub mod utils;

pub mod prelude {
    //! Convenient re-exports for end users.
    pub use crate::boolean::{and, cond, cond_deferred, decode_bool, ff, not, or, tt, xor};
    pub use crate::combinators::{b, i, k, ki, s};
    pub use crate::fix::{div, factorial, fix, rem, y};
    pub use crate::higher::{filter, fold, fold_right, map};
    pub use crate::list::{cons, from_values, head, is_nil, nil, tail, to_vec};
    pub use crate::numeral::{
        add, decode, equal, from_usize, is_zero, less_than, mult, pred, sub, succ, try_decode,
        zero,
    };
    pub use crate::pair::{first, pair, second};
    pub use crate::runner::run_with_stack;
    pub use crate::utils::conf::EvalConfig;
    pub use crate::utils::error::{LambdaError, LambdaResult};
    pub use crate::value::{Value, curry2, curry3};
}
