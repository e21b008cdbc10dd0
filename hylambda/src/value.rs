//! The universal value: a function from one value to another.
//!
//! Role
//! - [`Value`] is the only representational type of the crate. There are no type tags;
//!   whether a value "is" a boolean, a numeral or a list is a convention of how it is
//!   later applied.
//! - The self-referential signature `Value = Fn(Value) -> Value` is broken with one
//!   level of indirection: a reference-counted trait object.
//!
//! Ownership
//! - Values are immutable and cheap to clone (one reference count bump). Host-level
//!   operations borrow their inputs and return owned values.
use std::fmt;
use std::rc::Rc;

use crate::combinators::i;

/// A function from one universal value to another.
#[derive(Clone)]
pub struct Value(Rc<dyn Fn(Value) -> Value>);

impl Value {
    /// Wrap a host closure as a universal value.
    #[inline]
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + 'static,
    {
        Value(Rc::new(f))
    }

    /// Apply this value to `arg`.
    #[inline]
    pub fn apply(&self, arg: Value) -> Value {
        (self.0)(arg)
    }

    /// Curried application `self(a)(b)`.
    #[inline]
    pub fn apply2(&self, a: Value, b: Value) -> Value {
        self.apply(a).apply(b)
    }

    /// Eta-expand a host thunk: the result ignores its argument and only then runs
    /// `thunk`. Constructing the wrapper never evaluates the body.
    #[inline]
    pub fn deferred<F>(thunk: F) -> Self
    where
        F: Fn() -> Value + 'static,
    {
        Value::new(move |_| thunk())
    }

    /// Invoke a wrapper produced by [`Value::deferred`] with the placeholder `I`.
    #[inline]
    pub fn force(&self) -> Value {
        self.apply(i())
    }

    /// Identity comparison. Only meaningful at decode boundaries, where a known
    /// marker is threaded through a value and compared on the way out.
    #[inline]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<λ@{:p}>", Rc::as_ptr(&self.0) as *const ())
    }
}

/// Build the two-argument curried value `λx. λy. f(x, y)`.
pub fn curry2<F>(f: F) -> Value
where
    F: Fn(Value, Value) -> Value + 'static,
{
    let f = Rc::new(f);
    Value::new(move |x| {
        let f = Rc::clone(&f);
        Value::new(move |y| f(x.clone(), y))
    })
}

/// Build the three-argument curried value `λx. λy. λz. f(x, y, z)`.
pub fn curry3<F>(f: F) -> Value
where
    F: Fn(Value, Value, Value) -> Value + 'static,
{
    let f = Rc::new(f);
    Value::new(move |x| {
        let f = Rc::clone(&f);
        curry2(move |y, z| f(x.clone(), y, z))
    })
}

/// Fresh terminal marker for decode boundaries.
///
/// The marker is passed through values but never expected to be applied. If a
/// malformed value does apply it, the result is yet another fresh terminal rather
/// than a fault, so identity checks against the original marker detect the misuse.
pub fn terminal() -> Value {
    Value::new(|_| terminal())
}
