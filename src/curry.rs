//! The arity-sensing curry engine.
//!
//! [`curry`] wraps a [`Function`] so that every call compares the number of
//! arguments gathered so far, *k*, against the declared arity, *n*:
//!
//! | case | behaviour |
//! |---|---|
//! | *k* == *n* | call the function with exactly those arguments |
//! | *k* > *n* | call it with the first *n*, then left-fold the surplus using the same function as the reducer |
//! | *k* < *n* | return a new partial application waiting for the rest |
//!
//! Partial applications never mutate: each call copies the bound arguments,
//! so a partial application can be reused any number of times.
//!
//! # Laws
//!
//! - **Split invariance**: `curry(f)(a)(b)(c) == curry(f)(a, b)(c) == curry(f)(a, b, c)`
//! - **Over-application**: for binary `f`, `curry(f)(a, b, c, d) == reduce(f, f(a, b), [c, d])`
//!
//! # Examples
//!
//! ```rust
//! use lambda_kit::curry::curry;
//! use lambda_kit::{Function, Value};
//!
//! let volume = Value::from(Function::new("volume", 3, |arguments| {
//!     let mut product = 1;
//!     for argument in arguments.iter().take(3) {
//!         if let Value::Int(number) = argument {
//!             product *= number;
//!         }
//!     }
//!     Ok(Value::Int(product))
//! }));
//!
//! let curried = curry(&volume).unwrap();
//! let with_width = curried.call(&[Value::Int(2)]).unwrap();
//! let with_height = with_width.call(&[Value::Int(3)]).unwrap();
//!
//! assert_eq!(with_height.call(&[Value::Int(4)]).unwrap(), Value::Int(24));
//! assert_eq!(with_width.call(&[Value::Int(5), Value::Int(1)]).unwrap(), Value::Int(10));
//! ```

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::combinators::reduce;
use crate::error::Result;
use crate::function::{Function, expect_callable};
use crate::value::Value;

/// Arguments bound by a partial application.
///
/// Most toolkit functions take two or three parameters, so the common case
/// never touches the heap.
type Bound = SmallVec<[Value; 4]>;

/// A partial application: a function plus the arguments bound so far.
#[derive(Clone, Debug)]
pub struct Curried {
    function: Function,
    bound: Bound,
}

impl Curried {
    /// Starts a partial application with no bound arguments.
    pub fn new(function: Function) -> Self {
        tracing::trace!(
            function = function.name(),
            arity = function.arity(),
            "curried function"
        );
        Self {
            function,
            bound: Bound::new(),
        }
    }

    /// The wrapped function.
    pub const fn function(&self) -> &Function {
        &self.function
    }

    /// The arguments bound so far, in order.
    pub fn bound(&self) -> &[Value] {
        &self.bound
    }

    /// How many more arguments are needed before the function is invoked.
    pub fn remaining(&self) -> usize {
        self.function.arity().saturating_sub(self.bound.len())
    }

    /// Supplies `arguments` and either invokes the function or returns a
    /// further partial application.
    ///
    /// # Errors
    ///
    /// Returns whatever the wrapped function fails with, unmodified.
    pub fn apply(&self, arguments: &[Value]) -> Result<Value> {
        let mut accumulated = self.bound.clone();
        accumulated.extend(arguments.iter().cloned());
        let arity = self.function.arity();

        match accumulated.len().cmp(&arity) {
            Ordering::Equal => self.function.call(&accumulated),
            Ordering::Greater => {
                let (head, surplus) = accumulated.split_at(arity);
                tracing::trace!(
                    function = self.function.name(),
                    surplus = surplus.len(),
                    "over-applied, folding surplus arguments"
                );
                let initial = self.function.call(head)?;
                reduce(
                    &Value::Function(self.function.clone()),
                    initial,
                    &Value::from(surplus.to_vec()),
                )
            }
            Ordering::Less => {
                let partial = Self {
                    function: self.function.clone(),
                    bound: accumulated,
                };
                tracing::trace!(
                    function = self.function.name(),
                    bound = partial.bound.len(),
                    remaining = partial.remaining(),
                    "partially applied"
                );
                Ok(Value::Function(partial.into_function()))
            }
        }
    }

    /// Exposes the partial application as a [`Function`] whose declared arity
    /// is the number of arguments still missing.
    pub fn into_function(self) -> Function {
        let name = self.function.name().to_owned();
        let remaining = self.remaining();
        Function::new(name, remaining, move |arguments| self.apply(arguments))
    }
}

/// Wraps `callable` in the curry engine.
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `callable` is not a
/// function. This is the only check; arguments are never inspected.
pub fn curry(callable: &Value) -> Result<Value> {
    let function = expect_callable(callable)?;
    Ok(Value::Function(curry_function(function.clone())))
}

/// Infallible form of [`curry`] for callers that already hold a [`Function`].
pub fn curry_function(function: Function) -> Function {
    Curried::new(function).into_function()
}
