//! Helper functions (combinators) for function composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//!
//! Each helper returns a [`Function`] so it can be handed straight to
//! `compose`, `map` or `curry`.

use crate::error::Result;
use crate::function::{Function, argument, expect_callable};
use crate::value::Value;

/// Returns a unary function that returns its argument unchanged.
///
/// The identity function is the unit element of composition:
/// `compose(identity, f)` and `compose(f, identity)` both behave like `f`.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::compose::identity;
/// use lambda_kit::{Value, list};
///
/// assert_eq!(identity().call(&[list![1, 2]]).unwrap(), list![1, 2]);
/// ```
pub fn identity() -> Function {
    Function::unary("identity", |value| Ok(value.clone()))
}

/// Returns a unary function that ignores its input and always yields `value`.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::compose::constant;
/// use lambda_kit::Value;
///
/// let always_five = constant(Value::Int(5));
/// assert_eq!(always_five.call(&[Value::from("ignored")]).unwrap(), Value::Int(5));
/// ```
pub fn constant(value: Value) -> Function {
    Function::unary("constant", move |_| Ok(value.clone()))
}

/// Swaps the first two arguments of `callable`.
///
/// `flip(f)(a, b) == f(b, a)`, and flipping twice gives back the original
/// behaviour. Arguments past the second are passed through in place.
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `callable` is not a
/// function.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::compose::flip;
/// use lambda_kit::{Function, Value};
///
/// let subtract = Value::from(Function::binary("subtract", |left, right| match (left, right) {
///     (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left - right)),
///     _ => Ok(Value::Undefined),
/// }));
///
/// let flipped = flip(&subtract).unwrap();
/// assert_eq!(flipped.call(&[Value::Int(3), Value::Int(10)]).unwrap(), Value::Int(7));
/// ```
pub fn flip(callable: &Value) -> Result<Function> {
    let function = expect_callable(callable)?.clone();
    let arity = function.arity().max(2);
    Ok(Function::new(
        format!("flipped {}", function.name()),
        arity,
        move |arguments| {
            let mut swapped = vec![argument(arguments, 1), argument(arguments, 0)];
            swapped.extend(arguments.iter().skip(2).cloned());
            function.call(&swapped)
        },
    ))
}
