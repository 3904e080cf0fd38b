//! Function composition.
//!
//! [`compose`] chains callables right to left, following the mathematical
//! notation:
//!
//! ```text
//! compose(f, g, h)(x) = f(g(h(x)))
//! ```
//!
//! The innermost callable (the last one supplied) receives the composed
//! function's arguments unchanged. Every other callable receives a single
//! argument, the previous result.
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument unchanged, the unit of composition
//! - [`constant`]: ignores its argument and returns a fixed value
//! - [`flip`]: swaps the first two arguments of a function
//!
//! # Laws
//!
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Left Identity**: `compose(identity, f) == f`
//! - **Right Identity**: `compose(f, identity) == f`
//! - **Stability**: calling a composed function repeatedly always runs the
//!   callables in the same order
//!
//! # Examples
//!
//! ```rust
//! use lambda_kit::compose::compose;
//! use lambda_kit::{Function, Value};
//!
//! let increment = Function::unary("increment", |value| match value {
//!     Value::Int(number) => Ok(Value::Int(number + 1)),
//!     _ => Ok(Value::Undefined),
//! });
//! let double = Function::unary("double", |value| match value {
//!     Value::Int(number) => Ok(Value::Int(number * 2)),
//!     _ => Ok(Value::Undefined),
//! });
//!
//! // double(increment(3)) = double(4) = 8
//! let composed = compose(&[Value::from(double), Value::from(increment)]).unwrap();
//! assert_eq!(composed.call(&[Value::Int(3)]).unwrap(), Value::Int(8));
//! assert_eq!(composed.call(&[Value::Int(3)]).unwrap(), Value::Int(8));
//! ```

mod utils;

pub use utils::{constant, flip, identity};

use std::ops::ControlFlow;

use crate::error::{LambdaError, Result};
use crate::function::{Function, argument};
use crate::iterate::visit;
use crate::value::Value;

/// Composes `callables` right to left.
///
/// Every element is checked up front, so a caller never receives a
/// partially valid composition. The callable list is reversed once, here,
/// and never touched again.
///
/// The composed function declares the arity of its innermost callable, so it
/// can itself be curried. Composing nothing yields a function that returns
/// its first argument.
///
/// # Errors
///
/// Returns [`LambdaError::InvalidCompose`] naming the first non-callable
/// argument.
pub fn compose(callables: &[Value]) -> Result<Function> {
    if let Some((position, invalid)) = callables
        .iter()
        .enumerate()
        .find(|(_, callable)| !callable.is_callable())
    {
        tracing::debug!(position, found = invalid.type_name(), "rejected compose argument");
        return Err(LambdaError::InvalidCompose {
            position,
            found: invalid.type_name(),
        });
    }

    let arity = callables
        .last()
        .and_then(Value::as_function)
        .map_or(1, Function::arity);
    let pipeline = Value::list(callables.iter().rev().cloned());
    tracing::debug!(count = callables.len(), arity, "composed functions");

    Ok(Function::new("composed", arity, move |arguments| {
        let mut carried: Option<Value> = None;
        visit(&pipeline, |callable, _| {
            let result = match carried.take() {
                None => callable.call(arguments)?,
                Some(previous) => callable.call(&[previous])?,
            };
            carried = Some(result);
            Ok(ControlFlow::Continue(()))
        })?;
        Ok(carried.unwrap_or_else(|| argument(arguments, 0)))
    }))
}
