//! # lambda-kit
//!
//! A small functional-programming toolkit: automatic currying and a family
//! of list combinators, all built on one early-exit iteration primitive.
//!
//! ## Overview
//!
//! - **Values**: a dynamic [`Value`] model where functions are first-class
//! - **Curry engine**: arity-sensing partial application and over-application
//! - **Iteration**: [`iterate::each`] with the [`iterate::HALT`] early-exit sentinel
//! - **Combinators**: map, reduce, clone, first, last, every, any, select, partition
//! - **Composition**: right-to-left [`compose::compose`]
//! - **Namespace**: [`Lambda`], every operation as a callable value
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Value`]
//!
//! ## Example
//!
//! ```rust
//! use lambda_kit::prelude::*;
//!
//! let lambda = Lambda::new();
//! let add = Value::from(Function::binary("add", |left, right| match (left, right) {
//!     (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left + right)),
//!     _ => Err(LambdaError::raise("add expects integers")),
//! }));
//!
//! // Partially apply reduce to get a reusable summing function.
//! let sum = lambda.reduce.call(&[add.clone(), Value::Int(0)]).unwrap();
//! assert_eq!(sum.call(&[list![1, 2, 3]]).unwrap(), Value::Int(6));
//!
//! // Over-applying a curried binary function folds the surplus.
//! let curried_add = lambda.curry.call(&[add]).unwrap();
//! let total = curried_add
//!     .call(&[Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)])
//!     .unwrap();
//! assert_eq!(total, Value::Int(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use lambda_kit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::combinators::*;
    pub use crate::compose::*;
    pub use crate::curry::{Curried, curry, curry_function};
    pub use crate::error::{LambdaError, Result};
    pub use crate::function::{Function, argument, expect_callable};
    pub use crate::iterate::{HALT, each};
    pub use crate::list;
    pub use crate::namespace::Lambda;
    pub use crate::value::Value;
}

pub mod combinators;
pub mod compose;
pub mod curry;
pub mod error;
pub mod function;
pub mod iterate;
pub mod namespace;
pub mod value;

pub use error::{LambdaError, Result};
pub use function::Function;
pub use namespace::Lambda;
pub use value::Value;

// Values share state through `Rc` and are confined to one thread.
static_assertions::assert_not_impl_any!(Value: Send, Sync);
static_assertions::assert_not_impl_any!(Function: Send, Sync);
static_assertions::assert_impl_all!(LambdaError: std::error::Error, Clone);
