//! Combinators derived from the iteration primitive.
//!
//! Each combinator here is a small accumulator threaded through
//! [`crate::iterate::visit`]. The functions in this module take the callable
//! as a [`Value`](crate::Value) and validate it; the curried forms live on
//! [`Lambda`](crate::Lambda).
//!
//! | combinator | result |
//! |---|---|
//! | [`map`] | one output per input, in order |
//! | [`reduce`] | left fold seeded with an initial value |
//! | [`clone`] | shallow copy of the sequence |
//! | [`first`] / [`last`] | first or last match, or `Undefined` |
//! | [`every`] / [`any`] | all / at least one element match |
//! | [`select`] | matching elements, in order |
//! | [`partition`] | `[matching, non-matching]` |
//!
//! # Calling conventions
//!
//! - `map` calls its mapper with `(element, index)`.
//! - `reduce` calls its reducer with `(accumulator, element)`.
//! - Predicates are called with `(element)` and judged by truthiness.

mod fold;
mod search;
mod transform;

pub use fold::reduce;
pub use search::{any, every, first, last};
pub use transform::{clone, map, partition, select};
