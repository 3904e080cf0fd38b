//! The early-exit iteration primitive.
//!
//! Every combinator that calls back into user code walks its input through
//! [`visit`], steering it with [`ControlFlow`]. User visitors handed to
//! [`each`] stop the walk by returning [`HALT`] instead; `each` is the only
//! place that sentinel is interpreted, so data that happens to hold
//! [`Value::Halt`] never steers a combinator.
//!
//! # Examples
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use lambda_kit::iterate::{HALT, each};
//! use lambda_kit::{Function, Value, list};
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let record = Rc::clone(&seen);
//! let visitor = Value::from(Function::binary("record", move |item, _index| {
//!     record.borrow_mut().push(item.clone());
//!     Ok(if *item == Value::Int(2) { HALT } else { Value::Undefined })
//! }));
//!
//! each(&visitor, &list![1, 2, 3, 4]).unwrap();
//! assert_eq!(*seen.borrow(), vec![Value::Int(1), Value::Int(2)]);
//! ```

use std::ops::ControlFlow;

use crate::error::Result;
use crate::function::expect_callable;
use crate::value::Value;

/// The early-exit sentinel.
///
/// Visitors passed to [`each`] return this to stop iteration. It is
/// recognised by variant, never by comparing data, and no combinator ever
/// returns it.
pub const HALT: Value = Value::Halt;

/// Walks `items` in ascending index order until `visitor` breaks.
///
/// This is the one loop the combinators share. Errors from the visitor stop
/// the walk and propagate unchanged.
///
/// # Errors
///
/// Returns the first error produced by `visitor`.
pub(crate) fn visit<F>(items: &Value, mut visitor: F) -> Result<()>
where
    F: FnMut(&Value, usize) -> Result<ControlFlow<()>>,
{
    for (index, item) in items.elements().iter().enumerate() {
        if visitor(item, index)?.is_break() {
            tracing::trace!(index, "iteration halted");
            return Ok(());
        }
    }
    Ok(())
}

/// Calls `visitor(element, index)` for each element of `items`, stopping
/// early if the visitor returns [`HALT`].
///
/// The index is passed as [`Value::Int`].
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `visitor` is not a
/// function, or the first error the visitor raises.
pub fn each(visitor: &Value, items: &Value) -> Result<()> {
    let visitor = expect_callable(visitor)?;
    visit(items, |item, index| {
        if visitor.call(&[item.clone(), index_value(index)])?.is_halt() {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    })
}

/// Converts a visit position into the index value handed to callables.
#[allow(clippy::cast_possible_wrap)]
pub(crate) const fn index_value(index: usize) -> Value {
    Value::Int(index as i64)
}
