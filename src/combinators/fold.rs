//! Left fold.

use std::ops::ControlFlow;

use crate::error::Result;
use crate::function::expect_callable;
use crate::iterate::visit;
use crate::value::Value;

/// Folds `items` from the left, starting from `initial`.
///
/// For each element, `accumulator = reducer(accumulator, element)`. An empty
/// sequence returns `initial` unchanged, and the reducer is never called.
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `reducer` is not a
/// function, or the first error the reducer raises.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::combinators::reduce;
/// use lambda_kit::{Function, Value, list};
///
/// let push = Value::from(Function::binary("push", |accumulator, item| {
///     let mut items = accumulator.as_list().unwrap_or_default().to_vec();
///     items.push(item.clone());
///     Ok(Value::from(items))
/// }));
///
/// let result = reduce(&push, list![0], &list![1, 2, 3]).unwrap();
/// assert_eq!(result, list![0, 1, 2, 3]);
/// ```
pub fn reduce(reducer: &Value, initial: Value, items: &Value) -> Result<Value> {
    let reducer = expect_callable(reducer)?;
    let mut accumulator = initial;
    visit(items, |item, _| {
        accumulator = reducer.call(&[std::mem::take(&mut accumulator), item.clone()])?;
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(accumulator)
}
