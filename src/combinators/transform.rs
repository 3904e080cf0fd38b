//! Combinators that build new sequences.

use std::ops::ControlFlow;

use crate::error::Result;
use crate::function::expect_callable;
use crate::iterate::{index_value, visit};
use crate::value::Value;

/// Applies `mapper(element, index)` to every element and collects the
/// results in order.
///
/// The output always has as many elements as the input. Results are kept
/// verbatim, including a mapper that returns [`crate::iterate::HALT`]: the
/// sentinel only steers [`crate::iterate::each`].
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `mapper` is not a
/// function, or the first error the mapper raises.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::combinators::map;
/// use lambda_kit::{Function, Value, list};
///
/// let pair = Value::from(Function::binary("pair", |item, index| {
///     Ok(list![item.clone(), index.clone()])
/// }));
///
/// let result = map(&pair, &list!["a", "b"]).unwrap();
/// assert_eq!(result, list![list!["a", 0], list!["b", 1]]);
/// ```
pub fn map(mapper: &Value, items: &Value) -> Result<Value> {
    let mapper = expect_callable(mapper)?;
    let mut mapped = Vec::with_capacity(items.len().unwrap_or_default());
    visit(items, |item, index| {
        mapped.push(mapper.call(&[item.clone(), index_value(index)])?);
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(Value::from(mapped))
}

/// Returns a new list holding the same elements in the same order.
///
/// The container is fresh while the elements are shared. Strings are copied
/// into a list of characters, and non-sequences produce an empty list. No
/// user code runs, so copying cannot fail.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::combinators::clone;
/// use lambda_kit::list;
///
/// let inner = list![1];
/// let original = list![inner.clone(), 2];
/// let copy = clone(&original);
///
/// assert_eq!(copy, original);
/// assert!(!copy.ptr_eq(&original));
/// assert!(copy.as_list().unwrap()[0].ptr_eq(&inner));
/// ```
pub fn clone(items: &Value) -> Value {
    items.elements().iter().cloned().collect()
}

/// Keeps the elements for which `predicate(element)` is truthy.
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `predicate` is not a
/// function, or the first error the predicate raises.
pub fn select(predicate: &Value, items: &Value) -> Result<Value> {
    let predicate = expect_callable(predicate)?;
    let mut selected = Vec::new();
    visit(items, |item, _| {
        if predicate.call(std::slice::from_ref(item))?.is_truthy() {
            selected.push(item.clone());
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(Value::from(selected))
}

/// Splits `items` into `[truthy, falsy]` according to `predicate(element)`.
///
/// Both halves keep the original relative order, and every element lands in
/// exactly one of them.
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `predicate` is not a
/// function, or the first error the predicate raises.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::combinators::partition;
/// use lambda_kit::{Function, Value, list};
///
/// let is_even = Value::from(Function::unary("is_even", |item| {
///     Ok(Value::Bool(matches!(item, Value::Int(number) if number % 2 == 0)))
/// }));
///
/// let halves = partition(&is_even, &list![1, 2, 3, 4, 5]).unwrap();
/// assert_eq!(halves, list![list![2, 4], list![1, 3, 5]]);
/// ```
pub fn partition(predicate: &Value, items: &Value) -> Result<Value> {
    let predicate = expect_callable(predicate)?;
    let mut truthy = Vec::new();
    let mut falsy = Vec::new();
    visit(items, |item, _| {
        if predicate.call(std::slice::from_ref(item))?.is_truthy() {
            truthy.push(item.clone());
        } else {
            falsy.push(item.clone());
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(Value::from(vec![Value::from(truthy), Value::from(falsy)]))
}
