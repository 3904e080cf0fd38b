//! Search and quantifier combinators.
//!
//! `first` and `any` stop at the first match. `every` always walks the whole
//! sequence, even after a falsy result, so a predicate with side effects
//! observes every element.

use std::ops::ControlFlow;

use super::transform::clone;
use crate::error::Result;
use crate::function::expect_callable;
use crate::iterate::visit;
use crate::value::Value;

/// Returns the first element for which `predicate(element)` is truthy.
///
/// Returns [`Value::Undefined`] when nothing matches, including for an empty
/// sequence. Elements after the match are never visited. A
/// [`crate::iterate::HALT`] element is never a candidate: it is passed over
/// without consulting the predicate.
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `predicate` is not a
/// function, or the first error the predicate raises.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::combinators::first;
/// use lambda_kit::{Function, Value, list};
///
/// let is_long = Value::from(Function::unary("is_long", |item| match item {
///     Value::Str(text) => Ok(Value::Bool(text.len() > 3)),
///     _ => Ok(Value::Bool(false)),
/// }));
///
/// assert_eq!(first(&is_long, &list!["ox", "horse", "zebra"]).unwrap(), Value::from("horse"));
/// assert_eq!(first(&is_long, &list![]).unwrap(), Value::Undefined);
/// ```
pub fn first(predicate: &Value, items: &Value) -> Result<Value> {
    let predicate = expect_callable(predicate)?;
    let mut found = Value::Undefined;
    visit(items, |item, _| {
        if item.is_halt() {
            return Ok(ControlFlow::Continue(()));
        }
        if predicate.call(std::slice::from_ref(item))?.is_truthy() {
            found = item.clone();
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(found)
}

/// Returns the last element for which `predicate(element)` is truthy.
///
/// Searches a reversed copy, so the caller's sequence is untouched and the
/// predicate sees elements from the end backwards.
///
/// # Errors
///
/// Same as [`first`].
pub fn last(predicate: &Value, items: &Value) -> Result<Value> {
    let reversed = match clone(items) {
        Value::List(copy) => Value::list(copy.iter().rev().cloned()),
        other => other,
    };
    first(predicate, &reversed)
}

/// Returns `true` if `predicate(element)` is truthy for every element.
///
/// An empty sequence yields `true`. The whole sequence is always visited.
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `predicate` is not a
/// function, or the first error the predicate raises.
pub fn every(predicate: &Value, items: &Value) -> Result<bool> {
    let predicate = expect_callable(predicate)?;
    let mut is_every = true;
    visit(items, |item, _| {
        if !predicate.call(std::slice::from_ref(item))?.is_truthy() {
            is_every = false;
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(is_every)
}

/// Returns `true` if `predicate(element)` is truthy for at least one element.
///
/// Stops at the first match.
///
/// # Errors
///
/// Returns [`crate::LambdaError::InvalidCallable`] if `predicate` is not a
/// function, or the first error the predicate raises.
pub fn any(predicate: &Value, items: &Value) -> Result<bool> {
    let predicate = expect_callable(predicate)?;
    let mut is_any = false;
    visit(items, |item, _| {
        if predicate.call(std::slice::from_ref(item))?.is_truthy() {
            is_any = true;
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(is_any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LambdaError;
    use crate::function::Function;
    use crate::iterate::HALT;
    use crate::list;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// A predicate matching integers greater than `threshold` that records
    /// every element it is asked about.
    fn greater_than(threshold: i64) -> (Value, Rc<RefCell<Vec<Value>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = Rc::clone(&seen);
        let predicate = Function::unary("greater_than", move |item| {
            record.borrow_mut().push(item.clone());
            Ok(Value::Bool(matches!(item, Value::Int(number) if *number > threshold)))
        });
        (Value::from(predicate), seen)
    }

    #[rstest]
    fn test_first_short_circuits() {
        let (predicate, seen) = greater_than(1);
        assert_eq!(first(&predicate, &list![1, 2, 3, 4]).unwrap(), Value::Int(2));
        assert_eq!(*seen.borrow(), vec![Value::Int(1), Value::Int(2)]);
    }

    #[rstest]
    fn test_first_not_found() {
        let (predicate, _) = greater_than(10);
        assert_eq!(first(&predicate, &list![1, 2]).unwrap(), Value::Undefined);
    }

    fn truthy() -> Value {
        Value::from(Function::unary("truthy", |item| Ok(Value::Bool(item.is_truthy()))))
    }

    #[rstest]
    fn test_first_passes_over_halt_elements() {
        assert_eq!(first(&truthy(), &list![0, HALT, 3]).unwrap(), Value::Int(3));
        assert_eq!(first(&truthy(), &list![HALT]).unwrap(), Value::Undefined);
    }

    #[rstest]
    fn test_last_passes_over_halt_elements() {
        assert_eq!(last(&truthy(), &list![HALT]).unwrap(), Value::Undefined);
        assert_eq!(last(&truthy(), &list![1, HALT]).unwrap(), Value::Int(1));
    }

    #[rstest]
    fn test_last_searches_from_the_end_without_mutation() {
        let (predicate, seen) = greater_than(1);
        let items = list![3, 1, 2, 0];

        assert_eq!(last(&predicate, &items).unwrap(), Value::Int(2));
        assert_eq!(*seen.borrow(), vec![Value::Int(0), Value::Int(2)]);
        assert_eq!(items, list![3, 1, 2, 0]);
    }

    #[rstest]
    fn test_last_on_empty_is_undefined() {
        let (predicate, seen) = greater_than(0);
        assert_eq!(last(&predicate, &list![]).unwrap(), Value::Undefined);
        assert!(seen.borrow().is_empty());
    }

    #[rstest]
    fn test_every_visits_everything_after_a_failure() {
        let (predicate, seen) = greater_than(0);
        assert!(!every(&predicate, &list![1, -1, 2, 3]).unwrap());
        assert_eq!(seen.borrow().len(), 4);
    }

    #[rstest]
    fn test_every_is_vacuously_true() {
        let (predicate, _) = greater_than(0);
        assert!(every(&predicate, &list![]).unwrap());
    }

    #[rstest]
    fn test_any_short_circuits() {
        let (predicate, seen) = greater_than(0);
        assert!(any(&predicate, &list![-1, 5, 6]).unwrap());
        assert_eq!(seen.borrow().len(), 2);
    }

    #[rstest]
    fn test_any_on_empty_is_false() {
        let (predicate, _) = greater_than(0);
        assert!(!any(&predicate, &list![]).unwrap());
    }

    #[rstest]
    fn test_last_rejects_non_callable_even_when_empty() {
        assert_eq!(
            last(&Value::Undefined, &list![]).unwrap_err(),
            LambdaError::InvalidCallable { found: "undefined" }
        );
    }
}
