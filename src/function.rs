//! Callables with a declared arity.
//!
//! A [`Function`] pairs a native body with the number of parameters it
//! declares. The curry engine reads that arity to decide whether a call
//! applies, partially applies or over-applies.
//!
//! Bodies receive the raw argument slice. A body may be handed fewer
//! arguments than it declares (missing ones read as [`Value::Undefined`]
//! through [`argument`]) or more (the extras are simply ignored).

use std::fmt;
use std::rc::Rc;

use crate::error::{LambdaError, Result};
use crate::value::Value;

/// The signature every native function body implements.
pub type NativeBody = dyn Fn(&[Value]) -> Result<Value>;

struct FunctionInner {
    name: Rc<str>,
    arity: usize,
    body: Box<NativeBody>,
}

/// A cheaply clonable handle to a callable.
///
/// Clones share the same body, so [`Function::ptr_eq`] holds between them.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::{Function, Value};
///
/// let add = Function::binary("add", |left, right| match (left, right) {
///     (Value::Int(left), Value::Int(right)) => Ok(Value::Int(left + right)),
///     _ => Ok(Value::Undefined),
/// });
///
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.call(&[Value::Int(2), Value::Int(3)]).unwrap(), Value::Int(5));
/// assert_eq!(add.to_string(), "[Function: add]");
/// ```
#[derive(Clone)]
pub struct Function {
    inner: Rc<FunctionInner>,
}

impl Function {
    /// Creates a function with the given name, declared arity and body.
    pub fn new<F>(name: impl Into<Rc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + 'static,
    {
        Self {
            inner: Rc::new(FunctionInner {
                name: name.into(),
                arity,
                body: Box::new(body),
            }),
        }
    }

    /// Creates a function declaring one parameter.
    pub fn unary<F>(name: impl Into<Rc<str>>, body: F) -> Self
    where
        F: Fn(&Value) -> Result<Value> + 'static,
    {
        Self::new(name, 1, move |arguments| body(&argument(arguments, 0)))
    }

    /// Creates a function declaring two parameters.
    pub fn binary<F>(name: impl Into<Rc<str>>, body: F) -> Self
    where
        F: Fn(&Value, &Value) -> Result<Value> + 'static,
    {
        Self::new(name, 2, move |arguments| {
            body(&argument(arguments, 0), &argument(arguments, 1))
        })
    }

    /// The function's name, used only for display and logging.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The number of parameters the function declares.
    pub fn arity(&self) -> usize {
        self.inner.arity
    }

    /// Invokes the body with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns whatever the body fails with, unmodified.
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        (self.inner.body)(arguments)
    }

    /// Returns `true` if both handles share the same body.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Function")
            .field("name", &self.name())
            .field("arity", &self.arity())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[Function: {}]", self.name())
    }
}

/// Returns the argument at `index`, or [`Value::Undefined`] if it was not
/// supplied.
pub fn argument(arguments: &[Value], index: usize) -> Value {
    arguments.get(index).cloned().unwrap_or_default()
}

/// Checks that `value` is invocable and returns the function inside.
///
/// This is the single callable check shared by every operation in the crate.
///
/// # Errors
///
/// Returns [`LambdaError::InvalidCallable`] naming the type that was found.
pub fn expect_callable(value: &Value) -> Result<&Function> {
    value.as_function().ok_or_else(|| {
        tracing::debug!(found = value.type_name(), "rejected non-callable value");
        LambdaError::InvalidCallable {
            found: value.type_name(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_missing_arguments_read_as_undefined() {
        let second = Function::binary("second", |_, right| Ok(right.clone()));
        assert_eq!(second.call(&[Value::Int(1)]).unwrap(), Value::Undefined);
    }

    #[rstest]
    fn test_extra_arguments_are_ignored() {
        let first = Function::unary("first", |value| Ok(value.clone()));
        let result = first
            .call(&[Value::Int(1), Value::Int(2), Value::Int(3)])
            .unwrap();
        assert_eq!(result, Value::Int(1));
    }

    #[rstest]
    fn test_clones_share_identity() {
        let function = Function::new("noop", 0, |_| Ok(Value::Undefined));
        let clone = function.clone();
        let other = Function::new("noop", 0, |_| Ok(Value::Undefined));

        assert!(function.ptr_eq(&clone));
        assert!(!function.ptr_eq(&other));
    }

    #[rstest]
    #[case(Value::Null, "null")]
    #[case(Value::Int(42), "number")]
    #[case(Value::Undefined, "undefined")]
    #[case(Value::from("f"), "string")]
    fn test_expect_callable_rejects(#[case] value: Value, #[case] found: &'static str) {
        assert_eq!(
            expect_callable(&value).unwrap_err(),
            LambdaError::InvalidCallable { found }
        );
    }

    #[rstest]
    fn test_expect_callable_accepts_function() {
        let value = Value::from(Function::new("noop", 0, |_| Ok(Value::Null)));
        assert_eq!(expect_callable(&value).unwrap().name(), "noop");
    }

    #[rstest]
    fn test_debug_lists_name_and_arity() {
        let function = Function::new("pair", 2, |_| Ok(Value::Null));
        assert_eq!(format!("{function:?}"), "Function { name: \"pair\", arity: 2, .. }");
    }
}
