//! The dynamic value model the toolkit operates on.
//!
//! Every argument, element and result that flows through the toolkit is a
//! [`Value`]. Functions are values too, which is what lets `each(visitor)`
//! return another function, and lets `curry` reject `42` at runtime.
//!
//! # Truthiness
//!
//! Predicates may return any value. The following are falsy, everything else
//! (including empty lists and [`Value::Halt`]) is truthy:
//!
//! - [`Value::Undefined`] and [`Value::Null`]
//! - `Bool(false)`
//! - `Int(0)`, `Float(0.0)` and `Float(NaN)`
//! - the empty string
//!
//! # Sequences
//!
//! Lists are visited element by element. Strings are visited as a sequence of
//! one-character strings. Any other value is visited as an empty sequence.
//!
//! # Examples
//!
//! ```rust
//! use lambda_kit::{Value, list};
//!
//! let items = list![1, "two", 3.0, true];
//! assert_eq!(items.len(), Some(4));
//! assert_eq!(items.to_string(), "[1, \"two\", 3, true]");
//!
//! assert!(Value::from(1).is_truthy());
//! assert!(!Value::from("").is_truthy());
//! assert!(list![].is_truthy());
//! ```

#[cfg(feature = "serde")]
mod serde_support;

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

use crate::error::{LambdaError, Result};
use crate::function::Function;

/// A dynamically typed value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value, also used as the "not found" marker.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// An immutable string.
    Str(Rc<str>),
    /// An immutable ordered sequence.
    List(Rc<Vec<Value>>),
    /// A callable with a declared arity.
    Function(Function),
    /// The early-exit sentinel returned by visitors to stop iteration.
    ///
    /// See [`crate::iterate::HALT`].
    Halt,
}

impl Value {
    /// Builds a list value from anything that yields values.
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::List(Rc::new(items.into_iter().map(Into::into).collect()))
    }

    /// Short name of the variant, used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) | Self::Float(_) => "number",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Function(_) => "function",
            Self::Halt => "halt",
        }
    }

    /// Returns `true` unless the value is one of the falsy values listed in
    /// the module documentation.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Int(number) => *number != 0,
            Self::Float(number) => !(*number == 0.0 || number.is_nan()),
            Self::Str(text) => !text.is_empty(),
            Self::List(_) | Self::Function(_) | Self::Halt => true,
        }
    }

    /// Returns `true` for [`Value::Undefined`].
    pub const fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Returns `true` for the early-exit sentinel.
    ///
    /// The check is on the variant tag only, so no data value can ever be
    /// mistaken for the sentinel.
    pub const fn is_halt(&self) -> bool {
        matches!(self, Self::Halt)
    }

    /// Returns `true` if the value can be invoked.
    pub const fn is_callable(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Returns the wrapped function, if any.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the list elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Invokes the value with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`LambdaError::InvalidCallable`] if the value is not a
    /// function, or whatever the function itself fails with.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lambda_kit::{Function, Value};
    ///
    /// let negate = Value::from(Function::unary("negate", |value| match value {
    ///     Value::Int(number) => Ok(Value::Int(-number)),
    ///     other => Ok(other.clone()),
    /// }));
    /// assert_eq!(negate.call(&[Value::Int(3)]).unwrap(), Value::Int(-3));
    /// assert!(Value::Int(3).call(&[]).is_err());
    /// ```
    pub fn call(&self, arguments: &[Self]) -> Result<Self> {
        match self {
            Self::Function(function) => function.call(arguments),
            other => Err(LambdaError::InvalidCallable {
                found: other.type_name(),
            }),
        }
    }

    /// The elements visited when this value is treated as a sequence.
    ///
    /// Lists are borrowed, strings are split into characters and every other
    /// value yields nothing.
    pub fn elements(&self) -> Cow<'_, [Self]> {
        match self {
            Self::List(items) => Cow::Borrowed(items.as_slice()),
            Self::Str(text) => Cow::Owned(
                text.chars()
                    .map(|character| Self::from(character.to_string()))
                    .collect(),
            ),
            _ => Cow::Borrowed(&[] as &[Self]),
        }
    }

    /// Sequence length, or `None` if the value is not a sequence.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(items.len()),
            Self::Str(text) => Some(text.chars().count()),
            _ => None,
        }
    }

    /// Returns `true` if the value is an empty sequence or not a sequence.
    pub fn is_empty(&self) -> bool {
        self.len().is_none_or(|length| length == 0)
    }

    /// Identity comparison for reference-backed values.
    ///
    /// Two lists, strings or functions are the same only if they share the
    /// same allocation. Other variants compare equal by value.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::List(left), Self::List(right)) => Rc::ptr_eq(left, right),
            (Self::Str(left), Self::Str(right)) => Rc::ptr_eq(left, right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (left, right) => left == right,
        }
    }
}

impl PartialEq for Value {
    #[allow(clippy::cast_precision_loss)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined)
            | (Self::Null, Self::Null)
            | (Self::Halt, Self::Halt) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Int(left), Self::Float(right)) | (Self::Float(right), Self::Int(left)) => {
                (*left as f64) == *right
            }
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Str(text) => write!(formatter, "{:?}", &**text),
            Self::List(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                formatter.write_str("]")
            }
            Self::Function(function) => write!(formatter, "{function}"),
            Self::Halt => formatter.write_str("<halt>"),
        }
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(Rc::from(text))
    }
}

impl From<Vec<Self>> for Value {
    fn from(items: Vec<Self>) -> Self {
        Self::List(Rc::new(items))
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Undefined, Into::into)
    }
}

impl<T: Into<Self>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::list(iter)
    }
}

/// Builds a [`Value::List`] from a comma-separated list of expressions.
///
/// Each element goes through `Value::from`.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::{Value, list};
///
/// let nested = list![1, list![2, 3], "four"];
/// assert_eq!(nested.to_string(), "[1, [2, 3], \"four\"]");
/// assert_eq!(list![], Value::list(Vec::<Value>::new()));
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::Value::List(::std::rc::Rc::new(::std::vec::Vec::new()))
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Value::List(::std::rc::Rc::new(::std::vec![
            $($crate::Value::from($element)),+
        ]))
    };
}
