//! Error types for the toolkit.
//!
//! The toolkit itself defines only two failure kinds: a value that was
//! expected to be callable was not, or `compose` was handed something that
//! is not callable. Failures produced by user callables travel through
//! [`LambdaError::Raised`] and are never rewritten.

use crate::value::Value;

/// Errors produced while wrapping, iterating or composing functions.
///
/// # Examples
///
/// ```rust
/// use lambda_kit::curry::curry;
/// use lambda_kit::{LambdaError, Value};
///
/// let error = curry(&Value::Int(42)).unwrap_err();
/// assert_eq!(error, LambdaError::InvalidCallable { found: "number" });
/// assert_eq!(error.to_string(), "λ Error: Invalid function (found number)");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LambdaError {
    /// A value expected to be invocable was not.
    #[error("λ Error: Invalid function (found {found})")]
    InvalidCallable {
        /// The type name of the offending value.
        found: &'static str,
    },

    /// `compose` received a non-callable argument.
    #[error("λ Error: Invalid function to compose (argument {position} is {found})")]
    InvalidCompose {
        /// Zero-based position of the offending argument.
        position: usize,
        /// The type name of the offending value.
        found: &'static str,
    },

    /// A failure raised by a user callable, propagated unmodified.
    #[error("λ Error: raised {0}")]
    Raised(Value),
}

impl LambdaError {
    /// Creates a [`LambdaError::Raised`] carrying `value`.
    ///
    /// Intended for use inside native function bodies that need to fail.
    pub fn raise(value: impl Into<Value>) -> Self {
        Self::Raised(value.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LambdaError>;
