//! The toolkit namespace.
//!
//! [`Lambda`] gathers every toolkit operation as a callable [`Value`], ready
//! to be passed around, partially applied and composed like any user
//! function. All members except `clone` and `compose` go through the curry
//! engine, so `each(visitor)(items)` and `each(visitor, items)` are the same
//! call.
//!
//! | member | arity | curried |
//! |---|---|---|
//! | `curry` | 1 | no |
//! | `each` | 2 | yes |
//! | `map` | 2 | yes |
//! | `reduce`, `reducel` | 3 | yes |
//! | `clone` | 1 | no |
//! | `first`, `last` | 2 | yes |
//! | `every`, `all` | 2 | yes |
//! | `any` | 2 | yes |
//! | `select` | 2 | yes |
//! | `partition` | 2 | yes |
//! | `compose` | 1, accepts any number | no |
//!
//! Aliases share one function, so `lambda.reducel.ptr_eq(&lambda.reduce)`.
//!
//! # Examples
//!
//! ```rust
//! use lambda_kit::{Function, Lambda, Value, list};
//!
//! let lambda = Lambda::new();
//! let is_odd = Value::from(Function::unary("is_odd", |item| {
//!     Ok(Value::Bool(matches!(item, Value::Int(number) if number % 2 != 0)))
//! }));
//!
//! let odds = lambda.select.call(&[is_odd]).unwrap();
//! assert_eq!(odds.call(&[list![1, 2, 3, 4, 5]]).unwrap(), list![1, 3, 5]);
//! ```

use crate::combinators;
use crate::compose;
use crate::curry::{curry, curry_function};
use crate::function::{Function, argument};
use crate::iterate;
use crate::value::Value;

/// Names of every member, in the order [`Lambda::members`] yields them.
pub const MEMBER_NAMES: [&str; 14] = [
    "curry",
    "each",
    "map",
    "reduce",
    "reducel",
    "clone",
    "first",
    "last",
    "every",
    "all",
    "any",
    "select",
    "partition",
    "compose",
];

/// The toolkit namespace object.
#[derive(Clone, Debug)]
pub struct Lambda {
    /// Wraps a function in the curry engine.
    pub curry: Value,
    /// Visits elements as `(element, index)` until the visitor halts.
    pub each: Value,
    /// Maps `(element, index)` over a sequence.
    pub map: Value,
    /// Left fold: `(reducer, initial, items)`.
    pub reduce: Value,
    /// Alias of `reduce`.
    pub reducel: Value,
    /// Shallow copy of a sequence.
    pub clone: Value,
    /// First matching element, or `undefined`.
    pub first: Value,
    /// Last matching element, or `undefined`.
    pub last: Value,
    /// Whether every element matches. Visits the whole sequence.
    pub every: Value,
    /// Alias of `every`.
    pub all: Value,
    /// Whether any element matches. Stops at the first match.
    pub any: Value,
    /// Matching elements, in order.
    pub select: Value,
    /// `[matching, non-matching]`.
    pub partition: Value,
    /// Right-to-left composition of any number of functions.
    pub compose: Value,
}

fn curried<F>(name: &'static str, arity: usize, body: F) -> Value
where
    F: Fn(&[Value]) -> crate::Result<Value> + 'static,
{
    Value::from(curry_function(Function::new(name, arity, body)))
}

impl Lambda {
    /// Builds the namespace.
    pub fn new() -> Self {
        let reduce = curried("reduce", 3, |arguments| {
            combinators::reduce(
                &argument(arguments, 0),
                argument(arguments, 1),
                &argument(arguments, 2),
            )
        });
        let every = curried("every", 2, |arguments| {
            combinators::every(&argument(arguments, 0), &argument(arguments, 1)).map(Value::Bool)
        });

        Self {
            curry: Value::from(Function::unary("curry", curry)),
            each: curried("each", 2, |arguments| {
                iterate::each(&argument(arguments, 0), &argument(arguments, 1))
                    .map(|()| Value::Undefined)
            }),
            map: curried("map", 2, |arguments| {
                combinators::map(&argument(arguments, 0), &argument(arguments, 1))
            }),
            reducel: reduce.clone(),
            reduce,
            clone: Value::from(Function::unary("clone", |items| Ok(combinators::clone(items)))),
            first: curried("first", 2, |arguments| {
                combinators::first(&argument(arguments, 0), &argument(arguments, 1))
            }),
            last: curried("last", 2, |arguments| {
                combinators::last(&argument(arguments, 0), &argument(arguments, 1))
            }),
            all: every.clone(),
            every,
            any: curried("any", 2, |arguments| {
                combinators::any(&argument(arguments, 0), &argument(arguments, 1)).map(Value::Bool)
            }),
            select: curried("select", 2, |arguments| {
                combinators::select(&argument(arguments, 0), &argument(arguments, 1))
            }),
            partition: curried("partition", 2, |arguments| {
                combinators::partition(&argument(arguments, 0), &argument(arguments, 1))
            }),
            compose: Value::from(Function::new("compose", 1, |arguments| {
                compose::compose(arguments).map(Value::from)
            })),
        }
    }

    /// Looks up a member by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        let member = match name {
            "curry" => &self.curry,
            "each" => &self.each,
            "map" => &self.map,
            "reduce" => &self.reduce,
            "reducel" => &self.reducel,
            "clone" => &self.clone,
            "first" => &self.first,
            "last" => &self.last,
            "every" => &self.every,
            "all" => &self.all,
            "any" => &self.any,
            "select" => &self.select,
            "partition" => &self.partition,
            "compose" => &self.compose,
            _ => return None,
        };
        Some(member)
    }

    /// Iterates over `(name, member)` pairs in [`MEMBER_NAMES`] order.
    pub fn members(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        MEMBER_NAMES
            .iter()
            .filter_map(move |&name| self.get(name).map(|member| (name, member)))
    }
}

impl Default for Lambda {
    fn default() -> Self {
        Self::new()
    }
}
