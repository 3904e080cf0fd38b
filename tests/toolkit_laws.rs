//! Property-based tests for the toolkit laws.
//!
//! ## Curry Laws
//! - **Split invariance**: `curry(f)(a)(b)(c) == curry(f)(a, b, c)`
//! - **Over-application**: `curry(f)(a, b, c, d) == reduce(f, f(a, b), [c, d])`
//!
//! ## Combinator Laws
//! - **Map length**: `len(map(f, s)) == len(s)`
//! - **Reduce on empty**: `reduce(f, initial, []) == initial`
//! - **Partition completeness**: each element lands in exactly one half
//! - **First/last consistency**: `last(p, s) == first(p, reverse(s))`
//!
//! ## Composition Laws
//! - **Associativity**: `compose(f, compose(g, h)) == compose(compose(f, g), h)`
//! - **Identity**: `compose(identity, f) == f == compose(f, identity)`
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

use lambda_kit::combinators::{first, last, map, partition, reduce, select};
use lambda_kit::compose::{compose, identity};
use lambda_kit::curry::curry;
use lambda_kit::{Function, LambdaError, Value};
use proptest::prelude::*;

fn integer(value: &Value) -> Result<i64, LambdaError> {
    match value {
        Value::Int(number) => Ok(*number),
        other => Err(LambdaError::Raised(other.clone())),
    }
}

/// `f(a, b) = a * 31 + b`, wrapping. Not commutative, not associative, so
/// argument order mistakes show up.
fn mix() -> Value {
    Value::from(Function::binary("mix", |left, right| {
        Ok(Value::Int(integer(left)?.wrapping_mul(31).wrapping_add(integer(right)?)))
    }))
}

fn mix3() -> Value {
    Value::from(Function::new("mix3", 3, |arguments| {
        let mut total = 0_i64;
        for argument in arguments.iter().take(3) {
            total = total.wrapping_mul(31).wrapping_add(integer(argument)?);
        }
        Ok(Value::Int(total))
    }))
}

fn unary(name: &'static str, step: fn(i64) -> i64) -> Value {
    Value::from(Function::unary(name, move |value| Ok(Value::Int(step(integer(value)?)))))
}

fn divisible_by(divisor: i64) -> Value {
    Value::from(Function::unary("divisible_by", move |value| {
        Ok(Value::Bool(integer(value)? % divisor == 0))
    }))
}

fn ints(items: &[i64]) -> Value {
    Value::list(items.iter().copied())
}

// =============================================================================
// Curry Laws
// =============================================================================

proptest! {
    /// Split invariance: every way of splitting the arguments gives the
    /// same result as supplying them all at once.
    #[test]
    fn prop_curry_split_invariance(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        let curried = curry(&mix3()).unwrap();
        let arguments = [Value::Int(a), Value::Int(b), Value::Int(c)];

        let all_at_once = curried.call(&arguments).unwrap();
        let one_by_one = curried
            .call(&arguments[..1])
            .and_then(|partial| partial.call(&arguments[1..2]))
            .and_then(|partial| partial.call(&arguments[2..]))
            .unwrap();
        let two_then_one = curried
            .call(&arguments[..2])
            .and_then(|partial| partial.call(&arguments[2..]))
            .unwrap();
        let one_then_two = curried
            .call(&arguments[..1])
            .and_then(|partial| partial.call(&arguments[1..]))
            .unwrap();

        prop_assert_eq!(&all_at_once, &one_by_one);
        prop_assert_eq!(&all_at_once, &two_then_one);
        prop_assert_eq!(&all_at_once, &one_then_two);
    }

    /// Over-application folds the surplus with the same function.
    #[test]
    fn prop_curry_over_application(
        a in any::<i64>(),
        b in any::<i64>(),
        rest in prop::collection::vec(any::<i64>(), 0..6),
    ) {
        let mut arguments = vec![Value::Int(a), Value::Int(b)];
        arguments.extend(rest.iter().copied().map(Value::Int));

        let over_applied = curry(&mix()).unwrap().call(&arguments).unwrap();
        let head = mix().call(&arguments[..2]).unwrap();
        let folded = reduce(&mix(), head, &ints(&rest)).unwrap();

        prop_assert_eq!(over_applied, folded);
    }
}

// =============================================================================
// Combinator Laws
// =============================================================================

proptest! {
    /// Map never changes the length.
    #[test]
    fn prop_map_preserves_length(items in prop::collection::vec(any::<i64>(), 0..50)) {
        let items = ints(&items);
        let mapped = map(&unary("negate", i64::wrapping_neg), &items).unwrap();
        prop_assert_eq!(mapped.len(), items.len());
    }

    /// Reduce over an empty sequence returns the initial value.
    #[test]
    fn prop_reduce_empty_returns_initial(initial in any::<i64>()) {
        let result = reduce(&mix(), Value::Int(initial), &ints(&[])).unwrap();
        prop_assert_eq!(result, Value::Int(initial));
    }

    /// Reduce agrees with a native left fold.
    #[test]
    fn prop_reduce_is_left_fold(
        initial in any::<i64>(),
        items in prop::collection::vec(any::<i64>(), 0..30),
    ) {
        let expected = items
            .iter()
            .fold(initial, |accumulator, item| accumulator.wrapping_mul(31).wrapping_add(*item));
        let result = reduce(&mix(), Value::Int(initial), &ints(&items)).unwrap();
        prop_assert_eq!(result, Value::Int(expected));
    }

    /// Every element lands in exactly one half of a partition, in order.
    #[test]
    fn prop_partition_is_complete(
        items in prop::collection::vec(any::<i64>(), 0..50),
        divisor in 1_i64..7,
    ) {
        let predicate = divisible_by(divisor);
        let halves = partition(&predicate, &ints(&items)).unwrap();
        let halves = halves.as_list().unwrap();

        let matching: Vec<i64> = items.iter().copied().filter(|item| item % divisor == 0).collect();
        let rest: Vec<i64> = items.iter().copied().filter(|item| item % divisor != 0).collect();

        prop_assert_eq!(halves[0].len().unwrap() + halves[1].len().unwrap(), items.len());
        prop_assert_eq!(&halves[0], &ints(&matching));
        prop_assert_eq!(&halves[1], &ints(&rest));
        prop_assert_eq!(&halves[0], &select(&predicate, &ints(&items)).unwrap());
    }

    /// Last is first over the reversed sequence.
    #[test]
    fn prop_last_is_first_of_reversed(
        items in prop::collection::vec(any::<i64>(), 0..30),
        divisor in 1_i64..7,
    ) {
        let predicate = divisible_by(divisor);
        let reversed: Vec<i64> = items.iter().rev().copied().collect();

        prop_assert_eq!(
            last(&predicate, &ints(&items)).unwrap(),
            first(&predicate, &ints(&reversed)).unwrap()
        );
    }
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left and right identity.
    #[test]
    fn prop_compose_identity(x in any::<i64>()) {
        let function = unary("double", |n| n.wrapping_mul(2));
        let left = compose(&[Value::from(identity()), function.clone()]).unwrap();
        let right = compose(&[function.clone(), Value::from(identity())]).unwrap();
        let direct = function.call(&[Value::Int(x)]).unwrap();

        prop_assert_eq!(&left.call(&[Value::Int(x)]).unwrap(), &direct);
        prop_assert_eq!(&right.call(&[Value::Int(x)]).unwrap(), &direct);
    }

    /// Associativity, checked on two consecutive calls.
    #[test]
    fn prop_compose_associativity(x in any::<i64>()) {
        let function1 = unary("add_one", |n| n.wrapping_add(1));
        let function2 = unary("double", |n| n.wrapping_mul(2));
        let function3 = unary("sub_three", |n| n.wrapping_sub(3));

        let inner_right = Value::from(compose(&[function2.clone(), function3.clone()]).unwrap());
        let left_associative = compose(&[function1.clone(), inner_right]).unwrap();

        let inner_left = Value::from(compose(&[function1, function2]).unwrap());
        let right_associative = compose(&[inner_left, function3]).unwrap();

        for _ in 0..2 {
            prop_assert_eq!(
                left_associative.call(&[Value::Int(x)]).unwrap(),
                right_associative.call(&[Value::Int(x)]).unwrap()
            );
        }
    }
}
