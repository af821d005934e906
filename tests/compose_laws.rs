//! Property-based tests for function composition laws.
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`

use optikon::compose;
use optikon::compose::identity;
use proptest::prelude::*;

fn add_one(value: i32) -> i32 {
    value.wrapping_add(1)
}

fn double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn negate(value: i32) -> i32 {
    value.wrapping_neg()
}

proptest! {
    #[test]
    fn prop_compose_associativity(value in any::<i32>()) {
        let left = compose!(add_one, compose!(double, negate));
        let right = compose!(compose!(add_one, double), negate);
        prop_assert_eq!(left(value), right(value));
    }

    #[test]
    fn prop_compose_left_identity(value in any::<i32>()) {
        let composed = compose!(identity, add_one);
        prop_assert_eq!(composed(value), add_one(value));
    }

    #[test]
    fn prop_compose_right_identity(value in any::<i32>()) {
        let composed = compose!(double, identity);
        prop_assert_eq!(composed(value), double(value));
    }

    #[test]
    fn prop_compose_applies_right_to_left(value in any::<i32>()) {
        let composed = compose!(add_one, double, negate);
        prop_assert_eq!(composed(value), add_one(double(negate(value))));
    }
}
