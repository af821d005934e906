//! Property-based tests for capability composition.
//!
//! - `add_three(x) == x + 3` (wrapping) for every `i32`
//! - absence and failure pass through unchanged
//! - grouping of combined capabilities does not change the result

use optikon::capability::{AddOne, AddTwo, App, Capability, Combined};
use optikon::typeclass::Identity;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_add_three_adds_three(value in any::<i32>()) {
        prop_assert_eq!(App::new().add_three(Some(value)), Some(value.wrapping_add(3)));
    }

    #[test]
    fn prop_add_three_matches_in_every_context(value in any::<i32>()) {
        let app = App::new();
        let expected = value.wrapping_add(3);
        prop_assert_eq!(app.add_three(Identity::new(value)), Identity::new(expected));
        prop_assert_eq!(app.add_three(Box::new(value)), Box::new(expected));
        prop_assert_eq!(app.add_three(Ok::<i32, String>(value)), Ok(expected));
    }

    #[test]
    fn prop_add_three_preserves_errors(message in "[a-z]{0,12}") {
        let failed: Result<i32, String> = Err(message.clone());
        prop_assert_eq!(App::new().add_three(failed), Err(message));
    }

    #[test]
    fn prop_add_one_and_add_two_commute(value in any::<i32>()) {
        prop_assert_eq!(
            AddOne.then(AddTwo).apply(Some(value)),
            AddTwo.then(AddOne).apply(Some(value))
        );
    }

    #[test]
    fn prop_combination_is_associative(value in any::<i32>()) {
        let left = Combined::new(Combined::new(AddOne, AddTwo), AddTwo);
        let right = Combined::new(AddOne, Combined::new(AddTwo, AddTwo));
        prop_assert_eq!(left.apply(Identity::new(value)), right.apply(Identity::new(value)));
    }
}
