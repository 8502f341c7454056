//! Property-based tests for checks, dispatch, and rendering.

use covenant::prelude::*;
use proptest::prelude::*;

// ============================================================================
// CHECK LAWS
// ============================================================================

proptest! {
    #[test]
    fn in_range_agrees_with_the_ordering(value in any::<i64>(), a in -1000i64..1000, b in -1000i64..1000) {
        let (min, max) = if a <= b { (a, b) } else { (b, a) };
        let outcome = value.requires_named("value").is_in_range(min, max);
        prop_assert_eq!(outcome.is_ok(), value >= min && value <= max);
    }

    #[test]
    fn precondition_and_postcondition_agree_on_pass_fail(value in any::<i32>()) {
        let pre = value.requires_named("n").is_greater_than(0).is_ok();
        let post = value.ensures_named("n").is_greater_than(0).is_ok();
        prop_assert_eq!(pre, post);
    }

    #[test]
    fn membership_agrees_with_contains(value in 0i32..20, allowed in proptest::collection::vec(0i32..20, 0..8)) {
        let outcome = value.requires_named("value").is_any_of(&allowed);
        prop_assert_eq!(outcome.is_ok(), allowed.contains(&value));
    }

    #[test]
    fn checks_are_deterministic(value in any::<i32>()) {
        let first = value.requires_named("n").is_in_range(1, 3).map_err(|e| e.to_string());
        let second = value.requires_named("n").is_in_range(1, 3).map_err(|e| e.to_string());
        prop_assert_eq!(first.is_ok(), second.is_ok());
        if let (Err(a), Err(b)) = (first, second) {
            prop_assert_eq!(a, b);
        }
    }
}

// ============================================================================
// DISPATCH LAWS
// ============================================================================

proptest! {
    #[test]
    fn range_violations_are_always_out_of_range(value in any::<i32>()) {
        prop_assume!(!(1..=3).contains(&value));
        let err = value.requires_named("n").is_in_range(1, 3).unwrap_err();
        let is_out_of_range = matches!(err, ConditionError::OutOfRange { .. });
        prop_assert!(is_out_of_range);
    }

    #[test]
    fn postconditions_only_ever_fail_one_way(value in any::<i32>()) {
        prop_assume!(!(1..=3).contains(&value));
        let err = value.ensures_named("n").is_in_range(1, 3).unwrap_err();
        let is_postcondition_failed = matches!(err, ConditionError::PostconditionFailed { .. });
        prop_assert!(is_postcondition_failed);
    }

    #[test]
    fn argument_errors_always_carry_the_display_name(value in any::<i32>()) {
        prop_assume!(value <= 0);
        let err = value.requires_named("amount").is_greater_than(0).unwrap_err();
        prop_assert_eq!(err.parameter(), Some("amount"));
        prop_assert!(err.to_string().contains("amount"));
    }
}

// ============================================================================
// RENDER LAWS
// ============================================================================

proptest! {
    #[test]
    fn scalar_rendering_matches_display(value in any::<i64>()) {
        prop_assert_eq!(render(&value), value.to_string());
    }

    #[test]
    fn string_rendering_is_quoted(text in ".*") {
        prop_assert_eq!(render(text.as_str()), format!("'{text}'"));
    }

    #[test]
    fn sequence_rendering_is_braced_and_comma_joined(items in proptest::collection::vec(any::<i32>(), 0..6)) {
        let rendered = render(&items);
        let expected = format!(
            "{{{}}}",
            items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
        );
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn option_rendering_collapses_to_null_or_inner(value in proptest::option::of(any::<i32>())) {
        let rendered = render(&value);
        match value {
            Some(inner) => prop_assert_eq!(rendered, inner.to_string()),
            None => prop_assert_eq!(rendered, "null"),
        }
    }
}
