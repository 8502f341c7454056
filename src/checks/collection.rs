//! Collection checks
//!
//! Available on any dispatcher whose subject views as a slice (`Vec`,
//! arrays, `&[T]`). Named with a `has_`/`contains_item` vocabulary so they
//! never collide with the string checks on types that view as both text and
//! bytes. All collection violations use the default classifier.

use crate::foundation::{CheckResult, Validator};
use crate::render::Render;

// ============================================================================
// COLLECTION CHECKS
// ============================================================================

/// Checks on sequence subjects.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// let tags = vec!["draft", "public"];
/// assert!(tags.requires_named("tags").has_count(2).is_ok());
/// ```
pub trait CollectionChecks<U, C: AsRef<[U]>>: Validator<C> + Sized {
    /// Checks that the subject has at least one element.
    fn has_any(self) -> CheckResult<Self> {
        if self.value().as_ref().is_empty() {
            let condition = format!("{} should not be empty", self.name());
            Err(self.fail(&condition))
        } else {
            Ok(self)
        }
    }

    /// Checks that the subject has no elements.
    fn has_none(self) -> CheckResult<Self> {
        if self.value().as_ref().is_empty() {
            Ok(self)
        } else {
            let condition = format!("{} should be empty", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject has exactly `expected` elements.
    fn has_count(self, expected: usize) -> CheckResult<Self> {
        let actual = self.value().as_ref().len();
        if actual == expected {
            Ok(self)
        } else {
            let condition = format!("{} should contain {expected} elements", self.name());
            let detail = format!("It contains {actual}.");
            Err(self.build_error(&condition, Some(&detail), crate::foundation::Violation::Default))
        }
    }

    /// Checks that the subject has fewer than `bound` elements.
    fn has_fewer_than(self, bound: usize) -> CheckResult<Self> {
        if self.value().as_ref().len() < bound {
            Ok(self)
        } else {
            let condition = format!("{} should contain fewer than {bound} elements", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject has more than `bound` elements.
    fn has_more_than(self, bound: usize) -> CheckResult<Self> {
        if self.value().as_ref().len() > bound {
            Ok(self)
        } else {
            let condition = format!("{} should contain more than {bound} elements", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject contains `item`.
    fn contains_item(self, item: &U) -> CheckResult<Self>
    where
        U: PartialEq + Render,
    {
        if self.value().as_ref().contains(item) {
            Ok(self)
        } else {
            let condition = format!("{} should contain {}", self.name(), item.render());
            Err(self.fail(&condition))
        }
    }
}

impl<U, C: AsRef<[U]>, V: Validator<C>> CollectionChecks<U, C> for V {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Contract;
    use crate::foundation::ConditionError;
    use pretty_assertions::assert_eq;

    #[test]
    fn emptiness_checks() {
        assert!(vec![1].requires().has_any().is_ok());
        assert!(Vec::<i32>::new().requires().has_any().is_err());
        assert!(Vec::<i32>::new().requires().has_none().is_ok());
    }

    #[test]
    fn count_violation_reports_the_actual_count() {
        let err = vec![1, 2, 3]
            .requires_named("items")
            .has_count(2)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "items should contain 2 elements. It contains 3. (parameter 'items')"
        );
    }

    #[test]
    fn size_bounds() {
        assert!(vec![1, 2].requires().has_fewer_than(3).is_ok());
        assert!(vec![1, 2].requires().has_fewer_than(2).is_err());
        assert!(vec![1, 2].requires().has_more_than(1).is_ok());
    }

    #[test]
    fn contains_item_renders_the_missing_element() {
        let err = vec!["a", "b"]
            .requires_named("tags")
            .contains_item(&"c")
            .unwrap_err();
        assert!(matches!(err, ConditionError::InvalidArgument { .. }));
        assert!(err.to_string().contains("'c'"));
    }

    #[test]
    fn arrays_are_accepted() {
        assert!([1, 2, 3].requires_named("triple").has_count(3).is_ok());
    }
}
