//! Ordering and equality checks
//!
//! Range and bound checks classify their violations as
//! [`Violation::OutOfRange`]; equality checks use the default classifier.
//! Bounds are rendered through [`Render`], so an option bound reads `null`
//! and a string bound is quoted.

use crate::foundation::{CheckResult, Validator, Violation};
use crate::render::Render;

// ============================================================================
// COMPARISON CHECKS
// ============================================================================

/// Checks on subjects with an ordering or equality.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// assert!(5.requires_named("count").is_in_range(1, 10).is_ok());
///
/// let err = 5.requires_named("count").is_in_range(1, 3).unwrap_err();
/// assert!(matches!(err, ConditionError::OutOfRange { .. }));
/// assert!(err.to_string().contains("count should be between 1 and 3"));
/// ```
pub trait ComparisonChecks<T>: Validator<T> + Sized {
    /// Checks that the subject lies in the inclusive range `[min, max]`.
    fn is_in_range(self, min: T, max: T) -> CheckResult<Self>
    where
        T: PartialOrd + Render,
    {
        let value = self.value();
        if *value >= min && *value <= max {
            Ok(self)
        } else {
            let condition = format!(
                "{} should be between {} and {}",
                self.name(),
                min.render(),
                max.render()
            );
            let detail = format!("The actual value is {}.", value.render());
            Err(self.build_error(&condition, Some(&detail), Violation::OutOfRange))
        }
    }

    /// Checks that the subject lies outside the inclusive range `[min, max]`.
    fn is_not_in_range(self, min: T, max: T) -> CheckResult<Self>
    where
        T: PartialOrd + Render,
    {
        let value = self.value();
        if *value < min || *value > max {
            Ok(self)
        } else {
            let condition = format!(
                "{} should not be between {} and {}",
                self.name(),
                min.render(),
                max.render()
            );
            let detail = format!("The actual value is {}.", value.render());
            Err(self.build_error(&condition, Some(&detail), Violation::OutOfRange))
        }
    }

    /// Checks that the subject is strictly greater than `bound`.
    fn is_greater_than(self, bound: T) -> CheckResult<Self>
    where
        T: PartialOrd + Render,
    {
        if *self.value() > bound {
            Ok(self)
        } else {
            self.bound_violation("greater than", &bound)
        }
    }

    /// Checks that the subject is greater than or equal to `bound`.
    fn is_at_least(self, bound: T) -> CheckResult<Self>
    where
        T: PartialOrd + Render,
    {
        if *self.value() >= bound {
            Ok(self)
        } else {
            self.bound_violation("at least", &bound)
        }
    }

    /// Checks that the subject is strictly less than `bound`.
    fn is_less_than(self, bound: T) -> CheckResult<Self>
    where
        T: PartialOrd + Render,
    {
        if *self.value() < bound {
            Ok(self)
        } else {
            self.bound_violation("less than", &bound)
        }
    }

    /// Checks that the subject is less than or equal to `bound`.
    fn is_at_most(self, bound: T) -> CheckResult<Self>
    where
        T: PartialOrd + Render,
    {
        if *self.value() <= bound {
            Ok(self)
        } else {
            self.bound_violation("at most", &bound)
        }
    }

    /// Checks that the subject equals `expected`.
    fn is_equal_to(self, expected: T) -> CheckResult<Self>
    where
        T: PartialEq + Render,
    {
        if *self.value() == expected {
            Ok(self)
        } else {
            let condition = format!("{} should be equal to {}", self.name(), expected.render());
            let detail = format!("The actual value is {}.", self.value().render());
            Err(self.build_error(&condition, Some(&detail), Violation::Default))
        }
    }

    /// Checks that the subject differs from `unexpected`.
    fn is_not_equal_to(self, unexpected: T) -> CheckResult<Self>
    where
        T: PartialEq + Render,
    {
        if *self.value() == unexpected {
            let condition = format!(
                "{} should not be equal to {}",
                self.name(),
                unexpected.render()
            );
            Err(self.fail(&condition))
        } else {
            Ok(self)
        }
    }

    #[doc(hidden)]
    fn bound_violation(self, relation: &str, bound: &T) -> CheckResult<Self>
    where
        T: Render,
    {
        let condition = format!("{} should be {relation} {}", self.name(), bound.render());
        let detail = format!("The actual value is {}.", self.value().render());
        Err(self.build_error(&condition, Some(&detail), Violation::OutOfRange))
    }
}

impl<T, V: Validator<T>> ComparisonChecks<T> for V {}

// ============================================================================
// TESTS
// ============================================================================
