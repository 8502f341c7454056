//! Enumeration membership checks
//!
//! A failed membership check classifies its violation as
//! [`Violation::InvalidEnum`], which a precondition dispatcher turns into
//! [`ConditionError::InvalidEnum`](crate::foundation::ConditionError::InvalidEnum).

use crate::foundation::{CheckResult, Validator, Violation};
use crate::render::Render;

// ============================================================================
// MEMBERSHIP CHECKS
// ============================================================================

/// Checks that a subject belongs to an allowed set of values.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// assert!(2.requires_named("mode").is_any_of(&[0, 1, 2]).is_ok());
///
/// let err = 9.requires_named("mode").is_any_of(&[0, 1, 2]).unwrap_err();
/// assert!(matches!(err, ConditionError::InvalidEnum { .. }));
/// assert!(err.to_string().contains("{0,1,2}"));
/// ```
pub trait MembershipChecks<T>: Validator<T> + Sized {
    /// Checks that the subject equals one of `allowed`.
    fn is_any_of(self, allowed: &[T]) -> CheckResult<Self>
    where
        T: PartialEq + Render,
    {
        if allowed.contains(self.value()) {
            Ok(self)
        } else {
            let condition = format!("{} should be one of {}", self.name(), allowed.render());
            let detail = format!("The actual value is {}.", self.value().render());
            Err(self.build_error(&condition, Some(&detail), Violation::InvalidEnum))
        }
    }

    /// Checks that the subject equals none of `forbidden`.
    fn is_none_of(self, forbidden: &[T]) -> CheckResult<Self>
    where
        T: PartialEq + Render,
    {
        if !forbidden.contains(self.value()) {
            Ok(self)
        } else {
            let condition = format!("{} should be none of {}", self.name(), forbidden.render());
            let detail = format!("The actual value is {}.", self.value().render());
            Err(self.build_error(&condition, Some(&detail), Violation::InvalidEnum))
        }
    }
}

impl<T, V: Validator<T>> MembershipChecks<T> for V {}

// ============================================================================
// TESTS
// ============================================================================
