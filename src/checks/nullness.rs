//! Nullness checks for optional subjects
//!
//! Available on dispatchers whose subject is an `Option`. A failed
//! `is_not_null` uses the default classifier: the precondition dispatcher's
//! absence check then selects
//! [`ConditionError::NullArgument`](crate::foundation::ConditionError::NullArgument),
//! while a postcondition dispatcher reports the usual postcondition failure.

use crate::foundation::{CheckResult, Validator};

// ============================================================================
// NULLNESS CHECKS
// ============================================================================

/// Checks on `Option` subjects.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// let id = Some(42);
/// assert!(id.requires_named("id").is_not_null().is_ok());
///
/// let missing: Option<i32> = None;
/// let err = missing.requires_named("id").is_not_null().unwrap_err();
/// assert!(matches!(err, ConditionError::NullArgument { .. }));
/// ```
pub trait NullnessChecks<U>: Validator<Option<U>> + Sized {
    /// Checks that the subject is `Some`.
    fn is_not_null(self) -> CheckResult<Self> {
        if self.value().is_some() {
            Ok(self)
        } else {
            let condition = format!("{} should not be null", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject is `None`.
    fn is_null(self) -> CheckResult<Self> {
        if self.value().is_none() {
            Ok(self)
        } else {
            let condition = format!("{} should be null", self.name());
            Err(self.fail(&condition))
        }
    }
}

impl<U, V: Validator<Option<U>>> NullnessChecks<U> for V {}

// ============================================================================
// TESTS
// ============================================================================
