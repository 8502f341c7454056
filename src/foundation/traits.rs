//! Core traits for the dispatch system
//!
//! [`Validator`] is the error-construction contract every dispatcher
//! implements: it separates *what failed* (a condition description plus a
//! [`Violation`] classifier, supplied by the check) from *what error to
//! produce* (context-dependent policy, supplied by the dispatcher).

use crate::foundation::{ConditionError, Subject, Violation};
use crate::registry::FromMessage;

// ============================================================================
// VALIDATOR TRAIT
// ============================================================================

/// The error-construction contract shared by every dispatcher.
///
/// A dispatcher owns the [`Subject`] under test and turns a failed-condition
/// description into a concrete [`ConditionError`]. Checks call
/// [`build_error`](Validator::build_error) (or the [`fail`](Validator::fail)
/// shorthand) when their predicate does not hold; on success they hand the
/// same dispatcher back to the caller unchanged.
///
/// Building an error never mutates the subject: the contract is pure apart
/// from allocating the message.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// fn is_even<V: Validator<i32>>(validator: V) -> Result<V, ConditionError> {
///     if validator.value() % 2 == 0 {
///         Ok(validator)
///     } else {
///         let condition = format!("{} should be even", validator.name());
///         Err(validator.fail(&condition))
///     }
/// }
///
/// assert!(is_even(4.requires()).is_ok());
/// assert!(is_even(3.requires()).is_err());
/// ```
pub trait Validator<T> {
    /// Read-only access to the subject under test.
    fn subject(&self) -> &Subject<T>;

    /// Builds the error for a violated condition.
    ///
    /// This is the single extension point separating detection from
    /// reporting. `detail`, when present and non-empty, is always appended to
    /// the assembled message, never dropped. How `violation` influences the
    /// produced error kind is the dispatcher's policy.
    fn build_error(
        &self,
        condition: &str,
        detail: Option<&str>,
        violation: Violation,
    ) -> ConditionError;

    /// Builds the error for a plain violated condition.
    ///
    /// Shorthand for the full contract with no detail and the
    /// [`Violation::Default`] classifier.
    fn fail(&self, condition: &str) -> ConditionError {
        self.build_error(condition, None, Violation::Default)
    }

    /// The subject's display name.
    fn name<'a>(&'a self) -> &'a str
    where
        T: 'a,
    {
        self.subject().name()
    }

    /// The value under test.
    fn value(&self) -> &T {
        self.subject().value()
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every dispatcher.
///
/// Automatically implemented for all [`Validator`] implementations; provides
/// the fallback entry point that swaps the produced error type while keeping
/// the wrapped dispatcher's checks and message text.
pub trait ValidatorExt<T>: Validator<T> + Sized {
    /// Wraps this dispatcher so violations produce `E` instead.
    ///
    /// The wrapped dispatcher still assembles the diagnostic message; only
    /// its choice of error kind is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use covenant::prelude::*;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("{0}")]
    /// struct QuotaError(String);
    ///
    /// impl FromMessage for QuotaError {
    ///     fn from_message(message: String) -> Self {
    ///         Self(message)
    ///     }
    /// }
    ///
    /// let err = 99
    ///     .requires_named("count")
    ///     .or_raise::<QuotaError>()
    ///     .is_at_most(64)
    ///     .unwrap_err();
    /// assert!(err.custom_as::<QuotaError>().is_some());
    /// ```
    fn or_raise<E: FromMessage>(self) -> Otherwise<Self, E> {
        Otherwise::new(self, None)
    }

    /// Like [`or_raise`](ValidatorExt::or_raise), but with an override
    /// message used verbatim instead of the wrapped dispatcher's text.
    fn or_raise_with<E: FromMessage>(self, message: impl Into<String>) -> Otherwise<Self, E> {
        Otherwise::new(self, Some(message.into()))
    }
}

impl<T, V: Validator<T>> ValidatorExt<T> for V {}

// ============================================================================
// IMPORT DISPATCHER TYPES
// ============================================================================
// Import the actual wrapper implementation instead of duplicating it

pub use crate::dispatch::fallback::Otherwise;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Contract;

    #[test]
    fn fail_uses_default_classifier_and_no_detail() {
        let validator = 7.requires_named("count");
        let err = validator.fail("count should be even");
        assert!(matches!(err, ConditionError::InvalidArgument { .. }));
        assert_eq!(err.to_string(), "count should be even. (parameter 'count')");
    }

    #[test]
    fn accessors_expose_the_subject() {
        let validator = 7.requires_named("count");
        assert_eq!(validator.name(), "count");
        assert_eq!(*validator.value(), 7);
    }

    #[test]
    fn accessors_work_through_a_generic_seam() {
        fn describe<T, V: Validator<T>>(validator: &V) -> String {
            validator.name().to_owned()
        }

        let text = String::from("hello");
        let borrowed = text.as_str().requires_named("text");
        assert_eq!(describe(&borrowed), "text");
        assert_eq!(describe(&7.ensures_named("count")), "count");
    }
}
