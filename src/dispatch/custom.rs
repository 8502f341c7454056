//! Custom-error dispatcher: argument checks reported through a caller type
//!
//! The dispatcher behind
//! [`requires_custom`](crate::contract::Contract::requires_custom) and the
//! dynamic [`validator_for`](crate::registry::validator_for) entry. It
//! assembles messages the way [`Precondition`](super::Precondition) does, but
//! instead of selecting among the built-in error kinds it invokes the
//! constructor binding cached in the [registry](crate::registry).

use std::any::type_name;

use crate::dispatch::assemble;
use crate::foundation::{ConditionError, Subject, Validator, Violation};
use crate::registry::{self, FromMessage, Resolution};

// ============================================================================
// CUSTOM PRECONDITION
// ============================================================================

/// Argument-checking dispatcher that produces a caller-chosen error type.
///
/// The error type is erased at construction: the dispatcher holds the
/// registry's cached [`Resolution`] rather than a type parameter. When the
/// resolution is absent, every violation deterministically surfaces
/// [`ConditionError::UnsupportedErrorType`] naming the target type, so a
/// configuration mistake is reported the same way on every call and never
/// confused with a validation failure.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct LimitError(String);
///
/// impl FromMessage for LimitError {
///     fn from_message(message: String) -> Self {
///         Self(message)
///     }
/// }
///
/// let err = 99
///     .requires_custom_named::<LimitError>("count")
///     .is_at_most(64)
///     .unwrap_err();
/// assert!(err.custom_as::<LimitError>().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct CustomPrecondition<T> {
    subject: Subject<T>,
    resolution: Resolution,
    error_type: &'static str,
}

impl<T> CustomPrecondition<T> {
    /// Creates the dispatcher for a type known to carry the
    /// [`FromMessage`] capability; resolution cannot be absent here unless a
    /// prior negative probe pinned it.
    pub(crate) fn of<E: FromMessage>(subject: Subject<T>) -> Self {
        Self {
            subject,
            resolution: registry::resolve::<E>(),
            error_type: type_name::<E>(),
        }
    }

    /// Creates the dispatcher through the dynamic path: the registry is
    /// probed, and a type without a binding is permanently absent.
    pub(crate) fn probing<E: 'static>(subject: Subject<T>) -> Self {
        Self {
            subject,
            resolution: registry::probe::<E>(),
            error_type: type_name::<E>(),
        }
    }

    /// Whether a constructor binding was found for the target type.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolution.is_present()
    }

    /// Consumes the dispatcher, returning the checked value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.subject.into_value()
    }
}

impl<T> Validator<T> for CustomPrecondition<T> {
    fn subject(&self) -> &Subject<T> {
        &self.subject
    }

    // The classifier is unused: the caller chose one error type for every
    // kind of violation.
    fn build_error(
        &self,
        condition: &str,
        detail: Option<&str>,
        _violation: Violation,
    ) -> ConditionError {
        let message = assemble(condition, detail);
        match self.resolution.constructor() {
            Some(build) => ConditionError::Custom(build(message)),
            None => ConditionError::UnsupportedErrorType {
                error_type: self.error_type,
            },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Contract;
    use crate::registry::validator_for;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct DomainError(String);

    impl FromMessage for DomainError {
        fn from_message(message: String) -> Self {
            Self(message)
        }
    }

    #[test]
    fn violations_build_the_target_type() {
        let validator = 5.requires_custom_named::<DomainError>("count");
        let err = validator.fail("count should be even");
        let domain = err.custom_as::<DomainError>().unwrap();
        assert_eq!(domain.0, "count should be even.");
    }

    #[test]
    fn classifier_does_not_change_the_target_type() {
        let validator = 5.requires_custom_named::<DomainError>("count");
        let err = validator.build_error("count should be small", None, Violation::OutOfRange);
        assert!(err.custom_as::<DomainError>().is_some());
    }

    #[test]
    fn unresolved_type_fails_the_same_way_every_time() {
        struct NotAnError;

        let validator = validator_for::<NotAnError, _>(5, "count");
        assert!(!validator.is_resolved());
        for _ in 0..2 {
            let err = validator.fail("count should be even");
            assert!(matches!(err, ConditionError::UnsupportedErrorType { .. }));
            assert!(!err.is_violation());
        }
    }

    #[test]
    fn dynamic_path_finds_registered_types() {
        registry::register::<DomainError>();
        let validator = validator_for::<DomainError, _>(5, "count");
        assert!(validator.is_resolved());
    }
}
