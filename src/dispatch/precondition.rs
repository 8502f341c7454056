//! Precondition dispatcher: argument checks
//!
//! The dispatcher behind [`requires`](crate::contract::Contract::requires).
//! The [`Violation`] classifier selects the produced error kind; the
//! classifier arms are mutually exclusive refinements evaluated before the
//! default arm's absence check, so an out-of-range violation on an absent
//! subject still reports [`ConditionError::OutOfRange`].

use crate::dispatch::assemble;
use crate::foundation::{Absent, ConditionError, Subject, Validator, Violation};

// ============================================================================
// PRECONDITION
// ============================================================================

/// Argument-checking dispatcher.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// let err = None::<i32>.requires().is_not_null().unwrap_err();
/// assert!(matches!(err, ConditionError::NullArgument { .. }));
/// assert!(err.to_string().contains("value"));
/// ```
#[derive(Debug, Clone)]
pub struct Precondition<T> {
    subject: Subject<T>,
}

impl<T> Precondition<T> {
    pub(crate) fn new(subject: Subject<T>) -> Self {
        Self { subject }
    }

    /// Consumes the dispatcher, returning the checked value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.subject.into_value()
    }
}

impl<T: Absent> Validator<T> for Precondition<T> {
    fn subject(&self) -> &Subject<T> {
        &self.subject
    }

    fn build_error(
        &self,
        condition: &str,
        detail: Option<&str>,
        violation: Violation,
    ) -> ConditionError {
        let name = self.subject.name().to_owned();
        let message = assemble(condition, detail);

        match violation {
            Violation::OutOfRange => ConditionError::OutOfRange { name, message },
            Violation::InvalidEnum => {
                // Reuse the generic argument error's rendering so the
                // parameter phrasing stays consistent with the default case.
                let rendered = ConditionError::InvalidArgument {
                    name: name.clone(),
                    message,
                }
                .to_string();
                ConditionError::InvalidEnum {
                    name,
                    message: rendered,
                }
            }
            Violation::Default if self.subject.value().is_absent() => {
                ConditionError::NullArgument { name, message }
            }
            Violation::Default => ConditionError::InvalidArgument { name, message },
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
