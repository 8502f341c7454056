//! Ad-hoc predicate checks
//!
//! The escape hatch for conditions the built-in checks do not cover: the
//! caller supplies the predicate and the condition description.

use crate::foundation::{CheckResult, Validator};

/// Checks a caller-supplied predicate.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// let port = 8080u16;
/// let checked = port
///     .requires_named("port")
///     .satisfies("port should be unprivileged", |p| *p >= 1024);
/// assert!(checked.is_ok());
///
/// let err = 80u16
///     .requires_named("port")
///     .satisfies("port should be unprivileged", |p| *p >= 1024)
///     .unwrap_err();
/// assert_eq!(err.to_string(), "port should be unprivileged. (parameter 'port')");
/// ```
pub trait EvaluationChecks<T>: Validator<T> + Sized {
    /// Checks that `predicate` holds for the subject; on violation the
    /// supplied description becomes the condition text.
    fn satisfies<F>(self, description: &str, predicate: F) -> CheckResult<Self>
    where
        F: FnOnce(&T) -> bool,
    {
        if predicate(self.value()) {
            Ok(self)
        } else {
            Err(self.fail(description))
        }
    }
}

impl<T, V: Validator<T>> EvaluationChecks<T> for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Contract;
    use crate::foundation::ConditionError;

    #[test]
    fn passing_predicate_chains() {
        let validator = 8.requires().satisfies("value should be even", |v| v % 2 == 0);
        assert!(validator.is_ok());
    }

    #[test]
    fn failing_predicate_uses_the_description() {
        let err = 7
            .requires()
            .satisfies("value should be even", |v| v % 2 == 0)
            .unwrap_err();
        assert!(matches!(err, ConditionError::InvalidArgument { .. }));
        assert!(err.to_string().contains("value should be even"));
    }

    #[test]
    fn postcondition_predicate_reports_postcondition_failed() {
        let err = 7
            .ensures()
            .satisfies("value should be even", |v| v % 2 == 0)
            .unwrap_err();
        assert!(matches!(err, ConditionError::PostconditionFailed { .. }));
    }
}
