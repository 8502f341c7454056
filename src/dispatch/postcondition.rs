//! Postcondition dispatcher: invariant and output checks
//!
//! The dispatcher behind [`ensures`](crate::contract::Contract::ensures).
//! Whatever check fails, the produced error is
//! [`ConditionError::PostconditionFailed`]; the classifier argument is
//! deliberately unused because postconditions have no "kind", only pass/fail.

use crate::foundation::{ConditionError, Subject, Validator, Violation};

// ============================================================================
// POSTCONDITION
// ============================================================================

/// Invariant-checking dispatcher.
///
/// Optionally carries caller-supplied free text, appended after the assembled
/// message on every violation.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// let err = 5.ensures_named("count").is_in_range(1, 3).unwrap_err();
/// assert!(matches!(err, ConditionError::PostconditionFailed { .. }));
/// assert!(err.to_string().starts_with("Postcondition '"));
/// ```
#[derive(Debug, Clone)]
pub struct Postcondition<T> {
    subject: Subject<T>,
    explanation: Option<String>,
}

impl<T> Postcondition<T> {
    pub(crate) fn new(subject: Subject<T>, explanation: Option<String>) -> Self {
        Self {
            subject,
            explanation,
        }
    }

    /// Consumes the dispatcher, returning the checked value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.subject.into_value()
    }
}

impl<T> Validator<T> for Postcondition<T> {
    fn subject(&self) -> &Subject<T> {
        &self.subject
    }

    // `violation` is intentionally ignored: checks may pass any classifier
    // and it has no effect on the produced error.
    fn build_error(
        &self,
        condition: &str,
        detail: Option<&str>,
        _violation: Violation,
    ) -> ConditionError {
        let mut message = format!("Postcondition '{condition}' failed.");
        if let Some(detail) = detail.filter(|detail| !detail.is_empty()) {
            message.push(' ');
            message.push_str(detail);
        }
        if let Some(explanation) = &self.explanation {
            message.push(' ');
            message.push_str(explanation);
        }
        ConditionError::PostconditionFailed { message }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Contract;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_classifier_produces_postcondition_failed() {
        let validator = 5.ensures_named("count");
        for violation in [
            Violation::Default,
            Violation::OutOfRange,
            Violation::InvalidEnum,
        ] {
            let err = validator.build_error("count should be even", None, violation);
            assert!(matches!(err, ConditionError::PostconditionFailed { .. }));
        }
    }

    #[test]
    fn message_is_prefixed_and_quoted() {
        let err = 5.ensures_named("count").fail("count should be even");
        assert_eq!(err.to_string(), "Postcondition 'count should be even' failed.");
    }

    #[test]
    fn detail_and_explanation_are_appended_in_order() {
        let err = 5
            .ensures_explained("count", "Check the batch size.")
            .build_error(
                "count should be even",
                Some("The actual value is 5."),
                Violation::Default,
            );
        assert_eq!(
            err.to_string(),
            "Postcondition 'count should be even' failed. The actual value is 5. Check the batch size."
        );
    }
}
