//! Error types for condition violations
//!
//! Every check in this crate reports failure through [`ConditionError`]. The
//! variant is chosen by the dispatcher that built the error, not by the check
//! that detected the failure: checks only supply a condition description and a
//! [`Violation`] classifier.

use std::fmt;

// ============================================================================
// VIOLATION CLASSIFIER
// ============================================================================

/// Describes *why* a check failed.
///
/// The classifier is chosen by the check that detected the failure and
/// consumed only at error-construction time. It carries no data itself; it is
/// a hint that lets a precondition dispatcher pick the error kind that best
/// describes the violation.
///
/// Postcondition dispatchers ignore the classifier entirely: postconditions
/// have no "kind", only pass/fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Violation {
    /// A plain failed condition with no more specific shape.
    #[default]
    Default,
    /// The value fell outside an expected range or ordering bound.
    OutOfRange,
    /// The value is not a member of an expected enumeration.
    InvalidEnum,
}

// ============================================================================
// CONDITION ERROR
// ============================================================================

/// The error produced when a condition is violated.
///
/// Argument-flavoured variants carry the subject's display name next to the
/// assembled message; their rendered form appends `(parameter '<name>')` so a
/// diagnostic always identifies the offending argument.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// let err = 0.requires_named("count").is_in_range(1, 3).unwrap_err();
/// assert!(matches!(err, ConditionError::OutOfRange { .. }));
/// assert!(err.to_string().contains("count"));
/// ```
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConditionError {
    /// A required value was absent (`None`).
    #[error("{message} (parameter '{name}')")]
    NullArgument {
        /// Display name of the subject.
        name: String,
        /// Assembled diagnostic message.
        message: String,
    },

    /// A value failed a generic argument check.
    #[error("{message} (parameter '{name}')")]
    InvalidArgument {
        /// Display name of the subject.
        name: String,
        /// Assembled diagnostic message.
        message: String,
    },

    /// A value fell outside an expected range.
    #[error("{message} (parameter '{name}')")]
    OutOfRange {
        /// Display name of the subject.
        name: String,
        /// Assembled diagnostic message.
        message: String,
    },

    /// A value is not a member of an expected enumeration.
    ///
    /// The message already carries the full argument-error rendering
    /// (including the parameter phrasing), so `Display` emits it as-is.
    #[error("{message}")]
    InvalidEnum {
        /// Display name of the subject.
        name: String,
        /// Fully rendered diagnostic message.
        message: String,
    },

    /// An invariant or output check failed.
    #[error("{message}")]
    PostconditionFailed {
        /// Assembled diagnostic message.
        message: String,
    },

    /// A caller-chosen error type, built through the constructor registry.
    #[error(transparent)]
    Custom(Box<dyn std::error::Error + Send + Sync>),

    /// The caller-chosen error type has no message constructor binding.
    ///
    /// This is a defect in caller setup, not a validated condition: the
    /// outcome is deterministic and identical on every violation for a given
    /// target type.
    #[error("error type '{error_type}' cannot be built from a message text")]
    UnsupportedErrorType {
        /// Fully qualified name of the unusable target type.
        error_type: &'static str,
    },
}

impl ConditionError {
    /// Returns the subject's display name, for argument-flavoured variants.
    #[must_use]
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::NullArgument { name, .. }
            | Self::InvalidArgument { name, .. }
            | Self::OutOfRange { name, .. }
            | Self::InvalidEnum { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Downcasts a [`ConditionError::Custom`] payload to a concrete type.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let err: ConditionError = /* built through requires_custom::<MyError> */;
    /// let my: &MyError = err.custom_as::<MyError>().unwrap();
    /// ```
    #[must_use]
    pub fn custom_as<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Custom(inner) => inner.downcast_ref::<E>(),
            _ => None,
        }
    }

    /// True for errors that report a violated condition, false for
    /// [`ConditionError::UnsupportedErrorType`], which reports broken caller
    /// setup instead.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        !matches!(self, Self::UnsupportedErrorType { .. })
    }

    /// Stable identifier of the error kind.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NullArgument { .. } => "null_argument",
            Self::InvalidArgument { .. } => "invalid_argument",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidEnum { .. } => "invalid_enum",
            Self::PostconditionFailed { .. } => "postcondition_failed",
            Self::Custom(_) => "custom",
            Self::UnsupportedErrorType { .. } => "unsupported_error_type",
        }
    }

    /// Converts the error to a JSON value (for structured reporting).
    #[cfg(feature = "serde")]
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        json!({
            "kind": self.kind(),
            "parameter": self.parameter(),
            "message": self.to_string(),
        })
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Default => "default",
            Self::OutOfRange => "out-of-range",
            Self::InvalidEnum => "invalid-enum",
        };
        f.write_str(text)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn argument_errors_render_parameter_name() {
        let err = ConditionError::InvalidArgument {
            name: "count".into(),
            message: "count should be positive.".into(),
        };
        assert_eq!(
            err.to_string(),
            "count should be positive. (parameter 'count')"
        );
    }

    #[test]
    fn postcondition_renders_message_only() {
        let err = ConditionError::PostconditionFailed {
            message: "Postcondition 'count should be positive' failed.".into(),
        };
        assert!(!err.to_string().contains("parameter"));
    }

    #[test]
    fn parameter_is_present_for_argument_kinds_only() {
        let arg = ConditionError::NullArgument {
            name: "id".into(),
            message: "id should not be null.".into(),
        };
        assert_eq!(arg.parameter(), Some("id"));

        let post = ConditionError::PostconditionFailed {
            message: "failed".into(),
        };
        assert_eq!(post.parameter(), None);
    }

    #[test]
    fn unsupported_error_type_is_not_a_violation() {
        let err = ConditionError::UnsupportedErrorType { error_type: "X" };
        assert!(!err.is_violation());
        assert!(
            ConditionError::PostconditionFailed {
                message: String::new()
            }
            .is_violation()
        );
    }

    #[test]
    fn custom_as_downcasts() {
        #[derive(Debug, thiserror::Error)]
        #[error("{0}")]
        struct Local(String);

        let err = ConditionError::Custom(Box::new(Local("boom".into())));
        assert_eq!(err.custom_as::<Local>().unwrap().0, "boom");
        assert!(err.custom_as::<fmt::Error>().is_none());
    }

    #[test]
    fn default_classifier_is_default() {
        assert_eq!(Violation::default(), Violation::Default);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn to_json_value_carries_kind_and_parameter() {
        let err = ConditionError::OutOfRange {
            name: "count".into(),
            message: "count should be between 1 and 3.".into(),
        };
        let value = err.to_json_value();
        assert_eq!(value["kind"], "out_of_range");
        assert_eq!(value["parameter"], "count");
    }
}
