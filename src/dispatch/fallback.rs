//! Fallback wrapper: swap the produced error type, keep the message
//!
//! The dispatcher behind
//! [`or_raise`](crate::foundation::ValidatorExt::or_raise). It wraps an
//! existing dispatcher so that on violation the caller-chosen error type is
//! produced instead: "run the normal check, but if it fails, raise *this*
//! type of error with *this* text (or the normal text)".

use std::any::type_name;
use std::marker::PhantomData;

use crate::foundation::{ConditionError, Subject, Validator, Violation};
use crate::registry::{self, FromMessage, Resolution};

// ============================================================================
// OTHERWISE
// ============================================================================

/// Wraps a dispatcher so violations produce `E`.
///
/// Without an override message, the wrapped dispatcher's contract is invoked
/// to obtain its fully rendered message text; its chosen error kind is
/// discarded and only the text is reused. With an override, that text is used
/// verbatim instead.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct BatchError(String);
///
/// impl FromMessage for BatchError {
///     fn from_message(message: String) -> Self {
///         Self(message)
///     }
/// }
///
/// let err = 0
///     .requires_named("count")
///     .or_raise_with::<BatchError>("batch rejected")
///     .is_greater_than(0)
///     .unwrap_err();
/// assert_eq!(err.custom_as::<BatchError>().unwrap().0, "batch rejected");
/// ```
#[derive(Debug, Clone)]
pub struct Otherwise<V, E> {
    inner: V,
    override_message: Option<String>,
    resolution: Resolution,
    error_type: &'static str,
    marker: PhantomData<fn() -> E>,
}

impl<V, E: FromMessage> Otherwise<V, E> {
    pub(crate) fn new(inner: V, override_message: Option<String>) -> Self {
        Self {
            inner,
            override_message,
            resolution: registry::resolve::<E>(),
            error_type: type_name::<E>(),
            marker: PhantomData,
        }
    }

    /// The wrapped dispatcher.
    #[must_use]
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Consumes the wrapper, returning the wrapped dispatcher.
    #[must_use]
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<T, V: Validator<T>, E: FromMessage> Validator<T> for Otherwise<V, E> {
    fn subject(&self) -> &Subject<T> {
        self.inner.subject()
    }

    fn build_error(
        &self,
        condition: &str,
        detail: Option<&str>,
        violation: Violation,
    ) -> ConditionError {
        let message = match &self.override_message {
            Some(text) => text.clone(),
            None => self
                .inner
                .build_error(condition, detail, violation)
                .to_string(),
        };
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
    use crate::foundation::ValidatorExt;
    use pretty_assertions::assert_eq;

    #[derive(Debug, thiserror::Error)]
    #[error("{0}")]
    struct WrapError(String);

    impl FromMessage for WrapError {
        fn from_message(message: String) -> Self {
            Self(message)
        }
    }

    #[test]
    fn without_override_the_inner_text_is_reused_verbatim() {
        let base = 5.requires_named("count");
        let expected = base.fail("count should be even").to_string();

        let wrapped = base.or_raise::<WrapError>();
        let err = wrapped.fail("count should be even");
        assert_eq!(err.custom_as::<WrapError>().unwrap().0, expected);
    }

    #[test]
    fn with_override_the_text_is_used_verbatim() {
        let err = 5
            .requires_named("count")
            .or_raise_with::<WrapError>("nope")
            .fail("count should be even");
        assert_eq!(err.custom_as::<WrapError>().unwrap().0, "nope");
    }

    #[test]
    fn subject_is_delegated_to_the_inner_dispatcher() {
        let wrapped = 5.requires_named("count").or_raise::<WrapError>();
        assert_eq!(wrapped.name(), "count");
        assert_eq!(*wrapped.value(), 5);
    }

    #[test]
    fn wrappers_nest() {
        let err = 5
            .requires_named("count")
            .or_raise::<WrapError>()
            .or_raise_with::<WrapError>("outermost wins")
            .fail("count should be even");
        assert_eq!(err.custom_as::<WrapError>().unwrap().0, "outermost wins");
    }
}
