//! Dispatchers: the concrete validator variants
//!
//! Each dispatcher implements the
//! [`Validator`](crate::foundation::Validator) contract for one checking
//! context:
//!
//! - [`Precondition`] — argument checks; maps the classifier to one of the
//!   built-in argument error kinds.
//! - [`Postcondition`] — invariant/output checks; always produces
//!   [`ConditionError::PostconditionFailed`](crate::foundation::ConditionError::PostconditionFailed).
//! - [`CustomPrecondition`] — argument checks reported through a
//!   caller-chosen error type.
//! - [`Otherwise`] — wraps any dispatcher to swap the produced error type
//!   while reusing (or overriding) its message text.

pub mod custom;
pub mod fallback;
pub mod postcondition;
pub mod precondition;

pub use custom::CustomPrecondition;
pub use fallback::Otherwise;
pub use postcondition::Postcondition;
pub use precondition::Precondition;

/// Assembles the argument-style diagnostic message: `"{condition}."`, with
/// `" {detail}"` appended when detail is present and non-empty.
pub(crate) fn assemble(condition: &str, detail: Option<&str>) -> String {
    let mut message = format!("{condition}.");
    if let Some(detail) = detail.filter(|detail| !detail.is_empty()) {
        message.push(' ');
        message.push_str(detail);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::assemble;

    #[test]
    fn condition_gains_a_trailing_period() {
        assert_eq!(assemble("count should be even", None), "count should be even.");
    }

    #[test]
    fn detail_is_appended_after_the_period() {
        assert_eq!(
            assemble("count should be even", Some("The actual value is 3.")),
            "count should be even. The actual value is 3."
        );
    }

    #[test]
    fn empty_detail_is_ignored() {
        assert_eq!(assemble("count should be even", Some("")), "count should be even.");
    }
}
