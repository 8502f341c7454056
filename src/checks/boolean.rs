//! Boolean checks

use crate::foundation::{CheckResult, Validator};

/// Checks on boolean subjects.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// let ready = true;
/// assert!(ready.requires_named("ready").is_true().is_ok());
/// assert!(false.requires_named("ready").is_true().is_err());
/// ```
pub trait BooleanChecks: Validator<bool> + Sized {
    /// Checks that the subject is `true`.
    fn is_true(self) -> CheckResult<Self> {
        if *self.value() {
            Ok(self)
        } else {
            let condition = format!("{} should be true", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject is `false`.
    fn is_false(self) -> CheckResult<Self> {
        if *self.value() {
            let condition = format!("{} should be false", self.name());
            Err(self.fail(&condition))
        } else {
            Ok(self)
        }
    }
}

impl<V: Validator<bool>> BooleanChecks for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::Contract;
    use crate::foundation::ConditionError;

    #[test]
    fn truth_checks() {
        assert!(true.requires().is_true().is_ok());
        assert!(false.requires().is_false().is_ok());
        assert!(false.requires().is_true().is_err());
        assert!(true.requires().is_false().is_err());
    }

    #[test]
    fn violation_message_names_the_subject() {
        let err = false.requires_named("enabled").is_true().unwrap_err();
        assert!(matches!(err, ConditionError::InvalidArgument { .. }));
        assert_eq!(
            err.to_string(),
            "enabled should be true. (parameter 'enabled')"
        );
    }
}
