//! String checks
//!
//! Available on any dispatcher whose subject dereferences to `str`
//! (`String`, `&str`, `Cow<str>`, ...). All string violations use the
//! default classifier.

use regex::Regex;

use crate::foundation::{CheckResult, Validator};

// ============================================================================
// STRING CHECKS
// ============================================================================

/// Checks on textual subjects.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
/// use regex::Regex;
///
/// let slug = Regex::new(r"^[a-z0-9-]+$").unwrap();
/// let name = "my-page";
/// assert!(
///     name.requires_named("name")
///         .is_not_empty()
///         .and_then(|v| v.matches(&slug))
///         .is_ok()
/// );
/// ```
pub trait StringChecks<S: AsRef<str>>: Validator<S> + Sized {
    /// Checks that the subject is not the empty string.
    fn is_not_empty(self) -> CheckResult<Self> {
        if self.value().as_ref().is_empty() {
            let condition = format!("{} should not be an empty string", self.name());
            Err(self.fail(&condition))
        } else {
            Ok(self)
        }
    }

    /// Checks that the subject is the empty string.
    fn is_empty(self) -> CheckResult<Self> {
        if self.value().as_ref().is_empty() {
            Ok(self)
        } else {
            let condition = format!("{} should be an empty string", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject is exactly `expected` characters long.
    fn has_length(self, expected: usize) -> CheckResult<Self> {
        if self.value().as_ref().chars().count() == expected {
            Ok(self)
        } else {
            let condition = format!("{} should be {expected} characters long", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject is shorter than `bound` characters.
    fn is_shorter_than(self, bound: usize) -> CheckResult<Self> {
        if self.value().as_ref().chars().count() < bound {
            Ok(self)
        } else {
            let condition = format!("{} should be shorter than {bound} characters", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject is longer than `bound` characters.
    fn is_longer_than(self, bound: usize) -> CheckResult<Self> {
        if self.value().as_ref().chars().count() > bound {
            Ok(self)
        } else {
            let condition = format!("{} should be longer than {bound} characters", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject starts with `prefix`.
    fn starts_with(self, prefix: &str) -> CheckResult<Self> {
        if self.value().as_ref().starts_with(prefix) {
            Ok(self)
        } else {
            let condition = format!("{} should start with '{prefix}'", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject ends with `suffix`.
    fn ends_with(self, suffix: &str) -> CheckResult<Self> {
        if self.value().as_ref().ends_with(suffix) {
            Ok(self)
        } else {
            let condition = format!("{} should end with '{suffix}'", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject contains `fragment`.
    fn contains(self, fragment: &str) -> CheckResult<Self> {
        if self.value().as_ref().contains(fragment) {
            Ok(self)
        } else {
            let condition = format!("{} should contain '{fragment}'", self.name());
            Err(self.fail(&condition))
        }
    }

    /// Checks that the subject matches a pre-compiled pattern.
    fn matches(self, pattern: &Regex) -> CheckResult<Self> {
        if pattern.is_match(self.value().as_ref()) {
            Ok(self)
        } else {
            let condition = format!(
                "{} should match the pattern '{}'",
                self.name(),
                pattern.as_str()
            );
            Err(self.fail(&condition))
        }
    }
}

impl<S: AsRef<str>, V: Validator<S>> StringChecks<S> for V {}

// ============================================================================
// TESTS
// ============================================================================
