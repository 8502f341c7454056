//! Core types and traits for condition checking
//!
//! This module contains the fundamental building blocks of the dispatch
//! system:
//!
//! - **Traits**: [`Validator`], [`ValidatorExt`]
//! - **Errors**: [`ConditionError`], [`Violation`]
//! - **Subject**: [`Subject`], [`Absent`]
//!
//! # Architecture
//!
//! Detection and reporting are deliberately separated. A check detects a
//! failed predicate and describes it (`"count should be between 1 and 3"`,
//! classifier [`Violation::OutOfRange`]); the dispatcher it runs against
//! decides what error that description becomes. The same range check
//! therefore produces [`ConditionError::OutOfRange`] under a precondition
//! dispatcher and [`ConditionError::PostconditionFailed`] under a
//! postcondition dispatcher, without knowing either exists.

pub mod error;
pub mod subject;
pub mod traits;

// Re-export everything at the foundation level for convenience
pub use error::{ConditionError, Violation};
pub use subject::{Absent, Subject};
pub use traits::{Otherwise, Validator, ValidatorExt};

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// The result of running a check against a dispatcher: the same dispatcher on
/// success, a [`ConditionError`] on violation.
pub type CheckResult<V> = Result<V, ConditionError>;

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod foundation_tests {
    use super::*;
    use crate::contract::Contract;

    #[test]
    fn check_result_chains_with_question_mark() {
        fn clamp_width(width: i32) -> CheckResult<i32> {
            use crate::checks::ComparisonChecks;
            let validator = width.requires_named("width").is_at_least(0)?;
            Ok(validator.into_inner())
        }

        assert_eq!(clamp_width(10).unwrap(), 10);
        assert!(clamp_width(-1).is_err());
    }
}
