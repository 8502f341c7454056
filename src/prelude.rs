//! Prelude module for convenient imports.
//!
//! Provides a single `use covenant::prelude::*;` import that brings in the
//! entry points, the dispatcher types, every built-in check, and the error
//! types.
//!
//! # Examples
//!
//! ```rust
//! use covenant::prelude::*;
//!
//! fn put(key: &str, slot: usize) -> Result<(), ConditionError> {
//!     key.requires_named("key").is_not_empty()?;
//!     slot.requires_named("slot").is_less_than(16)?;
//!     Ok(())
//! }
//! # assert!(put("a", 3).is_ok());
//! ```

// ============================================================================
// FOUNDATION: entry points, contract, errors
// ============================================================================

pub use crate::contract::Contract;
pub use crate::foundation::{
    Absent, CheckResult, ConditionError, Subject, Validator, ValidatorExt, Violation,
};

// ============================================================================
// DISPATCHERS
// ============================================================================

pub use crate::dispatch::{CustomPrecondition, Otherwise, Postcondition, Precondition};

// ============================================================================
// CHECKS
// ============================================================================

pub use crate::checks::{
    BooleanChecks, CollectionChecks, ComparisonChecks, EvaluationChecks, MembershipChecks,
    NullnessChecks, StringChecks,
};

// ============================================================================
// CUSTOM ERROR TYPES
// ============================================================================

pub use crate::registry::FromMessage;
pub use crate::render::{Render, render};
