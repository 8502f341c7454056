//! # covenant
//!
//! Fluent precondition and postcondition checking with pluggable error types.
//!
//! ## Quick Start
//!
//! ```rust
//! use covenant::prelude::*;
//!
//! fn take(count: i32) -> Result<i32, ConditionError> {
//!     let count = count
//!         .requires_named("count")
//!         .is_in_range(1, 64)?
//!         .into_inner();
//!     Ok(count)
//! }
//!
//! assert!(take(5).is_ok());
//! assert!(take(0).is_err());
//! ```
//!
//! ## Preconditions and Postconditions
//!
//! [`requires`](contract::Contract::requires) attaches argument checks: a
//! violation produces an argument-flavoured [`ConditionError`] chosen from the
//! failure's [`Violation`] classifier. [`ensures`](contract::Contract::ensures)
//! attaches invariant checks: every violation produces
//! [`ConditionError::PostconditionFailed`], whatever the classifier says.
//!
//! ## Custom Error Types
//!
//! Error types that implement [`FromMessage`](registry::FromMessage) can stand
//! in for the built-in kinds, either for a whole chain
//! ([`requires_custom`](contract::Contract::requires_custom)) or as a fallback
//! wrapped around an existing chain
//! ([`or_raise`](foundation::ValidatorExt::or_raise)).
//!
//! [`ConditionError`]: foundation::ConditionError
//! [`Violation`]: foundation::Violation

// ConditionError is the fundamental error type for every check; boxing it
// would add indirection to every validation call for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod checks;
pub mod contract;
pub mod dispatch;
pub mod foundation;
pub mod prelude;
pub mod registry;
pub mod render;
