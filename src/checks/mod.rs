//! Built-in checks
//!
//! Checks are the external collaborators of the dispatch core: each one runs
//! a predicate against the dispatcher's subject and, on failure, calls the
//! dispatcher's error-construction contract with a condition description and
//! a [`Violation`](crate::foundation::Violation) classifier. On success it
//! returns the same dispatcher unchanged, so checks chain with `?`.
//!
//! # Categories
//!
//! - **Nullness**: [`is_not_null`](NullnessChecks::is_not_null),
//!   [`is_null`](NullnessChecks::is_null)
//! - **Comparison**: [`is_in_range`](ComparisonChecks::is_in_range),
//!   [`is_greater_than`](ComparisonChecks::is_greater_than),
//!   [`is_equal_to`](ComparisonChecks::is_equal_to), ...
//! - **Membership**: [`is_any_of`](MembershipChecks::is_any_of)
//! - **String**: [`is_not_empty`](StringChecks::is_not_empty),
//!   [`starts_with`](StringChecks::starts_with),
//!   [`matches`](StringChecks::matches), ...
//! - **Collection**: [`has_any`](CollectionChecks::has_any),
//!   [`has_count`](CollectionChecks::has_count), ...
//! - **Boolean**: [`is_true`](BooleanChecks::is_true),
//!   [`is_false`](BooleanChecks::is_false)
//! - **Evaluation**: [`satisfies`](EvaluationChecks::satisfies) — the escape
//!   hatch for ad-hoc predicates
//!
//! # Examples
//!
//! ```rust
//! use covenant::prelude::*;
//!
//! let tags = vec!["a", "b"];
//! let checked = tags
//!     .requires_named("tags")
//!     .has_any()
//!     .and_then(|v| v.has_fewer_than(10));
//! assert!(checked.is_ok());
//! ```

pub mod boolean;
pub mod collection;
pub mod comparison;
pub mod evaluation;
pub mod membership;
pub mod nullness;
pub mod string;

pub use boolean::BooleanChecks;
pub use collection::CollectionChecks;
pub use comparison::ComparisonChecks;
pub use evaluation::EvaluationChecks;
pub use membership::MembershipChecks;
pub use nullness::NullnessChecks;
pub use string::StringChecks;
