//! Entry points: attaching a dispatcher to a value
//!
//! [`Contract`] is blanket-implemented for every type, so any value can open
//! a check chain: `requires` for argument checks, `ensures` for
//! invariant/output checks, `requires_custom` for argument checks reported
//! through a caller-chosen error type. The `_named` variants override the
//! default display name (`"value"`).

use std::borrow::Cow;

use crate::dispatch::{CustomPrecondition, Postcondition, Precondition};
use crate::foundation::Subject;
use crate::registry::FromMessage;

// ============================================================================
// CONTRACT TRAIT
// ============================================================================

/// Opens a fluent check chain on any value.
///
/// # Examples
///
/// ```rust
/// use covenant::prelude::*;
///
/// fn resize(width: u32, label: &str) -> Result<(), ConditionError> {
///     width.requires_named("width").is_in_range(1, 4096)?;
///     label.requires_named("label").is_not_empty()?;
///     Ok(())
/// }
///
/// assert!(resize(640, "thumbnail").is_ok());
/// assert!(resize(0, "thumbnail").is_err());
/// ```
pub trait Contract: Sized {
    /// Starts an argument check chain with the default display name.
    fn requires(self) -> Precondition<Self> {
        Precondition::new(Subject::unnamed(self))
    }

    /// Starts an argument check chain with an explicit display name.
    fn requires_named(self, name: impl Into<Cow<'static, str>>) -> Precondition<Self> {
        Precondition::new(Subject::new(name, self))
    }

    /// Starts an invariant check chain with the default display name.
    fn ensures(self) -> Postcondition<Self> {
        Postcondition::new(Subject::unnamed(self), None)
    }

    /// Starts an invariant check chain with an explicit display name.
    fn ensures_named(self, name: impl Into<Cow<'static, str>>) -> Postcondition<Self> {
        Postcondition::new(Subject::new(name, self), None)
    }

    /// Starts an invariant check chain that appends free text to every
    /// violation message.
    fn ensures_explained(
        self,
        name: impl Into<Cow<'static, str>>,
        explanation: impl Into<String>,
    ) -> Postcondition<Self> {
        Postcondition::new(Subject::new(name, self), Some(explanation.into()))
    }

    /// Starts an argument check chain reported through `E`.
    fn requires_custom<E: FromMessage>(self) -> CustomPrecondition<Self> {
        CustomPrecondition::of::<E>(Subject::unnamed(self))
    }

    /// Starts an argument check chain reported through `E`, with an explicit
    /// display name.
    fn requires_custom_named<E: FromMessage>(
        self,
        name: impl Into<Cow<'static, str>>,
    ) -> CustomPrecondition<Self> {
        CustomPrecondition::of::<E>(Subject::new(name, self))
    }
}

impl<T> Contract for T {}

// ============================================================================
// TESTS
// ============================================================================
