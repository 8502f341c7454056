//! Type-keyed constructor registry for caller-chosen error types
//!
//! Custom error types participate in dispatch through [`FromMessage`], a
//! compile-time capability replacing any runtime constructor discovery. The
//! registry erases that capability into a plain function pointer and caches
//! the binding per [`TypeId`], so dispatchers and wrappers can hold a
//! constructor without dragging the error type parameter through their own
//! signatures.
//!
//! # Resolution semantics
//!
//! A binding is computed at most once per type for the process lifetime and
//! never invalidated:
//!
//! - [`resolve`] is the typed path: the first call for `E` records its
//!   constructor, every later call returns the cached binding.
//! - [`probe`] is the dynamic path: it looks up a type *without* requiring
//!   the capability. Probing a type that was never registered pins a
//!   permanent [`Resolution::Absent`]: a later registration attempt has no
//!   effect, and every dispatcher built for that type fails the same way on
//!   every violation. A missing binding is a configuration mistake, not a
//!   runtime condition, so it is deliberately not retried.
//! - [`register`] pre-seeds a binding so a later probe finds it.
//!
//! Concurrent first use of the same key observes a single deterministic
//! outcome: the map sits behind one mutex and the binding is computed inside
//! the critical section.

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

// ============================================================================
// FROM-MESSAGE CAPABILITY
// ============================================================================

/// Capability of error types that can be built from a single message text.
///
/// Implementing this is all a caller-chosen error type needs to stand in for
/// the built-in error kinds.
///
/// # Examples
///
/// ```rust
/// use covenant::registry::FromMessage;
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct TenantError(String);
///
/// impl FromMessage for TenantError {
///     fn from_message(message: String) -> Self {
///         Self(message)
///     }
/// }
/// ```
pub trait FromMessage: std::error::Error + Send + Sync + Sized + 'static {
    /// Builds the error from an assembled diagnostic message.
    fn from_message(message: String) -> Self;
}

/// An erased [`FromMessage`] constructor, as cached by the registry.
pub type ErasedConstructor = fn(String) -> Box<dyn std::error::Error + Send + Sync>;

// ============================================================================
// RESOLUTION
// ============================================================================

/// The cached outcome of a constructor lookup for one error type.
#[derive(Debug, Clone, Copy)]
pub enum Resolution {
    /// The type can be built from a message through this constructor.
    Present(ErasedConstructor),
    /// The type has no message constructor binding; permanent for the
    /// process lifetime.
    Absent,
}

impl Resolution {
    /// The constructor, when the binding is present.
    #[must_use]
    pub fn constructor(self) -> Option<ErasedConstructor> {
        match self {
            Self::Present(build) => Some(build),
            Self::Absent => None,
        }
    }

    /// True when the binding is present.
    #[must_use]
    pub fn is_present(self) -> bool {
        matches!(self, Self::Present(_))
    }
}

// ============================================================================
// REGISTRY
// ============================================================================

static BINDINGS: OnceLock<Mutex<HashMap<TypeId, Resolution>>> = OnceLock::new();

fn bindings() -> MutexGuard<'static, HashMap<TypeId, Resolution>> {
    BINDINGS
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

fn construct<E: FromMessage>(message: String) -> Box<dyn std::error::Error + Send + Sync> {
    Box::new(E::from_message(message))
}

/// Resolves the constructor binding for `E`, computing it at most once.
///
/// The first call for a given `E` records its erased constructor; every later
/// call, from any thread, returns that same binding. If an earlier negative
/// [`probe`] already pinned `E` as absent, that outcome stands.
pub fn resolve<E: FromMessage>() -> Resolution {
    *bindings()
        .entry(TypeId::of::<E>())
        .or_insert(Resolution::Present(construct::<E>))
}

/// Looks up the binding for `E` without requiring the capability.
///
/// A type never seen before is permanently recorded as
/// [`Resolution::Absent`]. Use [`register`] beforehand when the type is
/// supplied dynamically.
pub fn probe<E: 'static + ?Sized>() -> Resolution {
    *bindings()
        .entry(TypeId::of::<E>())
        .or_insert(Resolution::Absent)
}

/// Pre-seeds the binding for `E`.
///
/// Returns whether the binding is present after the call: false only when an
/// earlier negative probe already pinned the type as absent.
pub fn register<E: FromMessage>() -> bool {
    bindings()
        .entry(TypeId::of::<E>())
        .or_insert(Resolution::Present(construct::<E>))
        .is_present()
}

/// Builds a custom-error dispatcher for `value` through the dynamic path.
///
/// The returned dispatcher constructs `E` on violation when a binding for `E`
/// exists; otherwise every violation surfaces the same
/// [`ConditionError::UnsupportedErrorType`](crate::foundation::ConditionError::UnsupportedErrorType).
pub fn validator_for<E: 'static, T>(
    value: T,
    name: impl Into<std::borrow::Cow<'static, str>>,
) -> crate::dispatch::CustomPrecondition<T> {
    crate::dispatch::CustomPrecondition::probing::<E>(crate::foundation::Subject::new(name, value))
}

// ============================================================================
// TESTS
// ============================================================================
