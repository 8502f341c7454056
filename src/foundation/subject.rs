//! The value binding: a named subject under test
//!
//! A [`Subject`] pairs a value with the display name used in diagnostics. It
//! is created once by an entry point ([`requires`](crate::contract::Contract::requires),
//! [`ensures`](crate::contract::Contract::ensures)) and never mutated
//! afterwards: every dispatcher exposes it read-only.

use std::borrow::Cow;

// ============================================================================
// SUBJECT
// ============================================================================

/// An immutable `(display name, value)` pair owned by one dispatcher.
///
/// Uses `Cow<'static, str>` for the name so the common literal case does not
/// allocate.
#[derive(Debug, Clone)]
pub struct Subject<T> {
    name: Cow<'static, str>,
    value: T,
}

impl<T> Subject<T> {
    /// The display name used when the caller did not supply one.
    pub const DEFAULT_NAME: &'static str = "value";

    /// Creates a subject with an explicit display name.
    pub fn new(name: impl Into<Cow<'static, str>>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Creates a subject with the default display name (`"value"`).
    pub fn unnamed(value: T) -> Self {
        Self::new(Self::DEFAULT_NAME, value)
    }

    /// The display name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value under test.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the subject, returning the value.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }
}

// ============================================================================
// ABSENCE
// ============================================================================

/// How a subject type reports that it holds no value.
///
/// The precondition dispatcher consults this when building a default-kind
/// error: an absent subject produces
/// [`ConditionError::NullArgument`](crate::foundation::ConditionError::NullArgument)
/// instead of the generic argument error.
///
/// `Option<T>` is absent when `None`; the standard scalar, string, and
/// sequence types are never absent. Custom subject types opt in with a
/// one-line impl:
///
/// ```rust
/// use covenant::foundation::Absent;
///
/// struct UserId(u64);
/// impl Absent for UserId {}
/// ```
pub trait Absent {
    /// Returns true when the subject holds no value.
    fn is_absent(&self) -> bool {
        false
    }
}

impl<T> Absent for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

macro_rules! never_absent {
    ($($ty:ty),* $(,)?) => {
        $(impl Absent for $ty {})*
    };
}

never_absent!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl Absent for Cow<'_, str> {}

impl<T> Absent for Vec<T> {}
impl<T> Absent for [T] {}
impl<T, const N: usize> Absent for [T; N] {}

impl<T: Absent + ?Sized> Absent for &T {
    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_is_value() {
        let subject = Subject::unnamed(42);
        assert_eq!(subject.name(), "value");
        assert_eq!(*subject.value(), 42);
    }

    #[test]
    fn explicit_name_is_kept() {
        let subject = Subject::new("count", 7);
        assert_eq!(subject.name(), "count");
    }

    #[test]
    fn into_value_returns_the_subject() {
        let subject = Subject::new("word", String::from("hello"));
        assert_eq!(subject.into_value(), "hello");
    }

    #[test]
    fn option_absence_tracks_none() {
        assert!(None::<i32>.is_absent());
        assert!(!Some(1).is_absent());
    }

    #[test]
    fn scalars_and_sequences_are_never_absent() {
        assert!(!5.is_absent());
        assert!(!"".is_absent());
        assert!(!Cow::Borrowed("").is_absent());
        assert!(!Vec::<u8>::new().is_absent());
    }

    #[test]
    fn references_delegate_absence() {
        let none: &Option<i32> = &None;
        assert!(none.is_absent());
    }
}
