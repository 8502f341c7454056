//! Diagnostic rendering of subject values
//!
//! Checks embed the values they compare against into condition descriptions;
//! [`Render`] produces that text. It is a pure function of the value:
//!
//! - absent options render as `null`, present ones as their inner value,
//! - textual values are wrapped in single quotes (`'a'`),
//! - sequences are rendered recursively, comma-joined and wrapped in braces
//!   (`{1,2,3}`, empty `{}`),
//! - everything else uses its `Display` form.

use std::borrow::Cow;

// ============================================================================
// RENDER TRAIT
// ============================================================================

/// Renders a value into diagnostic text.
pub trait Render {
    /// Produces the diagnostic form of the value.
    fn render(&self) -> String;
}

/// Renders a value into diagnostic text (free-function form).
///
/// # Examples
///
/// ```rust
/// use covenant::render::render;
///
/// assert_eq!(render(&None::<i32>), "null");
/// assert_eq!(render("a"), "'a'");
/// assert_eq!(render(&vec![1, 2, 3]), "{1,2,3}");
/// assert_eq!(render(&Vec::<i32>::new()), "{}");
/// ```
pub fn render<T: Render + ?Sized>(value: &T) -> String {
    value.render()
}

// ============================================================================
// SCALAR IMPLEMENTATIONS
// ============================================================================

macro_rules! render_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

render_via_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);

impl Render for str {
    fn render(&self) -> String {
        format!("'{self}'")
    }
}

impl Render for String {
    fn render(&self) -> String {
        self.as_str().render()
    }
}

impl Render for char {
    fn render(&self) -> String {
        format!("'{self}'")
    }
}

impl Render for Cow<'_, str> {
    fn render(&self) -> String {
        self.as_ref().render()
    }
}

// ============================================================================
// STRUCTURED IMPLEMENTATIONS
// ============================================================================

impl<T: Render> Render for Option<T> {
    fn render(&self) -> String {
        match self {
            Some(value) => value.render(),
            None => String::from("null"),
        }
    }
}

impl<T: Render> Render for [T] {
    fn render(&self) -> String {
        let mut out = String::from("{");
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            out.push_str(&item.render());
        }
        out.push('}');
        out
    }
}

impl<T: Render> Render for Vec<T> {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<T: Render, const N: usize> Render for [T; N] {
    fn render(&self) -> String {
        self.as_slice().render()
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

// ============================================================================
// TESTS
// ============================================================================
