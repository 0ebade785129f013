//! Values accepted as message context.
//!
//! A [`MessageValue`] knows how to render itself and whether it counts as
//! text. Text values decide how a [`MessageArgs`](crate::types::MessageArgs)
//! list is interpreted: a leading text value is a template, anything else is
//! rendered as an opaque value.
//!
//! Implemented for string types, primitives, errors from this crate,
//! `Option`, slices and vectors. Wrap any other `Debug` type in [`Opaque`].
//!
//! # Examples
//!
//! ```
//! use may_rail::msg;
//! use may_rail::traits::Opaque;
//!
//! #[derive(Debug)]
//! struct Request { id: u32 }
//!
//! let request = Opaque(Request { id: 7 });
//! assert_eq!(msg!("bad request %v", request).render(), "bad request Request { id: 7 }");
//! ```

use core::fmt;
use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::types::{Cancelled, MayError, MultiError, NotOk};

/// A value that can appear in a message context.
pub trait MessageValue {
    /// Returns the value as text if it is a string type.
    #[inline]
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Writes the value's default rendering.
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Renders any `Debug` value as an opaque message argument.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Opaque<T>(pub T);

impl<T: fmt::Debug> fmt::Debug for Opaque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: fmt::Debug> MessageValue for Opaque<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl MessageValue for str {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl MessageValue for String {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl MessageValue for Cow<'_, str> {
    #[inline]
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

macro_rules! impl_forwarding {
    ($($ptr:ty),* $(,)?) => {
        $(
            impl<T: MessageValue + ?Sized> MessageValue for $ptr {
                #[inline]
                fn as_text(&self) -> Option<&str> {
                    (**self).as_text()
                }

                #[inline]
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    (**self).render(f)
                }
            }
        )*
    };
}

impl_forwarding!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

macro_rules! impl_display_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl MessageValue for $ty {
                #[inline]
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

impl_display_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);

// Errors render their message.
impl_display_value!(MayError, MultiError, Cancelled, NotOk, std::io::Error);

impl MessageValue for () {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl<T: MessageValue> MessageValue for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("<nil>"),
        }
    }
}

impl<T: MessageValue> MessageValue for [T] {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            value.render(f)?;
        }
        f.write_str("]")
    }
}

impl<T: MessageValue, const N: usize> MessageValue for [T; N] {
    #[inline]
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().render(f)
    }
}

impl<T: MessageValue> MessageValue for Vec<T> {
    #[inline]
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_slice().render(f)
    }
}
