//! Macros for building message context.
//!
//! - [`macro@crate::msg`] - Collects its arguments, by reference, into a
//!   [`MessageArgs`](crate::types::MessageArgs) list.
//!
//! # Examples
//!
//! ```
//! use may_rail::{msg, May};
//!
//! let path = "settings.toml";
//! let may = May::<()>::new();
//! may.check(std::io::Error::other("permission denied"), &msg!("reading %s", path));
//!
//! assert_eq!(
//!     may.collect_as_errors()[0].to_string(),
//!     "reading settings.toml: permission denied"
//! );
//! ```

/// Builds a [`MessageArgs`](crate::types::MessageArgs) from its arguments.
///
/// Every argument is borrowed, so the result must be used within the
/// statement that creates it, typically as `&msg!(...)` in a call.
///
/// # Syntax
///
/// - `msg!()` - No message
/// - `msg!(value)` - A single value; text is used verbatim
/// - `msg!("template %s %d", a, b)` - A printf-style template and its arguments
///
/// # Examples
///
/// ```
/// use may_rail::msg;
///
/// assert!(msg!().is_empty());
/// assert_eq!(msg!("timed out after %d attempts", 3).render(), "timed out after 3 attempts");
/// assert_eq!(msg!(4.5).render(), "4.5");
/// ```
#[macro_export]
macro_rules! msg {
    () => {
        $crate::types::MessageArgs::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::types::MessageArgs::new()$(.arg(&$arg))+
    };
}
