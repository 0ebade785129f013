//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use may_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`msg!`]
//! - **Types**: [`May`], [`MayError`], [`MultiError`], [`Cancelled`], [`Signal`], [`CallOptions`]
//! - **Functions**: [`invoke`], [`invoke_with`], [`invoke_with_timeout`], [`may`], [`handler`]
//! - **Traits**: [`ErrorCollectable`], [`IntoStatus`], [`Logger`]
//!
//! # Examples
//!
//! ```
//! use may_rail::prelude::*;
//!
//! fn load(may: &May<Vec<u8>>, path: &str) -> Vec<u8> {
//!     may.invoke_result(std::fs::read(path), &msg!("reading %s", path))
//! }
//!
//! let may = May::new();
//! let bytes = load(&may, "/definitely/not/here");
//! assert!(bytes.is_empty());
//! assert!(may.collect_as_errors()[0].to_string().starts_with("reading /definitely/not/here: "));
//! ```

// Macros
pub use crate::msg;

// Core types
pub use crate::invoke::CallOptions;
pub use crate::may::{May, MayHandler};
pub use crate::signal::Signal;
pub use crate::types::{Cancelled, MayError, MessageArgs, MultiError, Status};

// Functions
pub use crate::invoke::{invoke, invoke_with, invoke_with_timeout};
pub use crate::may::{handler, may};

// Traits
pub use crate::traits::{ErrorCollectable, IntoStatus, Logger};
