//! Error and value types.
//!
//! - [`MayError`]: a normalized failure, optionally decorated with a message
//! - [`NotOk`]: the sentinel a `false` status normalizes to
//! - [`MultiError`]: the ordered aggregate of failures
//! - [`Cancelled`]: the error of a call whose signal fired
//! - [`MessageArgs`]: message context attached to one failure
//! - [`Status`]: the status half of a `(values, status)` result
//!
//! # Examples
//!
//! ```
//! use may_rail::msg;
//! use may_rail::types::{MayError, MultiError};
//!
//! let errors = MultiError::combine([
//!     MayError::not_ok().decorate(&msg!("cache miss")),
//!     MayError::msg("boom").decorate(&msg!("loading %s", "user")),
//! ])
//! .unwrap();
//!
//! assert_eq!(errors.to_string(), "cache miss; loading user: boom");
//! ```
use std::error::Error;

use smallvec::SmallVec;

pub mod cancelled;
pub mod may_error;
pub mod message;
pub mod multi_error;
pub mod status;

pub use cancelled::{CancelReason, Cancelled};
pub use may_error::{MayError, NotOk};
pub use message::{message_from_args, MessageArgs};
pub use multi_error::MultiError;
pub use status::Status;

/// SmallVec-backed collection used for handler lists and aggregates.
///
/// Uses inline storage for up to 2 elements, which covers the common case
/// of a filter with one or two handlers or failures.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Type-erased error accepted as a failure status.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;
