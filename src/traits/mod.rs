//! Capability traits.
//!
//! - [`IntoStatus`]: the status encodings a result filter accepts
//! - [`MessageValue`]: values that can appear in message context
//! - [`Logger`]: the minimal logger behind the logging handlers
//! - [`ErrorCollectable`]: read-back of accumulated failures, for any arity
//!
//! # Examples
//!
//! ```
//! use may_rail::traits::IntoStatus;
//! use may_rail::types::Status;
//!
//! assert!(true.into_status().is_success());
//! assert!(None::<std::io::Error>.into_status().is_success());
//! assert!(matches!(Err::<(), _>("boom").into_status(), Status::Error(_)));
//! ```

pub mod error_collectable;
pub mod into_status;
pub mod logger;
pub mod message_value;

pub use error_collectable::ErrorCollectable;
pub use into_status::IntoStatus;
#[cfg(feature = "tracing")]
pub use logger::TracingLogger;
pub use logger::Logger;
pub use message_value::{MessageValue, Opaque};
