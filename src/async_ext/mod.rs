//! Async counterparts of the cancellable call.
//!
//! [`Signal::cancelled`](crate::signal::Signal::cancelled) waits for a
//! signal without blocking a thread, and [`invoke_async`] races a future
//! against one.
//!
//! # Feature Flag
//!
//! Requires the `async-tokio` feature:
//!
//! ```toml
//! [dependencies]
//! may-rail = { version = "0.1", features = ["async-tokio"] }
//! ```

mod cancellation;
mod invocation;

pub use cancellation::Cancellation;
pub use invocation::{invoke_async, Invocation};
