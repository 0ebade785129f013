//! Call-site error handling for synchronous code.
//!
//! Two independent tools live here:
//!
//! - [`invoke`](mod@invoke): run a unit of work under a cancellation
//!   [`Signal`] and get its result, or a [`Cancelled`](types::Cancelled)
//!   error as soon as the signal fires.
//! - [`May`]: unpack a `(values, status)` result on the spot, route any
//!   failure to registered handlers, and read all failures back later.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `may_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Collecting failures
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use may_rail::{log_func_handler, msg, May2};
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&log);
//! let may = May2::<&str, u16>::new().with_handler(log_func_handler(move |line| {
//!     sink.lock().unwrap().push(line.to_owned());
//! }));
//!
//! let (host, port) = may.invoke(("localhost", 0), false, &msg!("port not configured"));
//! assert_eq!((host, port), ("localhost", 0));
//!
//! may.handle_errors(|errors| assert_eq!(errors.len(), 1));
//! assert_eq!(*log.lock().unwrap(), ["port not configured"]);
//! ```
//!
//! ## Cancellable calls
//!
//! ```
//! use std::time::Duration;
//! use may_rail::{invoke, Signal};
//! use may_rail::types::Cancelled;
//!
//! let (signal, _guard) = Signal::with_timeout(&Signal::background(), Duration::from_secs(5));
//! let sum: Result<i32, Cancelled> = invoke(&signal, || Ok(2 + 2));
//! assert_eq!(sum.unwrap(), 4);
//! ```

/// Cancellable calls on a background thread
pub mod invoke;
/// Macros for building message context
pub mod macros;
/// Error-collecting result filters and the global handler registry
pub mod may;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Cancellation signals
pub mod signal;
/// Capability traits for statuses, message values and loggers
pub mod traits;
/// Error, status and message types
pub mod types;

/// Async racing of futures against a signal (requires `async-tokio` feature)
#[cfg(feature = "async-tokio")]
pub mod async_ext;

mod sync;
mod tracing_compat;

pub use invoke::{
    invoke, invoke0, invoke1, invoke2, invoke3, invoke4, invoke5, invoke6, invoke_with,
    invoke_with_timeout, CallOptions,
};
#[cfg(feature = "tracing")]
pub use may::tracing_handler;
pub use may::{
    global_handlers, handler, log_func_handler, logger_handler, may, may0, may1, may2, may3,
    may4, may5, may6, set_handlers, set_loggers, set_logging_handlers, May, May0, May1, May2,
    May3, May4, May5, May6, MayHandler,
};
pub use signal::{CancelGuard, CancelHandle, Signal, WatchGuard};
pub use traits::*;
pub use types::{
    message_from_args, BoxError, CancelReason, Cancelled, ErrorVec, MayError, MessageArgs,
    MultiError, NotOk, Status,
};
