//! Failure handlers and the adapters that build them from loggers.

use std::sync::Arc;

use crate::traits::Logger;
use crate::types::{MayError, MessageArgs};

/// A side effect run once per failure, in registration order.
///
/// Receives the decorated failure and the message context it was decorated
/// with.
pub type MayHandler = Arc<dyn Fn(&MayError, &MessageArgs<'_>) + Send + Sync + 'static>;

/// Wraps a closure as a [`MayHandler`].
///
/// # Examples
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use may_rail::may::handler;
/// use may_rail::{msg, May};
///
/// let seen = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&seen);
/// let may = May::<i32>::new().with_handler(handler(move |_, _| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// }));
///
/// may.invoke(1, false, &msg!());
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
#[inline]
pub fn handler<F>(f: F) -> MayHandler
where
    F: Fn(&MayError, &MessageArgs<'_>) + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Handler that reports every failure through `logger`.
pub fn logger_handler<L>(logger: L) -> MayHandler
where
    L: Logger + 'static,
{
    handler(move |error, _| logger.error(error))
}

/// Handler that passes every failure's text to `log`.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use may_rail::may::log_func_handler;
/// use may_rail::{msg, May};
///
/// let lines = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&lines);
/// let may = May::<()>::new().with_handler(log_func_handler(move |line| {
///     sink.lock().unwrap().push(line.to_owned());
/// }));
///
/// may.check(std::io::Error::other("disk full"), &msg!("saving %s", "report.csv"));
/// assert_eq!(*lines.lock().unwrap(), ["saving report.csv: disk full"]);
/// ```
pub fn log_func_handler<F>(log: F) -> MayHandler
where
    F: Fn(&str) + Send + Sync + 'static,
{
    handler(move |error, _| log(&error.to_string()))
}

/// Handler that emits a `tracing` error event per failure.
///
/// Without message context the event message is the failure itself.
/// Otherwise the rendered context is the message and the failure goes into
/// the `error` field.
#[cfg(feature = "tracing")]
pub fn tracing_handler() -> MayHandler {
    handler(|error, args| {
        if args.is_empty() {
            tracing::error!("{}", error);
        } else {
            tracing::error!(error = %error, "{}", args.render());
        }
    })
}
