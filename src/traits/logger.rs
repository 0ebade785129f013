use core::fmt;
use std::sync::Arc;

/// Minimal logging capability consumed by
/// [`logger_handler`](crate::may::logger_handler) and
/// [`set_loggers`](crate::may::set_loggers).
///
/// # Examples
///
/// ```
/// use std::sync::Mutex;
/// use may_rail::traits::Logger;
///
/// #[derive(Default)]
/// struct Lines(Mutex<Vec<String>>);
///
/// impl Logger for Lines {
///     fn error(&self, message: &dyn std::fmt::Display) {
///         self.0.lock().unwrap().push(message.to_string());
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Logs one failure line.
    fn error(&self, message: &dyn fmt::Display);
}

impl<L: Logger + ?Sized> Logger for &L {
    #[inline]
    fn error(&self, message: &dyn fmt::Display) {
        (**self).error(message)
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    #[inline]
    fn error(&self, message: &dyn fmt::Display) {
        (**self).error(message)
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    #[inline]
    fn error(&self, message: &dyn fmt::Display) {
        (**self).error(message)
    }
}

/// [`Logger`] that emits `tracing` error events.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

#[cfg(feature = "tracing")]
impl Logger for TracingLogger {
    fn error(&self, message: &dyn fmt::Display) {
        tracing::error!("{}", message);
    }
}
