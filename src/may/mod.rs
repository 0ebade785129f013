//! Error-collecting result filters.
//!
//! A [`May`] takes a `(values, status)` result apart at the call site: it
//! hands the values back unchanged and records the status if it is a
//! failure. Every recorded failure is decorated with the call's message
//! context, passed to the registered handlers in order, and appended to the
//! filter's aggregate, which can be read back later in one piece or as a
//! list.
//!
//! The free functions [`may`], [`may0`] .. [`may6`] do the same through the
//! process-wide handler list configured with [`set_handlers`] or
//! [`set_loggers`]; they keep no aggregate.
//!
//! # Examples
//!
//! ```
//! use may_rail::{msg, May};
//!
//! fn parse(input: &str) -> Result<i32, std::num::ParseIntError> {
//!     input.parse()
//! }
//!
//! let may = May::<i32>::new();
//! let a = may.invoke_result(parse("4"), &msg!("parsing a"));
//! let b = may.invoke_result(parse("x"), &msg!("parsing %s", "b"));
//! let c = may.invoke(7, false, &msg!("c is not ready"));
//!
//! assert_eq!((a, b, c), (4, 0, 7));
//! let texts: Vec<String> = may.collect_as_errors().iter().map(ToString::to_string).collect();
//! assert_eq!(texts, ["parsing b: invalid digit found in string", "c is not ready"]);
//! ```

mod global;
mod handler;

use core::fmt;
use core::marker::PhantomData;
use std::sync::Mutex;

pub use global::{
    global_handlers, may, may0, may1, may2, may3, may4, may5, may6, set_handlers, set_loggers,
    set_logging_handlers,
};
#[cfg(feature = "tracing")]
pub use handler::tracing_handler;
pub use handler::{handler, log_func_handler, logger_handler, MayHandler};

use crate::sync::lock;
use crate::traits::{ErrorCollectable, IntoStatus};
use crate::types::{BoxError, ErrorVec, MayError, MessageArgs, MultiError, Status};

/// Result filter for values of type `V`.
///
/// `V` is the shape of the values passed through: `()`, a single value, or
/// a tuple. [`May0`] .. [`May6`] name the common shapes.
///
/// Failures may be reported from many threads at once; handler dispatch and
/// aggregation are serialized per filter, so the aggregate keeps the order
/// in which failures were recorded.
pub struct May<V> {
    handlers: ErrorVec<MayHandler>,
    errors: Mutex<MultiError>,
    _values: PhantomData<fn(V) -> V>,
}

/// Filter for calls that only return a status.
pub type May0 = May<()>;
/// Filter for calls returning one value.
pub type May1<T1> = May<T1>;
/// Filter for calls returning two values.
pub type May2<T1, T2> = May<(T1, T2)>;
/// Filter for calls returning three values.
pub type May3<T1, T2, T3> = May<(T1, T2, T3)>;
/// Filter for calls returning four values.
pub type May4<T1, T2, T3, T4> = May<(T1, T2, T3, T4)>;
/// Filter for calls returning five values.
pub type May5<T1, T2, T3, T4, T5> = May<(T1, T2, T3, T4, T5)>;
/// Filter for calls returning six values.
pub type May6<T1, T2, T3, T4, T5, T6> = May<(T1, T2, T3, T4, T5, T6)>;

impl<V> May<V> {
    /// A filter without handlers and with an empty aggregate.
    pub fn new() -> Self {
        Self { handlers: ErrorVec::new(), errors: Mutex::new(MultiError::new()), _values: PhantomData }
    }

    /// Appends `handler` to the handler list.
    #[must_use]
    pub fn with_handler(mut self, handler: MayHandler) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Appends every handler of `handlers`, keeping their order.
    #[must_use]
    pub fn with_handlers<I>(mut self, handlers: I) -> Self
    where
        I: IntoIterator<Item = MayHandler>,
    {
        self.handlers.extend(handlers);
        self
    }

    /// Appends `handler` to the handler list of an existing filter.
    pub fn register(&mut self, handler: MayHandler) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    #[inline]
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `values` unchanged, recording `status` if it is a failure.
    ///
    /// A failure is decorated with `args`, passed to every handler in
    /// registration order, then appended to the aggregate. Success statuses
    /// (`true`, `None`, `Ok(())`) do nothing.
    pub fn invoke<S>(&self, values: V, status: S, args: &MessageArgs<'_>) -> V
    where
        S: IntoStatus,
    {
        if let Some(failure) = status.into_status().normalize() {
            self.record(failure, args);
        }
        values
    }

    /// Unwraps `result`, recording its error and returning `V::default()` on
    /// failure.
    pub fn invoke_result<E>(&self, result: Result<V, E>, args: &MessageArgs<'_>) -> V
    where
        V: Default,
        E: Into<BoxError>,
    {
        match result {
            Ok(values) => values,
            Err(error) => {
                if let Some(failure) = Status::Error(error.into()).normalize() {
                    self.record(failure, args);
                }
                V::default()
            },
        }
    }

    fn record(&self, failure: MayError, args: &MessageArgs<'_>) {
        let decorated = failure.decorate(args);

        let mut errors = lock(&self.errors);
        for handler in &self.handlers {
            handler(&decorated, args);
        }
        errors.append(decorated);
    }

    /// The aggregate of every recorded failure, or `None` if there is none.
    pub fn collect_as_error(&self) -> Option<MultiError> {
        let errors = lock(&self.errors);
        (!errors.is_empty()).then(|| errors.clone())
    }

    /// Every recorded failure in order; empty if there is none.
    pub fn collect_as_errors(&self) -> Vec<MayError> {
        lock(&self.errors).errors().to_vec()
    }

    /// Runs `handler` with the recorded failures if there are any.
    pub fn handle_errors<F>(&self, handler: F)
    where
        F: FnOnce(&[MayError]),
    {
        ErrorCollectable::handle_errors(self, handler)
    }

    /// Runs `handler` with the recorded failures and returns its result;
    /// returns `Ok(())` without running it if there are none.
    pub fn handle_errors_with_return<F, E>(&self, handler: F) -> Result<(), E>
    where
        F: FnOnce(Vec<MayError>) -> Result<(), E>,
    {
        ErrorCollectable::handle_errors_with_return(self, handler)
    }
}

impl May<()> {
    /// Records `status` if it is a failure; for calls without values.
    #[inline]
    pub fn check<S>(&self, status: S, args: &MessageArgs<'_>)
    where
        S: IntoStatus,
    {
        self.invoke((), status, args)
    }
}

impl<V> ErrorCollectable for May<V> {
    #[inline]
    fn collect_as_error(&self) -> Option<MultiError> {
        May::collect_as_error(self)
    }

    #[inline]
    fn collect_as_errors(&self) -> Vec<MayError> {
        May::collect_as_errors(self)
    }
}

impl<V> Default for May<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for May<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("May")
            .field("handlers", &self.handlers.len())
            .field("errors", &*lock(&self.errors))
            .finish()
    }
}

/// The aggregate of `collectable`, or `None` if nothing failed.
#[inline]
pub fn collect_as_error<C>(collectable: &C) -> Option<MultiError>
where
    C: ErrorCollectable + ?Sized,
{
    collectable.collect_as_error()
}

/// Every failure recorded by `collectable`, in order.
#[inline]
pub fn collect_as_errors<C>(collectable: &C) -> Vec<MayError>
where
    C: ErrorCollectable + ?Sized,
{
    collectable.collect_as_errors()
}

/// Runs `handler` with the failures of `collectable` if there are any.
#[inline]
pub fn handle_errors<C, F>(collectable: &C, handler: F)
where
    C: ErrorCollectable + ?Sized,
    F: FnOnce(&[MayError]),
{
    collectable.handle_errors(handler)
}

/// Runs `handler` with the failures of `collectable` and returns its result.
#[inline]
pub fn handle_errors_with_return<C, F, E>(collectable: &C, handler: F) -> Result<(), E>
where
    C: ErrorCollectable + ?Sized,
    F: FnOnce(Vec<MayError>) -> Result<(), E>,
{
    collectable.handle_errors_with_return(handler)
}
