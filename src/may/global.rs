//! Process-wide handler registry behind [`may`] and its arity variants.

use std::sync::{Arc, LazyLock, Mutex};

use super::{logger_handler, May, MayHandler};
use crate::sync::lock;
use crate::tracing_compat::debug;
use crate::traits::{IntoStatus, Logger};
use crate::types::MessageArgs;

static HANDLERS: LazyLock<Mutex<Arc<[MayHandler]>>> =
    LazyLock::new(|| Mutex::new(Arc::from(Vec::new())));

/// Replaces the global handler list.
///
/// Calls already dispatching keep the list they started with.
pub fn set_handlers<I>(handlers: I)
where
    I: IntoIterator<Item = MayHandler>,
{
    let handlers: Arc<[MayHandler]> = handlers.into_iter().collect();
    debug!(count = handlers.len(), "replacing global may handlers");
    let previous = std::mem::replace(&mut *lock(&HANDLERS), handlers);
    drop(previous);
}

/// Replaces the global handler list with one [`logger_handler`] per logger.
pub fn set_loggers<I, L>(loggers: I)
where
    I: IntoIterator<Item = L>,
    L: Logger + 'static,
{
    set_handlers(loggers.into_iter().map(logger_handler));
}

/// Same as [`set_loggers`].
#[inline]
pub fn set_logging_handlers<I, L>(loggers: I)
where
    I: IntoIterator<Item = L>,
    L: Logger + 'static,
{
    set_loggers(loggers)
}

/// A snapshot of the global handler list.
pub fn global_handlers() -> Arc<[MayHandler]> {
    Arc::clone(&lock(&HANDLERS))
}

/// Returns `values` unchanged, passing a failed `status` to the global
/// handlers.
///
/// Each call filters through a throwaway [`May`], so failures are not kept
/// anywhere after the handlers ran.
///
/// # Examples
///
/// ```
/// use may_rail::{may, msg};
///
/// let retries = may(3, Some("config missing"), &msg!("loading retries"));
/// assert_eq!(retries, 3);
/// ```
pub fn may<V, S>(values: V, status: S, args: &MessageArgs<'_>) -> V
where
    S: IntoStatus,
{
    if let Some(failure) = status.into_status().normalize() {
        May::<V>::new()
            .with_handlers(global_handlers().iter().cloned())
            .record(failure, args);
    }
    values
}

/// [`may`] for calls that only return a status.
#[inline]
pub fn may0<S>(status: S, args: &MessageArgs<'_>)
where
    S: IntoStatus,
{
    may((), status, args)
}

/// [`may`] for calls returning one value.
#[inline]
pub fn may1<T1, S>(t1: T1, status: S, args: &MessageArgs<'_>) -> T1
where
    S: IntoStatus,
{
    may(t1, status, args)
}

macro_rules! impl_may_arity {
    ($($name:ident => ($($value:ident: $ty:ident),+);)+) => {
        $(
            #[doc = concat!("[`may`] for calls returning a tuple of values (`", stringify!($name), "`).")]
            #[inline]
            pub fn $name<$($ty,)+ S>($($value: $ty,)+ status: S, args: &MessageArgs<'_>) -> ($($ty,)+)
            where
                S: IntoStatus,
            {
                may(($($value,)+), status, args)
            }
        )+
    };
}

impl_may_arity! {
    may2 => (t1: T1, t2: T2);
    may3 => (t1: T1, t2: T2, t3: T3);
    may4 => (t1: T1, t2: T2, t3: T3, t4: T4);
    may5 => (t1: T1, t2: T2, t3: T3, t4: T4, t5: T5);
    may6 => (t1: T1, t2: T2, t3: T3, t4: T4, t5: T5, t6: T6);
}
