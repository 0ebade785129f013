//! Cancellable calls.
//!
//! [`invoke`] runs a unit of work on its own thread and waits for whichever
//! comes first: the work finishing or the [`Signal`] firing. When the signal
//! wins, the caller gets the [`Cancelled`] error right away while the work
//! keeps running in the background; its result is dropped when it
//! eventually finishes. The work is never interrupted.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use may_rail::invoke::{invoke, invoke_with_timeout};
//! use may_rail::signal::Signal;
//! use may_rail::types::{Cancelled, MayError};
//!
//! let answer: Result<&str, Cancelled> = invoke(&Signal::background(), || Ok("x"));
//! assert_eq!(answer.unwrap(), "x");
//!
//! let slow: Result<u8, MayError> = invoke_with_timeout(
//!     || {
//!         std::thread::sleep(Duration::from_millis(200));
//!         Ok(1)
//!     },
//!     Duration::from_millis(1),
//! );
//! assert_eq!(slow.unwrap_err().to_string(), "deadline exceeded");
//! ```

mod options;

use core::time::Duration;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Mutex};
use std::thread;

pub use options::CallOptions;

use crate::signal::{CancelGuard, Signal};
use crate::sync::{lock, Slot};
use crate::tracing_compat::{debug, warn};
use crate::types::Cancelled;

const THREAD_NAME: &str = "may-rail-invoke";

enum Outcome<T> {
    Finished(T),
    Panicked(Box<dyn Any + Send + 'static>),
    Cancelled(Cancelled),
}

/// Runs `work` on a new thread and returns its result, unless `signal` fires
/// first, in which case the [`Cancelled`] error is returned and `work` is
/// left to finish on its own.
///
/// A panic in `work` is resumed on the calling thread if the caller is still
/// waiting. If the operating system refuses to start a thread, `work` runs
/// on the calling thread instead.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub fn invoke<R, E, F>(signal: &Signal, work: F) -> Result<R, E>
where
    F: FnOnce() -> Result<R, E> + Send + 'static,
    R: Send + 'static,
    E: From<Cancelled> + Send + 'static,
{
    let slot = Arc::new(Slot::new());

    let _watch = {
        let slot = Arc::clone(&slot);
        signal.watch(move |cancelled| {
            slot.fill(Outcome::Cancelled(cancelled.clone()));
        })
    };

    // Handed over through a mutex so it can be taken back if the spawn fails.
    let job = Arc::new(Mutex::new(Some(work)));
    let spawned = {
        let job = Arc::clone(&job);
        let slot = Arc::clone(&slot);
        thread::Builder::new().name(THREAD_NAME.to_owned()).spawn(move || {
            if let Some(work) = lock(&job).take() {
                slot.fill(run(work));
            }
        })
    };

    if let Err(error) = spawned {
        warn!(error = %error, "failed to spawn a worker thread, running the call inline");
        if let Some(work) = lock(&job).take() {
            slot.fill(run(work));
        }
    }

    match slot.wait(signal) {
        Outcome::Finished(result) => result,
        Outcome::Panicked(payload) => panic::resume_unwind(payload),
        Outcome::Cancelled(cancelled) => {
            debug!(reason = %cancelled, "call cancelled, detaching its work");
            Err(E::from(cancelled))
        },
    }
}

fn run<T>(work: impl FnOnce() -> T) -> Outcome<T> {
    match panic::catch_unwind(AssertUnwindSafe(work)) {
        Ok(result) => Outcome::Finished(result),
        Err(payload) => Outcome::Panicked(payload),
    }
}

/// [`invoke`] for work without a value.
#[inline]
pub fn invoke0<E, F>(signal: &Signal, work: F) -> Result<(), E>
where
    F: FnOnce() -> Result<(), E> + Send + 'static,
    E: From<Cancelled> + Send + 'static,
{
    invoke(signal, work)
}

/// [`invoke`] for work with one value.
#[inline]
pub fn invoke1<R1, E, F>(signal: &Signal, work: F) -> Result<R1, E>
where
    F: FnOnce() -> Result<R1, E> + Send + 'static,
    R1: Send + 'static,
    E: From<Cancelled> + Send + 'static,
{
    invoke(signal, work)
}

macro_rules! impl_invoke_arity {
    ($($name:ident => ($($ty:ident),+);)+) => {
        $(
            #[doc = concat!("[`invoke`] for work with a tuple of values (`", stringify!($name), "`).")]
            #[inline]
            pub fn $name<$($ty,)+ E, F>(signal: &Signal, work: F) -> Result<($($ty,)+), E>
            where
                F: FnOnce() -> Result<($($ty,)+), E> + Send + 'static,
                $($ty: Send + 'static,)+
                E: From<Cancelled> + Send + 'static,
            {
                invoke(signal, work)
            }
        )+
    };
}

impl_invoke_arity! {
    invoke2 => (R1, R2);
    invoke3 => (R1, R2, R3);
    invoke4 => (R1, R2, R3, R4);
    invoke5 => (R1, R2, R3, R4, R5);
    invoke6 => (R1, R2, R3, R4, R5, R6);
}

/// Runs `work` under a signal derived from [`Signal::background`] according
/// to `options`.
///
/// Every derived signal is cancelled and released before this returns.
pub fn invoke_with<R, E, F>(work: F, options: &CallOptions) -> Result<R, E>
where
    F: FnOnce() -> Result<R, E> + Send + 'static,
    R: Send + 'static,
    E: From<Cancelled> + Send + 'static,
{
    let mut signal = Signal::background();
    let mut guards: Vec<CancelGuard> = Vec::with_capacity(options.timeouts().len());

    for &timeout in options.timeouts() {
        let (derived, guard) = Signal::with_timeout(&signal, timeout);
        signal = derived;
        guards.push(guard);
    }

    let result = invoke(&signal, work);
    drop(guards);
    result
}

/// Runs `work` with a deadline `timeout` from now.
///
/// A zero `timeout` means no deadline.
#[inline]
pub fn invoke_with_timeout<R, E, F>(work: F, timeout: Duration) -> Result<R, E>
where
    F: FnOnce() -> Result<R, E> + Send + 'static,
    R: Send + 'static,
    E: From<Cancelled> + Send + 'static,
{
    invoke_with(work, &CallOptions::new().with_timeout(timeout))
}
