use std::sync::Weak;

use super::{Inner, Signal};
use crate::types::{BoxError, Cancelled};

/// Cancels the [`Signal`] it was created with, and every signal derived from it.
///
/// Cancelling an already cancelled signal does nothing; the first reason wins.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    signal: Signal,
}

impl CancelHandle {
    pub(super) fn new(signal: Signal) -> Self {
        Self { signal }
    }

    /// Cancels with [`CancelReason::Canceled`](crate::types::CancelReason::Canceled).
    pub fn cancel(&self) {
        self.signal.cancel(Cancelled::canceled());
    }

    /// Cancels and records `cause`, readable through [`Cancelled::cause`].
    pub fn cancel_with_cause<C>(&self, cause: C)
    where
        C: Into<BoxError>,
    {
        self.signal.cancel(Cancelled::with_cause(cause));
    }

    /// The signal this handle cancels.
    #[inline]
    pub fn signal(&self) -> &Signal {
        &self.signal
    }
}

/// A [`CancelHandle`] that cancels its signal when dropped.
///
/// Returned by the deadline-based constructors so that a derived signal is
/// always released once the scope that created it ends.
#[derive(Debug)]
#[must_use = "dropping the guard cancels the signal immediately"]
pub struct CancelGuard {
    handle: CancelHandle,
}

impl CancelGuard {
    pub(super) fn new(handle: CancelHandle) -> Self {
        Self { handle }
    }

    /// Cancels now instead of on drop.
    #[inline]
    pub fn cancel(&self) {
        self.handle.cancel();
    }

    #[inline]
    pub fn signal(&self) -> &Signal {
        self.handle.signal()
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.handle.cancel();
    }
}

/// Registration returned by [`Signal::watch`]; unregisters the callback on drop.
#[derive(Debug)]
#[must_use = "dropping the guard unregisters the callback"]
pub struct WatchGuard {
    signal: Weak<Inner>,
    id: Option<u64>,
}

impl WatchGuard {
    pub(super) fn new(signal: Weak<Inner>, id: u64) -> Self {
        Self { signal, id: Some(id) }
    }

    /// A guard for a callback that already ran.
    pub(super) fn inert() -> Self {
        Self { signal: Weak::new(), id: None }
    }

    /// Keeps the callback registered and returns its id.
    pub(super) fn into_id(mut self) -> Option<u64> {
        self.id.take()
    }

    /// Returns `true` if the callback is still registered and waiting.
    pub fn is_registered(&self) -> bool {
        self.id.is_some() && self.signal.strong_count() > 0
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            if let Some(signal) = Signal::from_weak(&self.signal) {
                signal.unwatch(id);
            }
        }
    }
}
