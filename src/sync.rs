//! Blocking primitives shared by the signal and the cancellable call.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::signal::{earliest, Signal};

/// Locks `mutex`, recovering the data if a previous holder panicked.
///
/// Everything guarded in this crate is either append-only or a one-shot
/// slot, so a panic mid-update never leaves it inconsistent.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One-shot rendezvous: the first `fill` wins, later ones are dropped.
///
/// Filling never blocks, so a writer whose reader already gave up finishes
/// normally.
pub(crate) struct Slot<T> {
    value: Mutex<Option<T>>,
    ready: Condvar,
}

impl<T> Slot<T> {
    pub(crate) fn new() -> Self {
        Self { value: Mutex::new(None), ready: Condvar::new() }
    }

    /// Stores `value` unless the slot was already filled. Returns whether it
    /// was stored.
    pub(crate) fn fill(&self, value: T) -> bool {
        let mut slot = lock(&self.value);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        self.ready.notify_all();
        true
    }

    /// Blocks until the slot is filled. The signal's deadline is evaluated
    /// when it passes, so a watcher registered on `signal` gets to fill the
    /// slot.
    pub(crate) fn wait(&self, signal: &Signal) -> T {
        loop {
            if let Some(value) = self.wait_until(signal, None) {
                return value;
            }
        }
    }

    /// Like [`Slot::wait`], but gives up at `limit`.
    pub(crate) fn wait_until(&self, signal: &Signal, limit: Option<Instant>) -> Option<T> {
        let mut slot = lock(&self.value);
        loop {
            if let Some(value) = slot.take() {
                return Some(value);
            }

            let Some(wake_at) = earliest(signal.deadline(), limit) else {
                slot = self.ready.wait(slot).unwrap_or_else(PoisonError::into_inner);
                continue;
            };

            let now = Instant::now();
            if now < wake_at {
                slot = self
                    .ready
                    .wait_timeout(slot, wake_at - now)
                    .unwrap_or_else(PoisonError::into_inner)
                    .0;
                continue;
            }

            drop(slot);
            if signal.err().is_none() {
                // The limit passed, not the signal's deadline.
                return lock(&self.value).take();
            }
            slot = lock(&self.value);
        }
    }
}
