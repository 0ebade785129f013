//! Cancellation signals.
//!
//! A [`Signal`] tells a waiting caller to stop waiting. Signals form a tree:
//! [`Signal::background`] is a root that never fires, and
//! [`Signal::with_cancel`], [`Signal::with_timeout`] and
//! [`Signal::with_deadline`] derive children. Cancellation flows from a parent
//! to its children, never upward, and a child's deadline is the earlier of its
//! own and its parent's.
//!
//! Deadlines are evaluated lazily: whoever waits on the signal (or asks
//! [`Signal::err`]) notices that the deadline passed and fires it. No timer
//! threads are involved.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use may_rail::signal::Signal;
//! use may_rail::types::CancelReason;
//!
//! let root = Signal::background();
//! let (request, handle) = Signal::with_cancel(&root);
//! let (step, _guard) = Signal::with_timeout(&request, Duration::from_secs(30));
//!
//! handle.cancel_with_cause("client went away");
//!
//! let err = step.err().unwrap();
//! assert_eq!(err.reason(), CancelReason::Canceled);
//! assert_eq!(err.to_string(), "operation canceled: client went away");
//! assert!(root.err().is_none());
//! ```

mod handle;

use core::fmt;
use std::sync::{Arc, Mutex, Weak};
use std::time::{Duration, Instant};

pub use handle::{CancelGuard, CancelHandle, WatchGuard};

use crate::sync::{lock, Slot};
use crate::types::Cancelled;

type Watcher = Box<dyn FnOnce(&Cancelled) + Send + 'static>;

/// A cancellation signal. Cloning is cheap and clones observe the same state.
#[derive(Clone)]
pub struct Signal {
    inner: Arc<Inner>,
}

struct Inner {
    parent: Option<Signal>,
    own_deadline: Option<Instant>,
    deadline: Option<Instant>,
    state: Mutex<State>,
    // Registration of this node on its parent, released on cancel or drop.
    parent_watch: Mutex<Option<u64>>,
}

#[derive(Default)]
struct State {
    cancelled: Option<Cancelled>,
    watchers: Vec<(u64, Watcher)>,
    next_id: u64,
}

impl Signal {
    /// A root signal that is never cancelled.
    pub fn background() -> Self {
        Self::node(None, None)
    }

    /// Derives a child that is cancelled through the returned handle.
    pub fn with_cancel(parent: &Signal) -> (Signal, CancelHandle) {
        let child = Self::child(parent, None);
        let handle = CancelHandle::new(child.clone());
        (child, handle)
    }

    /// Derives a child that expires `timeout` from now.
    ///
    /// The returned guard cancels the child when dropped, releasing its
    /// registration on the parent.
    pub fn with_timeout(parent: &Signal, timeout: Duration) -> (Signal, CancelGuard) {
        // Durations too large to represent never expire.
        match Instant::now().checked_add(timeout) {
            Some(deadline) => Self::with_deadline(parent, deadline),
            None => {
                let child = Self::child(parent, None);
                let guard = CancelGuard::new(CancelHandle::new(child.clone()));
                (child, guard)
            },
        }
    }

    /// Derives a child that expires at `deadline`.
    pub fn with_deadline(parent: &Signal, deadline: Instant) -> (Signal, CancelGuard) {
        let child = Self::child(parent, Some(deadline));
        let guard = CancelGuard::new(CancelHandle::new(child.clone()));
        (child, guard)
    }

    /// The effective deadline: the earliest of this signal's and its ancestors'.
    #[inline]
    pub fn deadline(&self) -> Option<Instant> {
        self.inner.deadline
    }

    /// Returns the cancellation error if the signal has fired, evaluating a
    /// passed deadline first.
    pub fn err(&self) -> Option<Cancelled> {
        if let Some(cancelled) = self.fired() {
            return Some(cancelled);
        }

        if let Some(parent) = &self.inner.parent {
            if let Some(cancelled) = parent.err() {
                self.cancel(cancelled);
                return self.fired();
            }
        }

        if let Some(deadline) = self.inner.own_deadline {
            if Instant::now() >= deadline {
                self.cancel(Cancelled::deadline_exceeded());
                return self.fired();
            }
        }

        None
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.err().is_some()
    }

    /// The cause passed to [`CancelHandle::cancel_with_cause`], if any.
    pub fn cause(&self) -> Option<Cancelled> {
        self.err().filter(|cancelled| cancelled.cause().is_some())
    }

    /// Registers `callback` to run once when the signal fires.
    ///
    /// Runs the callback immediately, on the calling thread, if the signal
    /// already fired. Otherwise it runs on the thread that cancels the signal.
    /// Dropping the returned guard unregisters a callback that has not run.
    pub fn watch<F>(&self, callback: F) -> WatchGuard
    where
        F: FnOnce(&Cancelled) + Send + 'static,
    {
        if let Some(cancelled) = self.err() {
            callback(&cancelled);
            return WatchGuard::inert();
        }

        let mut state = lock(&self.inner.state);
        if let Some(cancelled) = state.cancelled.clone() {
            drop(state);
            callback(&cancelled);
            return WatchGuard::inert();
        }

        let id = state.next_id;
        state.next_id += 1;
        state.watchers.push((id, Box::new(callback)));
        WatchGuard::new(Arc::downgrade(&self.inner), id)
    }

    /// Blocks until the signal fires.
    pub fn wait(&self) -> Cancelled {
        let slot = Arc::new(Slot::new());
        let _watch = self.watch_slot(&slot);
        slot.wait(self)
    }

    /// Blocks until the signal fires or `timeout` elapses.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Cancelled> {
        let slot = Arc::new(Slot::new());
        let _watch = self.watch_slot(&slot);
        slot.wait_until(self, Instant::now().checked_add(timeout))
    }

    fn watch_slot(&self, slot: &Arc<Slot<Cancelled>>) -> WatchGuard {
        let slot = Arc::clone(slot);
        self.watch(move |cancelled| {
            slot.fill(cancelled.clone());
        })
    }

    fn node(parent: Option<Signal>, own_deadline: Option<Instant>) -> Self {
        let deadline = earliest(parent.as_ref().and_then(Signal::deadline), own_deadline);
        Self {
            inner: Arc::new(Inner {
                parent,
                own_deadline,
                deadline,
                state: Mutex::new(State::default()),
                parent_watch: Mutex::new(None),
            }),
        }
    }

    fn child(parent: &Signal, own_deadline: Option<Instant>) -> Self {
        let child = Self::node(Some(parent.clone()), own_deadline);
        let weak = Arc::downgrade(&child.inner);
        let registration = parent.watch(move |cancelled| {
            if let Some(inner) = weak.upgrade() {
                Signal { inner }.cancel(cancelled.clone());
            }
        });
        *lock(&child.inner.parent_watch) = registration.into_id();
        child
    }

    fn fired(&self) -> Option<Cancelled> {
        lock(&self.inner.state).cancelled.clone()
    }

    /// Fires the signal. Returns `false` if it had already fired.
    pub(crate) fn cancel(&self, cancelled: Cancelled) -> bool {
        let watchers = {
            let mut state = lock(&self.inner.state);
            if state.cancelled.is_some() {
                return false;
            }
            state.cancelled = Some(cancelled.clone());
            std::mem::take(&mut state.watchers)
        };

        self.inner.detach_from_parent();
        for (_, watcher) in watchers {
            watcher(&cancelled);
        }
        true
    }

    fn unwatch(&self, id: u64) {
        // The removed callback is dropped after the lock is released.
        let removed = {
            let mut state = lock(&self.inner.state);
            state
                .watchers
                .iter()
                .position(|(watch_id, _)| *watch_id == id)
                .map(|index| state.watchers.remove(index))
        };
        drop(removed);
    }

    fn from_weak(weak: &Weak<Inner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }
}

impl Inner {
    fn detach_from_parent(&self) {
        let id = lock(&self.parent_watch).take();
        if let (Some(id), Some(parent)) = (id, &self.parent) {
            parent.unwatch(id);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.detach_from_parent();
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("deadline", &self.inner.deadline)
            .field("cancelled", &self.fired())
            .field("has_parent", &self.inner.parent.is_some())
            .finish()
    }
}

impl Default for Signal {
    fn default() -> Self {
        Self::background()
    }
}

/// The earlier of two optional instants.
pub(crate) fn earliest(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
