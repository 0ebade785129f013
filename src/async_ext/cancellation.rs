use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll, Waker};
use std::sync::{Arc, Mutex};

use pin_project_lite::pin_project;
use tokio::time::{sleep_until, Sleep};

use crate::signal::{Signal, WatchGuard};
use crate::sync::lock;
use crate::types::Cancelled;

impl Signal {
    /// A future that resolves once the signal fires.
    ///
    /// A deadline is waited for with `tokio::time`, so the future must be
    /// polled inside a Tokio runtime with the time driver enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use may_rail::signal::Signal;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let (signal, _guard) = Signal::with_timeout(&Signal::background(), Duration::from_millis(5));
    /// let cancelled = signal.cancelled().await;
    /// assert!(cancelled.is_deadline_exceeded());
    /// # }
    /// ```
    pub fn cancelled(&self) -> Cancellation {
        Cancellation {
            signal: self.clone(),
            waker: Arc::new(Mutex::new(None)),
            watch: None,
            sleep: None,
        }
    }
}

pin_project! {
    /// Future returned by [`Signal::cancelled`].
    #[derive(Debug)]
    #[must_use = "futures do nothing unless polled"]
    pub struct Cancellation {
        signal: Signal,
        waker: Arc<Mutex<Option<Waker>>>,
        watch: Option<WatchGuard>,
        #[pin]
        sleep: Option<Sleep>,
    }
}

impl Future for Cancellation {
    type Output = Cancelled;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        if let Some(cancelled) = this.signal.err() {
            return Poll::Ready(cancelled);
        }

        *lock(this.waker) = Some(cx.waker().clone());

        if this.watch.is_none() {
            let waker = Arc::clone(this.waker);
            *this.watch = Some(this.signal.watch(move |_| {
                if let Some(waker) = lock(&waker).take() {
                    waker.wake();
                }
            }));
        }

        if this.sleep.is_none() {
            if let Some(deadline) = this.signal.deadline() {
                this.sleep.set(Some(sleep_until(deadline.into())));
            }
        }

        if let Some(sleep) = this.sleep.as_mut().as_pin_mut() {
            if sleep.poll(cx).is_ready() {
                if let Some(cancelled) = this.signal.err() {
                    return Poll::Ready(cancelled);
                }
                // The timer fired a little before the deadline by the
                // standard clock; try again on the next turn.
                this.sleep.set(None);
                cx.waker().wake_by_ref();
            }
        }

        // Cancelled between the first check and the watch registration.
        match this.signal.err() {
            Some(cancelled) => Poll::Ready(cancelled),
            None => Poll::Pending,
        }
    }
}
