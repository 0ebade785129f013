use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use super::Cancellation;
use crate::signal::Signal;
use crate::tracing_compat::debug;
use crate::types::Cancelled;

/// Races `future` against `signal`.
///
/// Resolves to the future's output if it completes first, or to the
/// [`Cancelled`] error once the signal fires. Unlike the blocking
/// [`invoke`](crate::invoke::invoke), the future does not run anywhere else,
/// so a cancelled future is dropped together with the returned
/// [`Invocation`]. Spawn it first if it must run to completion.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use may_rail::async_ext::invoke_async;
/// use may_rail::signal::Signal;
/// use may_rail::types::Cancelled;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let (signal, _guard) = Signal::with_timeout(&Signal::background(), Duration::from_millis(5));
/// let result: Result<(), Cancelled> = invoke_async(&signal, async {
///     tokio::time::sleep(Duration::from_secs(10)).await;
///     Ok::<(), Cancelled>(())
/// })
/// .await;
/// assert!(result.unwrap_err().is_deadline_exceeded());
/// # }
/// ```
pub fn invoke_async<F, R, E>(signal: &Signal, future: F) -> Invocation<F>
where
    F: Future<Output = Result<R, E>>,
    E: From<Cancelled>,
{
    Invocation { future, cancelled: signal.cancelled() }
}

pin_project! {
    /// Future returned by [`invoke_async`].
    #[must_use = "futures do nothing unless polled"]
    pub struct Invocation<F> {
        #[pin]
        future: F,
        #[pin]
        cancelled: Cancellation,
    }
}

impl<F, R, E> Future for Invocation<F>
where
    F: Future<Output = Result<R, E>>,
    E: From<Cancelled>,
{
    type Output = Result<R, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        if let Poll::Ready(output) = this.future.poll(cx) {
            return Poll::Ready(output);
        }

        match this.cancelled.poll(cx) {
            Poll::Ready(cancelled) => {
                debug!(reason = %cancelled, "async call cancelled, dropping its future");
                Poll::Ready(Err(E::from(cancelled)))
            },
            Poll::Pending => Poll::Pending,
        }
    }
}
