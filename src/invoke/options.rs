use core::time::Duration;

use smallvec::SmallVec;

/// Options for [`invoke_with`](crate::invoke::invoke_with).
///
/// Every timeout derives one more signal from the previous one, so the
/// shortest timeout wins. Zero durations are ignored.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use may_rail::invoke::CallOptions;
///
/// let options = CallOptions::new()
///     .with_timeout(Duration::from_secs(5))
///     .with_timeout(Duration::ZERO);
/// assert_eq!(options.timeouts(), &[Duration::from_secs(5)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    timeouts: SmallVec<[Duration; 1]>,
}

impl CallOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds the call by `timeout`, measured when the call starts.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        if !timeout.is_zero() {
            self.timeouts.push(timeout);
        }
        self
    }

    /// The effective timeouts in the order they were added.
    #[inline]
    pub fn timeouts(&self) -> &[Duration] {
        &self.timeouts
    }
}

impl From<Duration> for CallOptions {
    #[inline]
    fn from(timeout: Duration) -> Self {
        Self::new().with_timeout(timeout)
    }
}
