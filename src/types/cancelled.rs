//! The cancellation error produced when a [`Signal`](crate::signal::Signal)
//! fires before an invocation finishes.

use core::fmt;
use std::error::Error;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::BoxError;

/// Why a signal stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CancelReason {
    /// Cancelled explicitly through a [`CancelHandle`](crate::signal::CancelHandle),
    /// with or without a cause.
    Canceled,
    /// The signal's deadline passed.
    DeadlineExceeded,
}

impl fmt::Display for CancelReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canceled => f.write_str("operation canceled"),
            Self::DeadlineExceeded => f.write_str("deadline exceeded"),
        }
    }
}

/// Error returned by [`invoke`](crate::invoke::invoke) when the signal wins the race.
///
/// Carries the [`CancelReason`] and, for `cancel_with_cause`, the caller-supplied
/// cause, which is also exposed through [`Error::source`].
///
/// # Examples
///
/// ```
/// use may_rail::types::{CancelReason, Cancelled};
///
/// let err = Cancelled::with_cause("shutting down");
/// assert_eq!(err.reason(), CancelReason::Canceled);
/// assert_eq!(err.to_string(), "operation canceled: shutting down");
/// ```
#[derive(Clone)]
pub struct Cancelled {
    reason: CancelReason,
    cause: Option<Arc<dyn Error + Send + Sync + 'static>>,
}

impl Cancelled {
    /// Explicit cancellation without a cause.
    #[inline]
    pub fn canceled() -> Self {
        Self { reason: CancelReason::Canceled, cause: None }
    }

    /// Deadline expiry.
    #[inline]
    pub fn deadline_exceeded() -> Self {
        Self { reason: CancelReason::DeadlineExceeded, cause: None }
    }

    /// Explicit cancellation carrying `cause`.
    pub fn with_cause<C>(cause: C) -> Self
    where
        C: Into<BoxError>,
    {
        Self { reason: CancelReason::Canceled, cause: Some(Arc::from(cause.into())) }
    }

    #[inline]
    pub fn reason(&self) -> CancelReason {
        self.reason
    }

    /// The cause supplied to `cancel_with_cause`, if any.
    pub fn cause(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    #[inline]
    pub fn is_deadline_exceeded(&self) -> bool {
        self.reason == CancelReason::DeadlineExceeded
    }
}

impl fmt::Debug for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cancelled")
            .field("reason", &self.reason)
            .field("cause", &self.cause.as_ref().map(|cause| cause.to_string()))
            .finish()
    }
}

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {}", self.reason, cause),
            None => fmt::Display::fmt(&self.reason, f),
        }
    }
}

impl Error for Cancelled {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn Error + 'static))
    }
}

#[cfg(feature = "serde")]
impl Serialize for Cancelled {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("Cancelled", 2)?;
        state.serialize_field("reason", &self.reason)?;
        state.serialize_field("cause", &self.cause.as_ref().map(|cause| cause.to_string()))?;
        state.end()
    }
}
