//! Normalized failures reported through a [`May`](crate::may::May) filter.
//!
//! Every status that is not a success ends up as a [`MayError`]: either the
//! [`NotOk`] sentinel produced by a `false` status, or the caller's own error.
//! Message context is attached with [`MayError::decorate`].

use core::fmt;
use std::error::Error;
use std::sync::Arc;

use crate::types::{BoxError, MessageArgs, MultiError};

/// Sentinel failure produced by a `false` status.
///
/// Carries no information of its own, so decoration with a non-empty message
/// replaces it entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NotOk;

impl fmt::Display for NotOk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not ok")
    }
}

impl Error for NotOk {}

static NOT_OK: NotOk = NotOk;

/// A normalized, cheaply clonable failure.
///
/// # Examples
///
/// ```
/// use may_rail::msg;
/// use may_rail::types::MayError;
///
/// let err = MayError::new("boom").decorate(&msg!("loading %s", "config.toml"));
/// assert_eq!(err.to_string(), "loading config.toml: boom");
///
/// let sentinel = MayError::not_ok().decorate(&msg!("lookup failed"));
/// assert_eq!(sentinel.to_string(), "lookup failed");
/// ```
#[derive(Clone)]
pub struct MayError {
    repr: Arc<Repr>,
}

enum Repr {
    NotOk,
    Message(String),
    Wrapped { message: Option<String>, source: BoxError },
}

impl MayError {
    /// The sentinel failure.
    #[inline]
    pub fn not_ok() -> Self {
        Self { repr: Arc::new(Repr::NotOk) }
    }

    /// A failure consisting only of `message`.
    pub fn msg<M>(message: M) -> Self
    where
        M: Into<String>,
    {
        Self { repr: Arc::new(Repr::Message(message.into())) }
    }

    /// Wraps any error. Boxed `MayError` and `NotOk` values are unwrapped
    /// instead of being nested.
    pub fn new<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::from_boxed(error.into())
    }

    /// Like [`MayError::new`] for an already boxed error.
    pub fn from_boxed(error: BoxError) -> Self {
        let error = match error.downcast::<MayError>() {
            Ok(may) => return *may,
            Err(other) => other,
        };
        if error.is::<NotOk>() {
            return Self::not_ok();
        }
        Self { repr: Arc::new(Repr::Wrapped { message: None, source: error }) }
    }

    /// Returns `true` for the undecorated sentinel.
    #[inline]
    pub fn is_not_ok(&self) -> bool {
        matches!(*self.repr, Repr::NotOk)
    }

    /// The message attached by decoration, if any.
    pub fn message(&self) -> Option<&str> {
        match &*self.repr {
            Repr::NotOk => None,
            Repr::Message(message) => Some(message),
            Repr::Wrapped { message, .. } => message.as_deref(),
        }
    }

    /// Searches the wrapped chain for an error of type `E`.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: Error + 'static,
    {
        let mut current = self.inner_error();
        while let Some(err) = current {
            if let Some(found) = err.downcast_ref::<E>() {
                return Some(found);
            }
            if let Some(nested) = err.downcast_ref::<MayError>() {
                return nested.downcast_ref::<E>();
            }
            current = err.source();
        }
        None
    }

    /// Returns `true` if an error of type `E` is anywhere in the wrapped chain.
    #[inline]
    pub fn is<E>(&self) -> bool
    where
        E: Error + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Attaches the rendered message context.
    ///
    /// - empty message: the failure is returned unchanged
    /// - sentinel failure: the message replaces it
    /// - any other failure: `"<message>: <failure>"`
    pub fn decorate(&self, args: &MessageArgs<'_>) -> MayError {
        let message = args.render();
        if message.is_empty() {
            return self.clone();
        }
        if self.is::<NotOk>() {
            return Self::msg(message);
        }
        Self {
            repr: Arc::new(Repr::Wrapped { message: Some(message), source: Box::new(self.clone()) }),
        }
    }

    /// The aggregate this failure stands for, if it is an undecorated [`MultiError`].
    pub(crate) fn as_multi(&self) -> Option<&MultiError> {
        match &*self.repr {
            Repr::Wrapped { message: None, source } => source.downcast_ref::<MultiError>(),
            _ => None,
        }
    }

    fn inner_error(&self) -> Option<&(dyn Error + 'static)> {
        match &*self.repr {
            Repr::NotOk => Some(&NOT_OK as &(dyn Error + 'static)),
            Repr::Message(_) => None,
            Repr::Wrapped { source, .. } => Some(source.as_ref() as &(dyn Error + 'static)),
        }
    }
}

impl fmt::Display for MayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.repr {
            Repr::NotOk => fmt::Display::fmt(&NOT_OK, f),
            Repr::Message(message) => f.write_str(message),
            Repr::Wrapped { message: Some(message), source } => write!(f, "{message}: {source}"),
            Repr::Wrapped { message: None, source } => fmt::Display::fmt(source, f),
        }
    }
}

impl fmt::Debug for MayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.repr {
            Repr::NotOk => f.write_str("NotOk"),
            Repr::Message(message) => f.debug_tuple("Message").field(message).finish(),
            Repr::Wrapped { message, source } => f
                .debug_struct("Wrapped")
                .field("message", message)
                .field("source", source)
                .finish(),
        }
    }
}

impl Error for MayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &*self.repr {
            Repr::NotOk | Repr::Message(_) => None,
            Repr::Wrapped { message: Some(_), source } => {
                Some(source.as_ref() as &(dyn Error + 'static))
            },
            // Undecorated wrappers are transparent.
            Repr::Wrapped { message: None, source } => source.source(),
        }
    }
}

impl From<BoxError> for MayError {
    #[inline]
    fn from(error: BoxError) -> Self {
        Self::from_boxed(error)
    }
}

impl From<NotOk> for MayError {
    #[inline]
    fn from(_: NotOk) -> Self {
        Self::not_ok()
    }
}

impl From<crate::types::Cancelled> for MayError {
    #[inline]
    fn from(cancelled: crate::types::Cancelled) -> Self {
        Self::new(cancelled)
    }
}

impl From<MultiError> for MayError {
    #[inline]
    fn from(errors: MultiError) -> Self {
        Self::new(errors)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MayError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
