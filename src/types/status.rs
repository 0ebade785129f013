use std::error::Error;

use crate::types::{BoxError, MayError, MultiError};

/// Status half of a `(value, status)` result.
///
/// Build it through [`IntoStatus`](crate::traits::IntoStatus): `bool`,
/// `Option<E>` and `Result<(), E>` all convert, as do the error types of this
/// crate. Anything else does not compile.
///
/// # Examples
///
/// ```
/// use may_rail::types::Status;
///
/// assert!(Status::Bool(true).normalize().is_none());
/// assert_eq!(Status::Bool(false).normalize().unwrap().to_string(), "not ok");
/// assert_eq!(Status::error("boom").normalize().unwrap().to_string(), "boom");
/// ```
#[derive(Debug, Default)]
pub enum Status {
    /// No status at all; treated as success.
    #[default]
    Absent,
    /// `true` is success, `false` the [`NotOk`](crate::types::NotOk) sentinel.
    Bool(bool),
    /// A failure carried by an error value.
    Error(BoxError),
}

impl Status {
    /// Status carrying `error`.
    #[inline]
    pub fn error<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Error(error.into())
    }

    /// Returns `true` if the status normalizes to no failure.
    #[inline]
    pub fn is_success(&self) -> bool {
        match self {
            Self::Absent | Self::Bool(true) => true,
            Self::Bool(false) => false,
            Self::Error(error) => is_empty_aggregate(&**error),
        }
    }

    /// Converts the status into a normalized failure, or `None` on success.
    pub fn normalize(self) -> Option<MayError> {
        match self {
            Self::Absent | Self::Bool(true) => None,
            Self::Bool(false) => Some(MayError::not_ok()),
            // An aggregate of nothing is no failure.
            Self::Error(error) if is_empty_aggregate(&*error) => None,
            Self::Error(error) => Some(MayError::from_boxed(error)),
        }
    }
}

fn is_empty_aggregate(error: &(dyn Error + Send + Sync + 'static)) -> bool {
    if let Some(errors) = error.downcast_ref::<MultiError>() {
        return errors.is_empty();
    }
    error
        .downcast_ref::<MayError>()
        .and_then(MayError::as_multi)
        .is_some_and(MultiError::is_empty)
}
