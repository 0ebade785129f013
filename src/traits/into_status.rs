//! Conversion of call results into a [`Status`].
//!
//! Only two failure encodings exist: a boolean and an error value. Both go
//! through this trait, so a status of any other type is rejected at compile
//! time:
//!
//! ```compile_fail
//! use may_rail::{msg, May};
//!
//! let may = May::<i32>::new();
//! may.invoke(1, 123, &msg!());
//! ```

use crate::types::{BoxError, Cancelled, MayError, MultiError, NotOk, Status};

/// Types accepted as the status of a `(value, status)` result.
pub trait IntoStatus {
    fn into_status(self) -> Status;
}

impl IntoStatus for Status {
    #[inline]
    fn into_status(self) -> Status {
        self
    }
}

impl IntoStatus for bool {
    #[inline]
    fn into_status(self) -> Status {
        Status::Bool(self)
    }
}

impl<E> IntoStatus for Option<E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn into_status(self) -> Status {
        match self {
            Some(error) => Status::Error(error.into()),
            None => Status::Absent,
        }
    }
}

impl<E> IntoStatus for Result<(), E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn into_status(self) -> Status {
        match self {
            Ok(()) => Status::Absent,
            Err(error) => Status::Error(error.into()),
        }
    }
}

macro_rules! impl_error_status {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoStatus for $ty {
                #[inline]
                fn into_status(self) -> Status {
                    Status::Error(Box::new(self))
                }
            }
        )*
    };
}

impl_error_status!(MayError, MultiError, Cancelled, NotOk, std::io::Error);

impl IntoStatus for BoxError {
    #[inline]
    fn into_status(self) -> Status {
        Status::Error(self)
    }
}
