use crate::types::{MayError, MultiError};

/// Retrieval of the failures accumulated by a filter.
///
/// Implemented by every [`May`](crate::may::May) arity, so helpers can accept
/// any of them.
///
/// # Examples
///
/// ```
/// use may_rail::traits::ErrorCollectable;
/// use may_rail::{msg, May, May2};
///
/// fn report(collectable: &impl ErrorCollectable) -> usize {
///     collectable.collect_as_errors().len()
/// }
///
/// let one = May::<i32>::new();
/// one.invoke(0, false, &msg!());
///
/// let two = May2::<i32, &str>::new();
/// two.invoke((1, "a"), Some("boom"), &msg!());
///
/// assert_eq!(report(&one) + report(&two), 2);
/// ```
pub trait ErrorCollectable {
    /// The combined aggregate, or `None` if nothing failed.
    fn collect_as_error(&self) -> Option<MultiError>;

    /// Every failure in append order; empty if nothing failed.
    fn collect_as_errors(&self) -> Vec<MayError> {
        self.collect_as_error().map(MultiError::into_errors).unwrap_or_default()
    }

    /// Runs `handler` with the failures, only if there are any.
    fn handle_errors<F>(&self, handler: F)
    where
        F: FnOnce(&[MayError]),
    {
        if let Some(errors) = self.collect_as_error() {
            handler(errors.errors());
        }
    }

    /// Runs `handler` with the failures and returns its result; `Ok(())`
    /// without calling it if there are none.
    fn handle_errors_with_return<F, E>(&self, handler: F) -> Result<(), E>
    where
        F: FnOnce(Vec<MayError>) -> Result<(), E>,
    {
        match self.collect_as_error() {
            Some(errors) => handler(errors.into_errors()),
            None => Ok(()),
        }
    }
}
