use core::fmt;
use std::error::Error;

use crate::types::{ErrorVec, MayError};

/// Append-only, order-preserving combination of failures.
///
/// Displays as its constituents joined with `"; "`; a single constituent
/// displays as itself. Appending a failure that is itself an undecorated
/// `MultiError` splices its constituents in, so combining is associative.
///
/// # Examples
///
/// ```
/// use may_rail::types::{MayError, MultiError};
///
/// let mut errors = MultiError::new();
/// errors.append(MayError::msg("first"));
/// errors.append(MayError::msg("second"));
///
/// assert_eq!(errors.to_string(), "first; second");
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct MultiError {
    errors: ErrorVec<MayError>,
}

impl MultiError {
    /// Creates a new empty aggregate.
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Combines `errors` into one aggregate, or `None` when there are none.
    pub fn combine<I>(errors: I) -> Option<Self>
    where
        I: IntoIterator<Item = MayError>,
    {
        let combined: Self = errors.into_iter().collect();
        if combined.is_empty() {
            None
        } else {
            Some(combined)
        }
    }

    /// Adds a single failure to the end of the aggregate.
    pub fn append(&mut self, error: MayError) {
        match error.as_multi() {
            Some(nested) => self.errors.extend(nested.errors.iter().cloned()),
            None => self.errors.push(error),
        }
    }

    /// Returns true if nothing was ever appended.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of constituents.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The constituents in append order.
    #[inline]
    pub fn errors(&self) -> &[MayError] {
        &self.errors
    }

    /// Returns an iterator over the constituents in append order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, MayError> {
        self.errors.iter()
    }

    /// Consumes the aggregate and returns its constituents in append order.
    #[inline]
    pub fn into_errors(self) -> Vec<MayError> {
        self.errors.into_vec()
    }
}

impl fmt::Debug for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.errors.iter()).finish()
    }
}

impl fmt::Display for MultiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl Error for MultiError {}

impl Extend<MayError> for MultiError {
    fn extend<I: IntoIterator<Item = MayError>>(&mut self, iter: I) {
        for error in iter {
            self.append(error);
        }
    }
}

impl FromIterator<MayError> for MultiError {
    fn from_iter<I: IntoIterator<Item = MayError>>(iter: I) -> Self {
        let mut combined = Self::new();
        combined.extend(iter);
        combined
    }
}

impl IntoIterator for MultiError {
    type Item = MayError;
    type IntoIter = smallvec::IntoIter<[MayError; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a MultiError {
    type Item = &'a MayError;
    type IntoIter = core::slice::Iter<'a, MayError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MultiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.errors.iter())
    }
}
