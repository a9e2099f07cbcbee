use crate::{address::AddressConfigError, path::PathError};
use thiserror::Error as ThisError;

///
/// Error
///
/// Every failure the engine reports. Construction errors leave no instance
/// behind; render errors leave the instance as it was.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum Error {
    #[error(transparent)]
    Address(#[from] AddressConfigError),

    #[error(transparent)]
    Path(#[from] PathError),
}

impl Error {
    /// Path-level cause, if any.
    #[must_use]
    pub const fn as_path(&self) -> Option<&PathError> {
        match self {
            Self::Path(err) => Some(err),
            Self::Address(_) => None,
        }
    }
}
