use oddrn_config::ConfigError;
use oddrn_core::{address::AddressConfigError, path::PathError};
use oddrn_schema::SourceKind;
use thiserror::Error as ThisError;

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Oddrn(#[from] oddrn_core::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("datasource {source_type} wasn't implemented yet")]
    UnsupportedExternalSource { source_type: SourceKind },

    #[error("invalid s3 url '{url}': {reason}")]
    InvalidS3Url { url: String, reason: String },
}

impl From<PathError> for Error {
    fn from(err: PathError) -> Self {
        Self::Oddrn(err.into())
    }
}

impl From<AddressConfigError> for Error {
    fn from(err: AddressConfigError) -> Self {
        Self::Oddrn(err.into())
    }
}
