//! Canonical hierarchical identifiers (ODDRNs) for entities in
//! heterogeneous data systems.
//!
//! ```text
//! //{source}/{address}/{name1}/{value1}/.../{nameN}/{valueN}
//! ```
//!
//! Pick a [`SourceKind`], supply one address configuration and any known
//! path values, then render identifiers for individual fields.

pub use oddrn_config as config;
pub use oddrn_core as core;
pub use oddrn_schema as sources;

pub mod external;

mod error;

pub use error::Error;
pub use oddrn_config::{ConfigError, GeneratorConfig};
pub use oddrn_core::{
    Error as CoreError, ODDRN_PREFIX,
    address::{
        Address, AddressConfigError, AddressKind, AddressSettings, AwsSettings, AzureBlobSettings,
        AzureSettings, GcpSettings,
    },
    escape::{DELIMITER, ESCAPED_DELIMITER, escape, unescape},
    generator::Generator,
    path::{PathError, PathState},
    schema::{FieldDef, Schema, SchemaError},
};
pub use oddrn_schema::{SourceKind, UnknownSource};

use std::path::Path;
use tracing::debug;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Literal prefix of an object URL accepted by [`s3_from_url`].
pub const S3_URL_PREFIX: &str = "s3://";

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        Error,
        external::{ExternalDbGenerator, ExternalDbSettings},
        generator,
    };
    pub use oddrn_core::prelude::*;
    pub use oddrn_schema::SourceKind;
}

/// Generator for `kind` with its static table.
pub fn generator<I, K, V>(
    kind: SourceKind,
    address: &AddressSettings,
    values: I,
) -> Result<Generator, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    Ok(Generator::new(kind.schema(), address, values)?)
}

/// Generator described by a parsed config.
pub fn from_config(config: &GeneratorConfig) -> Result<Generator, Error> {
    debug!(source = %config.source, "building generator from config");

    generator(config.source, &config.address, &config.paths)
}

/// Generator described by the TOML file at `path`.
pub fn from_config_file(path: impl AsRef<Path>) -> Result<Generator, Error> {
    let config = GeneratorConfig::load(path)?;

    from_config(&config)
}

/// S3 generator for `s3://bucket/key/path`. The key is taken verbatim,
/// with no percent decoding, and stored escaped.
pub fn s3_from_url(url: &str) -> Result<Generator, Error> {
    let invalid = |reason: &str| Error::InvalidS3Url {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let rest = url
        .strip_prefix(S3_URL_PREFIX)
        .ok_or_else(|| invalid("url must start with 's3://'"))?;
    let (bucket, key) = rest.split_once(DELIMITER).unwrap_or((rest, ""));
    if bucket.is_empty() {
        return Err(invalid("missing bucket"));
    }

    generator(
        SourceKind::S3,
        &AddressSettings::none(),
        [("buckets", bucket), ("keys", key)],
    )
}

/// Lambda generator with `functions` already set.
pub fn lambda_from_params(
    region: &str,
    account: &str,
    function_name: &str,
) -> Result<Generator, Error> {
    generator(
        SourceKind::Lambda,
        &AddressSettings::aws(account, region),
        [("functions", function_name)],
    )
}
