//! TOML description of one generator: source tag, address settings and
//! initial path values.
//!
//! ```toml
//! source = "postgresql"
//!
//! [address]
//! host = "127.0.0.1:5432"
//!
//! [paths]
//! databases = "analytics"
//! schemas = "public"
//! ```

use oddrn_core::address::AddressSettings;
use oddrn_schema::SourceKind;
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid generator config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize generator config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

///
/// GeneratorConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    pub source: SourceKind,

    #[serde(default)]
    pub address: AddressSettings,

    /// Raw values keyed by field or unique wire name.
    #[serde(default)]
    pub paths: BTreeMap<String, String>,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(source: SourceKind, address: AddressSettings) -> Self {
        Self {
            source,
            address,
            paths: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_path(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.paths.insert(field.into(), value.into());
        self
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        debug!(source = %config.source, paths = config.paths.len(), "generator config parsed");

        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading generator config");

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}
