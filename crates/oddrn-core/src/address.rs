//! Server / account identity segment of an identifier.
//!
//! `AddressSettings` is the raw caller input and may hold several entries;
//! resolving it against a source's `AddressKind` yields exactly one
//! `Address` or an `AddressConfigError`.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error as ThisError;
use tracing::debug;
use url::Url;

///
/// AddressConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AddressConfigError {
    #[error("no address settings supplied, source requires '{expected}' settings")]
    Missing { expected: AddressKind },

    #[error("exactly one address configuration is allowed, got {}", join_kinds(.supplied))]
    Conflicting { supplied: Vec<AddressKind> },

    #[error("source requires '{expected}' address settings, got '{supplied}'")]
    Mismatch {
        expected: AddressKind,
        supplied: AddressKind,
    },

    #[error("invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

fn join_kinds(kinds: &[AddressKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn filled(parts: &[&str]) -> bool {
    parts.iter().all(|part| !part.is_empty())
}

///
/// AddressKind
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum AddressKind {
    #[display("host")]
    Host,
    #[display("aws")]
    Aws,
    #[display("azure")]
    Azure,
    #[display("azure_blob")]
    AzureBlob,
    #[display("gcp")]
    Gcp,
    #[display("s3")]
    S3Implicit,
    #[display("filesystem")]
    Filesystem,
    #[display("endpoint")]
    Endpoint,
}

impl AddressKind {
    /// Address used when no settings are supplied at all.
    #[must_use]
    pub const fn implicit(self) -> Option<Address> {
        match self {
            Self::S3Implicit => Some(Address::S3),
            Self::Filesystem => Some(Address::Filesystem),
            _ => None,
        }
    }

    /// Whether settings of kind `supplied` satisfy a source expecting `self`.
    /// Implicit kinds may still be scoped explicitly.
    #[must_use]
    pub fn accepts(self, supplied: Self) -> bool {
        match self {
            Self::S3Implicit => supplied == Self::Aws,
            Self::Filesystem => supplied == Self::Host,
            _ => supplied == self,
        }
    }
}

///
/// AwsSettings
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AwsSettings {
    pub account: String,
    pub region: String,
}

///
/// AzureSettings
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AzureSettings {
    pub domain: String,
}

///
/// AzureBlobSettings
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AzureBlobSettings {
    pub account: String,
    pub container: String,
}

///
/// GcpSettings
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GcpSettings {
    pub project: String,
}

///
/// AddressSettings
///
/// Unvalidated address input. An entry with any empty component counts as
/// not supplied.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AddressSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<AwsSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<AzureSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure_blob: Option<AzureBlobSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<GcpSettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl AddressSettings {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn host(host: impl Into<String>) -> Self {
        Self {
            host: Some(host.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn aws(account: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            aws: Some(AwsSettings {
                account: account.into(),
                region: region.into(),
            }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn azure(domain: impl Into<String>) -> Self {
        Self {
            azure: Some(AzureSettings {
                domain: domain.into(),
            }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn azure_blob(account: impl Into<String>, container: impl Into<String>) -> Self {
        Self {
            azure_blob: Some(AzureBlobSettings {
                account: account.into(),
                container: container.into(),
            }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn gcp(project: impl Into<String>) -> Self {
        Self {
            gcp: Some(GcpSettings {
                project: project.into(),
            }),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn endpoint(url: impl Into<String>) -> Self {
        Self {
            endpoint: Some(url.into()),
            ..Self::default()
        }
    }

    /// Kinds of the entries actually supplied, in declaration order.
    #[must_use]
    pub fn supplied(&self) -> Vec<AddressKind> {
        let non_empty = |s: &Option<String>| s.as_deref().is_some_and(|s| !s.is_empty());

        [
            (non_empty(&self.host), AddressKind::Host),
            (
                self.aws
                    .as_ref()
                    .is_some_and(|aws| filled(&[aws.account.as_str(), aws.region.as_str()])),
                AddressKind::Aws,
            ),
            (
                self.azure.as_ref().is_some_and(|azure| filled(&[azure.domain.as_str()])),
                AddressKind::Azure,
            ),
            (
                self.azure_blob
                    .as_ref()
                    .is_some_and(|blob| filled(&[blob.account.as_str(), blob.container.as_str()])),
                AddressKind::AzureBlob,
            ),
            (
                self.gcp.as_ref().is_some_and(|gcp| filled(&[gcp.project.as_str()])),
                AddressKind::Gcp,
            ),
            (non_empty(&self.endpoint), AddressKind::Endpoint),
        ]
        .into_iter()
        .filter_map(|(present, kind)| present.then_some(kind))
        .collect()
    }

    /// Resolve into the single address `expected` requires.
    pub fn resolve(&self, expected: AddressKind) -> Result<Address, AddressConfigError> {
        let supplied = self.supplied();
        debug!(%expected, ?supplied, "resolving address settings");

        if supplied.len() > 1 {
            return Err(AddressConfigError::Conflicting { supplied });
        }

        let Some(&kind) = supplied.first() else {
            return expected
                .implicit()
                .ok_or(AddressConfigError::Missing { expected });
        };

        if !expected.accepts(kind) {
            return Err(AddressConfigError::Mismatch {
                expected,
                supplied: kind,
            });
        }

        self.build(kind)
    }

    fn build(&self, kind: AddressKind) -> Result<Address, AddressConfigError> {
        let address = match (kind, self) {
            (
                AddressKind::Host,
                Self {
                    host: Some(host), ..
                },
            ) => Address::Host { host: host.clone() },
            (AddressKind::Aws, Self { aws: Some(aws), .. }) => Address::Aws {
                account: aws.account.clone(),
                region: aws.region.clone(),
            },
            (
                AddressKind::Azure,
                Self {
                    azure: Some(azure), ..
                },
            ) => Address::Azure {
                domain: azure.domain.clone(),
            },
            (
                AddressKind::AzureBlob,
                Self {
                    azure_blob: Some(blob),
                    ..
                },
            ) => Address::AzureBlob {
                account: blob.account.clone(),
                container: blob.container.clone(),
            },
            (AddressKind::Gcp, Self { gcp: Some(gcp), .. }) => Address::Gcp {
                project: gcp.project.clone(),
            },
            (
                AddressKind::Endpoint,
                Self {
                    endpoint: Some(url),
                    ..
                },
            ) => Address::endpoint(url)?,
            _ => return Err(AddressConfigError::Missing { expected: kind }),
        };

        Ok(address)
    }
}

///
/// Address
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Address {
    Host { host: String },
    Aws { account: String, region: String },
    Azure { domain: String },
    AzureBlob { account: String, container: String },
    Gcp { project: String },
    S3,
    Filesystem,
    Endpoint { host: String },
}

impl Address {
    /// Keep only the host component of `url`.
    pub fn endpoint(url: &str) -> Result<Self, AddressConfigError> {
        let invalid = |reason: String| AddressConfigError::InvalidEndpoint {
            url: url.to_string(),
            reason,
        };

        let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
        let host = parsed
            .host_str()
            .filter(|host| !host.is_empty())
            .ok_or_else(|| invalid("url has no host".to_string()))?;

        Ok(Self::Endpoint {
            host: host.to_string(),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> AddressKind {
        match self {
            Self::Host { .. } => AddressKind::Host,
            Self::Aws { .. } => AddressKind::Aws,
            Self::Azure { .. } => AddressKind::Azure,
            Self::AzureBlob { .. } => AddressKind::AzureBlob,
            Self::Gcp { .. } => AddressKind::Gcp,
            Self::S3 => AddressKind::S3Implicit,
            Self::Filesystem => AddressKind::Filesystem,
            Self::Endpoint { .. } => AddressKind::Endpoint,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host { host } => write!(f, "host/{host}"),
            Self::Aws { account, region } => {
                write!(f, "cloud/aws/account/{account}/region/{region}")
            }
            Self::Azure { domain } => write!(f, "cloud/azure/domain/{domain}"),
            Self::AzureBlob { account, container } => {
                write!(f, "cloud/azure/account/{account}/container/{container}")
            }
            Self::Gcp { project } => write!(f, "cloud/gcp/project/{project}"),
            Self::S3 => f.write_str("cloud/aws"),
            Self::Filesystem => f.write_str("filesystem"),
            Self::Endpoint { host } => write!(f, "endpoint/{host}"),
        }
    }
}
