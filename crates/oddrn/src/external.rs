//! Generators for databases referenced from another system, such as the
//! upstream tables of a BI dataset. Only the connection host is known, so
//! every supported kind is host-addressed.

use crate::{Error, generator};
use oddrn_core::{address::AddressSettings, generator::Generator};
use oddrn_schema::SourceKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

///
/// ExternalDbSettings
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExternalDbSettings {
    pub host: String,

    /// Carried for callers; not part of the identifier.
    #[serde(default)]
    pub port: Option<u16>,

    pub database_name: String,
}

///
/// Layout
///
/// Which fields hold the database, schema and table levels of a source.
/// Sources without a schema level ignore the schema name.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Layout {
    pub database: &'static str,
    pub schema: Option<&'static str>,
    pub table: &'static str,
}

impl Layout {
    const fn deep(database: &'static str, schema: &'static str) -> Self {
        Self {
            database,
            schema: Some(schema),
            table: "tables",
        }
    }

    const fn shallow(database: &'static str) -> Self {
        Self {
            database,
            schema: None,
            table: "tables",
        }
    }

    #[must_use]
    pub const fn for_kind(kind: SourceKind) -> Option<Self> {
        let layout = match kind {
            SourceKind::Mssql
            | SourceKind::Odbc
            | SourceKind::Postgresql
            | SourceKind::Redshift
            | SourceKind::Snowflake
            | SourceKind::Vertica => Self::deep("databases", "schemas"),
            SourceKind::Presto | SourceKind::Trino => Self::deep("catalogs", "schemas"),
            SourceKind::Oracle => Self::deep("schemas", "databases"),
            SourceKind::Clickhouse | SourceKind::Hive | SourceKind::Mysql => {
                Self::shallow("databases")
            }
            SourceKind::Cassandra => Self::shallow("keyspaces"),
            SourceKind::Mongo => Self {
                table: "collections",
                ..Self::shallow("databases")
            },
            SourceKind::Neo4j => Self {
                table: "nodes",
                ..Self::shallow("databases")
            },
            _ => return None,
        };

        Some(layout)
    }
}

///
/// ExternalDbGenerator
///

#[derive(Clone, Debug)]
pub struct ExternalDbGenerator {
    kind: SourceKind,
    settings: ExternalDbSettings,
    layout: Layout,
}

impl ExternalDbGenerator {
    pub fn new(kind: SourceKind, settings: ExternalDbSettings) -> Result<Self, Error> {
        let layout =
            Layout::for_kind(kind).ok_or(Error::UnsupportedExternalSource { source_type: kind })?;

        Ok(Self {
            kind,
            settings,
            layout,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> SourceKind {
        self.kind
    }

    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    #[must_use]
    pub const fn settings(&self) -> &ExternalDbSettings {
        &self.settings
    }

    /// Generator with only the database level set.
    pub fn for_database_level(&self) -> Result<Generator, Error> {
        debug!(
            source = %self.kind,
            host = %self.settings.host,
            database = %self.settings.database_name,
            "external generator"
        );

        generator(
            self.kind,
            &AddressSettings::host(&self.settings.host),
            [(self.layout.database, &self.settings.database_name)],
        )
    }

    /// Generator with the database and schema levels set.
    pub fn for_schema_level(&self, schema: &str) -> Result<Generator, Error> {
        let mut generator = self.for_database_level()?;

        if let Some(field) = self.layout.schema {
            generator.get_oddrn_by_path(field, Some(schema))?;
        }

        Ok(generator)
    }

    /// Generator with the database, schema and table levels set.
    pub fn for_table_level(&self, schema: &str, table: &str) -> Result<Generator, Error> {
        let mut generator = self.for_schema_level(schema)?;
        generator.get_oddrn_by_path(self.layout.table, Some(table))?;

        Ok(generator)
    }
}
