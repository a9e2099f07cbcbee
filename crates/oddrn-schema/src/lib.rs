//! Catalogue of supported source types and their static schema tables.

pub mod source;

use oddrn_core::schema::Schema;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use source::{cloud, pipeline, relational, reporting, storage};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

///
/// UnknownSource
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown source type '{0}'")]
pub struct UnknownSource(pub String);

///
/// SourceKind
///
/// Tag of a supported source type. The tag is the identifier segment right
/// after `//`.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[remain::sorted]
pub enum SourceKind {
    Airbyte,
    Airflow,
    Api,
    Athena,
    Azure,
    BigqueryStorage,
    BlobStorage,
    Cassandra,
    Clickhouse,
    Cubejs,
    DatabricksFeatureStore,
    DatabricksLakehouse,
    Dbt,
    Dms,
    Dynamodb,
    Elasticsearch,
    Feast,
    Filesystem,
    Gcs,
    Glue,
    GreatExpectations,
    Hive,
    Kafka,
    Kafkaconnect,
    Kinesis,
    Kubeflow,
    Lambda,
    Metabase,
    Mongo,
    Mssql,
    Mysql,
    Neo4j,
    Odbc,
    Oracle,
    Postgresql,
    Powerbi,
    Prefect,
    Presto,
    Quicksight,
    Redash,
    Redshift,
    S3,
    S3Custom,
    Sagemaker,
    Singlestore,
    Snowflake,
    Superset,
    Tableau,
    Tarantool,
    Trino,
    Vertica,
}

impl SourceKind {
    pub const ALL: &[Self] = &[
        Self::Airbyte,
        Self::Airflow,
        Self::Api,
        Self::Athena,
        Self::Azure,
        Self::BigqueryStorage,
        Self::BlobStorage,
        Self::Cassandra,
        Self::Clickhouse,
        Self::Cubejs,
        Self::DatabricksFeatureStore,
        Self::DatabricksLakehouse,
        Self::Dbt,
        Self::Dms,
        Self::Dynamodb,
        Self::Elasticsearch,
        Self::Feast,
        Self::Filesystem,
        Self::Gcs,
        Self::Glue,
        Self::GreatExpectations,
        Self::Hive,
        Self::Kafka,
        Self::Kafkaconnect,
        Self::Kinesis,
        Self::Kubeflow,
        Self::Lambda,
        Self::Metabase,
        Self::Mongo,
        Self::Mssql,
        Self::Mysql,
        Self::Neo4j,
        Self::Odbc,
        Self::Oracle,
        Self::Postgresql,
        Self::Powerbi,
        Self::Prefect,
        Self::Presto,
        Self::Quicksight,
        Self::Redash,
        Self::Redshift,
        Self::S3,
        Self::S3Custom,
        Self::Sagemaker,
        Self::Singlestore,
        Self::Snowflake,
        Self::Superset,
        Self::Tableau,
        Self::Tarantool,
        Self::Trino,
        Self::Vertica,
    ];

    /// The static table describing this source.
    #[must_use]
    pub fn schema(self) -> &'static Schema {
        match self {
            Self::Airbyte => &pipeline::AIRBYTE,
            Self::Airflow => &pipeline::AIRFLOW,
            Self::Api => &pipeline::API,
            Self::Athena => &cloud::ATHENA,
            Self::Azure => &relational::AZURE,
            Self::BigqueryStorage => &storage::BIGQUERY_STORAGE,
            Self::BlobStorage => &storage::BLOB_STORAGE,
            Self::Cassandra => &relational::CASSANDRA,
            Self::Clickhouse => &relational::CLICKHOUSE,
            Self::Cubejs => &reporting::CUBEJS,
            Self::DatabricksFeatureStore => &pipeline::DATABRICKS_FEATURE_STORE,
            Self::DatabricksLakehouse => &relational::DATABRICKS_LAKEHOUSE,
            Self::Dbt => &pipeline::DBT,
            Self::Dms => &cloud::DMS,
            Self::Dynamodb => &cloud::DYNAMODB,
            Self::Elasticsearch => &relational::ELASTICSEARCH,
            Self::Feast => &pipeline::FEAST,
            Self::Filesystem => &storage::FILESYSTEM,
            Self::Gcs => &storage::GCS,
            Self::Glue => &cloud::GLUE,
            Self::GreatExpectations => &pipeline::GREAT_EXPECTATIONS,
            Self::Hive => &relational::HIVE,
            Self::Kafka => &pipeline::KAFKA,
            Self::Kafkaconnect => &pipeline::KAFKACONNECT,
            Self::Kinesis => &cloud::KINESIS,
            Self::Kubeflow => &pipeline::KUBEFLOW,
            Self::Lambda => &cloud::LAMBDA,
            Self::Metabase => &reporting::METABASE,
            Self::Mongo => &relational::MONGO,
            Self::Mssql => &relational::MSSQL,
            Self::Mysql => &relational::MYSQL,
            Self::Neo4j => &relational::NEO4J,
            Self::Odbc => &relational::ODBC,
            Self::Oracle => &relational::ORACLE,
            Self::Postgresql => &relational::POSTGRESQL,
            Self::Powerbi => &reporting::POWERBI,
            Self::Prefect => &pipeline::PREFECT,
            Self::Presto => &relational::PRESTO,
            Self::Quicksight => &cloud::QUICKSIGHT,
            Self::Redash => &reporting::REDASH,
            Self::Redshift => &relational::REDSHIFT,
            Self::S3 => &storage::S3,
            Self::S3Custom => &storage::S3_CUSTOM,
            Self::Sagemaker => &cloud::SAGEMAKER,
            Self::Singlestore => &relational::SINGLESTORE,
            Self::Snowflake => &relational::SNOWFLAKE,
            Self::Superset => &reporting::SUPERSET,
            Self::Tableau => &reporting::TABLEAU,
            Self::Tarantool => &relational::TARANTOOL,
            Self::Trino => &relational::TRINO,
            Self::Vertica => &relational::VERTICA,
        }
    }

    /// Wire tag, identical to the schema's `source`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.schema().source
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = UnknownSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownSource(s.to_string()))
    }
}

impl Serialize for SourceKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SourceKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;

        tag.parse().map_err(de::Error::custom)
    }
}
