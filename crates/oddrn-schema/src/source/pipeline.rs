//! Orchestrators, streaming platforms, feature stores and data quality
//! tools.

use oddrn_core::{
    address::AddressKind,
    schema::{FieldDef, Schema},
};

pub static AIRBYTE: Schema = Schema {
    source: "airbyte",
    address: AddressKind::Host,
    fields: &[FieldDef::new("connections", &["connections"])],
    anchor: None,
    allows_null: &[],
};

pub static AIRFLOW: Schema = Schema {
    source: "airflow",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("dags", &["dags"]),
        FieldDef::new("tasks", &["dags", "tasks"]),
        FieldDef::new("runs", &["dags", "tasks", "runs"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static API: Schema = Schema {
    source: "api",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("resources", &["resources"]),
        FieldDef::new("fields", &["resources", "fields"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static DATABRICKS_FEATURE_STORE: Schema = Schema {
    source: "databricks_feature_store",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("databases", &["databases"]),
        FieldDef::new("feature_tables", &["databases", "feature_tables"]),
        FieldDef::new("columns", &["databases", "feature_tables", "columns"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static DBT: Schema = Schema {
    source: "dbt",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("databases", &["databases"]),
        FieldDef::new("schemas", &["databases", "schemas"]),
        FieldDef::new("tables", &["databases", "schemas", "tables"]),
        FieldDef::new("columns", &["databases", "schemas", "tables", "columns"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static FEAST: Schema = Schema {
    source: "feast",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("featureviews", &["featureviews"]),
        FieldDef::new("features", &["featureviews", "features"]),
        FieldDef::new("subfeatures", &["featureviews", "features", "subfeatures"]),
    ],
    anchor: None,
    allows_null: &[],
};

/// Runs are recorded under the suite and expectation type they checked.
pub static GREAT_EXPECTATIONS: Schema = Schema {
    source: "great_expectations",
    address: AddressKind::Filesystem,
    fields: &[
        FieldDef::new("suites", &["suites"]),
        FieldDef::new("types", &["suites", "types"]),
        FieldDef::new("runs", &["suites", "types", "runs"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static KAFKA: Schema = Schema {
    source: "kafka",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("topics", &["topics"]),
        FieldDef::new("columns", &["topics", "columns"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static KAFKACONNECT: Schema = Schema {
    source: "kafkaconnect",
    address: AddressKind::Host,
    fields: &[FieldDef::new("connectors", &["connectors"]).required()],
    anchor: None,
    allows_null: &[],
};

pub static KUBEFLOW: Schema = Schema {
    source: "kubeflow",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("pipelines", &["pipelines"]),
        FieldDef::new("experiments", &["experiments"]),
        FieldDef::new("runs", &["experiments", "runs"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static PREFECT: Schema = Schema {
    source: "prefect",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("flows", &["flows"]).required(),
        FieldDef::new("tasks", &["flows", "tasks"]),
        FieldDef::new("runs", &["flows", "tasks", "runs"]),
    ],
    anchor: Some("flows"),
    allows_null: &[],
};
