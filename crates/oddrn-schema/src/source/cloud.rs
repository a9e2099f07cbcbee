//! Managed AWS services, addressed by account and region.

use oddrn_core::{
    address::AddressKind,
    schema::{FieldDef, Schema},
};

pub static ATHENA: Schema = Schema {
    source: "athena",
    address: AddressKind::Aws,
    fields: &[
        FieldDef::new("catalogs", &["catalogs"]),
        FieldDef::new("databases", &["catalogs", "databases"]),
        FieldDef::new("tables", &["catalogs", "databases", "tables"]),
        FieldDef::new("views", &["catalogs", "databases", "views"]),
        FieldDef::new(
            "tables_columns",
            &["catalogs", "databases", "tables", "tables_columns"],
        )
        .alias("columns"),
        FieldDef::new(
            "views_columns",
            &["catalogs", "databases", "views", "views_columns"],
        )
        .alias("columns"),
    ],
    anchor: Some("catalogs"),
    allows_null: &[],
};

pub static DMS: Schema = Schema {
    source: "dms",
    address: AddressKind::Aws,
    fields: &[
        FieldDef::new("tasks", &["tasks"]),
        FieldDef::new("runs", &["tasks", "runs"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static DYNAMODB: Schema = Schema {
    source: "dynamodb",
    address: AddressKind::Aws,
    fields: &[
        FieldDef::new("tables", &["tables"]),
        FieldDef::new("columns", &["tables", "columns"]),
    ],
    anchor: None,
    allows_null: &[],
};

/// Catalog tables and ETL jobs live side by side.
pub static GLUE: Schema = Schema {
    source: "glue",
    address: AddressKind::Aws,
    fields: &[
        FieldDef::new("databases", &["databases"]),
        FieldDef::new("tables", &["databases", "tables"]),
        FieldDef::new("columns", &["databases", "tables", "columns"]),
        FieldDef::new("owners", &["owners"]),
        FieldDef::new("jobs", &["jobs"]),
        FieldDef::new("runs", &["jobs", "runs"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static KINESIS: Schema = Schema {
    source: "kinesis",
    address: AddressKind::Aws,
    fields: &[
        FieldDef::new("streams", &["streams"]),
        FieldDef::new("shards", &["streams", "shards"]),
        FieldDef::new("data_records", &["streams", "shards", "data_records"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static LAMBDA: Schema = Schema {
    source: "lambda",
    address: AddressKind::Aws,
    fields: &[FieldDef::new("functions", &["functions"])],
    anchor: None,
    allows_null: &[],
};

pub static QUICKSIGHT: Schema = Schema {
    source: "quicksight",
    address: AddressKind::Aws,
    fields: &[
        FieldDef::new("datasets", &["datasets"]),
        FieldDef::new("analyses", &["analyses"]),
        FieldDef::new("dashboards", &["dashboards"]),
        FieldDef::new("data_sources", &["data_sources"]),
    ],
    anchor: None,
    allows_null: &[],
};

/// Jobs and artifacts both hang off a trial.
pub static SAGEMAKER: Schema = Schema {
    source: "sagemaker",
    address: AddressKind::Aws,
    fields: &[
        FieldDef::new("experiments", &["experiments"]),
        FieldDef::new("trials", &["experiments", "trials"]),
        FieldDef::new("jobs", &["experiments", "trials", "jobs"]),
        FieldDef::new("artifacts", &["experiments", "trials", "artifacts"]),
    ],
    anchor: None,
    allows_null: &[],
};
