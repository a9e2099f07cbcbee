//! Databases and search/graph stores addressed by host.

use super::{CATALOG_SCHEMA_TABLES, DATABASE_SCHEMA_TABLES, DATABASE_TABLES};
use oddrn_core::{
    address::AddressKind,
    schema::{FieldDef, Schema},
};

// databases with schemas
const DATABASE_SCHEMA: Schema = Schema {
    source: "postgresql",
    address: AddressKind::Host,
    fields: DATABASE_SCHEMA_TABLES,
    anchor: Some("databases"),
    allows_null: &[],
};

// databases without schemas
const DATABASE: Schema = Schema {
    source: "mysql",
    address: AddressKind::Host,
    fields: DATABASE_TABLES,
    anchor: Some("databases"),
    allows_null: &[],
};

// catalog engines
const CATALOG: Schema = Schema {
    source: "presto",
    address: AddressKind::Host,
    fields: CATALOG_SCHEMA_TABLES,
    anchor: Some("catalogs"),
    allows_null: &[],
};

pub static POSTGRESQL: Schema = DATABASE_SCHEMA;

pub static MSSQL: Schema = Schema {
    source: "mssql",
    ..DATABASE_SCHEMA
};

pub static ODBC: Schema = Schema {
    source: "odbc",
    ..DATABASE_SCHEMA
};

pub static REDSHIFT: Schema = Schema {
    source: "redshift",
    ..DATABASE_SCHEMA
};

pub static VERTICA: Schema = Schema {
    source: "vertica",
    ..DATABASE_SCHEMA
};

/// Azure SQL, addressed by its server domain.
pub static AZURE: Schema = Schema {
    source: "azure",
    address: AddressKind::Azure,
    ..DATABASE_SCHEMA
};

pub static MYSQL: Schema = DATABASE;

pub static CLICKHOUSE: Schema = Schema {
    source: "clickhouse",
    ..DATABASE
};

pub static SINGLESTORE: Schema = Schema {
    source: "singlestore",
    ..DATABASE
};

pub static HIVE: Schema = Schema {
    source: "hive",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("databases", &["databases"]).required(),
        FieldDef::new("tables", &["databases", "tables"]),
        FieldDef::new("views", &["databases", "views"]),
        FieldDef::new("tables_columns", &["databases", "tables", "tables_columns"])
            .alias("columns"),
        FieldDef::new("views_columns", &["databases", "views", "views_columns"]).alias("columns"),
        FieldDef::new("owners", &["owners"]),
    ],
    anchor: Some("databases"),
    allows_null: &[],
};

pub static SNOWFLAKE: Schema = Schema {
    source: "snowflake",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("databases", &["databases"]).required(),
        FieldDef::new("schemas", &["databases", "schemas"]),
        FieldDef::new("tables", &["databases", "schemas", "tables"]),
        FieldDef::new("views", &["databases", "schemas", "views"]),
        FieldDef::new(
            "tables_columns",
            &["databases", "schemas", "tables", "tables_columns"],
        )
        .alias("columns"),
        FieldDef::new(
            "views_columns",
            &["databases", "schemas", "views", "views_columns"],
        )
        .alias("columns"),
        FieldDef::new("pipes", &["databases", "schemas", "pipes"]),
    ],
    anchor: Some("databases"),
    allows_null: &[],
};

/// Oracle nests databases below schemas.
pub static ORACLE: Schema = Schema {
    source: "oracle",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("schemas", &["schemas"]).required(),
        FieldDef::new("databases", &["schemas", "databases"]),
        FieldDef::new("tables", &["schemas", "databases", "tables"]),
        FieldDef::new("views", &["schemas", "databases", "views"]),
        FieldDef::new(
            "tables_columns",
            &["schemas", "databases", "tables", "tables_columns"],
        )
        .alias("columns"),
        FieldDef::new(
            "views_columns",
            &["schemas", "databases", "views", "views_columns"],
        )
        .alias("columns"),
    ],
    anchor: Some("schemas"),
    allows_null: &[],
};

pub static PRESTO: Schema = CATALOG;

pub static TRINO: Schema = Schema {
    source: "trino",
    ..CATALOG
};

pub static DATABRICKS_LAKEHOUSE: Schema = Schema {
    source: "databricks_lakehouse",
    ..CATALOG
};

pub static CASSANDRA: Schema = Schema {
    source: "cassandra",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("keyspaces", &["keyspaces"]).required(),
        FieldDef::new("tables", &["keyspaces", "tables"]),
        FieldDef::new("columns", &["keyspaces", "tables", "columns"]),
    ],
    anchor: Some("keyspaces"),
    allows_null: &[],
};

pub static MONGO: Schema = Schema {
    source: "mongo",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("databases", &["databases"]).required(),
        FieldDef::new("collections", &["databases", "collections"]),
        FieldDef::new("columns", &["databases", "collections", "columns"]),
    ],
    anchor: Some("databases"),
    allows_null: &[],
};

pub static NEO4J: Schema = Schema {
    source: "neo4j",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("databases", &["databases"]).required(),
        FieldDef::new("nodes", &["databases", "nodes"]),
        FieldDef::new("fields", &["databases", "nodes", "fields"]),
    ],
    anchor: Some("databases"),
    allows_null: &[],
};

pub static TARANTOOL: Schema = Schema {
    source: "tarantool",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("spaces", &["spaces"]),
        FieldDef::new("columns", &["spaces", "columns"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static ELASTICSEARCH: Schema = Schema {
    source: "elasticsearch",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("indexes", &["indexes"]),
        FieldDef::new("fields", &["indexes", "fields"]),
        FieldDef::new("templates", &["templates"]),
    ],
    anchor: None,
    allows_null: &[],
};
