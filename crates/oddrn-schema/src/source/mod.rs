//! Declarative per-source tables, grouped by the kind of system they
//! describe.

pub mod cloud;
pub mod pipeline;
pub mod relational;
pub mod reporting;
pub mod storage;

use oddrn_core::schema::FieldDef;

/// `databases → schemas → tables | views → columns`
pub(crate) const DATABASE_SCHEMA_TABLES: &[FieldDef] = &[
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
];

/// `databases → tables | views → columns`
pub(crate) const DATABASE_TABLES: &[FieldDef] = &[
    FieldDef::new("databases", &["databases"]).required(),
    FieldDef::new("tables", &["databases", "tables"]),
    FieldDef::new("views", &["databases", "views"]),
    FieldDef::new("tables_columns", &["databases", "tables", "tables_columns"]).alias("columns"),
    FieldDef::new("views_columns", &["databases", "views", "views_columns"]).alias("columns"),
];

/// `catalogs → schemas → tables | views → columns`
pub(crate) const CATALOG_SCHEMA_TABLES: &[FieldDef] = &[
    FieldDef::new("catalogs", &["catalogs"]).required(),
    FieldDef::new("schemas", &["catalogs", "schemas"]),
    FieldDef::new("tables", &["catalogs", "schemas", "tables"]),
    FieldDef::new("views", &["catalogs", "schemas", "views"]),
    FieldDef::new(
        "tables_columns",
        &["catalogs", "schemas", "tables", "tables_columns"],
    )
    .alias("columns"),
    FieldDef::new(
        "views_columns",
        &["catalogs", "schemas", "views", "views_columns"],
    )
    .alias("columns"),
];

/// `buckets → keys → columns`
pub(crate) const BUCKET_KEYS: &[FieldDef] = &[
    FieldDef::new("buckets", &["buckets"]),
    FieldDef::new("keys", &["buckets", "keys"]),
    FieldDef::new("columns", &["buckets", "keys", "columns"]),
];
