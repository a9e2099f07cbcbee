//! Small hand-written schemas exercising every engine feature.

use crate::{
    address::AddressKind,
    schema::{FieldDef, Schema},
};

/// Linear chain with two aliased leaves (`field_5`).
pub(crate) static EXAMPLE: Schema = Schema {
    source: "example_source",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("field_1", &["field_1"]).required(),
        FieldDef::new("field_2", &["field_1", "field_2"]).required(),
        FieldDef::new("field_3", &["field_1", "field_2", "field_3"]),
        FieldDef::new("field_4", &["field_1", "field_2", "field_3", "field_4"]),
        FieldDef::new(
            "field_5_1",
            &["field_1", "field_2", "field_3", "field_4", "field_5_1"],
        )
        .alias("field_5"),
        FieldDef::new(
            "field_5_2",
            &["field_1", "field_2", "field_3", "field_4", "field_5_2"],
        )
        .alias("field_5"),
    ],
    anchor: Some("field_1"),
    allows_null: &[],
};

/// Relational layout with table/view column aliases.
pub(crate) static RELATIONAL: Schema = Schema {
    source: "postgresql",
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
    ],
    anchor: Some("databases"),
    allows_null: &[],
};

/// Optional intermediate level (`schemas`).
pub(crate) static GAPPED: Schema = Schema {
    source: "tableau",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("sites", &["sites"]).required(),
        FieldDef::new("databases", &["sites", "databases"]),
        FieldDef::new("schemas", &["sites", "databases", "schemas"]),
        FieldDef::new("tables", &["sites", "databases", "schemas", "tables"]),
    ],
    anchor: Some("sites"),
    allows_null: &["schemas"],
};

/// Object store with implicit address and no required field.
pub(crate) static OBJECTS: Schema = Schema {
    source: "s3",
    address: AddressKind::S3Implicit,
    fields: &[
        FieldDef::new("buckets", &["buckets"]),
        FieldDef::new("keys", &["buckets", "keys"]),
        FieldDef::new("columns", &["buckets", "keys", "columns"]),
    ],
    anchor: Some("buckets"),
    allows_null: &[],
};

/// Queue without an anchor field.
pub(crate) static QUEUE: Schema = Schema {
    source: "kafka",
    address: AddressKind::Host,
    fields: &[FieldDef::new("topics", &["topics"])],
    anchor: None,
    allows_null: &[],
};

/// Empty value list for constructors.
pub(crate) const NO_PATHS: [(&str, &str); 0] = [];
