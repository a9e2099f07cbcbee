//! BI and semantic-layer tools.

use oddrn_core::{
    address::AddressKind,
    schema::{FieldDef, Schema},
};

pub static CUBEJS: Schema = Schema {
    source: "cubejs",
    address: AddressKind::Host,
    fields: &[FieldDef::new("cubes", &["cubes"])],
    anchor: None,
    allows_null: &[],
};

pub static METABASE: Schema = Schema {
    source: "metabase",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("collections", &["collections"]),
        FieldDef::new("dashboards", &["collections", "dashboards"]),
        FieldDef::new("cards", &["collections", "cards"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static POWERBI: Schema = Schema {
    source: "powerbi",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("datasets", &["datasets"]),
        FieldDef::new("dashboards", &["dashboards"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static REDASH: Schema = Schema {
    source: "redash",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("queries", &["queries"]),
        FieldDef::new("dashboards", &["dashboards"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static SUPERSET: Schema = Schema {
    source: "superset",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("databases", &["databases"]),
        FieldDef::new("datasets", &["databases", "datasets"]),
        FieldDef::new("columns", &["databases", "datasets", "columns"]),
        FieldDef::new("dashboards", &["dashboards"]),
    ],
    anchor: None,
    allows_null: &[],
};

/// Tableau's metadata API may report tables without a schema.
pub static TABLEAU: Schema = Schema {
    source: "tableau",
    address: AddressKind::Host,
    fields: &[
        FieldDef::new("sites", &["sites"]).required(),
        FieldDef::new("databases", &["sites", "databases"]),
        FieldDef::new("schemas", &["sites", "databases", "schemas"]),
        FieldDef::new("tables", &["sites", "databases", "schemas", "tables"]),
        FieldDef::new(
            "columns",
            &["sites", "databases", "schemas", "tables", "columns"],
        ),
        FieldDef::new("workbooks", &["sites", "workbooks"]),
        FieldDef::new("sheets", &["sites", "workbooks", "sheets"]),
    ],
    anchor: Some("sites"),
    allows_null: &["schemas"],
};
