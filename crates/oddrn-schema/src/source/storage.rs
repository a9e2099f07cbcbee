//! Object stores and file systems. Keys and paths are free-form and are
//! escaped on entry.

use super::BUCKET_KEYS;
use oddrn_core::{
    address::AddressKind,
    schema::{FieldDef, Schema},
};

// bucket names are globally unique, so the address is implicit
pub static S3: Schema = Schema {
    source: "s3",
    address: AddressKind::S3Implicit,
    fields: BUCKET_KEYS,
    anchor: Some("buckets"),
    allows_null: &[],
};

/// S3-compatible store behind a custom endpoint.
pub static S3_CUSTOM: Schema = Schema {
    source: "s3-custom",
    address: AddressKind::Endpoint,
    fields: BUCKET_KEYS,
    anchor: Some("buckets"),
    allows_null: &[],
};

pub static GCS: Schema = Schema {
    source: "gcs",
    address: AddressKind::Gcp,
    fields: BUCKET_KEYS,
    anchor: Some("buckets"),
    allows_null: &[],
};

/// The container is part of the address.
pub static BLOB_STORAGE: Schema = Schema {
    source: "blob_storage",
    address: AddressKind::AzureBlob,
    fields: &[
        FieldDef::new("keys", &["keys"]),
        FieldDef::new("columns", &["keys", "columns"]),
    ],
    anchor: None,
    allows_null: &[],
};

pub static BIGQUERY_STORAGE: Schema = Schema {
    source: "bigquery_storage",
    address: AddressKind::Gcp,
    fields: &[
        FieldDef::new("datasets", &["datasets"]),
        FieldDef::new("tables", &["datasets", "tables"]),
        FieldDef::new("columns", &["datasets", "tables", "columns"]),
    ],
    anchor: Some("datasets"),
    allows_null: &[],
};

pub static FILESYSTEM: Schema = Schema {
    source: "filesystem",
    address: AddressKind::Filesystem,
    fields: &[FieldDef::new("path", &["path"])],
    anchor: None,
    allows_null: &[],
};
