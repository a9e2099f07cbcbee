use oddrn_schema::SourceKind;
use serde::Deserialize;
use serde::de::{
    IntoDeserializer,
    value::{Error as ValueError, StrDeserializer},
};

fn from_tag(tag: &str) -> Result<SourceKind, ValueError> {
    let deserializer: StrDeserializer<'_, ValueError> = tag.into_deserializer();

    SourceKind::deserialize(deserializer)
}

#[test]
fn deserializes_from_tag() {
    assert_eq!(from_tag("great_expectations").unwrap(), SourceKind::GreatExpectations);
    assert_eq!(from_tag("s3-custom").unwrap(), SourceKind::S3Custom);
}

#[test]
fn unknown_tag_fails() {
    let err = from_tag("s3_custom").unwrap_err();

    assert!(err.to_string().contains("unknown source type 's3_custom'"));
}
