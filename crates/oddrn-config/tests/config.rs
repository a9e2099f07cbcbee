use oddrn_config::{ConfigError, GeneratorConfig};
use oddrn_core::address::{AddressSettings, AwsSettings};
use oddrn_schema::SourceKind;
use std::{env, fs, process};

#[test]
fn parses_host_config() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        source = "postgresql"

        [address]
        host = "127.0.0.1:5432"

        [paths]
        databases = "analytics"
        schemas = "public"
        "#,
    )
    .unwrap();

    assert_eq!(config.source, SourceKind::Postgresql);
    assert_eq!(config.address, AddressSettings::host("127.0.0.1:5432"));
    assert_eq!(config.paths["databases"], "analytics");
    assert_eq!(config.paths.len(), 2);
}

#[test]
fn parses_cloud_config() {
    let config = GeneratorConfig::from_toml_str(
        r#"
        source = "glue"

        [address.aws]
        account = "123456789012"
        region = "us-east-1"
        "#,
    )
    .unwrap();

    assert_eq!(
        config.address.aws,
        Some(AwsSettings {
            account: "123456789012".to_string(),
            region: "us-east-1".to_string(),
        })
    );
    assert!(config.paths.is_empty());
}

#[test]
fn address_and_paths_default_to_empty() {
    let config = GeneratorConfig::from_toml_str(r#"source = "s3""#).unwrap();

    assert_eq!(config, GeneratorConfig::new(SourceKind::S3, AddressSettings::none()));
}

#[test]
fn rejects_unknown_source() {
    let err = GeneratorConfig::from_toml_str(r#"source = "dvc""#).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("unknown source type 'dvc'"));
}

#[test]
fn rejects_unknown_keys() {
    let err = GeneratorConfig::from_toml_str(
        r#"
        source = "kafka"
        hosts = "broker"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = GeneratorConfig::from_toml_str(
        r#"
        source = "kafka"

        [address]
        hostname = "broker"
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn serializes_back() {
    let config = GeneratorConfig::new(SourceKind::S3Custom, AddressSettings::endpoint("http://localhost:9000"))
        .with_path("buckets", "bucket1");

    let text = config.to_toml_string().unwrap();
    let parsed = GeneratorConfig::from_toml_str(&text).unwrap();

    assert_eq!(parsed, config);
    assert!(text.contains(r#"source = "s3-custom""#));
}

#[test]
fn loads_from_file() {
    let path = env::temp_dir().join(format!("oddrn-config-{}.toml", process::id()));
    fs::write(
        &path,
        "source = \"metabase\"\n\n[address]\nhost = \"host\"\n\n[paths]\ncollections = \"1\"\n",
    )
    .unwrap();

    let config = GeneratorConfig::load(&path);
    fs::remove_file(&path).unwrap();

    let config = config.unwrap();
    assert_eq!(config.source, SourceKind::Metabase);
    assert_eq!(config.paths["collections"], "1");
}

#[test]
fn missing_file_reports_path() {
    let err = GeneratorConfig::load("/nonexistent/oddrn/generator.toml").unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/oddrn/generator.toml"));
}
