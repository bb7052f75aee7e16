//! Loader tests against on-disk artifacts.

use std::fs;
use std::path::Path;

use staycast_artifacts::{
    ArtifactError, ArtifactSource, load_forest, load_schema, sha256_hex,
};
use staycast_model::SchemaError;
use tempfile::TempDir;

const SCHEMA_JSON: &str = r#"{
  "version": 1,
  "expected_columns": ["lead_time", "adr", "deposit_type_Refundable"],
  "categorical_fields": ["deposit_type"]
}"#;

const FOREST_JSON: &str = r#"{
  "version": 1,
  "num_features": 3,
  "trees": [ { "nodes": [ { "kind": "leaf", "probability": 0.4 } ] } ]
}"#;

fn write(dir: &Path, name: &str, contents: &str) -> ArtifactSource {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write artifact");
    ArtifactSource::Path(path)
}

#[test]
fn loads_a_valid_schema() {
    let dir = TempDir::new().expect("tempdir");
    let source = write(dir.path(), "schema.json", SCHEMA_JSON);

    let schema = load_schema(&source).expect("load schema");
    assert_eq!(
        schema.expected_columns(),
        ["lead_time", "adr", "deposit_type_Refundable"]
    );
    assert!(schema.is_categorical("deposit_type"));
}

#[test]
fn missing_schema_is_unavailable() {
    let source = ArtifactSource::Path("/nonexistent/schema.json".into());
    let error = load_schema(&source).unwrap_err();
    assert!(matches!(error, ArtifactError::Unavailable { .. }));
    assert!(error.is_retryable());
}

#[test]
fn undecodable_schema_is_corrupt() {
    let dir = TempDir::new().expect("tempdir");
    let source = write(dir.path(), "schema.json", "][ not json");
    assert!(matches!(
        load_schema(&source).unwrap_err(),
        ArtifactError::Corrupt { .. }
    ));
}

#[test]
fn unknown_schema_version_is_corrupt() {
    let dir = TempDir::new().expect("tempdir");
    let source = write(
        dir.path(),
        "schema.json",
        r#"{ "version": 7, "expected_columns": ["adr"] }"#,
    );
    assert!(matches!(
        load_schema(&source).unwrap_err(),
        ArtifactError::Corrupt { .. }
    ));
}

#[test]
fn duplicate_columns_fail_schema_validation() {
    let dir = TempDir::new().expect("tempdir");
    let source = write(
        dir.path(),
        "schema.json",
        r#"{ "version": 1, "expected_columns": ["adr", "adr"] }"#,
    );
    let error = load_schema(&source).unwrap_err();
    assert!(matches!(
        error,
        ArtifactError::Schema(SchemaError::DuplicateColumn { .. })
    ));
}

#[test]
fn loads_a_valid_forest() {
    let dir = TempDir::new().expect("tempdir");
    let source = write(dir.path(), "forest.json", FOREST_JSON);

    let forest = load_forest(&source).expect("load forest");
    assert_eq!(forest.num_features(), 3);
    assert_eq!(forest.num_trees(), 1);
}

#[test]
fn manifest_digest_guards_artifacts() {
    let dir = TempDir::new().expect("tempdir");
    let source = write(dir.path(), "schema.json", SCHEMA_JSON);

    let manifest = format!(
        r#"{{ "artifacts": {{ "schema.json": "{}" }} }}"#,
        sha256_hex(SCHEMA_JSON.as_bytes())
    );
    fs::write(dir.path().join("manifest.json"), &manifest).expect("write manifest");
    assert!(load_schema(&source).is_ok());

    // Tamper with the artifact; the digest no longer matches.
    fs::write(dir.path().join("schema.json"), SCHEMA_JSON.replace("adr", "adx"))
        .expect("tamper");
    let error = load_schema(&source).unwrap_err();
    assert!(matches!(error, ArtifactError::Corrupt { .. }));
    assert!(!error.is_retryable());
}

#[test]
fn manifest_ignores_unlisted_artifacts() {
    let dir = TempDir::new().expect("tempdir");
    let source = write(dir.path(), "schema.json", SCHEMA_JSON);
    fs::write(
        dir.path().join("manifest.json"),
        r#"{ "artifacts": { "forest.json": "0000" } }"#,
    )
    .expect("write manifest");

    assert!(load_schema(&source).is_ok());
}
