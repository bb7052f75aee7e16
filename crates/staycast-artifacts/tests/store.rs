//! Model store lifecycle tests.

use std::fs;
use std::sync::Arc;

use staycast_artifacts::{ArtifactError, ModelConfig, ModelStore};
use tempfile::TempDir;

const SCHEMA_JSON: &str = r#"{
  "version": 1,
  "expected_columns": ["lead_time", "adr"],
  "categorical_fields": []
}"#;

const FOREST_JSON: &str = r#"{
  "version": 1,
  "num_features": 2,
  "trees": [ { "nodes": [ { "kind": "leaf", "probability": 0.25 } ] } ]
}"#;

fn model_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("schema.json"), SCHEMA_JSON).expect("schema");
    fs::write(dir.path().join("forest.json"), FOREST_JSON).expect("forest");
    dir
}

#[test]
fn handle_is_loaded_once_and_shared() {
    let dir = model_dir();
    let store = ModelStore::new(ModelConfig::from_dir(dir.path()));

    let first = store.handle().expect("first load");
    let second = store.handle().expect("second load");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(first.schema.len(), 2);
}

#[test]
fn unavailable_load_can_be_retried() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("schema.json"), SCHEMA_JSON).expect("schema");
    // No forest yet: the first request fails without poisoning the store.
    let store = ModelStore::new(ModelConfig::from_dir(dir.path()));

    let error = store.handle().unwrap_err();
    assert!(matches!(error, ArtifactError::Unavailable { .. }));

    fs::write(dir.path().join("forest.json"), FOREST_JSON).expect("forest");
    let bundle = store.handle().expect("retry succeeds");
    assert_eq!(bundle.schema.len(), 2);
}

#[test]
fn concurrent_first_requests_converge() {
    let dir = model_dir();
    let store = Arc::new(ModelStore::new(ModelConfig::from_dir(dir.path())));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || store.handle().expect("load"))
        })
        .collect();

    let bundles: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("join"))
        .collect();
    for bundle in &bundles[1..] {
        assert!(Arc::ptr_eq(&bundles[0], bundle));
    }
}

#[test]
fn corrupt_artifact_is_not_masked_by_cache() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(dir.path().join("schema.json"), "corrupted bytes").expect("schema");
    fs::write(dir.path().join("forest.json"), FOREST_JSON).expect("forest");
    let store = ModelStore::new(ModelConfig::from_dir(dir.path()));

    let error = store.handle().unwrap_err();
    assert!(matches!(error, ArtifactError::Corrupt { .. }));
    assert!(!error.is_retryable());
}
