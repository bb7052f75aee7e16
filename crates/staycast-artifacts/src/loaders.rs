//! Artifact loaders: schema and forest documents.

use serde::Deserialize;
use staycast_forest::Forest;
use staycast_model::SchemaSpec;
use tracing::info;

use crate::error::ArtifactError;
use crate::manifest::{Manifest, verify_digest};
use crate::source::ArtifactSource;

/// Schema artifact version this loader understands.
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk schema document. Versioned and explicit: the encoded column
/// order and the categorical field names are shared between the offline
/// training step and serving, instead of being regenerated on each side.
#[derive(Debug, Deserialize)]
struct SchemaDocument {
    version: u32,
    expected_columns: Vec<String>,
    #[serde(default)]
    categorical_fields: Vec<String>,
}

/// Fetch bytes and, for local artifacts covered by a directory manifest,
/// verify the digest before handing them to a decoder.
fn fetch_verified(source: &ArtifactSource) -> Result<Vec<u8>, ArtifactError> {
    let bytes = source.fetch()?;
    if let (Some(dir), Some(file_name)) = (source.local_dir(), source.file_name()) {
        if let Some(manifest) = Manifest::load(dir)? {
            if let Some(expected) = manifest.expected_sha256(file_name) {
                verify_digest(&source.id(), &bytes, expected)?;
            }
        }
    }
    Ok(bytes)
}

/// Load and validate a schema artifact.
pub fn load_schema(source: &ArtifactSource) -> Result<SchemaSpec, ArtifactError> {
    let bytes = fetch_verified(source)?;
    let document: SchemaDocument = serde_json::from_slice(&bytes)
        .map_err(|error| ArtifactError::corrupt(source.id(), error))?;
    if document.version != SCHEMA_VERSION {
        return Err(ArtifactError::corrupt(
            source.id(),
            format!("unsupported schema version {}", document.version),
        ));
    }
    let schema = SchemaSpec::new(document.expected_columns, document.categorical_fields);
    schema.validate()?;
    info!(source = %source, columns = schema.len(), "schema artifact loaded");
    Ok(schema)
}

/// Load and validate a forest artifact.
pub fn load_forest(source: &ArtifactSource) -> Result<Forest, ArtifactError> {
    let bytes = fetch_verified(source)?;
    let forest = Forest::from_json(&bytes)
        .map_err(|error| ArtifactError::corrupt(source.id(), error))?;
    info!(
        source = %source,
        trees = forest.num_trees(),
        features = forest.num_features(),
        "forest artifact loaded"
    );
    Ok(forest)
}
