//! Optional digest manifest for local artifact directories.
//!
//! A `manifest.json` next to the artifacts pins each file to a SHA-256
//! digest. Artifacts named in the manifest are verified before decoding;
//! a mismatch is corruption, not unavailability.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::error::ArtifactError;

/// File name of the digest manifest inside a model directory.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Artifact file name to lowercase SHA-256 hex digest.
    pub artifacts: BTreeMap<String, String>,
}

impl Manifest {
    /// Load the manifest from a model directory. Absence is not an error;
    /// a present-but-unreadable manifest is corruption of the directory.
    pub fn load(dir: &Path) -> Result<Option<Self>, ArtifactError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let source_id = path.display().to_string();
        let bytes =
            fs::read(&path).map_err(|error| ArtifactError::unavailable(&source_id, error))?;
        let manifest = serde_json::from_slice(&bytes)
            .map_err(|error| ArtifactError::corrupt(&source_id, error))?;
        Ok(Some(manifest))
    }

    pub fn expected_sha256(&self, file_name: &str) -> Option<&str> {
        self.artifacts.get(file_name).map(String::as_str)
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Compare an artifact's bytes against the manifest digest.
pub fn verify_digest(
    source_id: &str,
    bytes: &[u8],
    expected: &str,
) -> Result<(), ArtifactError> {
    let actual = sha256_hex(bytes);
    if actual.eq_ignore_ascii_case(expected.trim()) {
        Ok(())
    } else {
        Err(ArtifactError::corrupt(
            source_id,
            format!("sha256 mismatch (expected {expected}, got {actual})"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_verification() {
        let bytes = b"artifact body";
        let digest = sha256_hex(bytes);
        assert!(verify_digest("schema.json", bytes, &digest).is_ok());
        assert!(verify_digest("schema.json", bytes, &digest.to_uppercase()).is_ok());

        let error = verify_digest("schema.json", b"tampered", &digest).unwrap_err();
        assert!(matches!(error, ArtifactError::Corrupt { .. }));
        assert!(!error.is_retryable());
    }
}
