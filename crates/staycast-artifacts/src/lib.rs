//! Model artifact retrieval for Staycast.
//!
//! The trained classifier and its schema live in a trusted artifact store
//! (a local directory or a remote blob host). This crate is the boundary
//! that fetches those artifacts, verifies and decodes them, and caches the
//! result for the life of the process:
//!
//! - [`ArtifactSource`] fetches raw bytes from a path or URL with a bounded
//!   timeout, distinguishing "unreachable" from "undecodable";
//! - [`load_schema`]/[`load_forest`] decode and validate the two artifact
//!   documents, optionally checking SHA-256 digests from a directory
//!   [`Manifest`];
//! - [`ModelStore`] is the single-flight, load-once process cache.

pub mod classifier;
pub mod error;
pub mod loaders;
pub mod manifest;
pub mod source;
pub mod store;

pub use classifier::ForestClassifier;
pub use error::ArtifactError;
pub use loaders::{SCHEMA_VERSION, load_forest, load_schema};
pub use manifest::{MANIFEST_FILE, Manifest, sha256_hex};
pub use source::ArtifactSource;
pub use store::{
    FOREST_ARTIFACT, MODEL_DIR_ENV_VAR, ModelBundle, ModelConfig, ModelStore, SCHEMA_ARTIFACT,
};
