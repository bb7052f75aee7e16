//! Process-wide model store.
//!
//! The classifier and its schema are loaded at most once per process and
//! reused across requests. The store is explicit, explicitly-initialized
//! immutable state: a successful load is cached for the process lifetime
//! and never invalidated; a failed (unavailable) load leaves the slot empty
//! so the next request may retry.

use std::path::Path;
use std::sync::{Arc, Mutex};

use staycast_model::SchemaSpec;
use tracing::{debug, info};

use crate::classifier::ForestClassifier;
use crate::error::ArtifactError;
use crate::loaders::{load_forest, load_schema};
use crate::source::ArtifactSource;

/// Environment variable naming the default model directory.
pub const MODEL_DIR_ENV_VAR: &str = "STAYCAST_MODEL_DIR";

/// Default schema artifact file name inside a model directory.
pub const SCHEMA_ARTIFACT: &str = "schema.json";

/// Default forest artifact file name inside a model directory.
pub const FOREST_ARTIFACT: &str = "forest.json";

/// Where the store finds its two artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub schema: ArtifactSource,
    pub forest: ArtifactSource,
}

impl ModelConfig {
    pub fn new(schema: ArtifactSource, forest: ArtifactSource) -> Self {
        Self { schema, forest }
    }

    /// Conventional layout: both artifacts inside one directory.
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            schema: ArtifactSource::Path(dir.join(SCHEMA_ARTIFACT)),
            forest: ArtifactSource::Path(dir.join(FOREST_ARTIFACT)),
        }
    }
}

/// The loaded, immutable model state shared across requests.
#[derive(Debug)]
pub struct ModelBundle {
    pub schema: SchemaSpec,
    pub classifier: ForestClassifier,
}

/// Lazily-populated, single-flight model cache.
pub struct ModelStore {
    config: ModelConfig,
    loaded: Mutex<Option<Arc<ModelBundle>>>,
}

impl ModelStore {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            loaded: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Get the loaded model, fetching it on first use.
    ///
    /// The lock is held across the fetch, so concurrent first requests
    /// converge on a single download instead of each re-fetching the
    /// artifacts.
    pub fn handle(&self) -> Result<Arc<ModelBundle>, ArtifactError> {
        let mut slot = self.loaded.lock().unwrap();
        if let Some(bundle) = slot.as_ref() {
            debug!("reusing cached model bundle");
            return Ok(Arc::clone(bundle));
        }
        let bundle = Arc::new(load_bundle(&self.config)?);
        *slot = Some(Arc::clone(&bundle));
        Ok(bundle)
    }
}

fn load_bundle(config: &ModelConfig) -> Result<ModelBundle, ArtifactError> {
    let schema = load_schema(&config.schema)?;
    let forest = load_forest(&config.forest)?;
    info!(
        columns = schema.len(),
        trees = forest.num_trees(),
        "model bundle ready"
    );
    Ok(ModelBundle {
        schema,
        classifier: ForestClassifier::new(forest),
    })
}
