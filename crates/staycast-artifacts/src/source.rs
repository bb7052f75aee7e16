//! Artifact sources: local files and remote blobs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::ArtifactError;

/// HTTP fetch timeout. A slow artifact store surfaces as a typed failure
/// rather than hanging the caller indefinitely.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Where an artifact's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSource {
    Path(PathBuf),
    Url(String),
}

impl ArtifactSource {
    /// Interpret a CLI/config string: anything with an http(s) scheme is a
    /// URL, everything else a filesystem path.
    pub fn parse(spec: &str) -> Self {
        if spec.starts_with("http://") || spec.starts_with("https://") {
            ArtifactSource::Url(spec.to_string())
        } else {
            ArtifactSource::Path(PathBuf::from(spec))
        }
    }

    /// Stable identifier for error messages and logs.
    pub fn id(&self) -> String {
        match self {
            ArtifactSource::Path(path) => path.display().to_string(),
            ArtifactSource::Url(url) => url.clone(),
        }
    }

    /// For path sources, the directory holding the artifact (used for
    /// manifest lookup). None for URLs.
    pub fn local_dir(&self) -> Option<&Path> {
        match self {
            ArtifactSource::Path(path) => path.parent(),
            ArtifactSource::Url(_) => None,
        }
    }

    /// The artifact's file name, when one exists.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            ArtifactSource::Path(path) => path.file_name().and_then(|name| name.to_str()),
            ArtifactSource::Url(_) => None,
        }
    }

    /// Fetch the raw artifact bytes.
    ///
    /// Transport failures, missing files and non-2xx statuses all surface
    /// as [`ArtifactError::Unavailable`]; whether the bytes decode is the
    /// caller's concern.
    pub fn fetch(&self) -> Result<Vec<u8>, ArtifactError> {
        match self {
            ArtifactSource::Path(path) => {
                debug!(path = %path.display(), "reading artifact from disk");
                fs::read(path).map_err(|error| ArtifactError::unavailable(self.id(), error))
            }
            ArtifactSource::Url(url) => {
                debug!(url, "fetching artifact over http");
                let client = Client::builder()
                    .timeout(FETCH_TIMEOUT)
                    .build()
                    .map_err(|error| ArtifactError::unavailable(self.id(), error))?;
                let response = client
                    .get(url)
                    .send()
                    .map_err(|error| ArtifactError::unavailable(self.id(), error))?;
                if !response.status().is_success() {
                    return Err(ArtifactError::unavailable(
                        self.id(),
                        format!("HTTP status {}", response.status()),
                    ));
                }
                response
                    .bytes()
                    .map(|bytes| bytes.to_vec())
                    .map_err(|error| ArtifactError::unavailable(self.id(), error))
            }
        }
    }
}

impl fmt::Display for ArtifactSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl From<&Path> for ArtifactSource {
    fn from(path: &Path) -> Self {
        ArtifactSource::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for ArtifactSource {
    fn from(path: PathBuf) -> Self {
        ArtifactSource::Path(path)
    }
}
