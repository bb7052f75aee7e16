//! Error types for artifact retrieval.

use staycast_model::SchemaError;
use thiserror::Error;

/// Errors that can occur when fetching or decoding model artifacts.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The artifact source could not be reached. Recoverable by retry.
    #[error("artifact unavailable: {source_id}: {reason}")]
    Unavailable { source_id: String, reason: String },

    /// The artifact was fetched but its bytes do not decode into the
    /// expected shape, or failed digest verification. Fatal for this
    /// artifact version; never silently replaced by a stale copy.
    #[error("artifact corrupt: {source_id}: {message}")]
    Corrupt { source_id: String, message: String },

    /// The decoded schema violates its structural invariants.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ArtifactError {
    pub(crate) fn unavailable(source_id: impl Into<String>, reason: impl ToString) -> Self {
        Self::Unavailable {
            source_id: source_id.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn corrupt(source_id: impl Into<String>, message: impl ToString) -> Self {
        Self::Corrupt {
            source_id: source_id.into(),
            message: message.to_string(),
        }
    }

    /// A short message suitable for end-user display.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "model temporarily unavailable, please try again",
            Self::Corrupt { .. } => "model artifact is damaged and cannot be used",
            Self::Schema(_) => "model schema artifact is malformed",
        }
    }

    /// Whether retrying the load can succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
