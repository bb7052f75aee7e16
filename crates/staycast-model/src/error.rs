use thiserror::Error;

/// Structural problems in a schema artifact.
///
/// A schema that trips one of these admits no correct alignment: positional
/// mapping is undefined for an empty or ambiguous column list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The expected-column list is empty.
    #[error("schema has no expected columns")]
    Empty,

    /// The expected-column list names the same column twice.
    #[error("duplicate column in schema: {name}")]
    DuplicateColumn { name: String },
}

/// Errors surfaced by a classifier's scoring boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// The feature vector width does not match the classifier's input width.
    #[error("feature vector has {actual} values, classifier expects {expected}")]
    WidthMismatch { expected: usize, actual: usize },

    /// The classifier rejected the input for an internal reason.
    #[error("classifier failure: {message}")]
    Internal { message: String },
}
