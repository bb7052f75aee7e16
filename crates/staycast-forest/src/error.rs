//! Error types for forest artifact operations.

use thiserror::Error;

/// Errors that can occur when decoding or scoring a forest artifact.
#[derive(Debug, Error)]
pub enum ForestError {
    /// The artifact bytes are not a valid forest document.
    #[error("failed to parse forest artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// The artifact was written by an unknown format version.
    #[error("unsupported forest artifact version: {version}")]
    UnsupportedVersion { version: u32 },

    /// The artifact contains no trees.
    #[error("forest artifact contains no trees")]
    NoTrees,

    /// A tree has an empty node array.
    #[error("tree {tree} has no nodes")]
    EmptyTree { tree: usize },

    /// A branch points at a node index past the end of its tree.
    #[error("tree {tree}: node {node} child index {child} out of bounds ({len} nodes)")]
    ChildOutOfBounds {
        tree: usize,
        node: usize,
        child: u32,
        len: usize,
    },

    /// A branch splits on a feature the forest does not have.
    #[error("tree {tree}: node {node} feature index {feature} out of bounds ({num_features} features)")]
    FeatureOutOfBounds {
        tree: usize,
        node: usize,
        feature: u32,
        num_features: usize,
    },

    /// A leaf probability is outside [0, 1].
    #[error("tree {tree}: node {node} leaf probability {probability} outside [0, 1]")]
    ProbabilityOutOfRange {
        tree: usize,
        node: usize,
        probability: f64,
    },

    /// The feature vector width does not match the forest input width.
    #[error("feature vector has {actual} values, forest expects {expected}")]
    WidthMismatch { expected: usize, actual: usize },

    /// A traversal visited more nodes than the tree holds; the node graph
    /// must contain a cycle.
    #[error("tree {tree}: traversal did not reach a leaf within {limit} steps")]
    TraversalOverrun { tree: usize, limit: usize },
}
