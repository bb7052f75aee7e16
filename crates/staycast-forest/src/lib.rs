//! Random-forest classifier artifact format.
//!
//! This crate reads the JSON artifact a pre-trained binary random-forest
//! classifier is persisted as, validates its structure, and scores feature
//! vectors against it. Training is out of scope; the artifact is produced
//! offline and treated as read-only for the life of the process.
//!
//! # Artifact layout
//!
//! Trees are flat node arrays with the root at index 0. A branch compares
//! one feature against a threshold (`<=` goes left); a leaf carries the
//! positive-class probability. Scoring averages leaf probabilities across
//! trees and labels 1 when the mean reaches 0.5.
//!
//! ```json
//! {
//!   "version": 1,
//!   "num_features": 2,
//!   "trees": [
//!     { "nodes": [
//!       { "kind": "branch", "feature": 0, "threshold": 30.0, "left": 1, "right": 2 },
//!       { "kind": "leaf", "probability": 0.12 },
//!       { "kind": "leaf", "probability": 0.81 }
//!     ]}
//!   ]
//! }
//! ```

mod error;
mod forest;

pub use error::ForestError;
pub use forest::{FOREST_VERSION, Forest, Score, Tree, TreeNode};
