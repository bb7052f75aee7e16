//! Forest artifact data model, validation and scoring.

use serde::{Deserialize, Serialize};

use crate::error::ForestError;

/// The artifact format version this reader understands.
pub const FOREST_VERSION: u32 = 1;

/// A single node of a serialized tree.
///
/// Trees are stored as flat node arrays with the root at index 0; branches
/// hold indices into the same array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Branch {
        feature: u32,
        threshold: f64,
        left: u32,
        right: u32,
    },
    Leaf {
        /// Probability of the positive class at this leaf.
        probability: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

/// A pre-trained binary random-forest classifier.
///
/// Read-only after load; scoring walks each tree and averages the leaf
/// probabilities, so the forest is safe to share across threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    version: u32,
    num_features: usize,
    trees: Vec<Tree>,
}

/// A classifier verdict: binary label plus positive-class probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    /// 1 for the positive class, 0 otherwise.
    pub label: u8,
    /// Mean positive-class probability across trees, in [0, 1].
    pub probability: f64,
}

impl Forest {
    pub fn new(num_features: usize, trees: Vec<Tree>) -> Self {
        Self {
            version: FOREST_VERSION,
            num_features,
            trees,
        }
    }

    /// Decode a forest artifact from JSON bytes and validate its structure.
    pub fn from_json(bytes: &[u8]) -> Result<Self, ForestError> {
        let forest: Forest = serde_json::from_slice(bytes)?;
        forest.validate()?;
        Ok(forest)
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    /// Check the structural invariants of the artifact: a supported version,
    /// at least one non-empty tree, all indices in bounds, all leaf
    /// probabilities in [0, 1].
    pub fn validate(&self) -> Result<(), ForestError> {
        if self.version != FOREST_VERSION {
            return Err(ForestError::UnsupportedVersion {
                version: self.version,
            });
        }
        if self.trees.is_empty() {
            return Err(ForestError::NoTrees);
        }
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(ForestError::EmptyTree { tree: tree_idx });
            }
            let len = tree.nodes.len();
            for (node_idx, node) in tree.nodes.iter().enumerate() {
                match *node {
                    TreeNode::Branch {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        for child in [left, right] {
                            if child as usize >= len {
                                return Err(ForestError::ChildOutOfBounds {
                                    tree: tree_idx,
                                    node: node_idx,
                                    child,
                                    len,
                                });
                            }
                        }
                        if feature as usize >= self.num_features {
                            return Err(ForestError::FeatureOutOfBounds {
                                tree: tree_idx,
                                node: node_idx,
                                feature,
                                num_features: self.num_features,
                            });
                        }
                    }
                    TreeNode::Leaf { probability } => {
                        if !(0.0..=1.0).contains(&probability) {
                            return Err(ForestError::ProbabilityOutOfRange {
                                tree: tree_idx,
                                node: node_idx,
                                probability,
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Score a feature vector.
    ///
    /// The caller supplies features in the exact order the forest was
    /// trained with; only the width is verified here. Ties at a branch
    /// threshold go left.
    pub fn score(&self, features: &[f64]) -> Result<Score, ForestError> {
        if features.len() != self.num_features {
            return Err(ForestError::WidthMismatch {
                expected: self.num_features,
                actual: features.len(),
            });
        }
        let mut total = 0.0;
        for (tree_idx, tree) in self.trees.iter().enumerate() {
            total += walk_tree(tree, tree_idx, features)?;
        }
        let probability = total / self.trees.len() as f64;
        let label = u8::from(probability >= 0.5);
        Ok(Score { label, probability })
    }
}

fn walk_tree(tree: &Tree, tree_idx: usize, features: &[f64]) -> Result<f64, ForestError> {
    let limit = tree.nodes.len();
    let mut index = 0usize;
    for _ in 0..limit {
        // Validation bounds-checked every index, so the lookup cannot miss.
        match tree.nodes[index] {
            TreeNode::Leaf { probability } => return Ok(probability),
            TreeNode::Branch {
                feature,
                threshold,
                left,
                right,
            } => {
                index = if features[feature as usize] <= threshold {
                    left as usize
                } else {
                    right as usize
                };
            }
        }
    }
    Err(ForestError::TraversalOverrun {
        tree: tree_idx,
        limit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(probability_left: f64, probability_right: f64) -> Tree {
        Tree {
            nodes: vec![
                TreeNode::Branch {
                    feature: 0,
                    threshold: 0.5,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf {
                    probability: probability_left,
                },
                TreeNode::Leaf {
                    probability: probability_right,
                },
            ],
        }
    }

    #[test]
    fn averages_probabilities_across_trees() {
        let forest = Forest::new(1, vec![stump(0.2, 0.9), stump(0.0, 0.7)]);
        let score = forest.score(&[1.0]).expect("score");
        assert!((score.probability - 0.8).abs() < 1e-12);
        assert_eq!(score.label, 1);

        let score = forest.score(&[0.0]).expect("score");
        assert!((score.probability - 0.1).abs() < 1e-12);
        assert_eq!(score.label, 0);
    }

    #[test]
    fn ties_go_left() {
        let forest = Forest::new(1, vec![stump(0.0, 1.0)]);
        let score = forest.score(&[0.5]).expect("score");
        assert_eq!(score.label, 0);
    }

    #[test]
    fn width_mismatch_is_rejected() {
        let forest = Forest::new(2, vec![stump(0.1, 0.9)]);
        let err = forest.score(&[1.0]).unwrap_err();
        assert!(matches!(
            err,
            ForestError::WidthMismatch {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn cyclic_tree_is_caught_at_score_time() {
        let tree = Tree {
            nodes: vec![
                TreeNode::Branch {
                    feature: 0,
                    threshold: 0.5,
                    left: 0,
                    right: 0,
                },
                TreeNode::Leaf { probability: 1.0 },
            ],
        };
        let forest = Forest::new(1, vec![tree]);
        // Structurally in bounds, so validation passes; the walk detects it.
        assert!(forest.validate().is_ok());
        assert!(matches!(
            forest.score(&[0.0]).unwrap_err(),
            ForestError::TraversalOverrun { tree: 0, .. }
        ));
    }
}
