//! Classifier adapter over the forest artifact.

use staycast_forest::{Forest, ForestError};
use staycast_model::{AlignedVector, Classifier, ClassifyError, Outcome, Prediction};

/// A loaded random forest exposed through the scoring boundary.
#[derive(Debug, Clone)]
pub struct ForestClassifier {
    forest: Forest,
}

impl ForestClassifier {
    pub fn new(forest: Forest) -> Self {
        Self { forest }
    }

    pub fn forest(&self) -> &Forest {
        &self.forest
    }
}

impl Classifier for ForestClassifier {
    fn input_width(&self) -> usize {
        self.forest.num_features()
    }

    fn score(&self, vector: &AlignedVector) -> Result<Prediction, ClassifyError> {
        let score = self.forest.score(vector.as_slice()).map_err(|error| match error {
            ForestError::WidthMismatch { expected, actual } => {
                ClassifyError::WidthMismatch { expected, actual }
            }
            other => ClassifyError::Internal {
                message: other.to_string(),
            },
        })?;
        Ok(Prediction {
            outcome: Outcome::from_label(score.label),
            probability: score.probability,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use staycast_forest::{Tree, TreeNode};

    #[test]
    fn maps_scores_to_predictions() {
        let tree = Tree {
            nodes: vec![TreeNode::Leaf { probability: 0.75 }],
        };
        let classifier = ForestClassifier::new(Forest::new(3, vec![tree]));
        assert_eq!(classifier.input_width(), 3);

        let prediction = classifier
            .score(&AlignedVector::new(vec![0.0, 1.0, 2.0]))
            .expect("score");
        assert_eq!(prediction.outcome, Outcome::Canceled);
        assert!((prediction.probability - 0.75).abs() < 1e-12);
    }

    #[test]
    fn width_mismatch_surfaces_as_classify_error() {
        let tree = Tree {
            nodes: vec![TreeNode::Leaf { probability: 0.1 }],
        };
        let classifier = ForestClassifier::new(Forest::new(2, vec![tree]));
        let error = classifier
            .score(&AlignedVector::new(vec![1.0]))
            .unwrap_err();
        assert_eq!(
            error,
            ClassifyError::WidthMismatch {
                expected: 2,
                actual: 1
            }
        );
    }
}
