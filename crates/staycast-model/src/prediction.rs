use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ClassifyError;
use crate::record::AlignedVector;

/// Binary booking outcome predicted by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    Canceled,
    NotCanceled,
}

impl Outcome {
    /// Map a classifier label to an outcome. Label 1 is a cancellation.
    pub fn from_label(label: u8) -> Self {
        if label == 1 {
            Outcome::Canceled
        } else {
            Outcome::NotCanceled
        }
    }

    pub fn label(&self) -> u8 {
        match self {
            Outcome::Canceled => 1,
            Outcome::NotCanceled => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Canceled => "Canceled",
            Outcome::NotCanceled => "Not Canceled",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scored prediction: the label plus the cancellation probability.
///
/// `probability` is always the probability of cancellation, regardless of
/// which outcome the label picked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub outcome: Outcome,
    pub probability: f64,
}

/// Scoring boundary for a pre-trained classifier.
///
/// Implementations are read-only after load and safe to share across
/// concurrent requests. The caller guarantees positional alignment of the
/// vector; the classifier is assumed, not verified, to have been trained on
/// exactly that column ordering.
pub trait Classifier {
    /// Number of features the classifier's input matrix was trained with.
    fn input_width(&self) -> usize;

    fn score(&self, vector: &AlignedVector) -> Result<Prediction, ClassifyError>;
}
