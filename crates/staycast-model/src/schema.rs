use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// The expected input schema of a trained classifier.
///
/// `expected_columns` is the ordered list of encoded column names the
/// classifier's input matrix was trained with. It defines both the contents
/// and the positional order of every aligned vector; no other artifact may
/// redefine that ordering. `categorical_fields` names the pre-encoding
/// fields whose values are category levels rather than numbers, and is
/// consulted only to decide which raw fields require one-hot expansion.
///
/// The value is immutable after construction and safe to share across
/// concurrent prediction requests without locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaSpec {
    expected_columns: Vec<String>,
    #[serde(default)]
    categorical_fields: BTreeSet<String>,
}

impl SchemaSpec {
    pub fn new(
        expected_columns: impl IntoIterator<Item = impl Into<String>>,
        categorical_fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            expected_columns: expected_columns.into_iter().map(Into::into).collect(),
            categorical_fields: categorical_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the structural invariants: at least one column, no duplicates.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.expected_columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut seen = BTreeSet::new();
        for column in &self.expected_columns {
            if !seen.insert(column.as_str()) {
                return Err(SchemaError::DuplicateColumn {
                    name: column.clone(),
                });
            }
        }
        Ok(())
    }

    /// The encoded column names, in classifier input order.
    pub fn expected_columns(&self) -> &[String] {
        &self.expected_columns
    }

    /// Number of columns the classifier's input matrix must have.
    pub fn len(&self) -> usize {
        self.expected_columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expected_columns.is_empty()
    }

    /// Whether a pre-encoding field is declared categorical.
    pub fn is_categorical(&self, field: &str) -> bool {
        self.categorical_fields.contains(field)
    }

    pub fn categorical_fields(&self) -> impl Iterator<Item = &str> {
        self.categorical_fields.iter().map(String::as_str)
    }

    /// Whether an encoded column exists in this schema.
    pub fn contains(&self, column: &str) -> bool {
        self.expected_columns.iter().any(|name| name == column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_unique_columns() {
        let schema = SchemaSpec::new(["lead_time", "adr"], ["deposit_type"]);
        assert!(schema.validate().is_ok());
        assert_eq!(schema.len(), 2);
        assert!(schema.is_categorical("deposit_type"));
        assert!(!schema.is_categorical("lead_time"));
    }

    #[test]
    fn validate_rejects_empty() {
        let schema = SchemaSpec::new(Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(schema.validate(), Err(SchemaError::Empty));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let schema = SchemaSpec::new(["adr", "lead_time", "adr"], Vec::<String>::new());
        assert_eq!(
            schema.validate(),
            Err(SchemaError::DuplicateColumn {
                name: "adr".to_string()
            })
        );
    }

    #[test]
    fn serde_round_trip_preserves_order() {
        let schema = SchemaSpec::new(["b", "a", "c"], ["a"]);
        let json = serde_json::to_string(&schema).expect("serialize schema");
        let round: SchemaSpec = serde_json::from_str(&json).expect("deserialize schema");
        assert_eq!(round.expected_columns(), ["b", "a", "c"]);
        assert!(round.is_categorical("a"));
    }
}
