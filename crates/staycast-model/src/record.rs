use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single raw input value: either a number or a category level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(value) => Some(value.as_str()),
            FieldValue::Number(_) => None,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// A raw input record: field name to value, built per prediction request.
///
/// Any subset of fields is structurally valid; alignment makes the record
/// fit the classifier's schema. The record is ephemeral and never shared
/// across requests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl RawRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Builder-style variant of [`RawRecord::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A fixed-width numeric feature vector in classifier input order.
///
/// Position `i` corresponds to column `i` of the schema the vector was
/// aligned against. This is the only artifact handed to the classifier;
/// the scoring function sees positions, not names.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedVector {
    values: Vec<f64>,
}

impl AlignedVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_set_and_get() {
        let mut record = RawRecord::new();
        record.set("lead_time", 30.0);
        record.set("deposit_type", "Refundable");

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("lead_time").and_then(FieldValue::as_number), Some(30.0));
        assert_eq!(
            record.get("deposit_type").and_then(FieldValue::as_text),
            Some("Refundable")
        );
        assert!(record.get("adr").is_none());
    }

    #[test]
    fn builder_style_record() {
        let record = RawRecord::new().with("adults", 2u32).with("hotel", "City Hotel");
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn field_value_deserializes_untagged() {
        let number: FieldValue = serde_json::from_str("12.5").expect("number");
        let text: FieldValue = serde_json::from_str("\"Direct\"").expect("text");
        assert_eq!(number, FieldValue::Number(12.5));
        assert_eq!(text, FieldValue::Text("Direct".to_string()));
    }
}
