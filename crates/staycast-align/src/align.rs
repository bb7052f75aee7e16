//! Schema reconciliation: mapping an expanded record onto the exact column
//! set and order the classifier was trained with.

use staycast_model::{AlignedVector, RawRecord, SchemaError, SchemaSpec};
use tracing::debug;

use crate::expand::expand_record;

/// Align a raw record against a schema, producing a vector the classifier
/// can score.
///
/// Expanded names the schema does not know are dropped; expected names the
/// record never produced are filled with 0.0 (absence of a one-hot category,
/// and the documented approximation for missing numerics). The output reads
/// in exactly `expected_columns` order — the scoring function sees positions,
/// not names, so any deviation here silently corrupts predictions.
///
/// Fails only when the schema itself is malformed (empty or duplicate
/// columns). Every raw input shape is valid by construction.
pub fn align(raw: &RawRecord, schema: &SchemaSpec) -> Result<AlignedVector, SchemaError> {
    schema.validate()?;

    let mut expanded = expand_record(raw, schema);
    let mut values = Vec::with_capacity(schema.len());
    for column in schema.expected_columns() {
        match expanded.remove(column.as_str()) {
            Some(value) => values.push(value),
            None => {
                debug!(column = column.as_str(), "expected column absent from input, filling 0");
                values.push(0.0);
            }
        }
    }
    // Whatever is left carries no information the classifier can use.
    for name in expanded.keys() {
        debug!(column = name.as_str(), "dropping column not in schema");
    }

    Ok(AlignedVector::new(values))
}
