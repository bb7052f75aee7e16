//! One-hot expansion of raw categorical fields.

use std::collections::BTreeMap;

use staycast_model::{FieldValue, RawRecord, SchemaSpec};

/// Separator between field name and category level in encoded column names.
///
/// Must match the training-time encoder exactly: reconciliation is a pure
/// string match on these synthetic names, with no semantic understanding of
/// "the same category under a different spelling".
pub const ONE_HOT_SEPARATOR: char = '_';

/// Build the encoded column name for a categorical field and level.
pub fn encoded_column_name(field: &str, value: &FieldValue) -> String {
    format!("{field}{ONE_HOT_SEPARATOR}{}", render_level(value))
}

/// Render a category level the way the training-time encoder rendered it.
/// Integral numbers print without a decimal point (`has_agent_1`, not
/// `has_agent_1.0`); text levels are taken verbatim.
fn render_level(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(text) => text.clone(),
        FieldValue::Number(n) if n.is_finite() && n.fract() == 0.0 => format!("{}", *n as i64),
        FieldValue::Number(n) => n.to_string(),
    }
}

/// Expand a raw record into encoded column space.
///
/// A field expands into a single indicator column set to 1.0 when the schema
/// declares it categorical, or when its value is text. Every other synthetic
/// name for that field is implicitly 0 and materializes during
/// reconciliation. Numeric fields pass through under their own name.
pub fn expand_record(raw: &RawRecord, schema: &SchemaSpec) -> BTreeMap<String, f64> {
    let mut expanded = BTreeMap::new();
    for (name, value) in raw.iter() {
        let categorical =
            schema.is_categorical(name) || matches!(value, FieldValue::Text(_));
        if categorical {
            expanded.insert(encoded_column_name(name, value), 1.0);
        } else if let Some(number) = value.as_number() {
            expanded.insert(name.to_string(), number);
        }
    }
    expanded
}
