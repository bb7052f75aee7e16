//! Dataset summary statistics for the exploration commands.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, Column, DataFrame};

use crate::ingest::CANCEL_COLUMN;
use crate::values::{any_to_f64, any_to_string};

/// Shape and missing-value profile of one dataset column.
#[derive(Debug, Clone)]
pub struct ColumnOverview {
    pub name: String,
    pub dtype: String,
    pub missing: usize,
    pub distinct: usize,
}

/// Five-number summary plus count/mean for a numeric column.
#[derive(Debug, Clone)]
pub struct NumericSummary {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Frequency of one category level.
#[derive(Debug, Clone)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
    pub share: f64,
}

/// Cancellation rate within one category level.
#[derive(Debug, Clone)]
pub struct CancellationRate {
    pub group: String,
    pub bookings: usize,
    pub rate: f64,
}

fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .with_context(|| format!("column not found in dataset: {name}"))
}

fn cell(col: &Column, idx: usize) -> AnyValue<'_> {
    col.get(idx).unwrap_or(AnyValue::Null)
}

/// Profile every column of the dataset.
pub fn column_overview(df: &DataFrame) -> Vec<ColumnOverview> {
    df.get_columns()
        .iter()
        .map(|col| ColumnOverview {
            name: col.name().to_string(),
            dtype: col.dtype().to_string(),
            missing: col.null_count(),
            distinct: col.n_unique().unwrap_or(0),
        })
        .collect()
}

/// Header row and stringified cells for a dataset preview.
pub fn preview_rows(df: &DataFrame, limit: usize) -> (Vec<String>, Vec<Vec<String>>) {
    let headers: Vec<String> = df
        .get_columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();
    let take = limit.min(df.height());
    let mut rows = Vec::with_capacity(take);
    for idx in 0..take {
        let row = df
            .get_columns()
            .iter()
            .map(|col| any_to_string(cell(col, idx)))
            .collect();
        rows.push(row);
    }
    (headers, rows)
}

/// Summarize a numeric column. Non-numeric cells are skipped.
pub fn numeric_summary(df: &DataFrame, name: &str) -> Result<NumericSummary> {
    let col = column(df, name)?;
    let mut values: Vec<f64> = (0..df.height())
        .filter_map(|idx| any_to_f64(cell(col, idx)))
        .filter(|value| value.is_finite())
        .collect();
    anyhow::ensure!(!values.is_empty(), "column has no numeric values: {name}");
    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;
    Ok(NumericSummary {
        column: name.to_string(),
        count,
        mean,
        min: values[0],
        q1: quantile(&values, 0.25),
        median: quantile(&values, 0.5),
        q3: quantile(&values, 0.75),
        max: values[count - 1],
    })
}

/// Linear-interpolation quantile over sorted values.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let position = q * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        sorted[lower]
    } else {
        let weight = position - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

/// Count category levels, most frequent first. Empty cells are skipped.
pub fn category_counts(df: &DataFrame, name: &str, limit: usize) -> Result<Vec<CategoryCount>> {
    let col = column(df, name)?;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0usize;
    for idx in 0..df.height() {
        let value = any_to_string(cell(col, idx));
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        *counts.entry(trimmed.to_string()).or_default() += 1;
        total += 1;
    }

    let mut ordered: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(value, count)| CategoryCount {
            value,
            count,
            share: count as f64 / total as f64,
        })
        .collect();
    ordered.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    ordered.truncate(limit);
    Ok(ordered)
}

/// Mean of `is_canceled` within each level of a grouping column, highest
/// rate first.
pub fn cancellation_rate_by(df: &DataFrame, group: &str) -> Result<Vec<CancellationRate>> {
    let group_col = column(df, group)?;
    let cancel_col = column(df, CANCEL_COLUMN)?;

    let mut stats: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    for idx in 0..df.height() {
        let level = any_to_string(cell(group_col, idx));
        let level = level.trim();
        if level.is_empty() {
            continue;
        }
        let Some(canceled) = any_to_f64(cell(cancel_col, idx)) else {
            continue;
        };
        let entry = stats.entry(level.to_string()).or_default();
        entry.0 += 1;
        entry.1 += canceled;
    }

    let mut rates: Vec<CancellationRate> = stats
        .into_iter()
        .map(|(level, (bookings, canceled))| CancellationRate {
            group: level,
            bookings,
            rate: canceled / bookings as f64,
        })
        .collect();
    rates.sort_by(|a, b| {
        b.rate
            .partial_cmp(&a.rate)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.group.cmp(&b.group))
    });
    Ok(rates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantiles_interpolate() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.0), 1.0);
        assert_eq!(quantile(&values, 0.5), 2.5);
        assert_eq!(quantile(&values, 1.0), 4.0);
        assert_eq!(quantile(&[7.0], 0.5), 7.0);
    }
}
