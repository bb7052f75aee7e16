//! Bookings dataset ingestion.

use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, DataFrame, SerReader};
use tracing::info;

/// The label column of the bookings dataset.
pub const CANCEL_COLUMN: &str = "is_canceled";

/// Read the bookings CSV into a DataFrame.
pub fn read_bookings(path: &Path) -> Result<DataFrame> {
    anyhow::ensure!(path.exists(), "dataset not found: {}", path.display());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("failed to open dataset: {}", path.display()))?
        .finish()
        .with_context(|| format!("failed to read dataset: {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "dataset loaded"
    );
    Ok(df)
}
