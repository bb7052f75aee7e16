//! Bookings dataset ingestion and summaries.
//!
//! Loads the hotel-bookings CSV into a Polars DataFrame and computes the
//! overview/exploration statistics the CLI renders: column profiles,
//! numeric five-number summaries, category frequencies and grouped
//! cancellation rates.

pub mod ingest;
pub mod summary;
pub mod values;

pub use ingest::{CANCEL_COLUMN, read_bookings};
pub use summary::{
    CancellationRate, CategoryCount, ColumnOverview, NumericSummary, cancellation_rate_by,
    category_counts, column_overview, numeric_summary, preview_rows,
};
pub use values::{any_to_f64, any_to_string, format_numeric};
