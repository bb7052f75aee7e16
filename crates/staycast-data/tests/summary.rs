//! Summary statistics over a small on-disk dataset.

use std::fs;
use std::path::PathBuf;

use staycast_data::{
    cancellation_rate_by, category_counts, column_overview, numeric_summary, preview_rows,
    read_bookings,
};
use tempfile::TempDir;

const BOOKINGS_CSV: &str = "\
hotel,lead_time,adr,deposit_type,is_canceled
City Hotel,100,85.5,No Deposit,0
City Hotel,300,120.0,Non Refund,1
Resort Hotel,20,60.0,No Deposit,0
Resort Hotel,250,95.0,Non Refund,1
Resort Hotel,10,75.0,No Deposit,0
";

fn write_dataset(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("bookings.csv");
    fs::write(&path, BOOKINGS_CSV).expect("write dataset");
    path
}

#[test]
fn reads_and_previews_the_dataset() {
    let dir = TempDir::new().expect("tempdir");
    let df = read_bookings(&write_dataset(&dir)).expect("read");
    assert_eq!(df.height(), 5);
    assert_eq!(df.width(), 5);

    let (headers, rows) = preview_rows(&df, 3);
    assert_eq!(headers[0], "hotel");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][0], "City Hotel");
    assert_eq!(rows[1][4], "1");
}

#[test]
fn overview_profiles_every_column() {
    let dir = TempDir::new().expect("tempdir");
    let df = read_bookings(&write_dataset(&dir)).expect("read");

    let overview = column_overview(&df);
    assert_eq!(overview.len(), 5);
    let hotel = overview.iter().find(|c| c.name == "hotel").expect("hotel");
    assert_eq!(hotel.missing, 0);
    assert_eq!(hotel.distinct, 2);
}

#[test]
fn numeric_summary_matches_hand_computation() {
    let dir = TempDir::new().expect("tempdir");
    let df = read_bookings(&write_dataset(&dir)).expect("read");

    let summary = numeric_summary(&df, "lead_time").expect("summary");
    assert_eq!(summary.count, 5);
    assert_eq!(summary.min, 10.0);
    assert_eq!(summary.max, 300.0);
    assert_eq!(summary.median, 100.0);
    assert!((summary.mean - 136.0).abs() < 1e-12);
}

#[test]
fn missing_numeric_column_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let df = read_bookings(&write_dataset(&dir)).expect("read");
    assert!(numeric_summary(&df, "nonexistent").is_err());
}

#[test]
fn category_counts_order_by_frequency() {
    let dir = TempDir::new().expect("tempdir");
    let df = read_bookings(&write_dataset(&dir)).expect("read");

    let counts = category_counts(&df, "deposit_type", 10).expect("counts");
    assert_eq!(counts[0].value, "No Deposit");
    assert_eq!(counts[0].count, 3);
    assert_eq!(counts[1].value, "Non Refund");
    assert_eq!(counts[1].count, 2);
    assert!((counts[0].share - 0.6).abs() < 1e-12);
}

#[test]
fn cancellation_rates_group_and_sort() {
    let dir = TempDir::new().expect("tempdir");
    let df = read_bookings(&write_dataset(&dir)).expect("read");

    let rates = cancellation_rate_by(&df, "deposit_type").expect("rates");
    assert_eq!(rates[0].group, "Non Refund");
    assert_eq!(rates[0].bookings, 2);
    assert!((rates[0].rate - 1.0).abs() < 1e-12);
    assert_eq!(rates[1].group, "No Deposit");
    assert!((rates[1].rate - 0.0).abs() < 1e-12);
}
