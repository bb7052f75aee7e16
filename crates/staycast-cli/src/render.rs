//! Terminal table rendering for the dashboard commands.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use staycast_data::{CancellationRate, CategoryCount, ColumnOverview, NumericSummary};
use staycast_model::{Outcome, Prediction, SchemaSpec};

fn base_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn rate_cell(rate: f64) -> Cell {
    let text = format!("{rate:.3}");
    if rate >= 0.5 {
        Cell::new(text).fg(Color::Red).add_attribute(Attribute::Bold)
    } else if rate >= 0.25 {
        Cell::new(text).fg(Color::Yellow)
    } else {
        Cell::new(text)
    }
}

pub fn print_overview(columns: &[ColumnOverview]) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Missing"),
        header_cell("Distinct"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for column in columns {
        table.add_row(vec![
            Cell::new(&column.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&column.dtype),
            count_cell(column.missing, Color::Yellow),
            Cell::new(column.distinct),
        ]);
    }
    println!("{table}");
}

pub fn print_preview(headers: &[String], rows: &[Vec<String>]) {
    let mut table = base_table();
    table.set_header(headers.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row.iter().map(Cell::new).collect::<Vec<_>>());
    }
    println!("{table}");
}

pub fn print_numeric_summaries(summaries: &[NumericSummary]) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Min"),
        header_cell("Q1"),
        header_cell("Median"),
        header_cell("Q3"),
        header_cell("Max"),
    ]);
    for index in 1..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in summaries {
        table.add_row(vec![
            Cell::new(&summary.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.count),
            Cell::new(format!("{:.2}", summary.mean)),
            Cell::new(format!("{:.2}", summary.min)),
            Cell::new(format!("{:.2}", summary.q1)),
            Cell::new(format!("{:.2}", summary.median)),
            Cell::new(format!("{:.2}", summary.q3)),
            Cell::new(format!("{:.2}", summary.max)),
        ]);
    }
    println!("{table}");
}

pub fn print_category_counts(column: &str, counts: &[CategoryCount]) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell(column),
        header_cell("Count"),
        header_cell("Share"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in counts {
        table.add_row(vec![
            Cell::new(&entry.value),
            Cell::new(entry.count),
            Cell::new(format!("{:.1}%", entry.share * 100.0)),
        ]);
    }
    println!("{table}");
}

pub fn print_cancellation_rates(group: &str, rates: &[CancellationRate]) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell(group),
        header_cell("Bookings"),
        header_cell("Cancellation rate"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in rates {
        table.add_row(vec![
            Cell::new(&entry.group),
            Cell::new(entry.bookings),
            rate_cell(entry.rate),
        ]);
    }
    println!("{table}");
}

pub fn print_prediction(prediction: &Prediction) {
    let outcome_cell = match prediction.outcome {
        Outcome::Canceled => Cell::new("Canceled")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Outcome::NotCanceled => Cell::new("Not Canceled")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    };
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Prediction"),
        header_cell("Cancellation probability"),
    ]);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        outcome_cell,
        Cell::new(format!("{:.2}", prediction.probability)),
    ]);
    println!("{table}");
}

pub fn print_schema(schema: &SchemaSpec) {
    let mut table = base_table();
    table.set_header(vec![
        header_cell("Index"),
        header_cell("Column"),
        header_cell("Kind"),
    ]);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, column) in schema.expected_columns().iter().enumerate() {
        let indicator = schema
            .categorical_fields()
            .any(|field| is_indicator_for(column, field));
        let kind = if indicator {
            dim_cell("indicator")
        } else {
            Cell::new("numeric")
        };
        table.add_row(vec![Cell::new(index), Cell::new(column), kind]);
    }
    println!("{table}");
}

/// An encoded column belongs to a categorical group when it extends the
/// field name with the one-hot separator.
fn is_indicator_for(column: &str, field: &str) -> bool {
    column
        .strip_prefix(field)
        .and_then(|rest| rest.strip_prefix(staycast_align::ONE_HOT_SEPARATOR))
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_detection_requires_the_separator() {
        assert!(is_indicator_for("deposit_type_Refundable", "deposit_type"));
        assert!(!is_indicator_for("deposit_type", "deposit_type"));
        assert!(!is_indicator_for("lead_time", "deposit_type"));
    }
}
