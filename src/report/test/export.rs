use super::row;
use serde_json::json;

use crate::report::export::{CsvExporter, ReportExporter};

/// Tests basic rendering: header row first, then one record per row, cells
/// in column order.
#[test]
fn renders_header_and_rows() {
    let exporter = CsvExporter;
    let columns = vec!["Case Number".to_string(), "Vehicle Type".to_string()];
    let rows = vec![
        row(json!({"Case Number": "42", "Vehicle Type": "Two Wheeler"})),
        row(json!({"Case Number": "43", "Vehicle Type": ""})),
    ];

    let out = exporter.render(&columns, &rows);

    assert_eq!(
        out,
        "Case Number,Vehicle Type\n42,Two Wheeler\n43,\n"
    );
}

/// Tests that fields containing separators, quotes, or newlines are quoted
/// and inner quotes doubled.
#[test]
fn escapes_special_fields() {
    let exporter = CsvExporter;
    let columns = vec!["Reason".to_string()];
    let rows = vec![
        row(json!({"Reason": "Flat tyre, front"})),
        row(json!({"Reason": "Said \"no\""})),
        row(json!({"Reason": "line\nbreak"})),
    ];

    let out = exporter.render(&columns, &rows);

    assert_eq!(
        out,
        "Reason\n\"Flat tyre, front\"\n\"Said \"\"no\"\"\"\n\"line\nbreak\"\n"
    );
}

/// Tests that a column absent from a row renders as an empty cell.
#[test]
fn missing_cells_render_empty() {
    let exporter = CsvExporter;
    let columns = vec!["A".to_string(), "B".to_string()];
    let rows = vec![row(json!({"A": "1"}))];

    let out = exporter.render(&columns, &rows);

    assert_eq!(out, "A,B\n1,\n");
}

/// Tests the format tag the export envelope reports.
#[test]
fn reports_csv_format() {
    assert_eq!(CsvExporter.format(), "csv");
}
