//! Export Adapter boundary.
//!
//! The engine hands materialized rows to a `ReportExporter`; rendering a
//! real spreadsheet is a collaborator concern. The wired default is a plain
//! CSV renderer so the export endpoint works end to end.

use crate::{model::report::MaterializedRow, report::resolve::value_to_display};

/// Renders a materialized report into a downloadable buffer.
pub trait ReportExporter: Send + Sync {
    /// Short format tag reported to the client, e.g. `"csv"`.
    fn format(&self) -> &'static str;

    /// Renders the rows under the given column headers.
    fn render(&self, columns: &[String], rows: &[MaterializedRow]) -> String;
}

pub struct CsvExporter;

impl ReportExporter for CsvExporter {
    fn format(&self) -> &'static str {
        "csv"
    }

    fn render(&self, columns: &[String], rows: &[MaterializedRow]) -> String {
        let mut out = String::new();

        push_record(&mut out, columns.iter().map(String::as_str));
        for row in rows {
            push_record(
                &mut out,
                columns.iter().map(|column| {
                    row.get(column)
                        .map(value_to_display)
                        .unwrap_or_default()
                }),
            );
        }

        out
    }
}

fn push_record<I, S>(out: &mut String, fields: I)
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(field.as_ref()));
    }
    out.push('\n');
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
