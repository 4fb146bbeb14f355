//! Output formatting and persistence for reports.
//!
//! Supports plain-text rendering, JSON serialization, and CSV append.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::Result;
use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::analyzers::types::ClassReport;
use crate::gradebook::Student;
use crate::stats::ReportSnapshot;

/// Renders a [`ClassReport`] as human-readable lines. Students without
/// grades are shown as `N/A`.
pub fn render_report(report: &ClassReport) -> String {
    let mut out: String = report
        .students
        .iter()
        .map(|entry| match entry.average {
            Some(avg) => format!("{}'s average grade is {:.2}\n", entry.name, avg),
            None => format!("{}'s average grade is N/A\n", entry.name),
        })
        .collect();

    out.push_str(&format!("Max average: {:.2}\n", report.max_average));
    out.push_str(&format!("Min average: {:.2}\n", report.min_average));
    out.push_str(&format!("Overall average: {:.2}\n", report.overall_average));
    out
}

/// Renders the top performers, one per line, with their averages.
pub fn render_top_performers(top: &[&Student]) -> String {
    let mut out = String::from("Top performers:\n");
    for student in top {
        if let Some(avg) = student.average() {
            out.push_str(&format!("{} with an average of {:.2}\n", student.name(), avg));
        }
    }
    out
}

/// Prints any serializable value as pretty-printed JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Appends a [`ReportSnapshot`] as a row to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_record(path: &str, snapshot: &ReportSnapshot) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, "Appending CSV record");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists) // IMPORTANT when appending
        .from_writer(file);

    writer.serialize(snapshot)?;
    writer.flush()?;

    Ok(())
}
