//! CSV roster parser.
//!
//! A roster is a CSV file with a `name,grade` header. Each row names a
//! student; rows with a grade record it, rows with an empty grade cell only
//! enroll the student.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use crate::gradebook::Gradebook;

/// A single roster row.
#[derive(Debug, Deserialize)]
struct RosterRow {
    name: String,
    grade: Option<i64>,
}

/// Builds a [`Gradebook`] from CSV roster data.
///
/// # Errors
///
/// Returns an error if a row cannot be deserialized, has a blank name, or
/// carries a grade outside `0..=100`. The message names the 1-based data row.
pub fn parse_roster<R: Read>(reader: R) -> Result<Gradebook> {
    let mut book = Gradebook::new();
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    for (idx, result) in rdr.deserialize().enumerate() {
        let row_number = idx + 1;
        let row: RosterRow = result.with_context(|| format!("Invalid roster row {row_number}"))?;

        if book.find(&row.name).is_none() {
            book.add_student(&row.name)
                .with_context(|| format!("Roster row {row_number}"))?;
        }

        if let Some(grade) = row.grade {
            book.record_grade(&row.name, grade)
                .with_context(|| format!("Roster row {row_number}"))?;
        }
    }

    debug!(students = book.len(), "Roster parsed");
    Ok(book)
}

/// Opens the roster at `path` and parses it with [`parse_roster`].
pub fn load_roster(path: impl AsRef<Path>) -> Result<Gradebook> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Could not open roster {}", path.display()))?;
    let book = parse_roster(file)?;
    info!(path = %path.display(), students = book.len(), "Roster loaded");
    Ok(book)
}
