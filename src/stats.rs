use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::analyzers::types::ClassReport;
use crate::gradebook::Student;

/// Flat, timestamped summary of one report run, suitable for a CSV row.
#[derive(Debug, Default, Serialize)]
pub struct ReportSnapshot {
    pub timestamp: DateTime<Utc>,
    pub source: Option<String>,
    pub students: usize,
    pub graded: usize,
    pub ungraded: usize,

    pub max_average: Option<f64>,
    pub min_average: Option<f64>,
    pub overall_average: Option<f64>,
    pub top_performers: Option<String>,

    // error tracking
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl ReportSnapshot {
    pub fn from_report(report: &ClassReport, top: &[&Student]) -> Self {
        let names: Vec<&str> = top.iter().map(|s| s.name()).collect();

        ReportSnapshot {
            timestamp: Utc::now(),
            students: report.students.len(),
            graded: report.graded_count,
            ungraded: report.ungraded_count,
            max_average: Some(report.max_average),
            min_average: Some(report.min_average),
            overall_average: Some(report.overall_average),
            top_performers: Some(names.join(";")),
            ..Default::default()
        }
    }

    /// Create an error record with timestamp and error information
    pub fn from_error(error_type: &str, error_message: &str) -> Self {
        ReportSnapshot {
            timestamp: Utc::now(),
            error_type: Some(error_type.to_string()),
            error_message: Some(error_message.to_string()),
            ..Default::default()
        }
    }

    /// Set the roster the snapshot was computed from
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}
