//! Data types produced by the class aggregation.

use serde::Serialize;

/// One student's line in a [`ClassReport`]. `average` is `None` for students
/// with no grades.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentAverage {
    pub name: String,
    pub average: Option<f64>,
}

/// Class-wide statistics. The max, min and overall figures only consider
/// students with at least one grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassReport {
    pub students: Vec<StudentAverage>,
    pub graded_count: usize,
    pub ungraded_count: usize,
    pub max_average: f64,
    pub min_average: f64,
    /// Mean of the per-student averages, not of the raw grades.
    pub overall_average: f64,
}
