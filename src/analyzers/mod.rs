//! Class-wide aggregation over a gradebook's students.
//!
//! Computes per-student averages, the max/min/overall averages of the graded
//! students and the tie-inclusive set of top performers.

pub mod aggregate;
pub mod types;
pub mod utility;
