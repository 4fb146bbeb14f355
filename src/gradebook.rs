//! In-memory gradebook: student enrollment, grade entry and averages.
//!
//! Class-wide statistics live in [`crate::analyzers`]; this module only owns
//! the records and enforces their invariants.

use serde::Serialize;
use tracing::debug;

use crate::analyzers::aggregate::{aggregate_class, select_top_performers};
use crate::analyzers::types::ClassReport;
use crate::analyzers::utility::mean;
use crate::error::GradebookError;

/// Lowest accepted grade.
pub const MIN_GRADE: i64 = 0;
/// Highest accepted grade.
pub const MAX_GRADE: i64 = 100;

/// Stable handle to a student: its position in enrollment order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct StudentId(pub usize);

/// A single student and the grades recorded for them, in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    name: String,
    #[serde(skip)]
    key: String,
    grades: Vec<u8>,
}

impl Student {
    fn new(name: String) -> Self {
        Self {
            key: comparison_key(&name),
            name,
            grades: Vec::new(),
        }
    }

    /// The normalized name the student was enrolled under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[u8] {
        &self.grades
    }

    pub fn is_graded(&self) -> bool {
        !self.grades.is_empty()
    }

    /// Arithmetic mean of the recorded grades, or `None` when there are none.
    pub fn average(&self) -> Option<f64> {
        let values: Vec<f64> = self.grades.iter().map(|&g| f64::from(g)).collect();
        mean(&values)
    }
}

/// Trims `raw` and folds its case so that the first character is upper case
/// and the rest lower case (`" aLIce "` becomes `"Alice"`).
pub fn normalize_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Case-insensitive key for an already normalized name.
///
/// Upper-casing before lower-casing folds expansions such as `ß` → `SS`, so
/// every case variant of a name, including the stored form, maps to the same
/// key.
fn comparison_key(normalized: &str) -> String {
    normalized
        .chars()
        .flat_map(char::to_uppercase)
        .flat_map(char::to_lowercase)
        .collect()
}

/// Owns every enrolled [`Student`] in enrollment order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Gradebook {
    students: Vec<Student>,
}

impl Gradebook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn get(&self, id: StudentId) -> Option<&Student> {
        self.students.get(id.0)
    }

    /// Looks a student up by name, applying the same normalization used at
    /// enrollment.
    pub fn find(&self, name: &str) -> Option<&Student> {
        self.position(&normalize_name(name))
            .map(|idx| &self.students[idx])
    }

    fn position(&self, normalized: &str) -> Option<usize> {
        let key = comparison_key(normalized);
        self.students.iter().position(|s| s.key == key)
    }

    /// Enrolls a new student with no grades.
    ///
    /// # Errors
    ///
    /// [`GradebookError::EmptyName`] when the name is blank and
    /// [`GradebookError::DuplicateStudent`] when the normalized name is taken.
    pub fn add_student(&mut self, name: &str) -> Result<StudentId, GradebookError> {
        let name = normalize_name(name);
        if name.is_empty() {
            return Err(GradebookError::EmptyName);
        }
        if self.position(&name).is_some() {
            return Err(GradebookError::DuplicateStudent(name));
        }

        let id = StudentId(self.students.len());
        debug!(student = %name, id = id.0, "Student added");
        self.students.push(Student::new(name));
        Ok(id)
    }

    /// Appends `grade` to the named student's grades.
    ///
    /// # Errors
    ///
    /// [`GradebookError::StudentNotFound`] when nobody matches `name` and
    /// [`GradebookError::InvalidGrade`] when `grade` is outside `0..=100`.
    pub fn record_grade(&mut self, name: &str, grade: i64) -> Result<(), GradebookError> {
        let name = normalize_name(name);
        let idx = self
            .position(&name)
            .ok_or_else(|| GradebookError::StudentNotFound(name.clone()))?;
        if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
            return Err(GradebookError::InvalidGrade(grade));
        }

        let value = u8::try_from(grade).map_err(|_| GradebookError::InvalidGrade(grade))?;
        self.students[idx].grades.push(value);
        debug!(student = %name, grade = value, "Grade recorded");
        Ok(())
    }

    /// Average of the named student's grades; `Ok(None)` when they have none.
    pub fn average(&self, name: &str) -> Result<Option<f64>, GradebookError> {
        self.find(name)
            .map(Student::average)
            .ok_or_else(|| GradebookError::StudentNotFound(normalize_name(name)))
    }

    /// Per-student averages plus max, min and overall averages over the
    /// students that have at least one grade.
    pub fn class_report(&self) -> Result<ClassReport, GradebookError> {
        aggregate_class(&self.students)
    }

    /// Every graded student whose average equals the best average, in
    /// enrollment order.
    pub fn top_performers(&self) -> Result<Vec<&Student>, GradebookError> {
        select_top_performers(&self.students)
    }
}
