//! Error kinds returned by the gradebook engine.

/// Every expected failure of a [`Gradebook`](crate::gradebook::Gradebook)
/// operation. A failed operation never mutates the gradebook.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradebookError {
    /// The name was empty after trimming.
    #[error("student name must not be empty")]
    EmptyName,

    /// A student with the same normalized name is already enrolled.
    #[error("a student named `{0}` already exists")]
    DuplicateStudent(String),

    /// No student matches the normalized name.
    #[error("no student named `{0}` was found")]
    StudentNotFound(String),

    /// Grades must lie in `0..=100`.
    #[error("grade {0} is out of range (expected an integer from 0 to 100)")]
    InvalidGrade(i64),

    #[error("there are no students in the gradebook")]
    EmptyGradebook,

    #[error("no student has any grades yet")]
    NoGradedStudents,
}

impl GradebookError {
    /// Short machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            GradebookError::EmptyName => "empty_name",
            GradebookError::DuplicateStudent(_) => "duplicate_student",
            GradebookError::StudentNotFound(_) => "student_not_found",
            GradebookError::InvalidGrade(_) => "invalid_grade",
            GradebookError::EmptyGradebook => "empty_gradebook",
            GradebookError::NoGradedStudents => "no_graded_students",
        }
    }
}
