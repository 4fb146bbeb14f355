use crate::analyzers::types::{ClassReport, StudentAverage};
use crate::analyzers::utility::mean;
use crate::error::GradebookError;
use crate::gradebook::Student;
use tracing::debug;

/// Pairs each graded student with their average, skipping ungraded ones.
///
/// Fails with [`GradebookError::EmptyGradebook`] for an empty slice and
/// [`GradebookError::NoGradedStudents`] when nobody has a grade.
fn graded_averages(students: &[Student]) -> Result<Vec<(&Student, f64)>, GradebookError> {
    if students.is_empty() {
        return Err(GradebookError::EmptyGradebook);
    }

    let graded: Vec<(&Student, f64)> = students
        .iter()
        .filter_map(|s| s.average().map(|avg| (s, avg)))
        .collect();

    if graded.is_empty() {
        return Err(GradebookError::NoGradedStudents);
    }

    Ok(graded)
}

/// Aggregates all students into a [`ClassReport`].
///
/// `overall_average` is the mean of the per-student averages, so a student
/// with one grade weighs as much as one with twenty.
pub fn aggregate_class(students: &[Student]) -> Result<ClassReport, GradebookError> {
    let graded = graded_averages(students)?;
    let averages: Vec<f64> = graded.iter().map(|(_, avg)| *avg).collect();

    let max_average = averages.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min_average = averages.iter().copied().fold(f64::INFINITY, f64::min);
    let overall_average = mean(&averages).ok_or(GradebookError::NoGradedStudents)?;

    let entries = students
        .iter()
        .map(|s| StudentAverage {
            name: s.name().to_string(),
            average: s.average(),
        })
        .collect();

    debug!(
        students = students.len(),
        graded = graded.len(),
        max_average,
        min_average,
        overall_average,
        "Class aggregated"
    );

    Ok(ClassReport {
        students: entries,
        graded_count: graded.len(),
        ungraded_count: students.len() - graded.len(),
        max_average,
        min_average,
        overall_average,
    })
}

/// Returns every graded student whose average equals the highest average,
/// keeping their original order.
pub fn select_top_performers(students: &[Student]) -> Result<Vec<&Student>, GradebookError> {
    let graded = graded_averages(students)?;
    let best = graded
        .iter()
        .map(|(_, avg)| *avg)
        .fold(f64::NEG_INFINITY, f64::max);

    Ok(graded
        .into_iter()
        .filter(|(_, avg)| *avg == best)
        .map(|(s, _)| s)
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::error::GradebookError;
    use crate::gradebook::Gradebook;

    fn book_with(entries: &[(&str, &[i64])]) -> Gradebook {
        let mut book = Gradebook::new();
        for (name, grades) in entries {
            book.add_student(name).unwrap();
            for &g in grades.iter() {
                book.record_grade(name, g).unwrap();
            }
        }
        book
    }

    #[test]
    fn test_report_skips_ungraded_in_statistics() {
        let book = book_with(&[("a", &[100]), ("b", &[50]), ("c", &[])]);
        let report = book.class_report().unwrap();

        assert_eq!(report.max_average, 100.0);
        assert_eq!(report.min_average, 50.0);
        assert_eq!(report.overall_average, 75.0);
        assert_eq!(report.graded_count, 2);
        assert_eq!(report.ungraded_count, 1);

        let names: Vec<_> = report.students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(report.students[2].average, None);
    }

    #[test]
    fn test_overall_is_mean_of_means() {
        // Pooled mean would be (100 + 0 + 0 + 0) / 4 = 25.
        let book = book_with(&[("a", &[100]), ("b", &[0, 0, 0])]);
        let report = book.class_report().unwrap();
        assert_eq!(report.overall_average, 50.0);
    }

    #[test]
    fn test_report_single_student_min_equals_max() {
        let book = book_with(&[("solo", &[61, 62])]);
        let report = book.class_report().unwrap();
        assert_eq!(report.max_average, 61.5);
        assert_eq!(report.min_average, 61.5);
    }

    #[test]
    fn test_report_all_zero_grades() {
        let book = book_with(&[("a", &[0]), ("b", &[0, 0])]);
        let report = book.class_report().unwrap();
        assert_eq!(report.max_average, 0.0);
        assert_eq!(report.overall_average, 0.0);
    }

    #[test]
    fn test_empty_gradebook_errors() {
        let book = Gradebook::new();
        assert_eq!(book.class_report(), Err(GradebookError::EmptyGradebook));
        assert_eq!(book.top_performers(), Err(GradebookError::EmptyGradebook));
    }

    #[test]
    fn test_no_graded_students_errors() {
        let book = book_with(&[("a", &[]), ("b", &[])]);
        assert_eq!(book.class_report(), Err(GradebookError::NoGradedStudents));
        assert_eq!(book.top_performers(), Err(GradebookError::NoGradedStudents));
    }

    #[test]
    fn test_top_performers_include_ties_in_order() {
        let book = book_with(&[("a", &[90]), ("b", &[90]), ("c", &[80])]);
        let top: Vec<_> = book
            .top_performers()
            .unwrap()
            .into_iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(top, ["A", "B"]);
    }

    #[test]
    fn test_top_performers_ignore_ungraded() {
        let book = book_with(&[("a", &[]), ("b", &[0]), ("c", &[])]);
        let top = book.top_performers().unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name(), "B");
    }

    #[test]
    fn test_top_performers_tie_across_grade_counts() {
        let book = book_with(&[("a", &[70, 90]), ("b", &[80]), ("c", &[60, 100, 80])]);
        let top: Vec<_> = book
            .top_performers()
            .unwrap()
            .into_iter()
            .map(|s| s.name())
            .collect();
        assert_eq!(top, ["A", "B", "C"]);
    }
}
