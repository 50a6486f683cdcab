//! Report card read models.

use crate::domain::Decimal;

/// A course the student is enrolled in, with its grade when one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseResult {
    pub course_name: String,
    pub course_code: String,
    pub credits: i64,
    pub semester: i64,
    pub marks_obtained: Option<Decimal>,
    pub grade_letter: Option<String>,
    pub grade_point: Option<Decimal>,
}

/// Courses ordered by semester then name, plus the credit-weighted average.
///
/// `cgpa` is `None` when no enrollment has a grade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCard {
    pub courses: Vec<CourseResult>,
    pub cgpa: Option<Decimal>,
}
