//! Report card operations for the repository.

use crate::domain::{CourseResult, Decimal, ReportCard, StudentId};
use sqlx::Row;
use tracing::warn;

use super::Repository;

fn decimal_from_real(column: &str, value: Option<f64>) -> Option<Decimal> {
    value.and_then(|v| match Decimal::from_f64(v) {
        Ok(d) => Some(d),
        Err(e) => {
            warn!(column, value = v, error = %e, "Failed to convert REAL to decimal, showing placeholder");
            None
        }
    })
}

impl Repository {
    /// Courses a student is enrolled in, with grades where present,
    /// ordered by semester then course name.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn query_course_results(
        &mut self,
        id: StudentId,
    ) -> Result<Vec<CourseResult>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT c.course_name, c.course_code, c.credits, c.semester,
                   g.marks_obtained, g.grade_letter, g.grade_point
            FROM enrollments e
            JOIN courses c ON e.course_id = c.course_id
            LEFT JOIN grades g ON e.enrollment_id = g.enrollment_id
            WHERE e.student_id = ?
            ORDER BY c.semester, c.course_name
            "#,
        )
        .bind(id.as_i64())
        .fetch_all(&mut self.conn)
        .await?;

        Ok(rows
            .iter()
            .map(|row| CourseResult {
                course_name: row.get("course_name"),
                course_code: row.get("course_code"),
                credits: row.get("credits"),
                semester: row.get("semester"),
                marks_obtained: decimal_from_real("marks_obtained", row.get("marks_obtained")),
                grade_letter: row.get("grade_letter"),
                grade_point: decimal_from_real("grade_point", row.get("grade_point")),
            })
            .collect())
    }

    /// Credit-weighted grade point average over graded enrollments only,
    /// rounded to two places.
    ///
    /// Returns None when the student has no graded enrollment.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn query_cgpa(&mut self, id: StudentId) -> Result<Option<Decimal>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT ROUND(SUM(g.grade_point * c.credits) / SUM(c.credits), 2) AS cgpa
            FROM enrollments e
            JOIN courses c ON e.course_id = c.course_id
            JOIN grades g ON e.enrollment_id = g.enrollment_id
            WHERE e.student_id = ? AND g.grade_point IS NOT NULL
            "#,
        )
        .bind(id.as_i64())
        .fetch_one(&mut self.conn)
        .await?;

        Ok(decimal_from_real("cgpa", row.get("cgpa")))
    }

    /// Both report card queries, run one after the other on this connection.
    ///
    /// # Errors
    /// Returns an error if either query fails.
    pub async fn report_card(&mut self, id: StudentId) -> Result<ReportCard, sqlx::Error> {
        let courses = self.query_course_results(id).await?;
        let cgpa = if courses.is_empty() {
            None
        } else {
            self.query_cgpa(id).await?
        };
        Ok(ReportCard { courses, cgpa })
    }
}
