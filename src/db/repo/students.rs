//! Student operations for the repository.

use crate::domain::{
    NewStudent, Student, StudentId, StudentMatch, StudentStatus, StudentSummary,
};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use std::str::FromStr;
use tracing::warn;

use super::Repository;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn now_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Read the status column, falling back to `Active` for unknown text.
fn status_column(row: &SqliteRow) -> StudentStatus {
    let raw: String = row.get("status");
    StudentStatus::from_str(&raw).unwrap_or_else(|e| {
        warn!(status = %raw, error = %e, "Unexpected student status, treating as Active");
        StudentStatus::Active
    })
}

/// Nullable text columns surface as empty strings.
fn text_column(row: &SqliteRow, name: &str) -> String {
    row.get::<Option<String>, _>(name).unwrap_or_default()
}

impl Repository {
    /// Insert a student and return the generated id.
    ///
    /// # Errors
    /// Returns an error if the insert fails (unknown department, duplicate
    /// enrollment number, constraint violation).
    pub async fn insert_student(&mut self, student: &NewStudent) -> Result<StudentId, sqlx::Error> {
        let now = now_timestamp();
        let result = sqlx::query(
            r#"
            INSERT INTO students (
                first_name, last_name, email, phone, dob, gender,
                dept_id, enrollment_no, join_year, address, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&student.first_name)
        .bind(&student.last_name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(&student.dob)
        .bind(&student.gender)
        .bind(student.dept_id)
        .bind(&student.enrollment_no)
        .bind(student.join_year)
        .bind(&student.address)
        .bind(&now)
        .bind(&now)
        .execute(&mut self.conn)
        .await?;

        Ok(StudentId::new(result.last_insert_rowid()))
    }

    /// List every student with their department, ordered by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_students(&mut self) -> Result<Vec<StudentSummary>, sqlx::Error> {
        let rows = sqlx::query(
            r#"
            SELECT s.student_id,
                   s.first_name || ' ' || s.last_name AS name,
                   s.enrollment_no, d.dept_name,
                   s.join_year, s.status
            FROM students s
            JOIN departments d ON s.dept_id = d.dept_id
            ORDER BY s.student_id
            "#,
        )
        .fetch_all(&mut self.conn)
        .await?;

        Ok(rows
            .iter()
            .map(|row| StudentSummary {
                id: StudentId::new(row.get("student_id")),
                name: row.get("name"),
                enrollment_no: row.get("enrollment_no"),
                dept_name: row.get("dept_name"),
                join_year: row.get("join_year"),
                status: status_column(row),
            })
            .collect())
    }

    /// Find students whose first or last name contains `term`, or whose
    /// enrollment number equals it exactly.
    ///
    /// `term` is used as a LIKE pattern body, so `%` and `_` act as wildcards.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_students(&mut self, term: &str) -> Result<Vec<StudentMatch>, sqlx::Error> {
        let like = format!("%{}%", term);
        let rows = sqlx::query(
            r#"
            SELECT s.student_id,
                   s.first_name || ' ' || s.last_name AS name,
                   s.enrollment_no, s.email, s.phone,
                   d.dept_name, s.status
            FROM students s
            JOIN departments d ON s.dept_id = d.dept_id
            WHERE s.first_name LIKE ?
               OR s.last_name LIKE ?
               OR s.enrollment_no = ?
            ORDER BY s.student_id
            "#,
        )
        .bind(&like)
        .bind(&like)
        .bind(term)
        .fetch_all(&mut self.conn)
        .await?;

        Ok(rows
            .iter()
            .map(|row| StudentMatch {
                id: StudentId::new(row.get("student_id")),
                name: row.get("name"),
                enrollment_no: row.get("enrollment_no"),
                email: text_column(row, "email"),
                phone: text_column(row, "phone"),
                dept_name: row.get("dept_name"),
                status: status_column(row),
            })
            .collect())
    }

    /// Fetch a full student row.
    ///
    /// Returns None if no student has this id.
    pub async fn get_student(&mut self, id: StudentId) -> Result<Option<Student>, sqlx::Error> {
        let row = sqlx::query(
            r#"
            SELECT student_id, first_name, last_name, email, phone, dob, gender,
                   dept_id, enrollment_no, join_year, address, status,
                   created_at, updated_at
            FROM students
            WHERE student_id = ?
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&mut self.conn)
        .await?;

        Ok(row.map(|r| Student {
            id: StudentId::new(r.get("student_id")),
            first_name: r.get("first_name"),
            last_name: r.get("last_name"),
            email: text_column(&r, "email"),
            phone: text_column(&r, "phone"),
            dob: text_column(&r, "dob"),
            gender: text_column(&r, "gender"),
            dept_id: r.get("dept_id"),
            enrollment_no: r.get("enrollment_no"),
            join_year: r.get("join_year"),
            address: text_column(&r, "address"),
            status: status_column(&r),
            created_at: r.get("created_at"),
            updated_at: r.get("updated_at"),
        }))
    }

    /// Replace a student's phone and address and bump `updated_at`.
    ///
    /// Returns the number of rows changed; 0 means no such student.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_contact(
        &mut self,
        id: StudentId,
        phone: &str,
        address: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET phone = ?, address = ?, updated_at = ? WHERE student_id = ?",
        )
        .bind(phone)
        .bind(address)
        .bind(now_timestamp())
        .bind(id.as_i64())
        .execute(&mut self.conn)
        .await?;

        Ok(result.rows_affected())
    }

    /// Set a student's status without touching any other column.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn set_status(
        &mut self,
        id: StudentId,
        status: StudentStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE students SET status = ? WHERE student_id = ?")
            .bind(status.as_str())
            .bind(id.as_i64())
            .execute(&mut self.conn)
            .await?;

        Ok(result.rows_affected())
    }

    /// Permanently delete a student row. Enrollments and grades cascade.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_student(&mut self, id: StudentId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM students WHERE student_id = ?")
            .bind(id.as_i64())
            .execute(&mut self.conn)
            .await?;

        Ok(result.rows_affected())
    }
}
