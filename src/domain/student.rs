//! Student write model and read models.

use crate::domain::{StudentId, StudentStatus};

/// Fields collected by the add-student prompts, inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// Expected as `YYYY-MM-DD`; not validated here.
    pub dob: String,
    pub gender: String,
    pub dept_id: i64,
    pub enrollment_no: String,
    pub join_year: i32,
    pub address: String,
}

impl NewStudent {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Complete `students` row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub dob: String,
    pub gender: String,
    pub dept_id: i64,
    pub enrollment_no: String,
    pub join_year: i32,
    pub address: String,
    pub status: StudentStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// One line of the all-students listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentSummary {
    pub id: StudentId,
    pub name: String,
    pub enrollment_no: String,
    pub dept_name: String,
    pub join_year: i32,
    pub status: StudentStatus,
}

/// One detail block of a search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentMatch {
    pub id: StudentId,
    pub name: String,
    pub enrollment_no: String,
    pub email: String,
    pub phone: String,
    pub dept_name: String,
    pub status: StudentStatus,
}
