//! Domain types for the student records tool.
//!
//! This module provides:
//! - Primitives: StudentId, StudentStatus
//! - Lossless Decimal for marks, grade points and CGPA
//! - Student write/read models and report card rows

pub mod decimal;
pub mod primitives;
pub mod report;
pub mod student;

pub use decimal::Decimal;
pub use primitives::{StatusParseError, StudentId, StudentStatus};
pub use report::{CourseResult, ReportCard};
pub use student::{NewStudent, Student, StudentMatch, StudentSummary};
