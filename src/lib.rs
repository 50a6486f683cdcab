pub mod commands;
pub mod config;
pub mod console;
pub mod db;
pub mod domain;
pub mod error;
pub mod render;

pub use commands::{MenuChoice, Session};
pub use config::Config;
pub use console::Console;
pub use db::{init_db, Database, Repository};
pub use domain::{
    CourseResult, Decimal, NewStudent, ReportCard, Student, StudentId, StudentMatch,
    StudentStatus, StudentSummary,
};
pub use error::AppError;
