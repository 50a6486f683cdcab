use super::Session;
use crate::error::AppError;
use crate::render;
use std::io::{BufRead, Write};
use tracing::debug;

/// Print every student with their department.
pub async fn view_all_students<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<(), AppError> {
    let Some(mut repo) = session.acquire().await? else {
        return Ok(());
    };
    let outcome = repo.list_students().await;
    repo.close().await;

    match outcome {
        Ok(students) => {
            debug!(count = students.len(), "Listed students");
            session.console.write_block(&render::student_table(&students))
        }
        Err(e) => session.report_db_error("view_all_students", &e),
    }
}
