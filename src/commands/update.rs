use super::Session;
use crate::domain::StudentId;
use crate::error::AppError;
use std::io::{BufRead, Write};
use tracing::info;

/// Replace a student's phone and address.
pub async fn update_student<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<(), AppError> {
    let console = &mut session.console;
    console.write_block("\n")?;
    let id: StudentId = console.prompt_parse("Enter Student ID to update: ", "Student ID")?;
    let phone = console.prompt("New phone   : ")?;
    let address = console.prompt("New address : ")?;

    let Some(mut repo) = session.acquire().await? else {
        return Ok(());
    };
    let outcome = repo.update_contact(id, &phone, &address).await;
    repo.close().await;

    match outcome {
        Ok(rows) => {
            info!(student_id = %id, rows, "Student contact updated");
            session
                .console
                .say(format!("✓ Student ID {} updated ({} row(s))", id, rows))
        }
        Err(e) => session.report_db_error("update_student", &e),
    }
}
