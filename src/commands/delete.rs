use super::Session;
use crate::domain::{StudentId, StudentStatus};
use crate::error::AppError;
use std::io::{BufRead, Write};
use tracing::info;

const HARD_DELETE_CONFIRMATION: &str = "YES";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteMode {
    Soft,
    Hard,
}

/// Soft delete (mark `Dropped`) or, after typed confirmation, hard delete.
///
/// All prompting happens before the connection is opened.
pub async fn delete_student<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<(), AppError> {
    let console = &mut session.console;
    console.write_block("\n")?;
    let id: StudentId = console.prompt_parse("Enter Student ID to delete: ", "Student ID")?;
    let choice = console
        .prompt("(S)oft delete [Dropped] or (H)ard delete? ")?
        .to_uppercase();

    let mode = match choice.as_str() {
        "S" => DeleteMode::Soft,
        "H" => {
            let confirm = console.prompt_line("⚠ This is permanent. Type YES to confirm: ")?;
            if confirm != HARD_DELETE_CONFIRMATION {
                return console.say("Cancelled.");
            }
            DeleteMode::Hard
        }
        _ => return console.say("Invalid choice."),
    };

    let Some(mut repo) = session.acquire().await? else {
        return Ok(());
    };
    let outcome = match mode {
        DeleteMode::Soft => repo.set_status(id, StudentStatus::Dropped).await,
        DeleteMode::Hard => repo.delete_student(id).await,
    };
    repo.close().await;

    match (mode, outcome) {
        (DeleteMode::Soft, Ok(rows)) => {
            info!(student_id = %id, rows, "Student marked as Dropped");
            session
                .console
                .say(format!("✓ Student ID {} marked as Dropped.", id))
        }
        (DeleteMode::Hard, Ok(rows)) => {
            info!(student_id = %id, rows, "Student permanently deleted");
            session
                .console
                .say(format!("✓ Student ID {} permanently deleted.", id))
        }
        (_, Err(e)) => session.report_db_error("delete_student", &e),
    }
}
