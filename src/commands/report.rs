use super::Session;
use crate::domain::StudentId;
use crate::error::AppError;
use crate::render;
use std::io::{BufRead, Write};
use tracing::debug;

/// Print a student's courses, grades and CGPA.
pub async fn view_report_card<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<(), AppError> {
    session.console.write_block("\n")?;
    let id: StudentId = session
        .console
        .prompt_parse("Enter Student ID: ", "Student ID")?;

    let Some(mut repo) = session.acquire().await? else {
        return Ok(());
    };
    let outcome = repo.report_card(id).await;
    repo.close().await;

    match outcome {
        Ok(card) if card.courses.is_empty() => session.console.say("No records found."),
        Ok(card) => {
            debug!(student_id = %id, courses = card.courses.len(), "Built report card");
            session.console.write_block(&render::report_card(&card))
        }
        Err(e) => session.report_db_error("view_report_card", &e),
    }
}
