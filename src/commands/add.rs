use super::Session;
use crate::domain::NewStudent;
use crate::error::AppError;
use std::io::{BufRead, Write};
use tracing::info;

/// Prompt for the ten student fields and insert one row.
pub async fn add_student<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<(), AppError> {
    let console = &mut session.console;
    console.write_block("\n  ── Add New Student ──\n")?;
    let student = NewStudent {
        first_name: console.prompt("First name      : ")?,
        last_name: console.prompt("Last name       : ")?,
        email: console.prompt("Email           : ")?,
        phone: console.prompt("Phone           : ")?,
        dob: console.prompt("DOB (YYYY-MM-DD): ")?,
        gender: console.prompt("Gender (Male/Female/Other): ")?,
        dept_id: console.prompt_parse("Dept ID         : ", "Dept ID")?,
        enrollment_no: console.prompt("Enrollment No   : ")?,
        join_year: console.prompt_parse("Join Year       : ", "Join Year")?,
        address: console.prompt("Address         : ")?,
    };

    let Some(mut repo) = session.acquire().await? else {
        return Ok(());
    };
    let outcome = repo.insert_student(&student).await;
    repo.close().await;

    match outcome {
        Ok(id) => {
            info!(student_id = %id, enrollment_no = %student.enrollment_no, "Student added");
            session.console.say(format!(
                "✓ Student '{}' added (ID: {})",
                student.full_name(),
                id
            ))
        }
        Err(e) => session.report_db_error("add_student", &e),
    }
}
