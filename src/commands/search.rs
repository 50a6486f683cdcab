use super::Session;
use crate::error::AppError;
use crate::render;
use std::io::{BufRead, Write};
use tracing::debug;

/// Match a term against first name, last name (substring) or enrollment
/// number (exact).
pub async fn search_student<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
) -> Result<(), AppError> {
    session.console.write_block("\n")?;
    let term = session.console.prompt("Search (name or enrollment no): ")?;

    let Some(mut repo) = session.acquire().await? else {
        return Ok(());
    };
    let outcome = repo.search_students(&term).await;
    repo.close().await;

    match outcome {
        Ok(matches) if matches.is_empty() => session.console.say("No students found."),
        Ok(matches) => {
            debug!(term = %term, count = matches.len(), "Search matched students");
            session.console.write_block(&render::search_results(&matches))
        }
        Err(e) => session.report_db_error("search_student", &e),
    }
}
