//! Menu loop and the six student operations.
//!
//! Each operation collects its input, opens a connection, runs its
//! statement(s), closes the connection and prints the outcome. Database
//! failures are printed and end only the current operation.

pub mod add;
pub mod delete;
pub mod list;
pub mod report;
pub mod search;
pub mod update;

use crate::console::Console;
use crate::db::{Database, Repository};
use crate::error::AppError;
use std::io::{BufRead, Write};
use tracing::{debug, warn};

const MENU: &str = "
  ╔══════════════════════════════════════════╗
  ║     STUDENT MANAGEMENT SYSTEM (SMS)      ║
  ╠══════════════════════════════════════════╣
  ║  1. Add New Student                      ║
  ║  2. View All Students                    ║
  ║  3. Search Student                       ║
  ║  4. Update Student Info                  ║
  ║  5. Delete Student                       ║
  ║  6. View Report Card                     ║
  ║  0. Exit                                 ║
  ╚══════════════════════════════════════════╝
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddStudent,
    ViewAllStudents,
    SearchStudent,
    UpdateStudent,
    DeleteStudent,
    ViewReportCard,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddStudent),
            "2" => Some(MenuChoice::ViewAllStudents),
            "3" => Some(MenuChoice::SearchStudent),
            "4" => Some(MenuChoice::UpdateStudent),
            "5" => Some(MenuChoice::DeleteStudent),
            "6" => Some(MenuChoice::ViewReportCard),
            "0" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// An interactive session: startup configuration plus the operator console.
pub struct Session<R, W> {
    db: Database,
    pub(crate) console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(db: Database, console: Console<R, W>) -> Self {
        Session { db, console }
    }

    /// Show the menu and dispatch choices until `0` or end of input.
    ///
    /// # Errors
    /// Only console I/O failures end the loop with an error.
    pub async fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.console.write_block(MENU)?;
            let answer = match self.console.prompt("Enter choice: ") {
                Ok(answer) => answer,
                Err(AppError::EndOfInput) => break,
                Err(e) => return Err(e),
            };

            let Some(choice) = MenuChoice::parse(&answer) else {
                self.console.say("Invalid option, try again.")?;
                continue;
            };
            if choice == MenuChoice::Exit {
                break;
            }

            debug!(?choice, "Dispatching menu choice");
            match self.dispatch(choice).await {
                Ok(()) => {}
                Err(e @ AppError::InvalidInput { .. }) => {
                    self.console.say(format!("[ERROR] {}", e))?;
                }
                Err(AppError::EndOfInput) => break,
                Err(e) => return Err(e),
            }
        }

        self.console.write_block("\n  Goodbye!\n\n")?;
        Ok(())
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<(), AppError> {
        match choice {
            MenuChoice::AddStudent => add::add_student(self).await,
            MenuChoice::ViewAllStudents => list::view_all_students(self).await,
            MenuChoice::SearchStudent => search::search_student(self).await,
            MenuChoice::UpdateStudent => update::update_student(self).await,
            MenuChoice::DeleteStudent => delete::delete_student(self).await,
            MenuChoice::ViewReportCard => report::view_report_card(self).await,
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Open a connection for one operation.
    ///
    /// Returns None after printing the failure; the caller aborts.
    pub(crate) async fn acquire(&mut self) -> Result<Option<Repository>, AppError> {
        match Repository::open(&self.db).await {
            Ok(repo) => Ok(Some(repo)),
            Err(e) => {
                warn!(error = %e, "Cannot connect to database");
                self.console
                    .say(format!("[ERROR] Cannot connect to database: {}", e))?;
                Ok(None)
            }
        }
    }

    /// Print a failed statement's database error text.
    pub(crate) fn report_db_error(
        &mut self,
        operation: &str,
        error: &sqlx::Error,
    ) -> Result<(), AppError> {
        warn!(operation, error = %error, "Database operation failed");
        self.console.say(format!("[ERROR] {}", error))
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}
