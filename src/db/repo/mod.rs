//! Repository layer for database operations.
//!
//! A `Repository` owns exactly one connection for the duration of a menu
//! operation. Methods are organized across submodules by domain:
//! - `students.rs` - Student create, read, update and delete
//! - `report.rs` - Report card and CGPA queries

mod report;
mod students;

use crate::db::Database;
use sqlx::sqlite::SqliteConnection;
use sqlx::Connection;
use tracing::warn;

/// Repository for database operations over a single open connection.
pub struct Repository {
    conn: SqliteConnection,
}

impl Repository {
    /// Wrap an already open connection.
    pub fn new(conn: SqliteConnection) -> Self {
        Repository { conn }
    }

    /// Open a new connection for one operation.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened.
    pub async fn open(db: &Database) -> Result<Self, sqlx::Error> {
        Ok(Repository::new(db.connect().await?))
    }

    /// Close the underlying connection.
    ///
    /// A failed close is logged rather than surfaced: by then the operation's
    /// outcome has already been reported.
    pub async fn close(self) {
        if let Err(e) = self.conn.close().await {
            warn!(error = %e, "Failed to close database connection cleanly");
        }
    }
}
