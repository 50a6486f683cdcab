//! Per-operation connection manager.

use crate::config::Config;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteConnection, SqliteJournalMode, SqliteSynchronous,
};
use sqlx::ConnectOptions;
use std::time::Duration;
use tracing::debug;

/// Connection settings resolved once at startup.
///
/// Every menu operation opens its own connection through [`Database::connect`]
/// and closes it before returning to the menu.
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// Build connection settings for an existing database file.
    pub fn new(config: &Config) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(&config.database_path)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_millis(config.busy_timeout_ms));

        Database { options }
    }

    /// Allow the first connection to create the database file.
    pub(crate) fn creating(&self) -> SqliteConnectOptions {
        self.options.clone().create_if_missing(true)
    }

    /// Open a fresh connection.
    ///
    /// # Errors
    /// Returns an error if the file is missing or cannot be opened.
    pub async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        let conn = self.options.connect().await?;
        debug!("Opened database connection");
        Ok(conn)
    }
}
