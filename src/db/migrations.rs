//! Database initialization and schema creation.

use crate::config::Config;
use crate::db::Database;
use sqlx::sqlite::SqliteConnection;
use sqlx::{ConnectOptions, Connection, Row};
use std::path::Path;
use tracing::info;

/// Create the database file if needed, apply pragmas and, when enabled,
/// create the tables.
pub async fn init_db(config: &Config) -> Result<Database, sqlx::Error> {
    if let Some(parent) = Path::new(&config.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let db = Database::new(config);
    let mut conn = db.creating().connect().await?;

    let row = sqlx::query("PRAGMA journal_mode")
        .fetch_one(&mut conn)
        .await?;
    let journal_mode: String = row.get(0);
    info!("SQLite journal_mode set to: {}", journal_mode);

    let outcome = if config.auto_migrate {
        run_migrations(&mut conn).await
    } else {
        info!("Automatic migrations disabled, using existing schema");
        Ok(())
    };
    conn.close().await?;
    outcome?;

    info!("Database initialized successfully at {}", config.database_path);
    Ok(db)
}

/// Run the embedded schema. Every statement is idempotent.
pub async fn run_migrations(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(&mut *conn).await?;
        }
    }

    info!("Migrations completed successfully");
    Ok(())
}
