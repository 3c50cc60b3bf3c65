use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, Result};

/// Current schema version, stored in `PRAGMA user_version`.
const SCHEMA_VERSION: i32 = 1;

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Ensure that the key-value `preferences` table exists.
fn ensure_preferences_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS preferences (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn user_version(conn: &Connection) -> Result<i32> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

/// Bring the schema up to `SCHEMA_VERSION`. Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let version = user_version(conn)?;
    if version > SCHEMA_VERSION {
        return Err(AppError::Migration(format!(
            "database schema v{} is newer than supported v{}",
            version, SCHEMA_VERSION
        )));
    }

    ensure_log_table(conn)?;
    ensure_preferences_table(conn)?;

    if version < SCHEMA_VERSION {
        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    }

    Ok(())
}
