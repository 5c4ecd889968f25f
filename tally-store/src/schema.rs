//! Database schema.
//!
//! One table, one row. The `CHECK (id = 1)` constraint makes a second row
//! impossible regardless of how the table is written to.

use rusqlite::Connection;
use tracing::{debug, info};

use crate::error::StoreError;

/// Name of the counter table.
pub const COUNTERS_TABLE: &str = "counters";

/// Current schema version, stored in `PRAGMA user_version`.
pub const SCHEMA_VERSION: i64 = 1;

const CREATE_COUNTERS: &str = "
    CREATE TABLE IF NOT EXISTS counters (
        id INTEGER PRIMARY KEY CHECK (id = 1),
        value INTEGER NOT NULL DEFAULT 0,
        created_at INTEGER NOT NULL,
        updated_at INTEGER NOT NULL
    )";

/// Creates the schema if it does not exist. Idempotent.
///
/// # Errors
///
/// Returns error if the DDL cannot be executed.
pub fn ensure_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(CREATE_COUNTERS)?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    debug!(version = SCHEMA_VERSION, "Schema ensured");
    Ok(())
}

/// Returns the schema version recorded in the database.
///
/// # Errors
///
/// Returns error if the pragma cannot be read.
pub fn schema_version(conn: &Connection) -> Result<i64, StoreError> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Drops every table and recreates the schema, deleting the counter.
///
/// This is the full store reset; normal operation never calls it.
///
/// # Errors
///
/// Returns error if the DDL cannot be executed.
pub fn reset_db(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch("DROP TABLE IF EXISTS counters")?;
    ensure_schema(conn)?;
    info!(table = COUNTERS_TABLE, "Store reset");
    Ok(())
}

/// Counts rows in the counter table.
///
/// # Errors
///
/// Returns error if the query fails.
pub fn count_rows(conn: &Connection) -> Result<i64, StoreError> {
    Ok(conn.query_row("SELECT COUNT(*) FROM counters", [], |row| row.get(0))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn).unwrap();
        conn
    }

    #[test]
    fn test_ensure_schema_is_idempotent() {
        let conn = memory();
        ensure_schema(&conn).unwrap();
        assert_eq!(schema_version(&conn).unwrap(), SCHEMA_VERSION);
        assert_eq!(count_rows(&conn).unwrap(), 0);
    }

    #[test]
    fn test_second_row_rejected() {
        let conn = memory();
        conn.execute(
            "INSERT INTO counters (id, value, created_at, updated_at) VALUES (1, 0, 0, 0)",
            [],
        )
        .unwrap();

        let err = conn
            .execute(
                "INSERT INTO counters (id, value, created_at, updated_at) VALUES (2, 0, 0, 0)",
                [],
            )
            .unwrap_err();
        assert_eq!(
            err.sqlite_error_code(),
            Some(rusqlite::ErrorCode::ConstraintViolation)
        );
        assert_eq!(count_rows(&conn).unwrap(), 1);
    }

    #[test]
    fn test_reset_db_removes_record() {
        let conn = memory();
        conn.execute(
            "INSERT INTO counters (id, value, created_at, updated_at) VALUES (1, 7, 0, 0)",
            [],
        )
        .unwrap();

        reset_db(&conn).unwrap();
        assert_eq!(count_rows(&conn).unwrap(), 0);
    }
}
