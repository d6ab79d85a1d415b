//! SQLite backing for the professional record store.
//!
//! The store keeps the row discipline of the spreadsheet it replaces: a
//! single `professionals` sheet whose ordered column set must match
//! [`SHEET_COLUMNS`] exactly. An absent or mismatched table is reset (drop +
//! recreate) rather than migrated, so a tampered or stale file can never
//! serve rows under the wrong headers.

use std::path::Path;

use rusqlite::Connection;

use super::StoreError;

/// Ordered column schema of the professionals sheet. `created_at` holds an
/// ISO-8601 UTC string.
pub const SHEET_COLUMNS: [&str; 6] =
    ["id", "name", "role", "classes_info", "pl_info", "created_at"];

/// Open a connection to the store at `path` and enforce the sheet schema.
pub fn open_store(path: &Path) -> Result<Connection, StoreError> {
    let conn = Connection::open(path)?;
    configure_pragmas(&conn)?;
    ensure_sheet_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory store (for testing).
pub fn open_memory_store() -> Result<Connection, StoreError> {
    let conn = Connection::open_in_memory()?;
    configure_pragmas(&conn)?;
    ensure_sheet_schema(&conn)?;
    Ok(conn)
}

fn configure_pragmas(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Verify that the `professionals` table carries exactly the expected
/// ordered columns; reset it otherwise.
pub fn ensure_sheet_schema(conn: &Connection) -> Result<(), StoreError> {
    let columns = current_columns(conn)?;
    if columns == SHEET_COLUMNS {
        return Ok(());
    }

    if !columns.is_empty() {
        tracing::warn!(
            found = ?columns,
            expected = ?SHEET_COLUMNS,
            "professionals sheet schema mismatch, resetting"
        );
    }

    conn.execute_batch(
        "DROP TABLE IF EXISTS professionals;
         CREATE TABLE professionals (
             id           INTEGER PRIMARY KEY,
             name         TEXT NOT NULL,
             role         TEXT NOT NULL,
             classes_info TEXT,
             pl_info      TEXT,
             created_at   TEXT NOT NULL
         );",
    )?;
    Ok(())
}

/// Ordered column names of the `professionals` table; empty when the table
/// does not exist yet.
fn current_columns(conn: &Connection) -> Result<Vec<String>, StoreError> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info('professionals') ORDER BY cid")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
}
