use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use super::StoreError;
use crate::models::{NewProfessional, Professional};

/// Lists registered professionals, newest first.
pub fn list_professionals(conn: &Connection) -> Result<Vec<Professional>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, role, classes_info, pl_info, created_at
         FROM professionals
         ORDER BY created_at DESC, id DESC",
    )?;

    let rows = stmt.query_map([], professional_from_row)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(StoreError::from)
}

/// Creates a new professional, assigning the next monotonic integer id and
/// the current UTC timestamp. Returns the stored record.
pub fn create_professional(
    conn: &Connection,
    new_prof: &NewProfessional,
) -> Result<Professional, StoreError> {
    let next_id: i64 = conn.query_row(
        "SELECT COALESCE(MAX(id), 0) + 1 FROM professionals",
        [],
        |row| row.get(0),
    )?;

    let prof = Professional {
        id: next_id,
        name: new_prof.name.trim().to_string(),
        role: new_prof.role.trim().to_string(),
        classes_info: trimmed_opt(new_prof.classes_info.as_deref()),
        pl_info: trimmed_opt(new_prof.pl_info.as_deref()),
        created_at: Utc::now(),
    };

    conn.execute(
        "INSERT INTO professionals (id, name, role, classes_info, pl_info, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            prof.id,
            prof.name,
            prof.role,
            prof.classes_info,
            prof.pl_info,
            prof.created_at,
        ],
    )?;

    Ok(prof)
}

/// Fetches a professional by id; `None` when absent.
pub fn get_professional(conn: &Connection, id: i64) -> Result<Option<Professional>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, role, classes_info, pl_info, created_at
         FROM professionals WHERE id = ?1",
    )?;

    match stmt.query_row(params![id], professional_from_row) {
        Ok(prof) => Ok(Some(prof)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn professional_from_row(row: &Row<'_>) -> rusqlite::Result<Professional> {
    Ok(Professional {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        classes_info: row.get(3)?,
        pl_info: row.get(4)?,
        created_at: row.get::<_, DateTime<Utc>>(5)?,
    })
}

fn trimmed_opt(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
