//! Row conversion functions.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use bball_core::entry::RecordEntry;

/// Converts a row selected in `schema` column order into an entry.
pub fn row_to_entry(row: &Row) -> rusqlite::Result<RecordEntry> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let description: String = row.get(2)?;
    let value: i64 = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(RecordEntry {
        id: Some(id),
        name,
        description: Some(description),
        value,
        created_at: Some(parse_datetime(4, &created_at)?),
        updated_at: Some(parse_datetime(5, &updated_at)?),
    })
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
        })
}
