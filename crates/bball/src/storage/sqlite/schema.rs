//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// Creates the entries table and its listing index.
///
/// Timestamps are filled in by SQLite with millisecond precision, in a form
/// `chrono` parses as RFC 3339.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL CHECK (length(name) <= 255),
    description TEXT NOT NULL DEFAULT '',
    value INTEGER NOT NULL DEFAULT 0 CHECK (value >= 0),
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);

CREATE INDEX IF NOT EXISTS idx_entries_created_at ON entries(created_at);
"#;

/// Inserts an entry. A NULL id lets SQLite assign the next one.
pub const INSERT_ENTRY: &str = r#"
INSERT INTO entries (id, name, description, value)
VALUES (?1, ?2, ?3, ?4)
RETURNING id, name, description, value, created_at, updated_at
"#;

pub const SELECT_ENTRY_BY_ID: &str = r#"
SELECT id, name, description, value, created_at, updated_at
FROM entries
WHERE id = ?1
"#;

pub const SELECT_ENTRIES: &str = r#"
SELECT id, name, description, value, created_at, updated_at
FROM entries
ORDER BY created_at DESC, id DESC
LIMIT ?1
"#;

/// Writes the supplied columns, keeping the current value for NULL ones.
pub const UPDATE_ENTRY: &str = r#"
UPDATE entries
SET name = COALESCE(?2, name),
    description = COALESCE(?3, description),
    value = COALESCE(?4, value),
    updated_at = strftime('%Y-%m-%dT%H:%M:%fZ', 'now')
WHERE id = ?1
RETURNING id, name, description, value, created_at, updated_at
"#;

pub const DELETE_ENTRY: &str = r#"
DELETE FROM entries
WHERE id = ?1
"#;
