//! SQLite schema definitions and SQL query constants.

/// Name of the database file inside the data directory.
pub const DATABASE_FILE: &str = "notes.db";

/// Creates the notes table on a fresh database.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    type TEXT DEFAULT 'main',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_notes_updated_at ON notes(updated_at);
"#;

/// Upgrades databases created before notes had a type.
pub const ADD_TYPE_COLUMN: &str = "ALTER TABLE notes ADD COLUMN type TEXT DEFAULT 'main'";

// `julianday` reads both the RFC 3339 and legacy layouts, so mixed rows sort by
// instant. It only keeps milliseconds; the raw text breaks ties below that.
pub const SELECT_ALL_NOTES: &str = r#"
SELECT id, title, content, type, created_at, updated_at
FROM notes
ORDER BY julianday(updated_at) DESC, updated_at DESC, id DESC
"#;

pub const SELECT_NOTES_BY_TYPE: &str = r#"
SELECT id, title, content, type, created_at, updated_at
FROM notes
WHERE COALESCE(type, 'main') = ?1
ORDER BY julianday(updated_at) DESC, updated_at DESC, id DESC
"#;

pub const SELECT_NOTE_BY_ID: &str = r#"
SELECT id, title, content, type, created_at, updated_at
FROM notes
WHERE id = ?1
"#;

pub const INSERT_NOTE: &str = r#"
INSERT INTO notes (title, content, type, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?4)
RETURNING id, title, content, type, created_at, updated_at
"#;

pub const UPDATE_NOTE: &str = r#"
UPDATE notes
SET title = ?2, content = ?3, updated_at = ?4
WHERE id = ?1
RETURNING id, title, content, type, created_at, updated_at
"#;

pub const DELETE_NOTE: &str = "DELETE FROM notes WHERE id = ?1";
