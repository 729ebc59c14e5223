//! Postgres schema definitions and SQL query constants.

/// Column list with the id widened and a missing type read as `main`.
pub const COLUMNS: &str =
    "id::BIGINT AS id, title, content, COALESCE(type, 'main') AS type, created_at, updated_at";

pub const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id SERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    type TEXT DEFAULT 'main',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

/// Upgrades databases created before notes had a type.
pub const ADD_TYPE_COLUMN: &str = "ALTER TABLE notes ADD COLUMN IF NOT EXISTS type TEXT DEFAULT 'main'";

pub const CREATE_UPDATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_notes_updated_at ON notes(updated_at)";

pub const DELETE_NOTE: &str = "DELETE FROM notes WHERE id = $1";

pub fn select_all_notes() -> String {
    format!("SELECT {COLUMNS} FROM notes ORDER BY updated_at DESC, id DESC")
}

pub fn select_notes_by_type() -> String {
    format!(
        "SELECT {COLUMNS} FROM notes \
         WHERE COALESCE(type, 'main') = $1 \
         ORDER BY updated_at DESC, id DESC"
    )
}

pub fn select_note_by_id() -> String {
    format!("SELECT {COLUMNS} FROM notes WHERE id = $1")
}

pub fn insert_note() -> String {
    format!(
        "INSERT INTO notes (title, content, type, created_at, updated_at) \
         VALUES ($1, $2, $3, $4, $4) \
         RETURNING {COLUMNS}"
    )
}

pub fn update_note() -> String {
    format!(
        "UPDATE notes SET title = $2, content = $3, updated_at = $4 \
         WHERE id = $1 \
         RETURNING {COLUMNS}"
    )
}
