//! Postgres row conversion.

use chrono::NaiveDateTime;
use sqlx::FromRow;

use noteboard_core::note::Note;

/// A `notes` row as Postgres returns it.
///
/// `TIMESTAMP` columns carry no zone; they are written and read as UTC.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[sqlx(rename = "type")]
    pub note_type: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Note {
            id: row.id,
            title: row.title,
            content: row.content,
            note_type: row.note_type,
            created_at: row.created_at.and_utc(),
            updated_at: row.updated_at.and_utc(),
        }
    }
}
