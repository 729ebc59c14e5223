//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and notes.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use rusqlite::Row;

use noteboard_core::note::{Note, DEFAULT_NOTE_TYPE};

/// Timestamp layout written by older databases (`CURRENT_TIMESTAMP`).
const LEGACY_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Convert a SQLite row to a Note.
///
/// Expected columns: id, title, content, type, created_at, updated_at
pub fn row_to_note(row: &Row) -> rusqlite::Result<Note> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let content: String = row.get(2)?;
    let note_type: Option<String> = row.get(3)?;
    let created_at: String = row.get(4)?;
    let updated_at: String = row.get(5)?;

    Ok(Note {
        id,
        title,
        content,
        note_type: note_type.unwrap_or_else(|| DEFAULT_NOTE_TYPE.to_string()),
        created_at: parse_datetime(4, &created_at)?,
        updated_at: parse_datetime(5, &updated_at)?,
    })
}

/// Format a timestamp for storage.
///
/// Always microsecond precision with a `Z` suffix, so text order matches
/// time order in `ORDER BY updated_at`.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a stored timestamp, accepting RFC 3339 and the legacy
/// `YYYY-MM-DD HH:MM:SS` layout (read as UTC).
fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(s, LEGACY_DATETIME_FORMAT).map(|dt| dt.and_utc())
        })
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                column,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })
}
