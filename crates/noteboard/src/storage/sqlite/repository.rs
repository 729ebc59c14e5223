//! SQLite repository implementation.
//!
//! Implements [`NoteRepository`] on an embedded database file.

use std::path::Path;

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;

use noteboard_core::note::{NewNote, Note};
use noteboard_core::storage::{NoteRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_note};
use super::error::{is_already_applied, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based note repository.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens `notes.db` inside `data_dir`, creating the directory and the
    /// database file when missing.
    pub async fn open(data_dir: &Path) -> Result<Self> {
        tokio::fs::create_dir_all(data_dir).await.map_err(|e| {
            RepositoryError::ConnectionFailed(format!(
                "Cannot create data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        let path = data_dir.join(schema::DATABASE_FILE);
        let conn = Connection::open(&path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        tracing::debug!(path = %path.display(), "Opened SQLite database");
        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates the table if needed and applies the `type` column upgrade.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;

            if let Err(e) = conn.execute(schema::ADD_TYPE_COLUMN, []) {
                if !is_already_applied(&e) {
                    tracing::warn!(error = %e, "Failed to add type column to notes");
                }
            }
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::ConnectionFailed(format!("Schema initialization failed: {e}")))
    }
}

#[async_trait]
impl NoteRepository for SqliteRepository {
    async fn list_notes(&self, note_type: Option<&str>) -> Result<Vec<Note>> {
        let note_type = note_type.map(str::to_string);

        self.conn
            .call(move |conn| {
                let notes = match note_type {
                    Some(note_type) => {
                        let mut stmt = conn
                            .prepare(schema::SELECT_NOTES_BY_TYPE)
                            .map_err(wrap_err)?;
                        let rows = stmt.query_map([&note_type], row_to_note).map_err(wrap_err)?;
                        rows.collect::<rusqlite::Result<Vec<_>>>()
                    }
                    None => {
                        let mut stmt = conn.prepare(schema::SELECT_ALL_NOTES).map_err(wrap_err)?;
                        let rows = stmt.query_map([], row_to_note).map_err(wrap_err)?;
                        rows.collect::<rusqlite::Result<Vec<_>>>()
                    }
                };
                notes.map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn get_note(&self, id: i64) -> Result<Option<Note>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_NOTE_BY_ID).map_err(wrap_err)?;
                match stmt.query_row([id], row_to_note) {
                    Ok(note) => Ok(Some(note)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn create_note(&self, note: &NewNote) -> Result<Note> {
        let title = note.title.clone();
        let content = note.content.clone();
        let note_type = note.note_type.clone();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                conn.query_row(
                    schema::INSERT_NOTE,
                    rusqlite::params![title, content, note_type, now],
                    row_to_note,
                )
                .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn update_note(&self, id: i64, title: &str, content: &str) -> Result<Option<Note>> {
        let title = title.to_string();
        let content = content.to_string();
        let now = format_datetime(&Utc::now());

        self.conn
            .call(move |conn| {
                match conn.query_row(
                    schema::UPDATE_NOTE,
                    rusqlite::params![id, title, content, now],
                    row_to_note,
                ) {
                    Ok(note) => Ok(Some(note)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    async fn delete_note(&self, id: i64) -> Result<()> {
        self.conn
            .call(move |conn| {
                conn.execute(schema::DELETE_NOTE, [id]).map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
