use async_trait::async_trait;

use crate::note::{NewNote, Note};

use super::Result;

/// Durable CRUD over the `notes` table.
///
/// Every backend honors the same contract so callers never learn which one
/// is active.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Lists notes ordered by `updated_at` descending.
    ///
    /// `None` returns notes of every type.
    async fn list_notes(&self, note_type: Option<&str>) -> Result<Vec<Note>>;

    /// Gets a note by its ID. A missing note is `Ok(None)`, not an error.
    async fn get_note(&self, id: i64) -> Result<Option<Note>>;

    /// Inserts a note and returns it with its generated id and timestamps.
    async fn create_note(&self, note: &NewNote) -> Result<Note>;

    /// Replaces a note's title and content, refreshing `updated_at`.
    ///
    /// Returns `Ok(None)` if no note has this id.
    async fn update_note(&self, id: i64, title: &str, content: &str) -> Result<Option<Note>>;

    /// Deletes a note. Deleting a missing id succeeds.
    async fn delete_note(&self, id: i64) -> Result<()>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
