//! Note CRUD handlers.
//!
//! These handlers use the repository trait object for database access.

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use noteboard_core::export::html_preview;
use noteboard_core::note::{CreateNoteRequest, Note, NoteTypeFilter, UpdateNoteRequest};

use crate::{
    handlers::{error::RequestError, AppError},
    state::AppState,
};

/// Query parameters for listing and exporting notes.
#[derive(Debug, Default, Deserialize)]
pub struct NoteTypeQuery {
    /// Note type to include; `all` for every type (default: "main")
    #[serde(rename = "type")]
    pub note_type: Option<String>,
}

impl NoteTypeQuery {
    pub fn filter(&self) -> NoteTypeFilter {
        NoteTypeFilter::from_query(self.note_type.as_deref())
    }
}

/// Parses a note id from the path. Non-numeric ids are a client error.
pub(crate) fn parse_note_id(raw: &str) -> Result<i64, AppError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::from(RequestError::InvalidId(raw.to_string())))
}

/// Unwraps a JSON body, turning axum's rejection into a 400 JSON error.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::from(RequestError::BodyTooLarge)
        } else {
            AppError::from(RequestError::InvalidBody(rejection.body_text()))
        }
    })
}

/// List notes (GET /api/notes).
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<NoteTypeQuery>,
) -> Result<Json<Vec<Note>>, AppError> {
    let filter = query.filter();
    let notes = state
        .notes
        .list_notes(filter.as_type())
        .await
        .context("Failed to fetch notes")?;

    Ok(Json(notes))
}

/// Create a note (POST /api/notes).
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let new_note = json_body(payload)?.validate()?;

    let note = state
        .notes
        .create_note(&new_note)
        .await
        .context("Failed to create note")?;

    tracing::info!(
        note_id = note.id,
        note_type = %note.note_type,
        preview = %html_preview(&note.content, 40),
        "Created note"
    );

    Ok((StatusCode::CREATED, Json(note)))
}

/// Get a single note by ID (GET /api/notes/{id}).
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Note>, AppError> {
    let id = parse_note_id(&id)?;

    state
        .notes
        .get_note(id)
        .await
        .context("Failed to fetch note")?
        .map(Json)
        .ok_or_else(|| AppError::note_not_found(id))
}

/// Update a note's title and content (PUT /api/notes/{id}).
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateNoteRequest>, JsonRejection>,
) -> Result<Json<Note>, AppError> {
    let id = parse_note_id(&id)?;
    let (title, content) = json_body(payload)?.validate()?;

    let note = state
        .notes
        .update_note(id, &title, &content)
        .await
        .context("Failed to update note")?
        .ok_or_else(|| AppError::note_not_found(id))?;

    tracing::info!(note_id = id, "Updated note");

    Ok(Json(note))
}

/// Delete a note (DELETE /api/notes/{id}).
///
/// Deleting an id that does not exist also succeeds.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_note_id(&id)?;

    state
        .notes
        .delete_note(id)
        .await
        .context("Failed to delete note")?;

    tracing::info!(note_id = id, "Deleted note");

    Ok(Json(json!({ "success": true })))
}
