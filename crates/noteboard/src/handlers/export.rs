//! Markdown download handlers.

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::Utc;

use noteboard_core::export::{
    export_file_name, export_markdown_document, note_file_name, note_to_markdown,
};

use crate::{
    handlers::{
        error::RequestError,
        notes::{parse_note_id, NoteTypeQuery},
        AppError,
    },
    state::AppState,
};

const MARKDOWN_CONTENT_TYPE: &str = "text/markdown; charset=utf-8";

fn markdown_attachment(file_name: &str, body: String) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, MARKDOWN_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        body,
    )
}

/// Export notes as one Markdown document (GET /api/notes/export).
pub async fn export_notes(
    State(state): State<AppState>,
    Query(query): Query<NoteTypeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let filter = query.filter();
    let notes = state
        .notes
        .list_notes(filter.as_type())
        .await
        .context("Failed to export notes")?;

    if notes.is_empty() {
        return Err(RequestError::NothingToExport.into());
    }

    let now = Utc::now();
    let document = export_markdown_document(&notes, now);

    tracing::info!(count = notes.len(), "Exported notes as Markdown");

    Ok(markdown_attachment(&export_file_name(now), document))
}

/// Download a single note as Markdown (GET /api/notes/{id}/markdown).
pub async fn note_markdown(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_note_id(&id)?;

    let note = state
        .notes
        .get_note(id)
        .await
        .context("Failed to fetch note")?
        .ok_or_else(|| AppError::note_not_found(id))?;

    Ok(markdown_attachment(&note_file_name(&note), note_to_markdown(&note)))
}
