//! Notion sync handler.

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use noteboard_core::note::NoteTypeFilter;
use noteboard_core::sync::{sync_notes, SyncTarget};

use crate::{
    handlers::{error::RequestError, notes::json_body, AppError},
    state::AppState,
};

/// Body of `POST /api/notion/sync`.
///
/// Without `noteId` every note of `type` (default "main", `all` for every
/// type) is pushed.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncRequest {
    #[serde(alias = "notionToken")]
    pub token: Option<String>,
    #[serde(alias = "notionDatabaseId")]
    pub database_id: Option<String>,
    pub note_id: Option<i64>,
    #[serde(rename = "type")]
    pub note_type: Option<String>,
}

impl SyncRequest {
    fn target(&self) -> Option<SyncTarget> {
        let token = self.token.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        let database_id = self
            .database_id
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())?;
        Some(SyncTarget::new(database_id, token))
    }
}

/// Push one note or a batch of notes to Notion (POST /api/notion/sync).
pub async fn sync_to_notion(
    State(state): State<AppState>,
    payload: Result<Json<SyncRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let request = json_body(payload)?;
    let target = request.target().ok_or(RequestError::MissingSyncCredentials)?;

    if let Some(id) = request.note_id {
        let note = state
            .notes
            .get_note(id)
            .await
            .context("Failed to fetch note")?
            .ok_or_else(|| AppError::note_not_found(id))?;

        let page_id = state
            .publisher
            .publish(&note, &target)
            .await
            .context("Failed to sync to Notion")?;

        tracing::info!(note_id = id, page_id = %page_id, "Synced note to Notion");

        return Ok(Json(json!({
            "success": true,
            "notionPageId": page_id,
            "message": format!("Note \"{}\" synced to Notion successfully", note.title),
        })));
    }

    let filter = NoteTypeFilter::from_query(request.note_type.as_deref());
    let notes = state
        .notes
        .list_notes(filter.as_type())
        .await
        .context("Failed to fetch notes")?;

    if notes.is_empty() {
        return Err(RequestError::NothingToSync.into());
    }

    let summary = sync_notes(state.publisher.as_ref(), &notes, &target).await;

    tracing::info!(
        synced = summary.synced,
        failed = summary.failed,
        "Batch sync to Notion finished"
    );

    Ok(Json(json!({
        "success": true,
        "synced": summary.synced,
        "failed": summary.failed,
        "errors": summary.errors,
        "message": summary.message(),
    })))
}
