//! Note CRUD handlers.
//!
//! Each handler is a single pass over the store: list reads the collection,
//! create and delete go through the store's read-modify-write cycle.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use notekeeper_core::defaults::{MSG_DELETED, MSG_DELETE_FAILED, MSG_READ_FAILED, MSG_SAVE_FAILED};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::extract::NoteInput;
use crate::AppState;

/// `GET /api/notes`
pub async fn list_notes(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let notes = state
        .store
        .list()
        .await
        .map_err(ApiError::storage(MSG_READ_FAILED))?;

    debug!(op = "list", note_count = notes.len(), "Listed notes");
    Ok(Json(notes))
}

/// `POST /api/notes`
pub async fn create_note(
    State(state): State<AppState>,
    input: NoteInput,
) -> Result<impl IntoResponse, ApiError> {
    // Validate before touching the store so a bad request never mutates it.
    let new = input.validate().map_err(|_| ApiError::missing_fields())?;

    let note = state
        .store
        .append(new)
        .await
        .map_err(ApiError::storage(MSG_SAVE_FAILED))?;

    info!(op = "create", note_id = %note.id, "Note created");
    Ok(Json(note))
}

/// `DELETE /api/notes/:id`
///
/// Unknown ids are a successful no-op.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let removed = state
        .store
        .remove_by_id(&id)
        .await
        .map_err(ApiError::storage(MSG_DELETE_FAILED))?;

    info!(op = "delete", note_id = %id, removed, "Note deleted");
    Ok(Json(serde_json::json!({
        "message": MSG_DELETED,
    })))
}
