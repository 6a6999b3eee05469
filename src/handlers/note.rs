use super::{AppJson, AppQuery};
use crate::error::AppError;
use crate::models::{
    CreateNoteRequest, ListNotesQuery, Note, SearchNotesQuery, UpdateNoteRequest,
};
use crate::services::NoteService;
use axum::{
    extract::{OriginalUri, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use std::sync::Arc;

/// `GET /notes?searchTerm=`
pub async fn list_notes(
    State(note_service): State<Arc<NoteService>>,
    AppQuery(query): AppQuery<ListNotesQuery>,
) -> Result<Json<Vec<Note>>, AppError> {
    let notes = note_service.list_notes(query.into()).await?;
    Ok(Json(notes))
}

/// `GET /notes/:id`. Responds `200 null` when the note does not exist.
pub async fn get_note(
    State(note_service): State<Arc<NoteService>>,
    Path(note_id): Path<String>,
) -> Result<Json<Option<Note>>, AppError> {
    let note = note_service.get_note(&note_id).await?;
    Ok(Json(note))
}

/// `POST /notes`
pub async fn create_note(
    State(note_service): State<Arc<NoteService>>,
    OriginalUri(uri): OriginalUri,
    AppJson(request): AppJson<CreateNoteRequest>,
) -> Result<impl IntoResponse, AppError> {
    let note = note_service.create_note(request).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), note.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(note),
    ))
}

/// `PUT /notes/:id`
pub async fn update_note(
    State(note_service): State<Arc<NoteService>>,
    Path(note_id): Path<String>,
    AppJson(request): AppJson<UpdateNoteRequest>,
) -> Result<Json<Option<Note>>, AppError> {
    let note = note_service.update_note(&note_id, request).await?;
    Ok(Json(note))
}

/// `DELETE /notes/:id`. Always 204 once the storage call succeeds.
pub async fn delete_note(
    State(note_service): State<Arc<NoteService>>,
    Path(note_id): Path<String>,
) -> Result<StatusCode, AppError> {
    note_service.delete_note(&note_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /notes/search?q=`
pub async fn search_notes(
    State(note_service): State<Arc<NoteService>>,
    AppQuery(query): AppQuery<SearchNotesQuery>,
) -> Result<Json<Vec<Note>>, AppError> {
    let notes = note_service.search_notes(query).await?;
    Ok(Json(notes))
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
