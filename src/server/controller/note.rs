use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        note::{NoteDetailDto, NotePayload},
    },
    server::{
        controller::util::{not_found::not_found, payload::Payload},
        error::Error,
        model::app::AppState,
        service::note::NoteService,
    },
};

pub static NOTE_TAG: &str = "Notes";

/// Get all notes with their ticket & owner
#[utoipa::path(
    get,
    path = "/api/Notes",
    tag = NOTE_TAG,
    responses(
        (status = 200, description = "Success when retrieving notes", body = Vec<NoteDetailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notes(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let notes = NoteService::new(&state.db).get_notes().await?;

    Ok((StatusCode::OK, Json(notes)))
}

#[utoipa::path(
    get,
    path = "/api/Notes/{id}",
    tag = NOTE_TAG,
    params(("id" = i64, Path, description = "Note ID")),
    responses(
        (status = 200, description = "Success when retrieving note", body = NoteDetailDto),
        (status = 404, description = "Note not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    match NoteService::new(&state.db).get_note(id).await? {
        Some(note) => Ok((StatusCode::OK, Json(note)).into_response()),
        None => Ok(not_found("Note", id)),
    }
}

/// Add a note to a ticket
#[utoipa::path(
    post,
    path = "/api/Notes",
    tag = NOTE_TAG,
    request_body = NotePayload,
    responses(
        (status = 200, description = "Success when creating note", body = NoteDetailDto),
        (status = 400, description = "Invalid payload, echoed back", body = NotePayload),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_note(
    State(state): State<AppState>,
    Payload(payload): Payload<NotePayload>,
) -> Result<impl IntoResponse, Error> {
    let note = NoteService::new(&state.db).create_note(&payload).await?;

    Ok((StatusCode::OK, Json(note)))
}
