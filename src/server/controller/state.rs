use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, lookup::StateDto},
    server::{
        controller::util::not_found::not_found, error::Error, model::app::AppState,
        service::lookup::StateService,
    },
};

pub static STATE_TAG: &str = "States";

/// Get all ticket states
#[utoipa::path(
    get,
    path = "/api/States",
    tag = STATE_TAG,
    responses(
        (status = 200, description = "Success when retrieving states", body = Vec<StateDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_states(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let states = StateService::new(&state.db).get_states().await?;

    Ok((StatusCode::OK, Json(states)))
}

#[utoipa::path(
    get,
    path = "/api/States/{id}",
    tag = STATE_TAG,
    params(("id" = i64, Path, description = "State ID")),
    responses(
        (status = 200, description = "Success when retrieving state", body = StateDto),
        (status = 404, description = "State not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_state(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    match StateService::new(&state.db).get_state(id).await? {
        Some(ticket_state) => Ok((StatusCode::OK, Json(ticket_state)).into_response()),
        None => Ok(not_found("State", id)),
    }
}
