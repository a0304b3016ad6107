use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, ticket_change_history::TicketChangeHistoryDetailDto},
    server::{
        controller::util::not_found::not_found, error::Error, model::app::AppState,
        service::ticket_change_history::TicketChangeHistoryService,
    },
};

pub static TICKET_CHANGE_HISTORY_TAG: &str = "TicketChangeHistories";

/// Get the change history of all tickets
#[utoipa::path(
    get,
    path = "/api/TicketChangeHistories",
    tag = TICKET_CHANGE_HISTORY_TAG,
    responses(
        (status = 200, description = "Success when retrieving change history", body = Vec<TicketChangeHistoryDetailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_change_histories(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let histories = TicketChangeHistoryService::new(&state.db)
        .get_ticket_change_histories()
        .await?;

    Ok((StatusCode::OK, Json(histories)))
}

#[utoipa::path(
    get,
    path = "/api/TicketChangeHistories/{id}",
    tag = TICKET_CHANGE_HISTORY_TAG,
    params(("id" = i64, Path, description = "Ticket change history ID")),
    responses(
        (status = 200, description = "Success when retrieving change history entry", body = TicketChangeHistoryDetailDto),
        (status = 404, description = "Change history entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_change_history(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    match TicketChangeHistoryService::new(&state.db)
        .get_ticket_change_history(id)
        .await?
    {
        Some(history) => Ok((StatusCode::OK, Json(history)).into_response()),
        None => Ok(not_found("TicketChangeHistory", id)),
    }
}
