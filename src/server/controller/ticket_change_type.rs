use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, lookup::TicketChangeTypeDto},
    server::{
        controller::util::not_found::not_found, error::Error, model::app::AppState,
        service::lookup::TicketChangeTypeService,
    },
};

pub static TICKET_CHANGE_TYPE_TAG: &str = "TicketChangeTypes";

/// Get all kinds of ticket change recorded in the change history
#[utoipa::path(
    get,
    path = "/api/TicketChangeTypes",
    tag = TICKET_CHANGE_TYPE_TAG,
    responses(
        (status = 200, description = "Success when retrieving ticket change types", body = Vec<TicketChangeTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_change_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let change_types = TicketChangeTypeService::new(&state.db)
        .get_ticket_change_types()
        .await?;

    Ok((StatusCode::OK, Json(change_types)))
}

#[utoipa::path(
    get,
    path = "/api/TicketChangeTypes/{id}",
    tag = TICKET_CHANGE_TYPE_TAG,
    params(("id" = i64, Path, description = "Ticket change type ID")),
    responses(
        (status = 200, description = "Success when retrieving ticket change type", body = TicketChangeTypeDto),
        (status = 404, description = "Ticket change type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket_change_type(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    match TicketChangeTypeService::new(&state.db)
        .get_ticket_change_type(id)
        .await?
    {
        Some(change_type) => Ok((StatusCode::OK, Json(change_type)).into_response()),
        None => Ok(not_found("TicketChangeType", id)),
    }
}
