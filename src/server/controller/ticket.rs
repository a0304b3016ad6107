use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        ticket::{TicketDetailDto, TicketPayload},
    },
    server::{
        controller::util::{not_found::not_found, payload::Payload},
        error::Error,
        model::app::AppState,
        service::ticket::TicketService,
    },
};

pub static TICKET_TAG: &str = "Tickets";

/// Get all tickets with their users, state, notes & change history
#[utoipa::path(
    get,
    path = "/api/Tickets",
    tag = TICKET_TAG,
    responses(
        (status = 200, description = "Success when retrieving tickets", body = Vec<TicketDetailDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let tickets = TicketService::new(&state.db).get_tickets().await?;

    Ok((StatusCode::OK, Json(tickets)))
}

#[utoipa::path(
    get,
    path = "/api/Tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i64, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Success when retrieving ticket", body = TicketDetailDto),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    match TicketService::new(&state.db).get_ticket(id).await? {
        Some(ticket) => Ok((StatusCode::OK, Json(ticket)).into_response()),
        None => Ok(not_found("Ticket", id)),
    }
}

/// Create a ticket
///
/// Users & state may be referenced as `qaOwnerId` or `qaOwner` and so on. References to rows
/// that don't exist fail at insert with a 500.
#[utoipa::path(
    post,
    path = "/api/Tickets",
    tag = TICKET_TAG,
    request_body = TicketPayload,
    responses(
        (status = 200, description = "Success when creating ticket", body = TicketDetailDto),
        (status = 400, description = "Invalid payload, echoed back", body = TicketPayload),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    Payload(payload): Payload<TicketPayload>,
) -> Result<impl IntoResponse, Error> {
    let ticket = TicketService::new(&state.db).create_ticket(&payload).await?;

    Ok((StatusCode::OK, Json(ticket)))
}

/// Replace a ticket's fields, fields missing from the payload are cleared
#[utoipa::path(
    patch,
    path = "/api/Tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i64, Path, description = "Ticket ID")),
    request_body = TicketPayload,
    responses(
        (status = 200, description = "Success when updating ticket", body = TicketDetailDto),
        (status = 400, description = "Invalid payload, echoed back", body = TicketPayload),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Payload(payload): Payload<TicketPayload>,
) -> Result<impl IntoResponse, Error> {
    match TicketService::new(&state.db)
        .update_ticket(id, &payload)
        .await?
    {
        Some(ticket) => Ok((StatusCode::OK, Json(ticket)).into_response()),
        None => Ok(not_found("Ticket", id)),
    }
}

/// Delete a ticket
///
/// # Responses
/// - 200 (OK): Ticket deleted, empty body
/// - 404 (Not Found): No ticket with the ID, nothing is written
/// - 500 (Internal Server Error): Ticket still has notes or change history
#[utoipa::path(
    delete,
    path = "/api/Tickets/{id}",
    tag = TICKET_TAG,
    params(("id" = i64, Path, description = "Ticket ID")),
    responses(
        (status = 200, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, Error> {
    if TicketService::new(&state.db).delete_ticket(id).await? {
        Ok(StatusCode::OK.into_response())
    } else {
        Ok(not_found("Ticket", id))
    }
}
