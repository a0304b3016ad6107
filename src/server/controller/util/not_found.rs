use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::model::api::ErrorDto;

/// Builds the 404 response for an ID that doesn't match any row
///
/// # Arguments
/// - `entity`: Name of the entity, used in the message e.g. `Ticket 3 not found`
/// - `id`: The ID that was requested
pub fn not_found(entity: &str, id: i64) -> Response {
    tracing::debug!("{} ID {} not found", entity, id);

    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: format!("{} {} not found", entity, id),
        }),
    )
        .into_response()
}
