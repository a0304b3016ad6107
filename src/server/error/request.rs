use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors caused by a request body that can't be bound to an endpoint's payload.
#[derive(Error, Debug)]
pub enum RequestError {
    /// The body is JSON but doesn't have the shape of the payload, e.g. a string where an id
    /// is expected. The submitted JSON is echoed back to the client.
    #[error("Request payload failed validation: {reason}")]
    InvalidPayload {
        payload: serde_json::Value,
        reason: String,
    },
    /// The body could not be read as JSON at all.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

impl IntoResponse for RequestError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidPayload { payload, reason } => {
                tracing::debug!(reason = %reason, "Rejected request payload");

                (StatusCode::BAD_REQUEST, Json(payload)).into_response()
            }
            Self::MalformedBody(reason) => {
                tracing::debug!(reason = %reason, "Rejected malformed request body");

                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorDto {
                        error: format!("Malformed request body: {}", reason),
                    }),
                )
                    .into_response()
            }
        }
    }
}
