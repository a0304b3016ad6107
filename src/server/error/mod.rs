//! Error types for the Bugbase server.
//!
//! All errors implement `IntoResponse` for Axum HTTP responses and use `thiserror` for
//! `Display` and `Error` implementations. Request errors map to 400 Bad Request; every
//! other error is logged and answered with a generic 500 Internal Server Error.

pub mod config;
pub mod request;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::request::RequestError,
};

/// Main error type for the Bugbase server.
///
/// Aggregates the domain-specific error types and external library errors so handlers,
/// services and startup code can all propagate with `?`.
///
/// Not-found is not an error: services report a missing row as `Ok(None)` and the
/// controllers turn that into a 404.
#[derive(Error, Debug)]
pub enum Error {
    /// Request body could not be bound to the endpoint's payload.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Internal error indicating a bug or an unrecoverable inconsistency, such as an update
    /// that affected no rows even though the row exists.
    #[error("Internal error: {0}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For request errors, echoing the submitted payload when it was JSON
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// database details such as constraint names.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
