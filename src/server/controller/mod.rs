//! HTTP controller endpoints for the Bugbase web API.
//!
//! One module per resource under `/api/{Resource}`. Controllers bind the request, call
//! the matching service and turn its result into a response: `Ok(None)` / `Ok(false)` from a
//! service becomes a 404 and errors are converted by [`crate::server::error::Error`]'s
//! `IntoResponse` implementation. Every handler is documented for OpenAPI with utoipa.

pub mod note;
pub mod role;
pub mod state;
pub mod ticket;
pub mod ticket_change_history;
pub mod ticket_change_type;
pub mod user;
pub mod util;
