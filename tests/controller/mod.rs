//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with their extractors to verify status codes for found,
//! missing and failing cases.

mod lookup;
mod note;
mod ticket;
mod ticket_change_history;
mod user;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use bugbase::server::controller::util::payload::Payload;
use bugbase_test_utils::prelude::*;
