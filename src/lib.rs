//! Bugbase: a small bug tracking REST API.
//!
//! Users, tickets and notes are managed through JSON endpoints under `/api`, backed by
//! SeaORM on SQLite or PostgreSQL. See [`server::router::routes`] for the endpoint list.

pub mod model;
pub mod server;
