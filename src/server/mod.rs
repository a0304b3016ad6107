//! Server application core modules.
//!
//! This module contains the HTTP API of Bugbase: routing, request binding, services that
//! attach related rows to each response, repositories over the SeaORM entities, and the
//! startup code that connects to the database and serves the router.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
