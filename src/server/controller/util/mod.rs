//! Helpers shared by the controllers: request body binding & the not-found response.

pub mod not_found;
pub mod payload;
