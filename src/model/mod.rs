//! Request and response models shared by the HTTP API.
//!
//! Every DTO serializes with camelCase field names. Flat `*Dto` types carry a
//! row's own columns; `*DetailDto` types add the related rows inlined by the
//! list and get endpoints.

pub mod api;
pub mod lookup;
pub mod note;
pub mod ticket;
pub mod ticket_change_history;
pub mod user;
