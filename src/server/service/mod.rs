//! Service layer for business logic.
//!
//! Services read rows through the repositories, attach the related rows each endpoint
//! inlines and map everything into the API DTOs. They also decide what a missing row means
//! for an operation: reads and writes on an unknown ID return `Ok(None)` or `Ok(false)`
//! and the controllers turn that into a 404.

pub mod lookup;
pub mod note;
pub mod relation;
pub mod ticket;
pub mod ticket_change_history;
pub mod user;
