//! Database model type aliases.
//!
//! This module provides type aliases for the SeaORM entity models used throughout the
//! server, so that repositories and services don't need to spell out paths into the
//! generated `entity` crate.

/// Type alias for the role lookup model.
///
/// # Fields (from `entity::role::Model`)
/// - `id` - Primary key
/// - `role_name` - Unique role name, e.g. "Tester"
pub type RoleModel = entity::role::Model;

/// Type alias for the ticket state lookup model.
pub type StateModel = entity::state::Model;

/// Type alias for the ticket change type lookup model.
pub type TicketChangeTypeModel = entity::ticket_change_type::Model;

/// Type alias for the user account model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `user_name` - Unique login name
/// - `display_name`, `email`, `phone` - Contact details
/// - `role_id` - Foreign key to the user's role (nullable)
pub type UserModel = entity::user::Model;

/// Type alias for the ticket model.
///
/// # Fields (from `entity::ticket::Model`)
/// - `id` - Primary key
/// - `title`, `description`, `product`, `feature`, `iteration` - Free-text ticket fields
/// - `state_id` - Foreign key to the ticket's state (nullable)
/// - `qa_owner_id`, `dev_owner_id`, `assigned_to_id` - Foreign keys to users (nullable)
pub type TicketModel = entity::ticket::Model;

/// Type alias for the note model.
pub type NoteModel = entity::note::Model;

/// Type alias for the ticket change history model.
///
/// A history row snapshots the ticket fields at the time of the change, so it carries the
/// same columns as [`TicketModel`] plus the change type, timestamp and an optional note text.
pub type TicketChangeHistoryModel = entity::ticket_change_history::Model;
