pub mod lookup;
pub mod note;
pub mod ticket;
pub mod ticket_change_history;
pub mod user;
