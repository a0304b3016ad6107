pub mod lookup;
pub mod ticket;
pub mod user;
