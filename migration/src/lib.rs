pub use sea_orm_migration::prelude::*;

mod m20251101_000001_role;
mod m20251101_000002_state;
mod m20251101_000003_ticket_change_type;
mod m20251101_000004_user;
mod m20251101_000005_ticket;
mod m20251101_000006_note;
mod m20251101_000007_ticket_change_history;
mod m20251101_000008_seed_lookup_values;

pub use m20251101_000008_seed_lookup_values::{
    DEFAULT_ROLES, DEFAULT_STATES, DEFAULT_TICKET_CHANGE_TYPES,
};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_role::Migration),
            Box::new(m20251101_000002_state::Migration),
            Box::new(m20251101_000003_ticket_change_type::Migration),
            Box::new(m20251101_000004_user::Migration),
            Box::new(m20251101_000005_ticket::Migration),
            Box::new(m20251101_000006_note::Migration),
            Box::new(m20251101_000007_ticket_change_history::Migration),
            Box::new(m20251101_000008_seed_lookup_values::Migration),
        ]
    }
}
