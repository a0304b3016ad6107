use sea_orm_migration::prelude::*;

use crate::{
    m20251101_000001_role::Role, m20251101_000002_state::State,
    m20251101_000003_ticket_change_type::TicketChangeType,
};

pub static DEFAULT_ROLES: [&str; 3] = ["Developer", "Tester", "Manager"];
pub static DEFAULT_STATES: [&str; 5] = ["New", "Open", "In Progress", "Resolved", "Closed"];
pub static DEFAULT_TICKET_CHANGE_TYPES: [&str; 5] = [
    "Created",
    "Updated",
    "State Changed",
    "Reassigned",
    "Note Added",
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        seed(manager, Role::Table, Role::RoleName, &DEFAULT_ROLES).await?;
        seed(manager, State::Table, State::StateName, &DEFAULT_STATES).await?;
        seed(
            manager,
            TicketChangeType::Table,
            TicketChangeType::TicketChangeTypeName,
            &DEFAULT_TICKET_CHANGE_TYPES,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        unseed(
            manager,
            TicketChangeType::Table,
            TicketChangeType::TicketChangeTypeName,
            &DEFAULT_TICKET_CHANGE_TYPES,
        )
        .await?;
        unseed(manager, State::Table, State::StateName, &DEFAULT_STATES).await?;
        unseed(manager, Role::Table, Role::RoleName, &DEFAULT_ROLES).await?;

        Ok(())
    }
}

/// Inserts one row per name into a single-column lookup table.
async fn seed<T, C>(manager: &SchemaManager<'_>, table: T, column: C, names: &[&str]) -> Result<(), DbErr>
where
    T: IntoIden,
    C: IntoIden,
{
    let mut insert = Query::insert();
    insert.into_table(table).columns([column]);

    for name in names {
        insert
            .values([(*name).into()])
            .map_err(|e| DbErr::Migration(e.to_string()))?;
    }

    manager.exec_stmt(insert).await
}

async fn unseed<T, C>(manager: &SchemaManager<'_>, table: T, column: C, names: &[&str]) -> Result<(), DbErr>
where
    T: IntoIden,
    C: IntoIden,
{
    let delete = Query::delete()
        .from_table(table)
        .and_where(Expr::col(column).is_in(names.iter().copied()))
        .to_owned();

    manager.exec_stmt(delete).await
}
