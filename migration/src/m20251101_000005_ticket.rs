use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_state::State, m20251101_000004_user::User};

static IDX_TICKET_STATE_ID: &str = "idx-ticket-state_id";
static IDX_TICKET_ASSIGNED_TO_ID: &str = "idx-ticket-assigned_to_id";
static FK_TICKET_STATE_ID: &str = "fk-ticket-state_id";
static FK_TICKET_QA_OWNER_ID: &str = "fk-ticket-qa_owner_id";
static FK_TICKET_DEV_OWNER_ID: &str = "fk-ticket-dev_owner_id";
static FK_TICKET_ASSIGNED_TO_ID: &str = "fk-ticket-assigned_to_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Ticket::Id))
                    .col(string_null(Ticket::Title))
                    .col(text_null(Ticket::Description))
                    .col(string_null(Ticket::Product))
                    .col(string_null(Ticket::Feature))
                    .col(string_null(Ticket::Iteration))
                    .col(big_integer_null(Ticket::StateId))
                    .col(big_integer_null(Ticket::QaOwnerId))
                    .col(big_integer_null(Ticket::DevOwnerId))
                    .col(big_integer_null(Ticket::AssignedToId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_STATE_ID)
                            .from(Ticket::Table, Ticket::StateId)
                            .to(State::Table, State::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_QA_OWNER_ID)
                            .from(Ticket::Table, Ticket::QaOwnerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_DEV_OWNER_ID)
                            .from(Ticket::Table, Ticket::DevOwnerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_ASSIGNED_TO_ID)
                            .from(Ticket::Table, Ticket::AssignedToId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_STATE_ID)
                    .table(Ticket::Table)
                    .col(Ticket::StateId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_ASSIGNED_TO_ID)
                    .table(Ticket::Table)
                    .col(Ticket::AssignedToId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_ASSIGNED_TO_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_STATE_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    Title,
    Description,
    Product,
    Feature,
    Iteration,
    StateId,
    QaOwnerId,
    DevOwnerId,
    AssignedToId,
}
