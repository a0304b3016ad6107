use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_state::State, m20251101_000003_ticket_change_type::TicketChangeType,
    m20251101_000004_user::User, m20251101_000005_ticket::Ticket,
};

static IDX_TICKET_CHANGE_HISTORY_TICKET_ID: &str = "idx-ticket_change_history-ticket_id";
static FK_TICKET_CHANGE_HISTORY_TICKET_CHANGE_TYPE_ID: &str =
    "fk-ticket_change_history-ticket_change_type_id";
static FK_TICKET_CHANGE_HISTORY_TICKET_ID: &str = "fk-ticket_change_history-ticket_id";
static FK_TICKET_CHANGE_HISTORY_STATE_ID: &str = "fk-ticket_change_history-state_id";
static FK_TICKET_CHANGE_HISTORY_QA_OWNER_ID: &str = "fk-ticket_change_history-qa_owner_id";
static FK_TICKET_CHANGE_HISTORY_DEV_OWNER_ID: &str = "fk-ticket_change_history-dev_owner_id";
static FK_TICKET_CHANGE_HISTORY_ASSIGNED_TO_ID: &str =
    "fk-ticket_change_history-assigned_to_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketChangeHistory::Table)
                    .if_not_exists()
                    .col(big_pk_auto(TicketChangeHistory::Id))
                    .col(big_integer_null(TicketChangeHistory::TicketChangeTypeId))
                    .col(big_integer_null(TicketChangeHistory::TicketId))
                    .col(date_time_null(TicketChangeHistory::ChangeDateTime))
                    .col(string_null(TicketChangeHistory::Title))
                    .col(text_null(TicketChangeHistory::Description))
                    .col(string_null(TicketChangeHistory::Product))
                    .col(string_null(TicketChangeHistory::Feature))
                    .col(string_null(TicketChangeHistory::Iteration))
                    .col(big_integer_null(TicketChangeHistory::StateId))
                    .col(big_integer_null(TicketChangeHistory::QaOwnerId))
                    .col(big_integer_null(TicketChangeHistory::DevOwnerId))
                    .col(big_integer_null(TicketChangeHistory::AssignedToId))
                    .col(text_null(TicketChangeHistory::NoteText))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_CHANGE_HISTORY_TICKET_CHANGE_TYPE_ID)
                            .from(
                                TicketChangeHistory::Table,
                                TicketChangeHistory::TicketChangeTypeId,
                            )
                            .to(TicketChangeType::Table, TicketChangeType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_CHANGE_HISTORY_TICKET_ID)
                            .from(TicketChangeHistory::Table, TicketChangeHistory::TicketId)
                            .to(Ticket::Table, Ticket::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_CHANGE_HISTORY_STATE_ID)
                            .from(TicketChangeHistory::Table, TicketChangeHistory::StateId)
                            .to(State::Table, State::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_CHANGE_HISTORY_QA_OWNER_ID)
                            .from(TicketChangeHistory::Table, TicketChangeHistory::QaOwnerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_CHANGE_HISTORY_DEV_OWNER_ID)
                            .from(TicketChangeHistory::Table, TicketChangeHistory::DevOwnerId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TICKET_CHANGE_HISTORY_ASSIGNED_TO_ID)
                            .from(
                                TicketChangeHistory::Table,
                                TicketChangeHistory::AssignedToId,
                            )
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_CHANGE_HISTORY_TICKET_ID)
                    .table(TicketChangeHistory::Table)
                    .col(TicketChangeHistory::TicketId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_CHANGE_HISTORY_TICKET_ID)
                    .table(TicketChangeHistory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TicketChangeHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TicketChangeHistory {
    Table,
    Id,
    TicketChangeTypeId,
    TicketId,
    ChangeDateTime,
    Title,
    Description,
    Product,
    Feature,
    Iteration,
    StateId,
    QaOwnerId,
    DevOwnerId,
    AssignedToId,
    NoteText,
}
