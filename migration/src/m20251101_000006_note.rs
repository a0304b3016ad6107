use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000004_user::User, m20251101_000005_ticket::Ticket};

static IDX_NOTE_TICKET_ID: &str = "idx-note-ticket_id";
static FK_NOTE_TICKET_ID: &str = "fk-note-ticket_id";
static FK_NOTE_NOTE_OWNER_ID: &str = "fk-note-note_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Note::Id))
                    .col(text_null(Note::NoteText))
                    .col(big_integer_null(Note::TicketId))
                    .col(big_integer_null(Note::NoteOwnerId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NOTE_TICKET_ID)
                            .from(Note::Table, Note::TicketId)
                            .to(Ticket::Table, Ticket::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_NOTE_NOTE_OWNER_ID)
                            .from(Note::Table, Note::NoteOwnerId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_NOTE_TICKET_ID)
                    .table(Note::Table)
                    .col(Note::TicketId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_NOTE_TICKET_ID)
                    .table(Note::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Note {
    Table,
    Id,
    NoteText,
    TicketId,
    NoteOwnerId,
}
