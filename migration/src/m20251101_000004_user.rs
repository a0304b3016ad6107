use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_role::Role;

static IDX_USER_USER_NAME: &str = "idx-user-user_name";
static IDX_USER_ROLE_ID: &str = "idx-user-role_id";
static FK_USER_ROLE_ID: &str = "fk-user-role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline so the schema also builds on SQLite,
        // which cannot add constraints to an existing table.
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(big_pk_auto(User::Id))
                    .col(string_null(User::UserName))
                    .col(string_null(User::DisplayName))
                    .col(string_null(User::Email))
                    .col(string_null(User::Phone))
                    .col(big_integer_null(User::RoleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_ROLE_ID)
                            .from(User::Table, User::RoleId)
                            .to(Role::Table, Role::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_USER_NAME)
                    .table(User::Table)
                    .col(User::UserName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_ROLE_ID)
                    .table(User::Table)
                    .col(User::RoleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_ROLE_ID)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_USER_NAME)
                    .table(User::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    UserName,
    DisplayName,
    Email,
    Phone,
    RoleId,
}
