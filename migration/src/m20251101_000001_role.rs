use sea_orm_migration::{prelude::*, schema::*};

static IDX_ROLE_ROLE_NAME: &str = "idx-role-role_name";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(big_pk_auto(Role::Id))
                    .col(string_null(Role::RoleName))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ROLE_ROLE_NAME)
                    .table(Role::Table)
                    .col(Role::RoleName)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_ROLE_ROLE_NAME)
                    .table(Role::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Role {
    Table,
    Id,
    RoleName,
}
