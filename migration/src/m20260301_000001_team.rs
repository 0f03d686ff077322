use sea_orm_migration::{prelude::*, schema::*};

static IDX_TEAM_SLOT: &str = "idx-team-slot";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::Id))
                    .col(string_len_uniq(Team::Name, 100))
                    .col(string_len(Team::ShortName, 20))
                    .col(boolean(Team::Archived).default(false))
                    .col(string_len_null(Team::SlotKind, 20))
                    .col(integer_null(Team::SlotMatchday))
                    .col(string_len_null(Team::SlotGroup, 1))
                    .col(integer_null(Team::SlotPosition))
                    .col(timestamp(Team::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_SLOT)
                    .table(Team::Table)
                    .col(Team::SlotKind)
                    .col(Team::SlotMatchday)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(IDX_TEAM_SLOT).table(Team::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    Id,
    Name,
    ShortName,
    Archived,
    SlotKind,
    SlotMatchday,
    SlotGroup,
    SlotPosition,
    CreatedAt,
}
