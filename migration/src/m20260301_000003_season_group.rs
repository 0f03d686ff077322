use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000002_season::Season;

static IDX_SEASON_GROUP_SEASON_NAME: &str = "idx-season_group-season_id-name";
static FK_SEASON_GROUP_SEASON_ID: &str = "fk-season_group-season_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SeasonGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(SeasonGroup::Id))
                    .col(integer(SeasonGroup::SeasonId))
                    .col(string_len(SeasonGroup::Name, 1))
                    .col(string_len(SeasonGroup::Category, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SEASON_GROUP_SEASON_ID)
                            .from(SeasonGroup::Table, SeasonGroup::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SEASON_GROUP_SEASON_NAME)
                    .table(SeasonGroup::Table)
                    .col(SeasonGroup::SeasonId)
                    .col(SeasonGroup::Name)
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
                    .name(IDX_SEASON_GROUP_SEASON_NAME)
                    .table(SeasonGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SeasonGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SeasonGroup {
    Table,
    Id,
    SeasonId,
    Name,
    Category,
}
