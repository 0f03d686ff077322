use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_team::Team, m20260301_000002_season::Season,
    m20260301_000003_season_group::SeasonGroup,
};

static IDX_TEAM_GROUP_TEAM_SEASON: &str = "idx-team_group-team_id-season_id";
static IDX_TEAM_GROUP_GROUP_ID: &str = "idx-team_group-group_id";
static FK_TEAM_GROUP_TEAM_ID: &str = "fk-team_group-team_id";
static FK_TEAM_GROUP_GROUP_ID: &str = "fk-team_group-group_id";
static FK_TEAM_GROUP_SEASON_ID: &str = "fk-team_group-season_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(TeamGroup::Id))
                    .col(integer(TeamGroup::TeamId))
                    .col(integer(TeamGroup::GroupId))
                    .col(integer(TeamGroup::SeasonId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_GROUP_TEAM_ID)
                            .from(TeamGroup::Table, TeamGroup::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_GROUP_GROUP_ID)
                            .from(TeamGroup::Table, TeamGroup::GroupId)
                            .to(SeasonGroup::Table, SeasonGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TEAM_GROUP_SEASON_ID)
                            .from(TeamGroup::Table, TeamGroup::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // A team holds at most one group membership per season
        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_GROUP_TEAM_SEASON)
                    .table(TeamGroup::Table)
                    .col(TeamGroup::TeamId)
                    .col(TeamGroup::SeasonId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TEAM_GROUP_GROUP_ID)
                    .table(TeamGroup::Table)
                    .col(TeamGroup::GroupId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_GROUP_GROUP_ID)
                    .table(TeamGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TEAM_GROUP_TEAM_SEASON)
                    .table(TeamGroup::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(TeamGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TeamGroup {
    Table,
    Id,
    TeamId,
    GroupId,
    SeasonId,
}
