use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000001_team::Team, m20260301_000002_season::Season};

static IDX_LEAGUE_MATCH_SEASON_MATCHDAY: &str = "idx-league_match-season_id-matchday";
static IDX_LEAGUE_MATCH_HOME_TEAM_ID: &str = "idx-league_match-home_team_id";
static IDX_LEAGUE_MATCH_AWAY_TEAM_ID: &str = "idx-league_match-away_team_id";
static FK_LEAGUE_MATCH_SEASON_ID: &str = "fk-league_match-season_id";
static FK_LEAGUE_MATCH_HOME_TEAM_ID: &str = "fk-league_match-home_team_id";
static FK_LEAGUE_MATCH_AWAY_TEAM_ID: &str = "fk-league_match-away_team_id";
static FK_LEAGUE_MATCH_AWARDED_TO_ID: &str = "fk-league_match-awarded_to_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeagueMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(LeagueMatch::Id))
                    .col(integer(LeagueMatch::SeasonId))
                    .col(integer(LeagueMatch::HomeTeamId))
                    .col(integer(LeagueMatch::AwayTeamId))
                    .col(date_time(LeagueMatch::MatchDate))
                    .col(string_len(LeagueMatch::Venue, 200).default(""))
                    .col(integer_null(LeagueMatch::HomeScore))
                    .col(integer_null(LeagueMatch::AwayScore))
                    .col(integer_null(LeagueMatch::PenaltyHome))
                    .col(integer_null(LeagueMatch::PenaltyAway))
                    .col(boolean(LeagueMatch::IsPlayed).default(false))
                    .col(integer_null(LeagueMatch::Matchday))
                    .col(boolean(LeagueMatch::Awarded).default(false))
                    .col(string_len_null(LeagueMatch::AwardedReason, 20))
                    .col(integer_null(LeagueMatch::AwardedToId))
                    .col(integer_null(LeagueMatch::OriginalHomeScore))
                    .col(integer_null(LeagueMatch::OriginalAwayScore))
                    .col(date_time_null(LeagueMatch::AwardedAt))
                    .col(string_len(LeagueMatch::AwardedBy, 100).default(""))
                    .col(boolean(LeagueMatch::Void).default(false))
                    .col(date_time_null(LeagueMatch::ManualFinishedAt))
                    .col(integer_null(LeagueMatch::ExtraTimeMinutes))
                    .col(string_len(LeagueMatch::ManualFinishedBy, 150).default(""))
                    .col(timestamp(LeagueMatch::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUE_MATCH_SEASON_ID)
                            .from(LeagueMatch::Table, LeagueMatch::SeasonId)
                            .to(Season::Table, Season::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUE_MATCH_HOME_TEAM_ID)
                            .from(LeagueMatch::Table, LeagueMatch::HomeTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUE_MATCH_AWAY_TEAM_ID)
                            .from(LeagueMatch::Table, LeagueMatch::AwayTeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_LEAGUE_MATCH_AWARDED_TO_ID)
                            .from(LeagueMatch::Table, LeagueMatch::AwardedToId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_MATCH_SEASON_MATCHDAY)
                    .table(LeagueMatch::Table)
                    .col(LeagueMatch::SeasonId)
                    .col(LeagueMatch::Matchday)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_MATCH_HOME_TEAM_ID)
                    .table(LeagueMatch::Table)
                    .col(LeagueMatch::HomeTeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LEAGUE_MATCH_AWAY_TEAM_ID)
                    .table(LeagueMatch::Table)
                    .col(LeagueMatch::AwayTeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for idx in [
            IDX_LEAGUE_MATCH_AWAY_TEAM_ID,
            IDX_LEAGUE_MATCH_HOME_TEAM_ID,
            IDX_LEAGUE_MATCH_SEASON_MATCHDAY,
        ] {
            manager
                .drop_index(Index::drop().name(idx).table(LeagueMatch::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(LeagueMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum LeagueMatch {
    Table,
    Id,
    SeasonId,
    HomeTeamId,
    AwayTeamId,
    MatchDate,
    Venue,
    HomeScore,
    AwayScore,
    PenaltyHome,
    PenaltyAway,
    IsPlayed,
    Matchday,
    Awarded,
    AwardedReason,
    AwardedToId,
    OriginalHomeScore,
    OriginalAwayScore,
    AwardedAt,
    AwardedBy,
    Void,
    ManualFinishedAt,
    ExtraTimeMinutes,
    ManualFinishedBy,
    CreatedAt,
}
