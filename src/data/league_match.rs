use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};

use crate::model::{bracket::KNOCKOUT_MATCHDAY, db::MatchModel};

/// Fields required to schedule a match.
#[derive(Clone, Debug)]
pub struct NewMatch {
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: NaiveDateTime,
    pub venue: String,
    pub matchday: Option<i32>,
}

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Schedules a new, unplayed match
    pub async fn create(&self, new_match: NewMatch) -> Result<MatchModel, DbErr> {
        let league_match = entity::league_match::ActiveModel {
            season_id: ActiveValue::Set(new_match.season_id),
            home_team_id: ActiveValue::Set(new_match.home_team_id),
            away_team_id: ActiveValue::Set(new_match.away_team_id),
            match_date: ActiveValue::Set(new_match.match_date),
            venue: ActiveValue::Set(new_match.venue),
            home_score: ActiveValue::Set(None),
            away_score: ActiveValue::Set(None),
            penalty_home: ActiveValue::Set(None),
            penalty_away: ActiveValue::Set(None),
            is_played: ActiveValue::Set(false),
            matchday: ActiveValue::Set(new_match.matchday),
            awarded: ActiveValue::Set(false),
            awarded_reason: ActiveValue::Set(None),
            awarded_to_id: ActiveValue::Set(None),
            original_home_score: ActiveValue::Set(None),
            original_away_score: ActiveValue::Set(None),
            awarded_at: ActiveValue::Set(None),
            awarded_by: ActiveValue::Set(String::new()),
            void: ActiveValue::Set(false),
            manual_finished_at: ActiveValue::Set(None),
            extra_time_minutes: ActiveValue::Set(None),
            manual_finished_by: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        league_match.insert(self.db).await
    }

    pub async fn get(&self, match_id: i32) -> Result<Option<MatchModel>, DbErr> {
        entity::prelude::LeagueMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }

    /// Gets a match holding a row lock until the surrounding transaction ends
    ///
    /// Backends without row locking (SQLite) ignore the lock clause.
    pub async fn get_for_update(&self, match_id: i32) -> Result<Option<MatchModel>, DbErr> {
        entity::prelude::LeagueMatch::find_by_id(match_id)
            .lock_exclusive()
            .one(self.db)
            .await
    }

    /// Writes every field of the provided model back to its row
    pub async fn save(&self, league_match: MatchModel) -> Result<MatchModel, DbErr> {
        league_match.into_active_model().reset_all().update(self.db).await
    }

    /// Matches of a season ordered by matchday, then kick-off
    pub async fn list_for_season(&self, season_id: i32) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::SeasonId.eq(season_id))
            .order_by_asc(entity::league_match::Column::Matchday)
            .order_by_asc(entity::league_match::Column::MatchDate)
            .order_by_asc(entity::league_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Played, non-void matches of a season
    pub async fn completed_for_season(&self, season_id: i32) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::SeasonId.eq(season_id))
            .filter(entity::league_match::Column::IsPlayed.eq(true))
            .filter(entity::league_match::Column::Void.eq(false))
            .order_by_asc(entity::league_match::Column::MatchDate)
            .order_by_asc(entity::league_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Played, non-void knockout matches of a season in matchday order
    pub async fn played_knockout_for_season(
        &self,
        season_id: i32,
    ) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::SeasonId.eq(season_id))
            .filter(entity::league_match::Column::Matchday.gte(KNOCKOUT_MATCHDAY))
            .filter(entity::league_match::Column::IsPlayed.eq(true))
            .filter(entity::league_match::Column::Void.eq(false))
            .order_by_asc(entity::league_match::Column::Matchday)
            .order_by_asc(entity::league_match::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_matchday(
        &self,
        season_id: i32,
        matchday: i32,
    ) -> Result<Vec<MatchModel>, DbErr> {
        entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::SeasonId.eq(season_id))
            .filter(entity::league_match::Column::Matchday.eq(matchday))
            .order_by_asc(entity::league_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds a match with the same season, participants and matchday
    pub async fn find_equivalent(
        &self,
        season_id: i32,
        home_team_id: i32,
        away_team_id: i32,
        matchday: Option<i32>,
    ) -> Result<Option<MatchModel>, DbErr> {
        let matchday_filter = match matchday {
            Some(matchday) => entity::league_match::Column::Matchday.eq(matchday),
            None => entity::league_match::Column::Matchday.is_null(),
        };

        entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::SeasonId.eq(season_id))
            .filter(entity::league_match::Column::HomeTeamId.eq(home_team_id))
            .filter(entity::league_match::Column::AwayTeamId.eq(away_team_id))
            .filter(matchday_filter)
            .one(self.db)
            .await
    }

    /// Matches between two teams in either orientation across the provided seasons
    pub async fn find_between(
        &self,
        team_a: i32,
        team_b: i32,
        season_ids: &[i32],
    ) -> Result<Vec<MatchModel>, DbErr> {
        if season_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::LeagueMatch::find()
            .filter(entity::league_match::Column::SeasonId.is_in(season_ids.to_vec()))
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(entity::league_match::Column::HomeTeamId.eq(team_a))
                            .add(entity::league_match::Column::AwayTeamId.eq(team_b)),
                    )
                    .add(
                        Condition::all()
                            .add(entity::league_match::Column::HomeTeamId.eq(team_b))
                            .add(entity::league_match::Column::AwayTeamId.eq(team_a)),
                    ),
            )
            .order_by_asc(entity::league_match::Column::Id)
            .all(self.db)
            .await
    }

    /// IDs of the season's matches that reference a team on either side
    pub async fn ids_referencing(&self, season_id: i32, team_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::LeagueMatch::find()
            .select_only()
            .column(entity::league_match::Column::Id)
            .filter(entity::league_match::Column::SeasonId.eq(season_id))
            .filter(
                Condition::any()
                    .add(entity::league_match::Column::HomeTeamId.eq(team_id))
                    .add(entity::league_match::Column::AwayTeamId.eq(team_id)),
            )
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Replaces a team reference within a season, home and away sides independently
    ///
    /// Updates are bulk statements and bypass the progression pipeline.
    ///
    /// Returns the number of rows updated as (home, away).
    pub async fn replace_team(
        &self,
        season_id: i32,
        from_team_id: i32,
        to_team_id: i32,
    ) -> Result<(u64, u64), DbErr> {
        let home = entity::prelude::LeagueMatch::update_many()
            .col_expr(
                entity::league_match::Column::HomeTeamId,
                Expr::value(to_team_id),
            )
            .filter(entity::league_match::Column::SeasonId.eq(season_id))
            .filter(entity::league_match::Column::HomeTeamId.eq(from_team_id))
            .exec(self.db)
            .await?;

        let away = entity::prelude::LeagueMatch::update_many()
            .col_expr(
                entity::league_match::Column::AwayTeamId,
                Expr::value(to_team_id),
            )
            .filter(entity::league_match::Column::SeasonId.eq(season_id))
            .filter(entity::league_match::Column::AwayTeamId.eq(from_team_id))
            .exec(self.db)
            .await?;

        Ok((home.rows_affected, away.rows_affected))
    }
}
