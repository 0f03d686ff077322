use chrono::Utc;
use entity::sea_orm_active_enums::SeasonCategory;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::factory, TestSetup};

impl TestSetup {
    pub fn league<'a>(&'a mut self) -> LeagueFixtures<'a> {
        LeagueFixtures { setup: self }
    }
}

pub struct LeagueFixtures<'a> {
    setup: &'a mut TestSetup,
}

impl<'a> LeagueFixtures<'a> {
    pub async fn insert_team(&self, name: &str) -> Result<entity::team::Model, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            short_name: ActiveValue::Set(name.chars().take(20).collect()),
            archived: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_season(
        &self,
        name: &str,
        category: SeasonCategory,
    ) -> Result<entity::season::Model, TestError> {
        Ok(entity::prelude::Season::insert(entity::season::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            category: ActiveValue::Set(category),
            start_date: ActiveValue::Set(factory::match_date(0).date()),
            end_date: ActiveValue::Set(None),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_group(
        &self,
        season: &entity::season::Model,
        name: &str,
    ) -> Result<entity::season_group::Model, TestError> {
        Ok(
            entity::prelude::SeasonGroup::insert(entity::season_group::ActiveModel {
                season_id: ActiveValue::Set(season.id),
                name: ActiveValue::Set(name.to_string()),
                category: ActiveValue::Set(season.category),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn add_to_group(
        &self,
        team_id: i32,
        group: &entity::season_group::Model,
    ) -> Result<entity::team_group::Model, TestError> {
        Ok(
            entity::prelude::TeamGroup::insert(entity::team_group::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                group_id: ActiveValue::Set(group.id),
                season_id: ActiveValue::Set(group.season_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Inserts a group and one team per name, each assigned to the group.
    pub async fn insert_group_with_teams(
        &self,
        season: &entity::season::Model,
        group_name: &str,
        team_names: &[&str],
    ) -> Result<(entity::season_group::Model, Vec<entity::team::Model>), TestError> {
        let group = self.insert_group(season, group_name).await?;

        let mut teams = Vec::with_capacity(team_names.len());
        for name in team_names {
            let team = self.insert_team(name).await?;
            self.add_to_group(team.id, &group).await?;
            teams.push(team);
        }

        Ok((group, teams))
    }

    /// Inserts an unplayed match dated on the day matching its matchday.
    pub async fn insert_match(
        &self,
        season_id: i32,
        home_team_id: i32,
        away_team_id: i32,
        matchday: Option<i32>,
    ) -> Result<entity::league_match::Model, TestError> {
        let mut model = factory::mock_match_model(season_id, home_team_id, away_team_id);
        model.matchday = matchday;
        model.match_date = factory::match_date(matchday.unwrap_or(0) as i64);

        self.insert_match_model(model).await
    }

    /// Inserts a played match with the provided final score.
    pub async fn insert_played_match(
        &self,
        season_id: i32,
        home_team_id: i32,
        away_team_id: i32,
        matchday: Option<i32>,
        score: (i32, i32),
    ) -> Result<entity::league_match::Model, TestError> {
        let mut model = factory::mock_played_match_model(
            season_id,
            home_team_id,
            away_team_id,
            score.0,
            score.1,
        );
        model.matchday = matchday;
        model.match_date = factory::match_date(matchday.unwrap_or(0) as i64);

        self.insert_match_model(model).await
    }

    /// Inserts the provided model as-is, ignoring its ID.
    pub async fn insert_match_model(
        &self,
        model: entity::league_match::Model,
    ) -> Result<entity::league_match::Model, TestError> {
        Ok(
            entity::prelude::LeagueMatch::insert(entity::league_match::ActiveModel {
                id: ActiveValue::NotSet,
                season_id: ActiveValue::Set(model.season_id),
                home_team_id: ActiveValue::Set(model.home_team_id),
                away_team_id: ActiveValue::Set(model.away_team_id),
                match_date: ActiveValue::Set(model.match_date),
                venue: ActiveValue::Set(model.venue),
                home_score: ActiveValue::Set(model.home_score),
                away_score: ActiveValue::Set(model.away_score),
                penalty_home: ActiveValue::Set(model.penalty_home),
                penalty_away: ActiveValue::Set(model.penalty_away),
                is_played: ActiveValue::Set(model.is_played),
                matchday: ActiveValue::Set(model.matchday),
                awarded: ActiveValue::Set(model.awarded),
                awarded_reason: ActiveValue::Set(model.awarded_reason),
                awarded_to_id: ActiveValue::Set(model.awarded_to_id),
                original_home_score: ActiveValue::Set(model.original_home_score),
                original_away_score: ActiveValue::Set(model.original_away_score),
                awarded_at: ActiveValue::Set(model.awarded_at),
                awarded_by: ActiveValue::Set(model.awarded_by),
                void: ActiveValue::Set(model.void),
                manual_finished_at: ActiveValue::Set(model.manual_finished_at),
                extra_time_minutes: ActiveValue::Set(model.extra_time_minutes),
                manual_finished_by: ActiveValue::Set(model.manual_finished_by),
                created_at: ActiveValue::Set(model.created_at),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
