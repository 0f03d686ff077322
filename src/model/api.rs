use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::AwardReason;
use serde::Serialize;

use crate::model::{
    bracket::MatchStage,
    db::{MatchModel, TeamModel},
};

#[derive(Clone, Debug, Serialize)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub short_name: String,
}

impl From<TeamModel> for TeamDto {
    fn from(team: TeamModel) -> Self {
        Self {
            id: team.id,
            name: team.name,
            short_name: team.short_name,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct GroupWithTeamsDto {
    pub group_id: i32,
    pub name: String,
    pub teams: Vec<TeamDto>,
}

/// Match record with its derived stage label.
#[derive(Clone, Debug, Serialize)]
pub struct MatchDto {
    pub id: i32,
    pub season_id: i32,
    pub home_team_id: i32,
    pub home_team_name: String,
    pub away_team_id: i32,
    pub away_team_name: String,
    pub match_date: NaiveDateTime,
    pub venue: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub penalty_home: Option<i32>,
    pub penalty_away: Option<i32>,
    pub is_played: bool,
    pub matchday: Option<i32>,
    pub match_stage: MatchStage,
    pub awarded: bool,
    pub awarded_reason: Option<AwardReason>,
    pub awarded_to_id: Option<i32>,
    pub void: bool,
}

impl MatchDto {
    pub fn new(model: MatchModel, home: &TeamModel, away: &TeamModel, stage: MatchStage) -> Self {
        Self {
            id: model.id,
            season_id: model.season_id,
            home_team_id: model.home_team_id,
            home_team_name: home.name.clone(),
            away_team_id: model.away_team_id,
            away_team_name: away.name.clone(),
            match_date: model.match_date,
            venue: model.venue,
            home_score: model.home_score,
            away_score: model.away_score,
            penalty_home: model.penalty_home,
            penalty_away: model.penalty_away,
            is_played: model.is_played,
            matchday: model.matchday,
            match_stage: stage,
            awarded: model.awarded,
            awarded_reason: model.awarded_reason,
            awarded_to_id: model.awarded_to_id,
            void: model.void,
        }
    }
}
