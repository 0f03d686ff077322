//! `SeaORM` Entity for matches, covering group stage fixtures and knockout slots.

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AwardReason;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "league_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub season_id: i32,
    pub home_team_id: i32,
    pub away_team_id: i32,
    pub match_date: DateTime,
    pub venue: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub penalty_home: Option<i32>,
    pub penalty_away: Option<i32>,
    pub is_played: bool,
    pub matchday: Option<i32>,
    pub awarded: bool,
    pub awarded_reason: Option<AwardReason>,
    pub awarded_to_id: Option<i32>,
    pub original_home_score: Option<i32>,
    pub original_away_score: Option<i32>,
    pub awarded_at: Option<DateTime>,
    pub awarded_by: String,
    pub void: bool,
    pub manual_finished_at: Option<DateTime>,
    pub extra_time_minutes: Option<i32>,
    pub manual_finished_by: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::season::Entity",
        from = "Column::SeasonId",
        to = "super::season::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Season,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::HomeTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    HomeTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwayTeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    AwayTeam,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::AwardedToId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    AwardedTo,
}

impl Related<super::season::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Season.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
