//! `SeaORM` Entity for seasons.

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::SeasonCategory;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "season")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: SeasonCategory,
    pub start_date: Date,
    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::season_group::Entity")]
    SeasonGroup,
    #[sea_orm(has_many = "super::league_match::Entity")]
    LeagueMatch,
}

impl Related<super::season_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeasonGroup.def()
    }
}

impl Related<super::league_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeagueMatch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
