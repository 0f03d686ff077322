//! `SeaORM` Entity for teams, including synthetic bracket placeholders.

use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::SlotKind;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub short_name: String,
    pub archived: bool,
    pub slot_kind: Option<SlotKind>,
    pub slot_matchday: Option<i32>,
    pub slot_group: Option<String>,
    pub slot_position: Option<i32>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::team_group::Entity")]
    TeamGroup,
}

impl Related<super::team_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
