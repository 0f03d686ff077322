//! `SeaORM` active enums stored as short string keys.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Competition category a season (and its groups) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum SeasonCategory {
    #[sea_orm(string_value = "senior_boys")]
    SeniorBoys,
    #[sea_orm(string_value = "girls")]
    Girls,
    #[sea_orm(string_value = "junior_boys")]
    JuniorBoys,
}

/// Administrative reason for overriding a match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum AwardReason {
    #[sea_orm(string_value = "protest")]
    Protest,
    #[sea_orm(string_value = "walkover")]
    Walkover,
}

/// Kind of bracket slot a placeholder team stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    #[sea_orm(string_value = "winner")]
    Winner,
    #[sea_orm(string_value = "loser")]
    Loser,
    #[sea_orm(string_value = "group_position")]
    GroupPosition,
}
