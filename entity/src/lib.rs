//! `SeaORM` Entity definitions for the league schema.

pub mod prelude;

pub mod league_match;
pub mod sea_orm_active_enums;
pub mod season;
pub mod season_group;
pub mod team;
pub mod team_group;
