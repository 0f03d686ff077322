//! `SeaORM` Entity prelude.

pub use super::league_match::Entity as LeagueMatch;
pub use super::season::Entity as Season;
pub use super::season_group::Entity as SeasonGroup;
pub use super::team::Entity as Team;
pub use super::team_group::Entity as TeamGroup;
