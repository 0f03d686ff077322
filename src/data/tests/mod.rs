mod group;
mod league_match;
mod season;
mod team;
mod team_group;

use entity::sea_orm_active_enums::SeasonCategory;
use league_test_utils::prelude::*;
