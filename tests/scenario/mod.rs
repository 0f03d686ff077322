//! End-to-end league scenarios driven through the public services.

mod awards;
mod bracket;
mod qualification;
mod standings;

use entity::sea_orm_active_enums::SeasonCategory;
use league::config::CategoryRules;
use league_test_utils::prelude::*;
