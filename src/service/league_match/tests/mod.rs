
use entity::sea_orm_active_enums::SeasonCategory;
use league_test_utils::prelude::*;

use crate::config::CategoryRules;
