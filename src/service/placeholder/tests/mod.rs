
use entity::sea_orm_active_enums::SeasonCategory;
use league_test_utils::prelude::*;

use crate::{data::team::TeamRepository, model::bracket::PlaceholderSlot};

/// Inserts the placeholder team standing in for `slot`.
async fn placeholder(
    test: &TestSetup,
    slot: PlaceholderSlot,
) -> Result<entity::team::Model, TestError> {
    Ok(TeamRepository::new(&test.db)
        .get_or_create_placeholder(&slot)
        .await?)
}
