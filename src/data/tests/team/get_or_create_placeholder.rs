use entity::sea_orm_active_enums::SlotKind;
use sea_orm::EntityTrait;

use super::*;

/// Expect an archived placeholder carrying the structured slot to be created
#[tokio::test]
async fn creates_archived_placeholder() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;

    let team_repo = TeamRepository::new(&test.db);
    let slot = PlaceholderSlot::GroupPosition {
        position: 1,
        group: "A".to_string(),
    };
    let team = team_repo.get_or_create_placeholder(&slot).await?;

    assert_eq!(team.name, "1ST A (placeholder)");
    assert_eq!(team.short_name, "1ST A (placeholder)");
    assert!(team.archived);
    assert_eq!(team.slot_kind, Some(SlotKind::GroupPosition));
    assert_eq!(team.slot_group.as_deref(), Some("A"));
    assert_eq!(team.slot_position, Some(1));
    assert_eq!(PlaceholderSlot::from_team(&team), Some(slot));

    Ok(())
}

/// Expect the existing placeholder to be returned on repeated calls
#[tokio::test]
async fn reuses_existing_placeholder() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;

    let team_repo = TeamRepository::new(&test.db);
    let slot = PlaceholderSlot::Winner(22);
    let first = team_repo.get_or_create_placeholder(&slot).await?;
    let second = team_repo.get_or_create_placeholder(&slot).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(entity::prelude::Team::find().all(&test.db).await?.len(), 1);

    Ok(())
}

/// Expect a legacy placeholder without slot columns to be found by name
#[tokio::test]
async fn finds_placeholder_by_name() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let legacy = test.league().insert_team("winner 23 (placeholder)").await?;

    let team_repo = TeamRepository::new(&test.db);
    let team = team_repo
        .get_or_create_placeholder(&PlaceholderSlot::Winner(23))
        .await?;

    assert_eq!(team.id, legacy.id);

    Ok(())
}

/// Expect the short name to be truncated to 20 characters
#[tokio::test]
async fn truncates_short_name() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;

    let team_repo = TeamRepository::new(&test.db);
    let team = team_repo
        .get_or_create_placeholder(&PlaceholderSlot::Loser(27))
        .await?;

    assert_eq!(team.name, "LOSER 27 (placeholder)");
    assert_eq!(team.short_name, "LOSER 27 (placeholde");

    Ok(())
}
