use sea_orm::EntityTrait;

use super::*;

/// Expect an unreferenced placeholder to be deleted
#[tokio::test]
async fn deletes_unreferenced_placeholder() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;

    let team_repo = TeamRepository::new(&test.db);
    let slot = PlaceholderSlot::Winner(22);
    let placeholder = team_repo.get_or_create_placeholder(&slot).await?;

    let deleted = team_repo.delete_unreferenced_placeholders(&slot).await?;

    assert_eq!(deleted, vec![placeholder.id]);
    assert!(entity::prelude::Team::find_by_id(placeholder.id)
        .one(&test.db)
        .await?
        .is_none());

    Ok(())
}

/// Expect a placeholder still referenced by a match to be kept
#[tokio::test]
async fn keeps_referenced_placeholder() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let opponent = test.league().insert_team("Kings College").await?;

    let slot = PlaceholderSlot::Winner(22);
    let placeholder = TeamRepository::new(&test.db)
        .get_or_create_placeholder(&slot)
        .await?;
    test.league()
        .insert_match(season.id, placeholder.id, opponent.id, Some(26))
        .await?;

    let team_repo = TeamRepository::new(&test.db);
    let deleted = team_repo.delete_unreferenced_placeholders(&slot).await?;

    assert!(deleted.is_empty());
    assert!(team_repo.get(placeholder.id).await?.is_some());

    Ok(())
}

/// Expect containment matching to leave similarly numbered slots alone
#[tokio::test]
async fn ignores_other_matchdays() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;

    let team_repo = TeamRepository::new(&test.db);
    let kept = team_repo
        .get_or_create_placeholder(&PlaceholderSlot::Winner(22))
        .await?;
    team_repo
        .get_or_create_placeholder(&PlaceholderSlot::Winner(2))
        .await?;

    team_repo
        .delete_unreferenced_placeholders(&PlaceholderSlot::Winner(2))
        .await?;

    assert!(team_repo.get(kept.id).await?.is_some());
    assert_eq!(team_repo.list_names().await?, vec!["WINNER 22 (placeholder)"]);

    Ok(())
}
