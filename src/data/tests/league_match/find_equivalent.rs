use super::*;

/// Expect the match with identical season, participants and matchday to be found
#[tokio::test]
async fn finds_identical_fixture() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let home = test.league().insert_team("Kings College").await?;
    let away = test.league().insert_team("Queens College").await?;
    let existing = test
        .league()
        .insert_match(season.id, home.id, away.id, Some(22))
        .await?;

    let match_repo = MatchRepository::new(&test.db);
    let result = match_repo
        .find_equivalent(season.id, home.id, away.id, Some(22))
        .await;

    assert!(matches!(result, Ok(Some(ref found)) if found.id == existing.id));

    Ok(())
}

/// Expect reversed sides or another matchday not to count as equivalent
#[tokio::test]
async fn ignores_different_fixtures() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let home = test.league().insert_team("Kings College").await?;
    let away = test.league().insert_team("Queens College").await?;
    test.league()
        .insert_match(season.id, home.id, away.id, Some(22))
        .await?;

    let match_repo = MatchRepository::new(&test.db);

    assert!(match_repo
        .find_equivalent(season.id, away.id, home.id, Some(22))
        .await?
        .is_none());
    assert!(match_repo
        .find_equivalent(season.id, home.id, away.id, Some(23))
        .await?
        .is_none());
    assert!(match_repo
        .find_equivalent(season.id, home.id, away.id, None)
        .await?
        .is_none());

    Ok(())
}
