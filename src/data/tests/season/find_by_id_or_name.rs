use super::*;

/// Expect a numeric identifier to be treated as a season ID
#[tokio::test]
async fn finds_by_numeric_id() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("Spring 2025", SeasonCategory::Girls)
        .await?;

    let season_repo = SeasonRepository::new(&test.db);
    let result = season_repo.find_by_id_or_name(&season.id.to_string()).await;

    assert!(matches!(result, Ok(Some(ref found)) if found.id == season.id));

    Ok(())
}

/// Expect any other identifier to match a season name ignoring case
#[tokio::test]
async fn finds_by_name_ignoring_case() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("Spring 2025", SeasonCategory::Girls)
        .await?;

    let season_repo = SeasonRepository::new(&test.db);
    let result = season_repo.find_by_id_or_name("spring 2025").await;

    assert!(matches!(result, Ok(Some(ref found)) if found.id == season.id));

    Ok(())
}

/// Expect Ok(None) for an unknown season
#[tokio::test]
async fn returns_none_for_unknown_season() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;

    let season_repo = SeasonRepository::new(&test.db);

    assert!(matches!(season_repo.find_by_id_or_name("99").await, Ok(None)));
    assert!(matches!(season_repo.find_by_id_or_name("Autumn").await, Ok(None)));

    Ok(())
}

/// Expect a numeric name to match when no season has that ID
#[tokio::test]
async fn falls_back_to_numeric_name() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;

    let season_repo = SeasonRepository::new(&test.db);
    let result = season_repo.find_by_id_or_name("2025").await;

    assert!(matches!(result, Ok(Some(ref found)) if found.id == season.id));

    Ok(())
}
