use super::*;

/// Expect a group to be created once with an upper case letter and the season's category
#[tokio::test]
async fn creates_group_once() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::JuniorBoys)
        .await?;

    let group_repo = GroupRepository::new(&test.db);
    let created = group_repo.get_or_create(&season, "b").await?;
    let fetched = group_repo.get_or_create(&season, "B").await?;

    assert_eq!(created.id, fetched.id);
    assert_eq!(created.name, "B");
    assert_eq!(created.category, SeasonCategory::JuniorBoys);
    assert_eq!(group_repo.list_for_season(season.id).await?.len(), 1);

    Ok(())
}

/// Expect groups with the same letter in different seasons to be distinct
#[tokio::test]
async fn separates_seasons() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let first = test
        .league()
        .insert_season("2024", SeasonCategory::Girls)
        .await?;
    let second = test
        .league()
        .insert_season("2025", SeasonCategory::Girls)
        .await?;

    let group_repo = GroupRepository::new(&test.db);
    let a_first = group_repo.get_or_create(&first, "A").await?;
    let a_second = group_repo.get_or_create(&second, "A").await?;

    assert_ne!(a_first.id, a_second.id);

    Ok(())
}
