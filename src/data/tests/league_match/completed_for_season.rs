use super::*;

/// Expect completed matches to exclude unplayed and void matches
#[tokio::test]
async fn completed_excludes_void_and_unplayed() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::Girls)
        .await?;
    let a = test.league().insert_team("Alder Park").await?;
    let b = test.league().insert_team("Mountview").await?;

    let played = test
        .league()
        .insert_played_match(season.id, a.id, b.id, Some(1), (1, 0))
        .await?;
    test.league()
        .insert_match(season.id, b.id, a.id, Some(2))
        .await?;
    let mut voided = factory::mock_played_match_model(season.id, a.id, b.id, 2, 2);
    voided.void = true;
    test.league().insert_match_model(voided).await?;

    let match_repo = MatchRepository::new(&test.db);
    let completed = match_repo.completed_for_season(season.id).await?;

    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0].id, played.id);

    Ok(())
}
