use super::*;

/// Expect every changed field to be persisted
#[tokio::test]
async fn persists_all_fields() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::Girls)
        .await?;
    let home = test.league().insert_team("Kings College").await?;
    let away = test.league().insert_team("Queens College").await?;
    let mut model = test
        .league()
        .insert_match(season.id, home.id, away.id, Some(1))
        .await?;

    model.home_score = Some(2);
    model.away_score = Some(1);
    model.is_played = true;
    model.venue = "Field 3".to_string();

    let match_repo = MatchRepository::new(&test.db);
    match_repo.save(model.clone()).await?;

    let stored = match_repo.get(model.id).await?.unwrap();
    assert_eq!(stored, model);

    Ok(())
}
