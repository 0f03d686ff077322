use super::*;

/// Expect home and away references to be replaced independently within the season only
#[tokio::test]
async fn replaces_both_sides_within_season() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let other_season = test
        .league()
        .insert_season("2026", SeasonCategory::SeniorBoys)
        .await?;
    let placeholder = test.league().insert_team("WINNER 22 (placeholder)").await?;
    let winner = test.league().insert_team("Kings College").await?;
    let opponent = test.league().insert_team("Queens College").await?;

    let as_home = test
        .league()
        .insert_match(season.id, placeholder.id, opponent.id, Some(26))
        .await?;
    let as_away = test
        .league()
        .insert_match(season.id, opponent.id, placeholder.id, Some(29))
        .await?;
    let elsewhere = test
        .league()
        .insert_match(other_season.id, placeholder.id, opponent.id, Some(26))
        .await?;

    let match_repo = MatchRepository::new(&test.db);
    let updated = match_repo
        .replace_team(season.id, placeholder.id, winner.id)
        .await?;

    assert_eq!(updated, (1, 1));
    let as_home = match_repo.get(as_home.id).await?.unwrap();
    let as_away = match_repo.get(as_away.id).await?.unwrap();
    let elsewhere = match_repo.get(elsewhere.id).await?.unwrap();
    assert_eq!(as_home.home_team_id, winner.id);
    assert_eq!(as_away.away_team_id, winner.id);
    assert_eq!(elsewhere.home_team_id, placeholder.id);

    Ok(())
}
