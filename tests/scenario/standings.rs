use league::service::{
    league_match::{MatchService, ScoreEntry},
    standings::StandingsService,
};

use super::*;

/// Expect repeated computation over the same matches to yield identical tables
#[tokio::test]
async fn standings_are_deterministic() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let (_, teams) = test
        .league()
        .insert_group_with_teams(&season, "A", &["Delta", "Alpha", "Charlie", "Bravo"])
        .await?;
    for (matchday, (home, away)) in [(0, 1), (2, 3), (0, 2), (1, 3)].into_iter().enumerate() {
        test.league()
            .insert_played_match(
                season.id,
                teams[home].id,
                teams[away].id,
                Some(matchday as i32 + 1),
                (1, 1),
            )
            .await?;
    }

    let standings = StandingsService::new(&test.db);
    let first = standings.season_table(season.id).await.unwrap();
    let second = standings.season_table(season.id).await.unwrap();

    assert_eq!(first, second);
    let names: Vec<&str> = first.iter().map(|row| row.team_name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Bravo", "Charlie", "Delta"]);

    Ok(())
}

/// Expect a replay between the same teams to replace the earlier result
#[tokio::test]
async fn only_one_result_per_pair() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let (_, teams) = test
        .league()
        .insert_group_with_teams(&season, "A", &["Kings College", "Queens College"])
        .await?;
    test.league()
        .insert_played_match(season.id, teams[0].id, teams[1].id, Some(1), (4, 0))
        .await?;
    let replay = test
        .league()
        .insert_match(season.id, teams[1].id, teams[0].id, Some(5))
        .await?;

    let rules = CategoryRules::default();
    MatchService::new(&test.db, &rules)
        .record_score(replay.id, 2, 1, ScoreEntry::Final)
        .await
        .unwrap();

    let table = StandingsService::new(&test.db)
        .season_table(season.id)
        .await
        .unwrap();

    assert!(table.iter().all(|row| row.played == 1));
    assert_eq!(table[0].team_id, teams[1].id);
    assert_eq!(table[0].points, 3);
    assert_eq!(table[1].goals_for, 1);

    Ok(())
}
