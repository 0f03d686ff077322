use league::{
    model::bracket::Qualifier,
    service::{
        league_match::{MatchService, ScoreEntry},
        qualification::QualificationService,
    },
};

use super::*;

/// Expect no concrete qualifier until the full round robin is played, then T1 and T2
#[tokio::test]
async fn group_winner_and_runner_up() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let (_, teams) = test
        .league()
        .insert_group_with_teams(&season, "A", &["T1", "T2", "T3"])
        .await?;
    let (t1, t2, t3) = (teams[0].id, teams[1].id, teams[2].id);

    let mut fixtures = Vec::new();
    for (matchday, (home, away)) in [(t1, t2), (t2, t3), (t3, t1)].into_iter().enumerate() {
        fixtures.push(
            test.league()
                .insert_match(season.id, home, away, Some(matchday as i32 + 1))
                .await?,
        );
    }

    let rules = CategoryRules::default();
    let matches = MatchService::new(&test.db, &rules);
    let qualification = QualificationService::new(&test.db, &rules);

    let results = [(2, 0), (1, 0), (0, 3)];
    for (played, (fixture, (home, away))) in fixtures.iter().zip(results).enumerate() {
        let before = qualification.resolve(season.id, "A", 1).await.unwrap();
        assert!(
            matches!(before, Qualifier::Pending(_)),
            "resolved after only {} of 3 matches",
            played
        );

        matches
            .record_score(fixture.id, home, away, ScoreEntry::Final)
            .await
            .unwrap();
    }

    let first = qualification.resolve(season.id, "A", 1).await.unwrap();
    let second = qualification.resolve(season.id, "A", 2).await.unwrap();

    assert!(matches!(first, Qualifier::Team(ref team) if team.id == t1));
    assert!(matches!(second, Qualifier::Team(ref team) if team.id == t2));

    Ok(())
}
