use league::{
    data::{league_match::MatchRepository, team::TeamRepository},
    model::bracket::{BracketLayout, FixtureDefinition, PlaceholderSlot},
    service::{
        league_match::{MatchService, ScoreEntry},
        placeholder::PlaceholderService,
    },
};

use super::*;

/// Inserts four groups of two teams, each with its group match played.
async fn setup_groups(test: &mut TestSetup) -> Result<entity::season::Model, TestError> {
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;

    for group in ["A", "B", "C", "D"] {
        let winner = format!("{} Winners", group);
        let runner_up = format!("{} Runners", group);
        let (_, teams) = test
            .league()
            .insert_group_with_teams(&season, group, &[winner.as_str(), runner_up.as_str()])
            .await?;
        test.league()
            .insert_played_match(season.id, teams[0].id, teams[1].id, Some(1), (1, 0))
            .await?;
    }

    Ok(season)
}

/// Expect the standard bracket to fill from group results and advance winners to the final
#[tokio::test]
async fn bracket_runs_to_final() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = setup_groups(&mut test).await?;
    let layout = BracketLayout::standard_eight(factory::match_date(30));

    let rules = CategoryRules::default();
    let report = PlaceholderService::new(&test.db, &rules)
        .build_bracket(season.id, &layout, false)
        .await
        .unwrap();
    assert_eq!(report.created.len(), 8);
    assert!(report.errors.is_empty());

    // Home side wins every knockout match
    let match_repo = MatchRepository::new(&test.db);
    let matches = MatchService::new(&test.db, &rules);
    for matchday in 22..=28 {
        let fixture = match_repo.find_by_matchday(season.id, matchday).await?;
        matches
            .record_score(fixture[0].id, 2, 0, ScoreEntry::Final)
            .await
            .unwrap();
    }

    let final_match = match_repo.find_by_matchday(season.id, 29).await?;
    let team_repo = TeamRepository::new(&test.db);
    let home = team_repo.get(final_match[0].home_team_id).await?.unwrap();
    let away = team_repo.get(final_match[0].away_team_id).await?.unwrap();
    assert_eq!(home.name, "A Winners");
    assert_eq!(away.name, "B Winners");

    for slot in [
        PlaceholderSlot::Winner(22),
        PlaceholderSlot::Winner(26),
        PlaceholderSlot::Loser(27),
    ] {
        assert!(team_repo.find_placeholder(&slot).await?.is_none());
    }

    Ok(())
}

/// Expect generating the same bracket twice to create no duplicates
#[tokio::test]
async fn bracket_generation_is_idempotent() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = setup_groups(&mut test).await?;
    let layout = BracketLayout::standard_eight(factory::match_date(30));

    let rules = CategoryRules::default();
    let service = PlaceholderService::new(&test.db, &rules);
    service.build_bracket(season.id, &layout, false).await.unwrap();
    let second = service.build_bracket(season.id, &layout, false).await.unwrap();

    assert!(second.created.is_empty());
    assert_eq!(second.existing.len(), 8);
    let total = MatchRepository::new(&test.db)
        .list_for_season(season.id)
        .await?
        .len();
    assert_eq!(total, 12);

    Ok(())
}

/// Expect group position placeholders to be replaced once the group finishes
#[tokio::test]
async fn group_slots_fill_when_group_completes() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let (_, group_a) = test
        .league()
        .insert_group_with_teams(&season, "A", &["Alpha", "Bravo"])
        .await?;
    let (_, group_b) = test
        .league()
        .insert_group_with_teams(&season, "B", &["Charlie", "Delta"])
        .await?;
    test.league()
        .insert_played_match(season.id, group_b[0].id, group_b[1].id, Some(1), (0, 2))
        .await?;
    let group_a_match = test
        .league()
        .insert_match(season.id, group_a[0].id, group_a[1].id, Some(1))
        .await?;

    let layout = BracketLayout {
        fixtures: vec![FixtureDefinition {
            home: "1ST A".to_string(),
            away: "2ND B".to_string(),
            match_date: factory::match_date(30),
            matchday: 22,
            venue: None,
        }],
    };

    let rules = CategoryRules::default();
    PlaceholderService::new(&test.db, &rules)
        .build_bracket(season.id, &layout, false)
        .await
        .unwrap();

    let team_repo = TeamRepository::new(&test.db);
    let pending = team_repo
        .find_placeholder(&PlaceholderSlot::GroupPosition {
            position: 1,
            group: "A".to_string(),
        })
        .await?;
    assert!(pending.is_some());

    MatchService::new(&test.db, &rules)
        .record_score(group_a_match.id, 0, 1, ScoreEntry::Final)
        .await
        .unwrap();

    let quarterfinal = MatchRepository::new(&test.db)
        .find_by_matchday(season.id, 22)
        .await?;
    assert_eq!(quarterfinal[0].home_team_id, group_a[1].id);
    assert_eq!(quarterfinal[0].away_team_id, group_b[0].id);
    let pending = team_repo
        .find_placeholder(&PlaceholderSlot::GroupPosition {
            position: 1,
            group: "A".to_string(),
        })
        .await?;
    assert!(pending.is_none());

    Ok(())
}
