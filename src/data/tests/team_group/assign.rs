use super::*;

/// Expect reassignment to replace the team's previous membership for the season
#[tokio::test]
async fn moves_team_between_groups() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let group_a = test.league().insert_group(&season, "A").await?;
    let group_b = test.league().insert_group(&season, "B").await?;
    let team = test.league().insert_team("Kings College").await?;

    let membership_repo = TeamGroupRepository::new(&test.db);
    membership_repo.assign(team.id, &group_a).await?;
    let moved = membership_repo.assign(team.id, &group_b).await?;

    let memberships = membership_repo.list_for_season(season.id).await?;
    assert_eq!(memberships.len(), 1);
    assert_eq!(memberships[0].id, moved.id);
    assert_eq!(memberships[0].group_id, group_b.id);

    Ok(())
}

/// Expect memberships in other seasons to be left alone
#[tokio::test]
async fn keeps_other_seasons() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let previous = test
        .league()
        .insert_season("2024", SeasonCategory::SeniorBoys)
        .await?;
    let current = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let old_group = test.league().insert_group(&previous, "A").await?;
    let new_group = test.league().insert_group(&current, "C").await?;
    let team = test.league().insert_team("Kings College").await?;

    let membership_repo = TeamGroupRepository::new(&test.db);
    membership_repo.assign(team.id, &old_group).await?;
    membership_repo.assign(team.id, &new_group).await?;

    assert!(membership_repo.is_member(team.id, previous.id).await?);
    assert!(membership_repo.is_member(team.id, current.id).await?);

    Ok(())
}
