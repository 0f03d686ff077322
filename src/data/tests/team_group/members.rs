use super::*;

/// Expect the group's teams ordered by name
#[tokio::test]
async fn lists_members_by_name() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::Girls)
        .await?;
    let (group, _) = test
        .league()
        .insert_group_with_teams(&season, "A", &["Westfield", "Alder Park", "Mountview"])
        .await?;
    test.league()
        .insert_group_with_teams(&season, "B", &["Riverside"])
        .await?;

    let membership_repo = TeamGroupRepository::new(&test.db);
    let members = membership_repo.members(group.id).await?;

    let names: Vec<&str> = members.iter().map(|team| team.name.as_str()).collect();
    assert_eq!(names, vec!["Alder Park", "Mountview", "Westfield"]);

    Ok(())
}
