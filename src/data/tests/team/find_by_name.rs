use super::*;

/// Expect Ok(Some(_)) when the name differs only in case and whitespace
#[tokio::test]
async fn finds_team_ignoring_case() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let team = test.league().insert_team("Kings College").await?;

    let team_repo = TeamRepository::new(&test.db);
    let result = team_repo.find_by_name("  kings COLLEGE ").await;

    assert!(matches!(result, Ok(Some(ref found)) if found.id == team.id));

    Ok(())
}

/// Expect Ok(None) when no team has the name
#[tokio::test]
async fn returns_none_for_unknown_name() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    test.league().insert_team("Kings College").await?;

    let team_repo = TeamRepository::new(&test.db);
    let result = team_repo.find_by_name("Queens College").await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect Error when the required tables have not been created
#[tokio::test]
async fn fails_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let team_repo = TeamRepository::new(&test.db);
    let result = team_repo.find_by_name("Kings College").await;

    assert!(result.is_err());

    Ok(())
}
