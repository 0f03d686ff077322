use chrono::NaiveDate;

use super::*;

/// Expect the season with the latest start date, optionally within a category
#[tokio::test]
async fn returns_latest_started_season() -> Result<(), TestError> {
    let test = test_setup_with_league_tables!()?;

    let season_repo = SeasonRepository::new(&test.db);
    let date = |year| NaiveDate::from_ymd_opt(year, 1, 15).unwrap();
    season_repo
        .create("2023", SeasonCategory::SeniorBoys, date(2023), None)
        .await?;
    let senior = season_repo
        .create("2024", SeasonCategory::SeniorBoys, date(2024), None)
        .await?;
    let girls = season_repo
        .create("Girls 2025", SeasonCategory::Girls, date(2025), None)
        .await?;

    let any = season_repo.latest(None).await?;
    let senior_latest = season_repo.latest(Some(SeasonCategory::SeniorBoys)).await?;
    let junior_latest = season_repo.latest(Some(SeasonCategory::JuniorBoys)).await?;

    assert_eq!(any.map(|s| s.id), Some(girls.id));
    assert_eq!(senior_latest.map(|s| s.id), Some(senior.id));
    assert!(junior_latest.is_none());

    Ok(())
}
