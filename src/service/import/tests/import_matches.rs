use crate::{
    data::league_match::MatchRepository, model::import::ImportRow, service::import::ImportService,
};

use super::*;

fn row(season: &str, home: &str, away: &str, date: &str) -> ImportRow {
    ImportRow {
        season: Some(season.to_string()),
        home_team: Some(home.to_string()),
        away_team: Some(away.to_string()),
        match_date: Some(date.to_string()),
        matchday: Some(serde_json::json!(3)),
        venue: Some(" Main Pitch ".to_string()),
    }
}

/// Expect valid rows to create matches resolved case-insensitively
#[tokio::test]
async fn creates_matches() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let home = test.league().insert_team("Kings College").await?;
    let away = test.league().insert_team("Queens College").await?;

    let rows = vec![
        row("2025", "kings college", "Queens College", "05/04/2025 03:30:00 PM"),
        row(
            &season.id.to_string(),
            "Queens College",
            "KINGS COLLEGE",
            "12/04/2025 10:00:00 AM",
        ),
    ];

    let report = ImportService::new(&test.db)
        .import_matches(&rows)
        .await
        .unwrap();

    assert_eq!(report.created.len(), 2);
    assert!(report.errors.is_empty());

    let created = MatchRepository::new(&test.db)
        .get(report.created[0])
        .await?
        .unwrap();
    assert_eq!(created.home_team_id, home.id);
    assert_eq!(created.away_team_id, away.id);
    assert_eq!(created.matchday, Some(3));
    assert_eq!(created.venue, "Main Pitch");
    assert_eq!(created.match_date.to_string(), "2025-04-05 15:30:00");
    assert!(!created.is_played);

    Ok(())
}

/// Expect invalid rows to be reported with spreadsheet row numbers while valid rows proceed
#[tokio::test]
async fn reports_invalid_rows() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    test.league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    test.league().insert_team("Kings College").await?;
    test.league().insert_team("Queens College").await?;

    let rows = vec![
        row("2025", "Kings College", "Queens College", "05/04/2025 03:30:00 PM"),
        ImportRow {
            match_date: None,
            ..row("2025", "Kings College", "Queens College", "")
        },
        row("2025", "Kings College", "Queens College", "2025-04-05 15:30"),
        row("1999", "Kings College", "Queens College", "05/04/2025 03:30:00 PM"),
        row("2025", "Kings Colege", "Queens College", "05/04/2025 03:30:00 PM"),
    ];

    let report = ImportService::new(&test.db)
        .import_matches(&rows)
        .await
        .unwrap();

    assert_eq!(report.created.len(), 1);
    let rows: Vec<usize> = report.errors.iter().map(|err| err.row).collect();
    assert_eq!(rows, vec![3, 4, 5, 6]);
    assert!(report.errors[0].message.contains("Match Date"));
    assert_eq!(
        report.errors[3].suggestions,
        vec!["Kings College".to_string()]
    );

    Ok(())
}

/// Expect a matchday cell that is not an integer to be ignored
#[tokio::test]
async fn ignores_textual_matchday() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    test.league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    test.league().insert_team("Kings College").await?;
    test.league().insert_team("Queens College").await?;

    let rows = vec![ImportRow {
        matchday: Some(serde_json::json!("Final")),
        ..row("2025", "Kings College", "Queens College", "05/04/2025 03:30:00 PM")
    }];

    let report = ImportService::new(&test.db)
        .import_matches(&rows)
        .await
        .unwrap();

    let created = MatchRepository::new(&test.db)
        .get(report.created[0])
        .await?
        .unwrap();
    assert_eq!(created.matchday, None);

    Ok(())
}
