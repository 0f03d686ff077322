use entity::sea_orm_active_enums::AwardReason;
use league::{
    data::league_match::MatchRepository,
    model::award::{Side, WinnerSpec},
    service::award::AwardService,
};

use super::*;

/// Expect a walkover on an unplayed match to score 3-0 and count as played
#[tokio::test]
async fn walkover_award() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let a = test.league().insert_team("A").await?;
    let b = test.league().insert_team("B").await?;
    let fixture = test
        .league()
        .insert_match(season.id, a.id, b.id, Some(1))
        .await?;

    let rules = CategoryRules::default();
    AwardService::new(&test.db, &rules)
        .award(
            fixture.id,
            WinnerSpec::Side(Side::Home),
            AwardReason::Walkover,
            "admin",
        )
        .await
        .unwrap();

    let stored = MatchRepository::new(&test.db)
        .get(fixture.id)
        .await?
        .unwrap();
    assert_eq!(stored.home_score, Some(3));
    assert_eq!(stored.away_score, Some(0));
    assert!(stored.is_played);
    assert!(stored.awarded);

    Ok(())
}

/// Expect a voided match to lose scores and played state whatever came before
#[tokio::test]
async fn void_after_award() -> Result<(), TestError> {
    let mut test = test_setup_with_league_tables!()?;
    let season = test
        .league()
        .insert_season("2025", SeasonCategory::SeniorBoys)
        .await?;
    let a = test.league().insert_team("A").await?;
    let b = test.league().insert_team("B").await?;
    let fixture = test
        .league()
        .insert_played_match(season.id, a.id, b.id, Some(1), (2, 2))
        .await?;

    let rules = CategoryRules::default();
    let service = AwardService::new(&test.db, &rules);
    service
        .award(
            fixture.id,
            WinnerSpec::Team(b.id),
            AwardReason::Protest,
            "admin",
        )
        .await
        .unwrap();
    service.void(fixture.id, "system").await.unwrap();

    let stored = MatchRepository::new(&test.db)
        .get(fixture.id)
        .await?
        .unwrap();
    assert_eq!(stored.home_score, None);
    assert_eq!(stored.away_score, None);
    assert!(!stored.is_played);
    assert!(stored.void);
    assert!(!stored.awarded);

    Ok(())
}
