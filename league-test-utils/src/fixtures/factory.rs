//! Factory functions for in-memory league models.
//!
//! These build models with standard test values and never touch the database,
//! which makes them suitable for the pure standings and qualification tests.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

/// Kick-off time `days` days after the first day of the test season.
pub fn match_date(days: i64) -> NaiveDateTime {
    let base = NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|date| date.and_hms_opt(15, 0, 0))
        .unwrap_or_default();

    base + TimeDelta::days(days)
}

/// Create a mock team model.
///
/// # Arguments
/// - `id` - The team record ID
/// - `name` - The team name
pub fn mock_team_model(id: i32, name: &str) -> entity::team::Model {
    entity::team::Model {
        id,
        name: name.to_string(),
        short_name: name.chars().take(20).collect(),
        archived: false,
        slot_kind: None,
        slot_matchday: None,
        slot_group: None,
        slot_position: None,
        created_at: match_date(0),
    }
}

/// Create a mock unplayed match model.
pub fn mock_match_model(
    season_id: i32,
    home_team_id: i32,
    away_team_id: i32,
) -> entity::league_match::Model {
    entity::league_match::Model {
        id: 1,
        season_id,
        home_team_id,
        away_team_id,
        match_date: match_date(0),
        venue: "Main Pitch".to_string(),
        home_score: None,
        away_score: None,
        penalty_home: None,
        penalty_away: None,
        is_played: false,
        matchday: None,
        awarded: false,
        awarded_reason: None,
        awarded_to_id: None,
        original_home_score: None,
        original_away_score: None,
        awarded_at: None,
        awarded_by: String::new(),
        void: false,
        manual_finished_at: None,
        extra_time_minutes: None,
        manual_finished_by: String::new(),
        created_at: match_date(0),
    }
}

/// Create a mock played match model with the provided score.
pub fn mock_played_match_model(
    season_id: i32,
    home_team_id: i32,
    away_team_id: i32,
    home_score: i32,
    away_score: i32,
) -> entity::league_match::Model {
    entity::league_match::Model {
        home_score: Some(home_score),
        away_score: Some(away_score),
        is_played: true,
        ..mock_match_model(season_id, home_team_id, away_team_id)
    }
}
