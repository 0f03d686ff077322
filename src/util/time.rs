use chrono::NaiveDateTime;

use crate::{error::league::LeagueError, model::db::MatchModel};

/// Spreadsheet date format: `31/01/2025 03:30:00 PM`
pub static IMPORT_DATE_FORMAT: &str = "%d/%m/%Y %I:%M:%S %p";

pub fn parse_import_datetime(value: &str) -> Result<NaiveDateTime, LeagueError> {
    NaiveDateTime::parse_from_str(value.trim(), IMPORT_DATE_FORMAT).map_err(|_| {
        LeagueError::InvalidDate {
            value: value.to_string(),
        }
    })
}

/// Whether a match counts as played given its current fields.
///
/// A manual finish always counts; otherwise both scores must be present and
/// the scheduled kick-off must have passed.
pub fn derive_is_played(model: &MatchModel, now: NaiveDateTime) -> bool {
    if model.manual_finished_at.is_some() {
        return true;
    }

    model.home_score.is_some() && model.away_score.is_some() && model.match_date <= now
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;
    use league_test_utils::prelude::*;

    use super::*;

    #[test]
    fn parses_twelve_hour_clock() {
        let parsed = parse_import_datetime("05/04/2025 03:30:00 PM").unwrap();

        assert_eq!(parsed.to_string(), "2025-04-05 15:30:00");
    }

    #[test]
    fn rejects_iso_dates() {
        let result = parse_import_datetime("2025-04-05 15:30:00");

        assert!(matches!(result, Err(LeagueError::InvalidDate { .. })));
    }

    /// Expect a scored match in the future to remain unplayed
    #[test]
    fn future_scored_match_is_not_played() {
        let model = factory::mock_played_match_model(1, 1, 2, 1, 0);
        let before_kickoff = model.match_date - TimeDelta::hours(1);

        assert!(!derive_is_played(&model, before_kickoff));
        assert!(derive_is_played(&model, model.match_date));
    }

    /// Expect a manual finish to mark the match played even without scores
    #[test]
    fn manual_finish_is_played() {
        let mut model = factory::mock_match_model(1, 1, 2);
        model.manual_finished_at = Some(model.match_date);

        assert!(derive_is_played(&model, model.match_date - TimeDelta::days(1)));
    }

    #[test]
    fn missing_score_is_not_played() {
        let mut model = factory::mock_match_model(1, 1, 2);
        model.home_score = Some(2);

        assert!(!derive_is_played(&model, model.match_date + TimeDelta::days(1)));
    }
}
