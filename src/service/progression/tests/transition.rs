use crate::service::progression::MatchTransition;

use super::*;

/// Expect a newly played match to require progression
#[test]
fn detects_played() {
    let before = factory::mock_match_model(1, 10, 20);
    let after = factory::mock_played_match_model(1, 10, 20, 1, 0);

    let transition = MatchTransition::new(before, after);

    assert!(transition.became_played());
    assert!(transition.requires_progression());
}

/// Expect penalties deciding a played draw to count as a changed decision
#[test]
fn detects_decision_by_penalties() {
    let before = factory::mock_played_match_model(1, 10, 20, 2, 2);
    let after = entity::league_match::Model {
        penalty_home: Some(3),
        penalty_away: Some(1),
        ..before.clone()
    };

    let transition = MatchTransition::new(before, after);

    assert!(!transition.became_played());
    assert!(transition.decision_changed());
}

/// Expect an interim score update to need no progression
#[test]
fn ignores_interim_updates() {
    let before = factory::mock_match_model(1, 10, 20);
    let after = entity::league_match::Model {
        home_score: Some(1),
        away_score: Some(0),
        ..before.clone()
    };

    let transition = MatchTransition::new(before, after);

    assert!(!transition.requires_progression());
}
