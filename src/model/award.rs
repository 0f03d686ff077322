use std::str::FromStr;

use entity::sea_orm_active_enums::AwardReason;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Side of a fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl FromStr for Side {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "home" => Ok(Self::Home),
            "away" => Ok(Self::Away),
            other => Err(Error::ParseError(format!(
                "expected \"home\" or \"away\", got {:?}",
                other
            ))),
        }
    }
}

/// Winner of an award, either by side or by team ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WinnerSpec {
    Side(Side),
    Team(i32),
}

impl FromStr for WinnerSpec {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if let Ok(team_id) = value.trim().parse::<i32>() {
            return Ok(Self::Team(team_id));
        }

        value.parse::<Side>().map(Self::Side)
    }
}

/// One line of a bulk award file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AwardInstruction {
    pub match_id: i32,
    pub reason: AwardReason,
    pub winner: WinnerSpec,
}

/// Result of a bulk award run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BatchReport {
    pub dry_run: bool,
    /// IDs of matches that were (or, in a dry run, would be) awarded
    pub applied: Vec<i32>,
    pub errors: Vec<ItemError>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ItemError {
    /// Zero-based position of the instruction in the batch
    pub index: usize,
    pub match_id: i32,
    pub message: String,
}

/// Matches voided by a category-wide exclusion.
#[derive(Clone, Debug, Default, Serialize)]
pub struct VoidReport {
    pub dry_run: bool,
    pub voided: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_winner_spec() {
        assert_eq!("home".parse::<WinnerSpec>().unwrap(), WinnerSpec::Side(Side::Home));
        assert_eq!(" AWAY ".parse::<WinnerSpec>().unwrap(), WinnerSpec::Side(Side::Away));
        assert_eq!("42".parse::<WinnerSpec>().unwrap(), WinnerSpec::Team(42));
        assert!(matches!("draw".parse::<WinnerSpec>(), Err(Error::ParseError(_))));
    }

    #[test]
    fn deserializes_instructions() {
        let json = r#"[
            {"match_id": 1, "reason": "walkover", "winner": "home"},
            {"match_id": 2, "reason": "protest", "winner": 7}
        ]"#;

        let instructions: Vec<AwardInstruction> = serde_json::from_str(json).unwrap();

        assert_eq!(instructions[0].winner, WinnerSpec::Side(Side::Home));
        assert_eq!(instructions[0].reason, AwardReason::Walkover);
        assert_eq!(instructions[1].winner, WinnerSpec::Team(7));
        assert_eq!(instructions[1].reason, AwardReason::Protest);
    }
}
