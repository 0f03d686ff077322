//! Bracket slots and tokens.
//!
//! A fixture in a knockout layout names its participants symbolically: a group
//! finishing position (`1ST A`), the winner or loser of an earlier knockout
//! matchday (`WINNER 22`, `LOSER 27`), or a literal team name. Until a slot can
//! be resolved it is represented by an archived placeholder team whose name
//! follows the `"<slot> (placeholder)"` convention.

use chrono::NaiveDateTime;
use entity::sea_orm_active_enums::SlotKind;
use serde::{Deserialize, Serialize};

use crate::{error::bracket::BracketError, model::db::TeamModel};

/// Matchdays at or above this value are knockout fixtures.
pub const KNOCKOUT_MATCHDAY: i32 = 21;

pub const PLACEHOLDER_SUFFIX: &str = "(placeholder)";

/// Maximum length of a team short name.
pub const SHORT_NAME_LEN: usize = 20;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum PlaceholderSlot {
    Winner(i32),
    Loser(i32),
    GroupPosition { position: usize, group: String },
}

impl PlaceholderSlot {
    /// Symbolic label such as `WINNER 22` or `1ST A`.
    pub fn label(&self) -> String {
        match self {
            Self::Winner(matchday) => format!("WINNER {}", matchday),
            Self::Loser(matchday) => format!("LOSER {}", matchday),
            Self::GroupPosition { position, group } => format!("{} {}", ordinal(*position), group),
        }
    }

    /// Name of the placeholder team standing in for this slot.
    pub fn team_name(&self) -> String {
        format!("{} {}", self.label(), PLACEHOLDER_SUFFIX)
    }

    /// Parses a placeholder team name back into its slot.
    pub fn parse_name(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        let lowered = trimmed.to_lowercase();
        let label = lowered.strip_suffix(PLACEHOLDER_SUFFIX)?;

        match BracketToken::parse(label) {
            Ok(BracketToken::Slot(slot)) => Some(slot),
            _ => None,
        }
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Self::Winner(_) => SlotKind::Winner,
            Self::Loser(_) => SlotKind::Loser,
            Self::GroupPosition { .. } => SlotKind::GroupPosition,
        }
    }

    pub fn matchday(&self) -> Option<i32> {
        match self {
            Self::Winner(matchday) | Self::Loser(matchday) => Some(*matchday),
            Self::GroupPosition { .. } => None,
        }
    }

    pub fn group(&self) -> Option<&str> {
        match self {
            Self::GroupPosition { group, .. } => Some(group),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<i32> {
        match self {
            Self::GroupPosition { position, .. } => Some(*position as i32),
            _ => None,
        }
    }

    /// Reads the structured slot columns of a placeholder team.
    ///
    /// Falls back to the name convention for rows created without slot columns.
    pub fn from_team(team: &TeamModel) -> Option<Self> {
        let structured = match (team.slot_kind, team.slot_matchday) {
            (Some(SlotKind::Winner), Some(matchday)) => Some(Self::Winner(matchday)),
            (Some(SlotKind::Loser), Some(matchday)) => Some(Self::Loser(matchday)),
            (Some(SlotKind::GroupPosition), _) => {
                match (team.slot_position, team.slot_group.as_ref()) {
                    (Some(position), Some(group)) if position > 0 => Some(Self::GroupPosition {
                        position: position as usize,
                        group: group.clone(),
                    }),
                    _ => None,
                }
            }
            _ => None,
        };

        structured.or_else(|| Self::parse_name(&team.name))
    }
}

/// Participant reference in a bracket layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BracketToken {
    Slot(PlaceholderSlot),
    Team(String),
}

impl BracketToken {
    /// Parses `1ST A`, `WINNER 22`, `LOSER 27` or a literal team name.
    ///
    /// A keyword or ordinal followed by anything other than a matchday number
    /// or a group letter is a team name, e.g. `Winner Boys` or `1st Avenue`.
    pub fn parse(raw: &str) -> Result<Self, BracketError> {
        let trimmed = raw.trim();
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let Some(first) = parts.first() else {
            return Err(BracketError::MalformedToken(raw.to_string()));
        };
        let head = first.to_uppercase();

        if head == "WINNER" || head == "LOSER" {
            let matchday = match parts.as_slice() {
                [_] => return Err(BracketError::MalformedToken(raw.to_string())),
                [_, number, rest @ ..] if number.chars().all(|c| c.is_ascii_digit()) => {
                    if !rest.is_empty() {
                        return Err(BracketError::MalformedToken(raw.to_string()));
                    }

                    number
                        .parse::<i32>()
                        .ok()
                        .filter(|matchday| *matchday > 0)
                        .ok_or_else(|| BracketError::MalformedToken(raw.to_string()))?
                }
                _ => return Ok(Self::Team(trimmed.to_string())),
            };

            return Ok(Self::Slot(if head == "WINNER" {
                PlaceholderSlot::Winner(matchday)
            } else {
                PlaceholderSlot::Loser(matchday)
            }));
        }

        if let Some(position) = parse_ordinal(&head) {
            return match parts.as_slice() {
                [_] => Err(BracketError::MalformedToken(raw.to_string())),
                [_, group] if is_group_letter(group) => {
                    Ok(Self::Slot(PlaceholderSlot::GroupPosition {
                        position,
                        group: group.to_uppercase(),
                    }))
                }
                _ => Ok(Self::Team(trimmed.to_string())),
            };
        }

        Ok(Self::Team(trimmed.to_string()))
    }
}

fn is_group_letter(word: &str) -> bool {
    word.len() == 1 && word.chars().all(|c| c.is_ascii_alphabetic())
}

/// English ordinal in upper case: `1ST`, `2ND`, `3RD`, `4TH`, `11TH`, `22ND`.
pub fn ordinal(position: usize) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "TH",
        (1, _) => "ST",
        (2, _) => "ND",
        (3, _) => "RD",
        _ => "TH",
    };

    format!("{}{}", position, suffix)
}

fn parse_ordinal(word: &str) -> Option<usize> {
    let digits_end = word.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }

    let (digits, suffix) = word.split_at(digits_end);
    let position = digits.parse::<usize>().ok().filter(|position| *position > 0)?;

    let expected = ordinal(position);
    if suffix.eq_ignore_ascii_case(expected.trim_start_matches(|c: char| c.is_ascii_digit())) {
        Some(position)
    } else {
        None
    }
}

/// Stage label derived from a match's matchday.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatchStage {
    #[serde(rename = "Group Stage")]
    GroupStage,
    Quarterfinal,
    Semifinal,
    #[serde(rename = "Third Place")]
    ThirdPlace,
    Final,
    Knockout,
}

impl MatchStage {
    /// `in_groups` is whether both participants hold a group membership in the season.
    pub fn from_matchday(matchday: Option<i32>, in_groups: bool) -> Self {
        match matchday {
            Some(22..=25) => Self::Quarterfinal,
            Some(26..=27) => Self::Semifinal,
            Some(28) => Self::ThirdPlace,
            Some(29) => Self::Final,
            Some(day) if day >= KNOCKOUT_MATCHDAY => Self::Knockout,
            _ if in_groups => Self::GroupStage,
            _ => Self::Knockout,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GroupStage => "Group Stage",
            Self::Quarterfinal => "Quarterfinal",
            Self::Semifinal => "Semifinal",
            Self::ThirdPlace => "Third Place",
            Self::Final => "Final",
            Self::Knockout => "Knockout",
        }
    }
}

impl std::fmt::Display for MatchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of resolving a group finishing position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Qualifier {
    /// The group is settled (or early resolution is allowed) and the team is known.
    Team(TeamModel),
    /// The round robin is incomplete; the slot stays a placeholder.
    Pending(PlaceholderSlot),
}

/// One fixture of a knockout layout.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FixtureDefinition {
    pub home: String,
    pub away: String,
    pub match_date: NaiveDateTime,
    pub matchday: i32,
    #[serde(default)]
    pub venue: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BracketLayout {
    pub fixtures: Vec<FixtureDefinition>,
}

impl BracketLayout {
    /// Eight-team bracket fed by four groups.
    ///
    /// Quarterfinals (22-25) kick off two hours apart from `first_kickoff`, the
    /// semifinals (26-27) follow a week later and the third place match (28) and
    /// final (29) a week after that.
    pub fn standard_eight(first_kickoff: NaiveDateTime) -> Self {
        let week = chrono::TimeDelta::days(7);
        let slot = chrono::TimeDelta::hours(2);
        let at = |weeks: i32, index: i32| first_kickoff + week * weeks + slot * index;

        let fixture = |home: &str, away: &str, matchday: i32, match_date: NaiveDateTime| {
            FixtureDefinition {
                home: home.to_string(),
                away: away.to_string(),
                match_date,
                matchday,
                venue: None,
            }
        };

        Self {
            fixtures: vec![
                fixture("1ST A", "2ND B", 22, at(0, 0)),
                fixture("1ST C", "2ND D", 23, at(0, 1)),
                fixture("1ST B", "2ND A", 24, at(0, 2)),
                fixture("1ST D", "2ND C", 25, at(0, 3)),
                fixture("WINNER 22", "WINNER 23", 26, at(1, 0)),
                fixture("WINNER 24", "WINNER 25", 27, at(1, 1)),
                fixture("LOSER 26", "LOSER 27", 28, at(2, 0)),
                fixture("WINNER 26", "WINNER 27", 29, at(2, 1)),
            ],
        }
    }
}

/// Per-fixture outcome of bracket construction.
#[derive(Clone, Debug, Default, Serialize)]
pub struct BracketReport {
    pub dry_run: bool,
    /// IDs of matches created by this run
    pub created: Vec<i32>,
    /// IDs of equivalent matches that already existed
    pub existing: Vec<i32>,
    pub errors: Vec<FixtureError>,
}

#[derive(Clone, Debug, Serialize)]
pub struct FixtureError {
    pub matchday: i32,
    pub home: String,
    pub away: String,
    pub message: String,
}

/// Placeholder replacements made for one decided knockout match.
#[derive(Clone, Debug, Serialize)]
pub struct ResolutionReport {
    pub match_id: i32,
    pub matchday: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    /// IDs of matches whose participants were rewritten
    pub replaced: Vec<i32>,
    pub deleted_placeholders: Vec<i32>,
}

/// One group position placeholder replaced by its qualifier.
#[derive(Clone, Debug, Serialize)]
pub struct SlotResolution {
    pub slot: String,
    pub placeholder_id: i32,
    pub team_id: i32,
    pub replaced: Vec<i32>,
}

/// Outcome of resolving a season's group position placeholders.
#[derive(Clone, Debug, Default, Serialize)]
pub struct GroupSlotReport {
    pub resolved: Vec<SlotResolution>,
    /// Slots whose group has not finished its round robin
    pub pending: Vec<String>,
    /// Slots that could not be resolved, with the reason
    pub skipped: Vec<String>,
    pub deleted_placeholders: Vec<i32>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct RepropagationReport {
    pub group_slots: GroupSlotReport,
    pub resolutions: Vec<ResolutionReport>,
}
