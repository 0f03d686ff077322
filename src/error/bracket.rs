use thiserror::Error;

/// Failures resolving a symbolic bracket slot to a team.
#[derive(Error, Debug)]
pub enum BracketError {
    #[error("Malformed bracket token {0:?}")]
    MalformedToken(String),
    #[error("Group {group:?} does not exist in season ID {season_id}")]
    UnknownGroup { season_id: i32, group: String },
    #[error("Group {group} has {available} team(s), cannot fill position {position}")]
    InsufficientTeams {
        group: String,
        position: usize,
        available: usize,
    },
    #[error("No team named {0:?}")]
    UnknownTeam(String),
    #[error("Fixture would pair team {0:?} against itself")]
    SameTeam(String),
}
