use thiserror::Error;

/// Lookup and validation failures raised by league operations.
#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("Season {0:?} not found")]
    SeasonNotFound(String),
    #[error("Team {0:?} not found")]
    TeamNotFound(String),
    #[error("Group {group:?} not found in season ID {season_id}")]
    GroupNotFound { season_id: i32, group: String },
    #[error("Match ID {0} not found")]
    MatchNotFound(i32),
    #[error("Scores must be non-negative, got {home}-{away}")]
    NegativeScore { home: i32, away: i32 },
    #[error("Team ID {team_id} is not a participant of match ID {match_id}")]
    WinnerNotParticipant { match_id: i32, team_id: i32 },
    #[error("Unknown category {0:?}")]
    UnknownCategory(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Invalid date {value:?}, expected format DD/MM/YYYY HH:MM:SS AM/PM")]
    InvalidDate { value: String },
    #[error("Match ID {0} is void")]
    MatchVoid(i32),
    #[error("Match ID {0} is not a knockout fixture")]
    NotKnockout(i32),
}
