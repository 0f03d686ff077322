//! Error types for the league engine.
//!
//! Domain failures are grouped into sub-enums (configuration, league lookups and
//! validation, bracket token resolution) which the top level [`Error`] aggregates
//! together with database, I/O and serialization errors so that `?` works across
//! every layer.

pub mod bracket;
pub mod config;
pub mod league;
pub mod retry;

use thiserror::Error;

use crate::error::{bracket::BracketError, config::ConfigError, league::LeagueError};

#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Not-found or validation error for a season, team, group or match.
    #[error(transparent)]
    LeagueError(#[from] LeagueError),
    /// Bracket token could not be resolved to a team.
    #[error(transparent)]
    BracketError(#[from] BracketError),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Internal error indicating a bug in the league engine.
    #[error("Internal error in the league engine, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Failed reading an input file.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Failed reading or writing JSON.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}
