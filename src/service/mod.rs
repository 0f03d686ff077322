//! Service layer for league rules.
//!
//! Services coordinate repositories into the operations of the engine:
//! standings, group qualification, placeholder resolution, awards and voids,
//! score entry with its progression trigger, match import and group
//! administration. Read paths retry transient database failures.

pub mod award;
pub mod group;
pub mod import;
pub mod league_match;
pub mod placeholder;
pub mod progression;
pub mod qualification;
pub mod retry;
pub mod standings;
