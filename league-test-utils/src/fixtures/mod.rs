//! Test fixture modules.
//!
//! - `league` - inserts teams, seasons, groups and matches into the test database
//! - `factory` - builds in-memory models without touching the database

pub mod factory;
pub mod league;
