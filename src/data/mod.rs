//! League data repositories.
//!
//! Each repository wraps one table and is generic over [`sea_orm::ConnectionTrait`]
//! so the same methods run against the connection pool or inside a transaction.

pub mod group;
pub mod league_match;
pub mod season;
pub mod team;
pub mod team_group;

#[cfg(test)]
mod tests;
