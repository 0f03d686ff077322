//! League engine: standings, group qualification, knockout bracket progression,
//! and administrative awards/voids over a relational store.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
