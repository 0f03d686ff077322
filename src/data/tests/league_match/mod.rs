mod completed_for_season;
mod find_equivalent;
mod replace_team;
mod save;

use super::*;

use crate::data::league_match::MatchRepository;
