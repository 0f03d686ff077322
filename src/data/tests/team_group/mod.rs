mod assign;
mod members;

use super::*;

use crate::data::team_group::TeamGroupRepository;
