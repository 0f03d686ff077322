mod get_or_create;

use super::*;

use crate::data::group::GroupRepository;
