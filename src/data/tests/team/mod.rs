mod delete_unreferenced_placeholders;
mod find_by_name;
mod get_or_create_placeholder;

use super::*;

use crate::{data::team::TeamRepository, model::bracket::PlaceholderSlot};
