mod find_by_id_or_name;
mod latest;

use super::*;

use crate::data::season::SeasonRepository;
