use std::collections::HashSet;

use entity::sea_orm_active_enums::SeasonCategory;
use sea_orm::Iterable;

use crate::{error::config::ConfigError, util::category::parse_category};

pub static DEFAULT_SYSTEM_ACTOR: &str = "system";

pub struct Config {
    pub database_url: String,
    pub rules: CategoryRules,
    pub system_actor: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let early_qualification = match std::env::var("LEAGUE_EARLY_QUALIFICATION_CATEGORIES") {
            Ok(value) => parse_category_list("LEAGUE_EARLY_QUALIFICATION_CATEGORIES", &value)?,
            Err(_) => HashSet::new(),
        };

        let progression = match std::env::var("LEAGUE_PROGRESSION_CATEGORIES") {
            Ok(value) => parse_category_list("LEAGUE_PROGRESSION_CATEGORIES", &value)?,
            Err(_) => SeasonCategory::iter().collect(),
        };

        let system_actor = std::env::var("LEAGUE_SYSTEM_ACTOR")
            .ok()
            .filter(|actor| !actor.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SYSTEM_ACTOR.to_string());

        Ok(Self {
            database_url,
            rules: CategoryRules {
                early_qualification,
                progression,
            },
            system_actor,
        })
    }
}

/// Per-category switches for qualification and knockout progression.
#[derive(Clone, Debug)]
pub struct CategoryRules {
    /// Categories whose groups may name qualifiers before the round robin is complete
    pub early_qualification: HashSet<SeasonCategory>,
    /// Categories for which finalized knockout matches advance the bracket automatically
    pub progression: HashSet<SeasonCategory>,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self {
            early_qualification: HashSet::new(),
            progression: SeasonCategory::iter().collect(),
        }
    }
}

impl CategoryRules {
    pub fn allows_early_qualification(&self, category: SeasonCategory) -> bool {
        self.early_qualification.contains(&category)
    }

    pub fn runs_progression(&self, category: SeasonCategory) -> bool {
        self.progression.contains(&category)
    }
}

fn parse_category_list(var: &str, value: &str) -> Result<HashSet<SeasonCategory>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| {
            parse_category(key).ok_or_else(|| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("unknown category {:?}", key),
            })
        })
        .collect()
}
