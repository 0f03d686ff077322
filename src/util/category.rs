use entity::sea_orm_active_enums::SeasonCategory;
use sea_orm::{ActiveEnum, Iterable};

/// Parses a stored category key such as `senior_boys`, ignoring case.
pub fn parse_category(key: &str) -> Option<SeasonCategory> {
    let key = key.trim();

    SeasonCategory::iter().find(|category| category.to_value().eq_ignore_ascii_case(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        assert_eq!(parse_category("girls"), Some(SeasonCategory::Girls));
        assert_eq!(parse_category(" Senior_Boys "), Some(SeasonCategory::SeniorBoys));
        assert_eq!(parse_category("veterans"), None);
    }
}
