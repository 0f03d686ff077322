//! Database model type aliases.
//!
//! Short names for the sea-orm entity models used throughout the engine so that
//! services and repositories don't need to spell out `entity::<table>::Model`.

/// Team record, covering both real teams and archived bracket placeholders.
///
/// # Fields (from `entity::team::Model`)
/// - `id` - Primary key
/// - `name` - Unique display name
/// - `short_name` - Abbreviated name, at most 20 characters
/// - `archived` - Hidden from public listings, always true for placeholders
/// - `slot_kind`, `slot_matchday`, `slot_group`, `slot_position` - Structured
///   bracket slot a placeholder stands in for, `None` for real teams
/// - `created_at` - Creation timestamp
pub type TeamModel = entity::team::Model;

/// Season record owning groups and matches.
pub type SeasonModel = entity::season::Model;

/// Single-letter subdivision of a season.
pub type GroupModel = entity::season_group::Model;

/// Membership of a team in a group for one season.
pub type TeamGroupModel = entity::team_group::Model;

/// Match record with scores, award metadata, void flag and manual finish data.
///
/// `matchday` values of 21 and above identify knockout fixtures: 22-25 are the
/// quarterfinals, 26-27 the semifinals, 28 the third place match and 29 the final.
pub type MatchModel = entity::league_match::Model;
