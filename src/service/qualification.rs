//! Group qualification resolver.
//!
//! Ranks each group using only the group stage matches played between its own
//! members and names the team at a finishing position, unless the round robin
//! is incomplete and the season's category must wait for it.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    config::CategoryRules,
    data::{
        group::GroupRepository, league_match::MatchRepository, season::SeasonRepository,
        team_group::TeamGroupRepository,
    },
    error::{bracket::BracketError, league::LeagueError, Error},
    model::{
        bracket::{PlaceholderSlot, Qualifier, KNOCKOUT_MATCHDAY},
        db::{MatchModel, SeasonModel, TeamModel},
        standing::StandingRow,
    },
    service::standings::{compute_table, latest_per_pair},
};

/// Group stage matches carry no matchday or one below the knockout threshold.
pub fn is_group_stage(matchday: Option<i32>) -> bool {
    matchday.is_none_or(|matchday| matchday < KNOCKOUT_MATCHDAY)
}

/// A group's table together with its round robin progress.
#[derive(Clone, Debug)]
pub struct GroupTable {
    pub rows: Vec<StandingRow>,
    /// Distinct member pairs with a counted result
    pub played_pairs: usize,
    /// Pairs a full round robin requires, `n * (n - 1) / 2`
    pub required_pairs: usize,
}

impl GroupTable {
    pub fn is_complete(&self) -> bool {
        self.played_pairs >= self.required_pairs
    }
}

/// Ranks `members` using only group stage matches played among themselves.
pub fn group_table(members: &[TeamModel], matches: &[MatchModel]) -> GroupTable {
    let member_ids: HashSet<i32> = members.iter().map(|team| team.id).collect();

    let internal: Vec<MatchModel> = matches
        .iter()
        .filter(|m| is_group_stage(m.matchday))
        .filter(|m| member_ids.contains(&m.home_team_id) && member_ids.contains(&m.away_team_id))
        .filter(|m| m.home_team_id != m.away_team_id)
        .cloned()
        .collect();

    let n = members.len();

    GroupTable {
        rows: compute_table(members, &internal),
        played_pairs: latest_per_pair(&internal).len(),
        required_pairs: n * n.saturating_sub(1) / 2,
    }
}

pub struct QualificationService<'a> {
    db: &'a DatabaseConnection,
    rules: &'a CategoryRules,
}

impl<'a> QualificationService<'a> {
    /// Creates a new instance of [`QualificationService`]
    pub fn new(db: &'a DatabaseConnection, rules: &'a CategoryRules) -> Self {
        Self { db, rules }
    }

    /// Resolves the team finishing at `position` (1 = winner) in a season's group.
    ///
    /// # Arguments
    /// - `season_id` - ID of the season
    /// - `group` - Group letter, case-insensitive
    /// - `position` - Finishing position starting at 1
    ///
    /// # Returns
    /// - `Ok(Qualifier::Team)` - The group is settled, or the category allows early resolution
    /// - `Ok(Qualifier::Pending)` - The round robin is incomplete
    /// - `Err(Error::BracketError)` - Unknown group or not enough teams for the position
    /// - `Err(Error::LeagueError)` - Season does not exist
    pub async fn resolve(
        &self,
        season_id: i32,
        group: &str,
        position: usize,
    ) -> Result<Qualifier, Error> {
        let season = SeasonRepository::new(self.db)
            .get(season_id)
            .await?
            .ok_or_else(|| LeagueError::SeasonNotFound(season_id.to_string()))?;

        Self::resolve_position(self.db, self.rules, &season, group, position).await
    }

    /// Table and round robin progress of one group.
    pub async fn group_progress(&self, season_id: i32, group: &str) -> Result<GroupTable, Error> {
        let group_model = GroupRepository::new(self.db)
            .find_by_name(season_id, group)
            .await?
            .ok_or_else(|| BracketError::UnknownGroup {
                season_id,
                group: group.to_string(),
            })?;

        Ok(Self::load_group_table(self.db, season_id, group_model.id).await?)
    }

    /// Resolves a group finishing position over any connection.
    pub async fn resolve_position<C: ConnectionTrait>(
        db: &C,
        rules: &CategoryRules,
        season: &SeasonModel,
        group: &str,
        position: usize,
    ) -> Result<Qualifier, Error> {
        let group_name = group.trim().to_uppercase();

        let group_model = GroupRepository::new(db)
            .find_by_name(season.id, &group_name)
            .await?
            .ok_or_else(|| BracketError::UnknownGroup {
                season_id: season.id,
                group: group_name.clone(),
            })?;

        let table = Self::load_group_table(db, season.id, group_model.id).await?;

        if position == 0 || position > table.rows.len() {
            return Err(BracketError::InsufficientTeams {
                group: group_name,
                position,
                available: table.rows.len(),
            }
            .into());
        }

        if !table.is_complete() && !rules.allows_early_qualification(season.category) {
            tracing::debug!(
                season_id = season.id,
                group = %group_name,
                played = table.played_pairs,
                required = table.required_pairs,
                "Group round robin incomplete, keeping position {} as placeholder",
                position
            );

            return Ok(Qualifier::Pending(PlaceholderSlot::GroupPosition {
                position,
                group: group_name,
            }));
        }

        let row = &table.rows[position - 1];
        let members = TeamGroupRepository::new(db).members(group_model.id).await?;
        let team = members
            .into_iter()
            .find(|team| team.id == row.team_id)
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Ranked team ID {} missing from group {} members",
                    row.team_id, group_name
                ))
            })?;

        Ok(Qualifier::Team(team))
    }

    async fn load_group_table<C: ConnectionTrait>(
        db: &C,
        season_id: i32,
        group_id: i32,
    ) -> Result<GroupTable, sea_orm::DbErr> {
        let members: Vec<TeamModel> = TeamGroupRepository::new(db)
            .members(group_id)
            .await?
            .into_iter()
            .filter(|team| !team.archived)
            .collect();
        let matches = MatchRepository::new(db)
            .completed_for_season(season_id)
            .await?;

        Ok(group_table(&members, &matches))
    }
}

#[cfg(test)]
mod tests;
