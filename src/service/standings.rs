//! Standings calculator.
//!
//! Tables are derived on read from the stored match state: [`compute_table`] is
//! a pure function over teams and matches, and [`StandingsService`] gathers the
//! inputs for a season.

use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::SeasonCategory;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    data::{
        group::GroupRepository, league_match::MatchRepository, season::SeasonRepository,
        team::TeamRepository, team_group::TeamGroupRepository,
    },
    error::{league::LeagueError, Error},
    model::{
        db::{MatchModel, SeasonModel, TeamModel},
        standing::{GroupStandings, StandingRow},
    },
    service::retry::RetryContext,
};

/// Builds a league table for `teams` from `matches`.
///
/// Only played, non-void matches count, and for each unordered team pair only the
/// latest of them (by kick-off, then awarded over not awarded, then record ID)
/// contributes. Matches involving a team outside `teams` are ignored. A missing
/// score on a played match counts as zero.
///
/// Rows are ordered by points, goal difference and goals scored (all descending),
/// then by team name.
pub fn compute_table(teams: &[TeamModel], matches: &[MatchModel]) -> Vec<StandingRow> {
    let mut rows: HashMap<i32, StandingRow> = teams
        .iter()
        .map(|team| (team.id, StandingRow::new(team.id, &team.name)))
        .collect();

    for latest in latest_per_pair(matches).into_values() {
        if !rows.contains_key(&latest.home_team_id) || !rows.contains_key(&latest.away_team_id) {
            continue;
        }

        let home_goals = latest.home_score.unwrap_or(0);
        let away_goals = latest.away_score.unwrap_or(0);

        if let Some(home) = rows.get_mut(&latest.home_team_id) {
            home.record(home_goals, away_goals);
        }
        if let Some(away) = rows.get_mut(&latest.away_team_id) {
            away.record(away_goals, home_goals);
        }
    }

    let mut table: Vec<StandingRow> = rows.into_values().collect();
    sort_table(&mut table);
    table
}

/// Sorts rows into table order.
pub fn sort_table(rows: &mut [StandingRow]) {
    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_diff.cmp(&a.goal_diff))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.team_name.cmp(&b.team_name))
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
}

/// Latest counted match for each unordered team pair.
pub fn latest_per_pair(matches: &[MatchModel]) -> HashMap<(i32, i32), &MatchModel> {
    let mut latest: HashMap<(i32, i32), &MatchModel> = HashMap::new();

    for candidate in matches.iter().filter(|m| m.is_played && !m.void) {
        let pair = pair_key(candidate.home_team_id, candidate.away_team_id);

        match latest.get(&pair) {
            Some(current) if !supersedes(candidate, current) => {}
            _ => {
                latest.insert(pair, candidate);
            }
        }
    }

    latest
}

pub fn pair_key(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn supersedes(candidate: &MatchModel, current: &MatchModel) -> bool {
    (candidate.match_date, candidate.awarded, candidate.id)
        > (current.match_date, current.awarded, current.id)
}

pub struct StandingsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StandingsService<'a> {
    /// Creates a new instance of [`StandingsService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the table of a season.
    ///
    /// The season's teams are its group members plus every team that appears in
    /// one of its matches, excluding archived placeholders.
    ///
    /// # Arguments
    /// - `season_id` - ID of the season
    ///
    /// # Returns
    /// - `Ok(Vec<StandingRow>)` - Rows in table order
    /// - `Err(Error::LeagueError)` - Season does not exist
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn season_table(&self, season_id: i32) -> Result<Vec<StandingRow>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("season ID {} standings", season_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                SeasonRepository::new(&db)
                    .get(season_id)
                    .await?
                    .ok_or_else(|| LeagueError::SeasonNotFound(season_id.to_string()))?;

                Ok(Self::compute_for_season(&db, season_id).await?)
            })
        })
        .await
    }

    /// Computes one table per group of the season, each filtered from the season
    /// table to the group's members.
    ///
    /// # Returns
    /// - `Ok(Vec<GroupStandings>)` - Groups ordered by name
    /// - `Err(Error::LeagueError)` - Season does not exist
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn grouped_table(&self, season_id: i32) -> Result<Vec<GroupStandings>, Error> {
        let season_table = self.season_table(season_id).await?;

        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("season ID {} group standings", season_id), |_| {
            let db = db.clone();
            let season_table = season_table.clone();

            Box::pin(async move {
                let groups = GroupRepository::new(&db).list_for_season(season_id).await?;
                let membership_repo = TeamGroupRepository::new(&db);

                let mut grouped = Vec::with_capacity(groups.len());
                for group in groups {
                    let member_ids: HashSet<i32> = membership_repo
                        .members(group.id)
                        .await?
                        .into_iter()
                        .filter(|team| !team.archived)
                        .map(|team| team.id)
                        .collect();

                    let mut rows: Vec<StandingRow> = season_table
                        .iter()
                        .filter(|row| member_ids.contains(&row.team_id))
                        .cloned()
                        .collect();
                    sort_table(&mut rows);

                    grouped.push(GroupStandings {
                        group_id: group.id,
                        group_name: group.name,
                        rows,
                    });
                }

                Ok(grouped)
            })
        })
        .await
    }

    /// Table of the most recently started season, optionally within a category.
    ///
    /// # Returns
    /// - `Ok(Some((SeasonModel, Vec<StandingRow>)))` - Latest season and its table
    /// - `Ok(None)` - No season matches
    pub async fn latest_table(
        &self,
        category: Option<SeasonCategory>,
    ) -> Result<Option<(SeasonModel, Vec<StandingRow>)>, Error> {
        let Some(season) = SeasonRepository::new(self.db).latest(category).await? else {
            return Ok(None);
        };

        let table = self.season_table(season.id).await?;

        Ok(Some((season, table)))
    }

    /// Computes a season table over any connection, including an open transaction.
    pub async fn compute_for_season<C: ConnectionTrait>(
        db: &C,
        season_id: i32,
    ) -> Result<Vec<StandingRow>, sea_orm::DbErr> {
        let matches = MatchRepository::new(db).list_for_season(season_id).await?;
        let memberships = TeamGroupRepository::new(db)
            .list_for_season(season_id)
            .await?;

        let mut team_ids: Vec<i32> = memberships.iter().map(|m| m.team_id).collect();
        team_ids.extend(matches.iter().flat_map(|m| [m.home_team_id, m.away_team_id]));
        team_ids.sort_unstable();
        team_ids.dedup();

        let teams: Vec<TeamModel> = TeamRepository::new(db)
            .get_many(&team_ids)
            .await?
            .into_iter()
            .filter(|team| !team.archived)
            .collect();

        Ok(compute_table(&teams, &matches))
    }
}

#[cfg(test)]
mod tests;
