//! Score entry commands and match queries.
//!
//! Each command locks the match row, applies its change inside a transaction
//! and, once committed, hands the before and after state to the progression
//! trigger.

use chrono::Utc;
use rand::Rng;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    config::CategoryRules,
    data::{
        league_match::MatchRepository, season::SeasonRepository, team::TeamRepository,
        team_group::TeamGroupRepository,
    },
    error::{league::LeagueError, Error},
    model::{
        api::MatchDto,
        bracket::{MatchStage, KNOCKOUT_MATCHDAY},
        db::MatchModel,
    },
    service::{
        progression::{MatchTransition, ProgressionOutcome, ProgressionService},
        retry::RetryContext,
    },
    util::time::derive_is_played,
};

/// Extra time added to a manual finish when none was recorded.
const DEFAULT_EXTRA_MINUTES: std::ops::RangeInclusive<i32> = 1..=5;

/// Whether a score entry is the final result or a running score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreEntry {
    /// The match counts as played once its kick-off has passed
    Final,
    /// Scores are stored without changing whether the match is played
    Interim,
}

/// A committed match mutation and what progression did with it.
#[derive(Clone, Debug)]
pub struct SavedMatch {
    pub league_match: MatchModel,
    pub progression: ProgressionOutcome,
}

pub struct MatchService<'a> {
    db: &'a DatabaseConnection,
    rules: &'a CategoryRules,
}

impl<'a> MatchService<'a> {
    /// Creates a new instance of [`MatchService`]
    pub fn new(db: &'a DatabaseConnection, rules: &'a CategoryRules) -> Self {
        Self { db, rules }
    }

    /// Records the score of a match.
    ///
    /// # Arguments
    /// - `match_id` - ID of the match
    /// - `home_score` / `away_score` - Goals, must be non-negative
    /// - `entry` - [`ScoreEntry::Final`] derives `is_played`, [`ScoreEntry::Interim`] leaves it
    ///
    /// # Returns
    /// - `Ok(SavedMatch)` - Updated match and progression outcome
    /// - `Err(Error::LeagueError)` - Negative score, void match or match not found
    pub async fn record_score(
        &self,
        match_id: i32,
        home_score: i32,
        away_score: i32,
        entry: ScoreEntry,
    ) -> Result<SavedMatch, Error> {
        validate_score(home_score, away_score)?;

        self.update_match(match_id, |league_match| {
            ensure_not_void(league_match)?;

            league_match.home_score = Some(home_score);
            league_match.away_score = Some(away_score);

            if entry == ScoreEntry::Final {
                league_match.is_played = league_match.is_played
                    || derive_is_played(league_match, Utc::now().naive_utc());
            }

            Ok(())
        })
        .await
    }

    /// Records a penalty shootout result.
    pub async fn set_penalties(
        &self,
        match_id: i32,
        penalty_home: i32,
        penalty_away: i32,
    ) -> Result<SavedMatch, Error> {
        validate_score(penalty_home, penalty_away)?;

        self.update_match(match_id, |league_match| {
            ensure_not_void(league_match)?;

            league_match.penalty_home = Some(penalty_home);
            league_match.penalty_away = Some(penalty_away);

            Ok(())
        })
        .await
    }

    /// Marks a match as finished by an official.
    ///
    /// Extra time comes from `extra_minutes`, else the value already recorded,
    /// else a random 1 to 5 minutes.
    pub async fn mark_finished(
        &self,
        match_id: i32,
        extra_minutes: Option<i32>,
        actor: &str,
    ) -> Result<SavedMatch, Error> {
        if let Some(minutes) = extra_minutes.filter(|minutes| *minutes < 0) {
            return Err(Error::ParseError(format!(
                "extra minutes must be non-negative, got {}",
                minutes
            )));
        }

        self.update_match(match_id, |league_match| {
            ensure_not_void(league_match)?;

            let minutes = extra_minutes
                .or(league_match.extra_time_minutes)
                .unwrap_or_else(|| rand::rng().random_range(DEFAULT_EXTRA_MINUTES));

            league_match.extra_time_minutes = Some(minutes);
            league_match.manual_finished_at = Some(Utc::now().naive_utc());
            league_match.manual_finished_by = actor.to_string();
            league_match.is_played = true;

            Ok(())
        })
        .await
    }

    /// Gets a match with its participants' names and stage label.
    ///
    /// # Returns
    /// - `Ok(Some(MatchDto))` - Match found
    /// - `Ok(None)` - No match with that ID
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_match(&self, match_id: i32) -> Result<Option<MatchDto>, Error> {
        let mut ctx: RetryContext<()> = RetryContext::new();

        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get match ID {}", match_id), |_| {
            let db = db.clone();

            Box::pin(async move {
                let Some(league_match) = MatchRepository::new(&db).get(match_id).await? else {
                    return Ok(None);
                };

                Ok(Some(to_dto(&db, league_match).await?))
            })
        })
        .await
    }

    /// Lists a season's matches ordered by matchday and kick-off.
    pub async fn list_season_matches(&self, season_id: i32) -> Result<Vec<MatchDto>, Error> {
        SeasonRepository::new(self.db)
            .get(season_id)
            .await?
            .ok_or_else(|| LeagueError::SeasonNotFound(season_id.to_string()))?;

        let matches = MatchRepository::new(self.db)
            .list_for_season(season_id)
            .await?;

        let mut dtos = Vec::with_capacity(matches.len());
        for league_match in matches {
            dtos.push(to_dto(self.db, league_match).await?);
        }

        Ok(dtos)
    }

    /// Locks, mutates and saves a match, then runs progression on the committed change.
    pub(crate) async fn update_match<F>(&self, match_id: i32, mutate: F) -> Result<SavedMatch, Error>
    where
        F: FnOnce(&mut MatchModel) -> Result<(), Error>,
    {
        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        let before = match_repo
            .get_for_update(match_id)
            .await?
            .ok_or(LeagueError::MatchNotFound(match_id))?;

        let mut after = before.clone();
        mutate(&mut after)?;

        let after = match_repo.save(after).await?;
        txn.commit().await?;

        let transition = MatchTransition::new(before, after);
        let progression = ProgressionService::new(self.db, self.rules)
            .on_match_saved(&transition)
            .await;

        Ok(SavedMatch {
            league_match: transition.after,
            progression,
        })
    }
}

/// Stage label of a match.
///
/// Knockout matchdays map to their round; other matches are group stage only
/// when both teams hold a group membership in the season.
pub async fn match_stage<C: sea_orm::ConnectionTrait>(
    db: &C,
    league_match: &MatchModel,
) -> Result<MatchStage, sea_orm::DbErr> {
    if league_match
        .matchday
        .is_some_and(|matchday| matchday >= KNOCKOUT_MATCHDAY)
    {
        return Ok(MatchStage::from_matchday(league_match.matchday, false));
    }

    let membership_repo = TeamGroupRepository::new(db);
    let in_groups = membership_repo
        .is_member(league_match.home_team_id, league_match.season_id)
        .await?
        && membership_repo
            .is_member(league_match.away_team_id, league_match.season_id)
            .await?;

    Ok(MatchStage::from_matchday(league_match.matchday, in_groups))
}

async fn to_dto<C: sea_orm::ConnectionTrait>(
    db: &C,
    league_match: MatchModel,
) -> Result<MatchDto, Error> {
    let team_repo = TeamRepository::new(db);

    let home = team_repo
        .get(league_match.home_team_id)
        .await?
        .ok_or_else(|| {
            Error::InternalError(format!(
                "Home team ID {} of match ID {} not found",
                league_match.home_team_id, league_match.id
            ))
        })?;
    let away = team_repo
        .get(league_match.away_team_id)
        .await?
        .ok_or_else(|| {
            Error::InternalError(format!(
                "Away team ID {} of match ID {} not found",
                league_match.away_team_id, league_match.id
            ))
        })?;

    let stage = match_stage(db, &league_match).await?;

    Ok(MatchDto::new(league_match, &home, &away, stage))
}

fn validate_score(home: i32, away: i32) -> Result<(), LeagueError> {
    if home < 0 || away < 0 {
        return Err(LeagueError::NegativeScore { home, away });
    }

    Ok(())
}

fn ensure_not_void(league_match: &MatchModel) -> Result<(), Error> {
    if league_match.void {
        return Err(LeagueError::MatchVoid(league_match.id).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests;
