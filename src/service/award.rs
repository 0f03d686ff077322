//! Award and void adjustments.
//!
//! An award replaces a result with a fixed 3-0 for the designated winner and
//! keeps the scores it overrode; a void wipes the result entirely. The model
//! level rules are pure functions, [`AwardService`] applies them to stored
//! matches under row locks.

use chrono::{NaiveDateTime, Utc};
use entity::sea_orm_active_enums::{AwardReason, SeasonCategory};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    config::CategoryRules,
    data::{league_match::MatchRepository, season::SeasonRepository, team::TeamRepository},
    error::{league::LeagueError, Error},
    model::{
        award::{AwardInstruction, BatchReport, ItemError, Side, VoidReport, WinnerSpec},
        db::MatchModel,
    },
    service::{
        league_match::{MatchService, SavedMatch},
        progression::{MatchTransition, ProgressionService},
    },
    util::time::derive_is_played,
};

/// Goals credited to the winner of an awarded match.
pub const AWARDED_GOALS: i32 = 3;

pub const VOID_PREFIX: &str = "VOID:";

/// Resolves an award winner to a participating team ID.
pub fn winner_team_id(league_match: &MatchModel, winner: WinnerSpec) -> Result<i32, LeagueError> {
    let team_id = match winner {
        WinnerSpec::Side(Side::Home) => league_match.home_team_id,
        WinnerSpec::Side(Side::Away) => league_match.away_team_id,
        WinnerSpec::Team(team_id) => team_id,
    };

    if team_id != league_match.home_team_id && team_id != league_match.away_team_id {
        return Err(LeagueError::WinnerNotParticipant {
            match_id: league_match.id,
            team_id,
        });
    }

    Ok(team_id)
}

/// Awards a match to `winner_id`.
///
/// The scores in place before the first award are kept in the `original_*`
/// fields; re-awarding corrects the winner without touching that backup. A
/// walkover always counts as played, a protest only when the match itself would.
pub fn apply_award(
    league_match: &mut MatchModel,
    winner_id: i32,
    reason: AwardReason,
    actor: &str,
    now: NaiveDateTime,
) -> Result<(), LeagueError> {
    let winner_id = winner_team_id(league_match, WinnerSpec::Team(winner_id))?;

    if !league_match.awarded {
        league_match.original_home_score = league_match.home_score;
        league_match.original_away_score = league_match.away_score;
    }

    let (home, away) = if winner_id == league_match.home_team_id {
        (AWARDED_GOALS, 0)
    } else {
        (0, AWARDED_GOALS)
    };
    league_match.home_score = Some(home);
    league_match.away_score = Some(away);

    league_match.awarded = true;
    league_match.awarded_reason = Some(reason);
    league_match.awarded_to_id = Some(winner_id);
    league_match.awarded_at = Some(now);
    league_match.awarded_by = actor.to_string();
    league_match.void = false;

    league_match.is_played = match reason {
        AwardReason::Walkover => true,
        AwardReason::Protest => league_match.is_played || derive_is_played(league_match, now),
    };

    Ok(())
}

/// Voids a match: no result, no award, not played.
pub fn apply_void(league_match: &mut MatchModel, actor: &str) {
    league_match.home_score = None;
    league_match.away_score = None;
    league_match.penalty_home = None;
    league_match.penalty_away = None;

    league_match.awarded = false;
    league_match.awarded_reason = None;
    league_match.awarded_to_id = None;
    league_match.original_home_score = None;
    league_match.original_away_score = None;
    league_match.awarded_at = None;
    league_match.awarded_by = actor.to_string();

    league_match.manual_finished_at = None;
    league_match.manual_finished_by = String::new();
    league_match.extra_time_minutes = None;

    league_match.void = true;
    league_match.is_played = false;

    if !league_match.venue.starts_with(VOID_PREFIX) {
        league_match.venue = if league_match.venue.trim().is_empty() {
            format!("{} both teams did not participate", VOID_PREFIX)
        } else {
            format!("{} {}", VOID_PREFIX, league_match.venue)
        };
    }
}

pub struct AwardService<'a> {
    db: &'a DatabaseConnection,
    rules: &'a CategoryRules,
}

impl<'a> AwardService<'a> {
    /// Creates a new instance of [`AwardService`]
    pub fn new(db: &'a DatabaseConnection, rules: &'a CategoryRules) -> Self {
        Self { db, rules }
    }

    /// Awards a single match.
    ///
    /// # Arguments
    /// - `match_id` - ID of the match
    /// - `winner` - Winning side or team ID, must be a participant
    /// - `reason` - Protest or walkover
    /// - `actor` - Recorded in `awarded_by`
    ///
    /// # Returns
    /// - `Ok(SavedMatch)` - Awarded match and progression outcome
    /// - `Err(Error::LeagueError)` - Match not found or winner not a participant
    pub async fn award(
        &self,
        match_id: i32,
        winner: WinnerSpec,
        reason: AwardReason,
        actor: &str,
    ) -> Result<SavedMatch, Error> {
        let saved = MatchService::new(self.db, self.rules)
            .update_match(match_id, |league_match| {
                let winner_id = winner_team_id(league_match, winner)?;

                Ok(apply_award(
                    league_match,
                    winner_id,
                    reason,
                    actor,
                    Utc::now().naive_utc(),
                )?)
            })
            .await?;

        tracing::info!(
            match_id,
            reason = ?reason,
            awarded_to = ?saved.league_match.awarded_to_id,
            actor,
            "Awarded match"
        );

        Ok(saved)
    }

    /// Applies a batch of awards in one transaction.
    ///
    /// Instructions that fail (missing match, winner not a participant) are
    /// reported and skipped; the rest are applied. A dry run validates and
    /// reports without writing. Progression runs for each awarded match after
    /// the batch commits.
    pub async fn apply_awards(
        &self,
        instructions: &[AwardInstruction],
        actor: &str,
        dry_run: bool,
    ) -> Result<BatchReport, Error> {
        let now = Utc::now().naive_utc();
        let mut report = BatchReport {
            dry_run,
            ..Default::default()
        };
        let mut transitions = Vec::new();

        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        for (index, instruction) in instructions.iter().enumerate() {
            let Some(before) = match_repo.get_for_update(instruction.match_id).await? else {
                report.errors.push(ItemError {
                    index,
                    match_id: instruction.match_id,
                    message: LeagueError::MatchNotFound(instruction.match_id).to_string(),
                });
                continue;
            };

            let mut after = before.clone();
            let applied = winner_team_id(&after, instruction.winner).and_then(|winner_id| {
                apply_award(&mut after, winner_id, instruction.reason, actor, now)
            });

            if let Err(err) = applied {
                tracing::warn!(
                    index,
                    match_id = instruction.match_id,
                    "Skipping award: {}",
                    err
                );

                report.errors.push(ItemError {
                    index,
                    match_id: instruction.match_id,
                    message: err.to_string(),
                });
                continue;
            }

            let after = match_repo.save(after).await?;
            report.applied.push(after.id);
            transitions.push(MatchTransition::new(before, after));
        }

        if dry_run {
            txn.rollback().await?;
        } else {
            txn.commit().await?;

            let progression = ProgressionService::new(self.db, self.rules);
            for transition in &transitions {
                progression.on_match_saved(transition).await;
            }
        }

        tracing::info!(
            dry_run,
            applied = report.applied.len(),
            failed = report.errors.len(),
            actor,
            "Applied award batch"
        );

        Ok(report)
    }

    /// Voids a single match.
    pub async fn void(&self, match_id: i32, actor: &str) -> Result<SavedMatch, Error> {
        let saved = MatchService::new(self.db, self.rules)
            .update_match(match_id, |league_match| {
                apply_void(league_match, actor);

                Ok(())
            })
            .await?;

        tracing::info!(match_id, actor, "Voided match");

        Ok(saved)
    }

    /// Voids every match between two teams across all seasons of a category.
    ///
    /// Team names match case-insensitively and either side may be home.
    /// Matches already void are left as they are.
    ///
    /// # Returns
    /// - `Ok(VoidReport)` - IDs of the matches voided (or that would be, in a dry run)
    /// - `Err(Error::LeagueError)` - Either team does not exist
    pub async fn void_between(
        &self,
        category: SeasonCategory,
        team_a: &str,
        team_b: &str,
        dry_run: bool,
        actor: &str,
    ) -> Result<VoidReport, Error> {
        let team_repo = TeamRepository::new(self.db);
        let first = team_repo
            .find_by_name(team_a)
            .await?
            .ok_or_else(|| LeagueError::TeamNotFound(team_a.to_string()))?;
        let second = team_repo
            .find_by_name(team_b)
            .await?
            .ok_or_else(|| LeagueError::TeamNotFound(team_b.to_string()))?;

        let season_ids: Vec<i32> = SeasonRepository::new(self.db)
            .list_by_category(category)
            .await?
            .into_iter()
            .map(|season| season.id)
            .collect();

        let mut report = VoidReport {
            dry_run,
            ..Default::default()
        };
        let mut transitions = Vec::new();

        let txn = self.db.begin().await?;
        let match_repo = MatchRepository::new(&txn);

        for candidate in match_repo
            .find_between(first.id, second.id, &season_ids)
            .await?
        {
            let Some(before) = match_repo.get_for_update(candidate.id).await? else {
                continue;
            };
            if before.void {
                continue;
            }

            let mut after = before.clone();
            apply_void(&mut after, actor);

            let after = match_repo.save(after).await?;
            report.voided.push(after.id);
            transitions.push(MatchTransition::new(before, after));
        }

        if dry_run {
            txn.rollback().await?;
        } else {
            txn.commit().await?;

            let progression = ProgressionService::new(self.db, self.rules);
            for transition in &transitions {
                progression.on_match_saved(transition).await;
            }
        }

        tracing::info!(
            category = ?category,
            team_a = %first.name,
            team_b = %second.name,
            dry_run,
            voided = report.voided.len(),
            "Voided matches between teams"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests;
