//! Progression trigger.
//!
//! Every command that mutates a match hands its before and after state to
//! [`ProgressionService::on_match_saved`] once the mutation is committed. The
//! trigger advances the bracket and refreshes standings; failures are logged
//! and never reach the command that saved the match.

use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;

use crate::{
    config::CategoryRules,
    data::season::SeasonRepository,
    error::{league::LeagueError, Error},
    model::{
        bracket::{GroupSlotReport, ResolutionReport, KNOCKOUT_MATCHDAY},
        db::MatchModel,
    },
    service::{
        placeholder::{decide, PlaceholderService},
        qualification::is_group_stage,
        standings::StandingsService,
    },
};

/// State of a match before and after a committed mutation.
#[derive(Clone, Debug)]
pub struct MatchTransition {
    pub before: MatchModel,
    pub after: MatchModel,
}

impl MatchTransition {
    pub fn new(before: MatchModel, after: MatchModel) -> Self {
        Self { before, after }
    }

    pub fn became_played(&self) -> bool {
        !self.before.is_played && self.after.is_played
    }

    pub fn became_awarded(&self) -> bool {
        !self.before.awarded && self.after.awarded
    }

    pub fn became_void(&self) -> bool {
        !self.before.void && self.after.void
    }

    /// A played match whose winner appeared or changed, e.g. after penalties
    /// or an award correction.
    pub fn decision_changed(&self) -> bool {
        self.after.is_played
            && decide(&self.after).is_some()
            && decide(&self.before) != decide(&self.after)
    }

    pub fn requires_progression(&self) -> bool {
        self.became_played()
            || self.became_awarded()
            || self.became_void()
            || self.decision_changed()
    }
}

/// What the trigger did for one transition.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProgressionOutcome {
    pub resolution: Option<ResolutionReport>,
    pub group_slots: Option<GroupSlotReport>,
    pub standings_refreshed: bool,
    /// An automatic step failed and was logged
    pub failed: bool,
}

pub struct ProgressionService<'a> {
    db: &'a DatabaseConnection,
    rules: &'a CategoryRules,
}

impl<'a> ProgressionService<'a> {
    /// Creates a new instance of [`ProgressionService`]
    pub fn new(db: &'a DatabaseConnection, rules: &'a CategoryRules) -> Self {
        Self { db, rules }
    }

    /// Runs bracket progression and a standings refresh for a saved match.
    ///
    /// Knockout matches propagate their winner and loser once decided; group
    /// stage matches re-check the season's group position placeholders. Both
    /// only run for categories with progression enabled. Errors are logged and
    /// reported through [`ProgressionOutcome::failed`].
    pub async fn on_match_saved(&self, transition: &MatchTransition) -> ProgressionOutcome {
        if !transition.requires_progression() {
            return ProgressionOutcome::default();
        }

        match self.progress(transition).await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(
                    match_id = transition.after.id,
                    season_id = transition.after.season_id,
                    "Automatic progression failed, run repropagate to recover: {}",
                    err
                );

                ProgressionOutcome {
                    failed: true,
                    ..Default::default()
                }
            }
        }
    }

    async fn progress(&self, transition: &MatchTransition) -> Result<ProgressionOutcome, Error> {
        let after = &transition.after;
        let mut outcome = ProgressionOutcome::default();

        let season = SeasonRepository::new(self.db)
            .get(after.season_id)
            .await?
            .ok_or_else(|| LeagueError::SeasonNotFound(after.season_id.to_string()))?;

        if self.rules.runs_progression(season.category) && !after.void {
            if after.matchday.is_some_and(|matchday| matchday >= KNOCKOUT_MATCHDAY) {
                if let Some(decision) = decide(after).filter(|_| after.is_played) {
                    let txn = self.db.begin().await?;
                    let report = PlaceholderService::resolve_match_in(&txn, after, decision).await?;
                    txn.commit().await?;

                    tracing::info!(
                        match_id = after.id,
                        matchday = report.matchday,
                        replaced = report.replaced.len(),
                        "Advanced knockout result"
                    );

                    outcome.resolution = Some(report);
                }
            } else if is_group_stage(after.matchday) && after.is_played {
                let txn = self.db.begin().await?;
                let report =
                    PlaceholderService::resolve_group_slots_in(&txn, self.rules, &season).await?;
                txn.commit().await?;

                if !report.resolved.is_empty() {
                    tracing::info!(
                        season_id = season.id,
                        resolved = report.resolved.len(),
                        "Resolved group qualifiers"
                    );
                }

                outcome.group_slots = Some(report);
            }
        } else {
            tracing::debug!(
                match_id = after.id,
                category = ?season.category,
                "Bracket progression skipped"
            );
        }

        let table = StandingsService::compute_for_season(self.db, season.id).await?;
        outcome.standings_refreshed = true;

        tracing::debug!(
            season_id = season.id,
            teams = table.len(),
            leader = table.first().map(|row| row.team_name.as_str()),
            "Refreshed standings"
        );

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests;
