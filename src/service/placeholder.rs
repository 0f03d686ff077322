//! Placeholder resolution engine.
//!
//! Knockout fixtures reference participants that are not known yet through
//! archived placeholder teams, one per [`PlaceholderSlot`]. Once a knockout
//! match is decided, or a group finishes its round robin, every match of the
//! season referencing the slot's placeholder is rewritten to the concrete team
//! and placeholders no match references anymore are deleted.
//!
//! Rewrites are bulk statements through [`MatchRepository::replace_team`] and
//! never pass through the score entry commands, so they cannot trigger
//! progression again.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    config::CategoryRules,
    data::{
        league_match::{MatchRepository, NewMatch},
        season::SeasonRepository,
        team::TeamRepository,
    },
    error::{bracket::BracketError, league::LeagueError, Error},
    model::{
        award::Side,
        bracket::{
            BracketLayout, BracketReport, BracketToken, FixtureDefinition, FixtureError,
            GroupSlotReport, PlaceholderSlot, Qualifier, RepropagationReport, ResolutionReport,
            SlotResolution, KNOCKOUT_MATCHDAY,
        },
        db::{MatchModel, SeasonModel, TeamModel},
    },
    service::qualification::QualificationService,
};

/// Winner and loser of a decided match.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner_id: i32,
    pub loser_id: i32,
}

impl MatchOutcome {
    pub fn for_side(league_match: &MatchModel, side: Side) -> Self {
        match side {
            Side::Home => Self {
                winner_id: league_match.home_team_id,
                loser_id: league_match.away_team_id,
            },
            Side::Away => Self {
                winner_id: league_match.away_team_id,
                loser_id: league_match.home_team_id,
            },
        }
    }
}

/// Decides a match by score, then penalty shootout, then administrative award.
///
/// Returns `None` for void matches and matches none of these decide.
pub fn decide(league_match: &MatchModel) -> Option<MatchOutcome> {
    if league_match.void {
        return None;
    }

    let by_goals = |home: Option<i32>, away: Option<i32>| match (home, away) {
        (Some(home), Some(away)) if home > away => Some(Side::Home),
        (Some(home), Some(away)) if away > home => Some(Side::Away),
        _ => None,
    };

    let side = by_goals(league_match.home_score, league_match.away_score)
        .or_else(|| by_goals(league_match.penalty_home, league_match.penalty_away))
        .or_else(|| {
            if !league_match.awarded {
                return None;
            }

            match league_match.awarded_to_id {
                Some(id) if id == league_match.home_team_id => Some(Side::Home),
                Some(id) if id == league_match.away_team_id => Some(Side::Away),
                _ => None,
            }
        })?;

    Some(MatchOutcome::for_side(league_match, side))
}

enum FixtureResult {
    Created(i32),
    Existing(i32),
}

pub struct PlaceholderService<'a> {
    db: &'a DatabaseConnection,
    rules: &'a CategoryRules,
}

impl<'a> PlaceholderService<'a> {
    /// Creates a new instance of [`PlaceholderService`]
    pub fn new(db: &'a DatabaseConnection, rules: &'a CategoryRules) -> Self {
        Self { db, rules }
    }

    /// Propagates the winner and loser of a knockout match into later fixtures.
    ///
    /// # Arguments
    /// - `match_id` - ID of a match with a knockout matchday
    ///
    /// # Returns
    /// - `Ok(Some(ResolutionReport))` - Placeholders for the matchday were replaced
    /// - `Ok(None)` - The match is not decided yet, nothing changed
    /// - `Err(Error::LeagueError)` - Match not found or not a knockout fixture
    pub async fn resolve_match(&self, match_id: i32) -> Result<Option<ResolutionReport>, Error> {
        let league_match = self.get_knockout_match(match_id).await?;

        let Some(outcome) = decide(&league_match) else {
            tracing::debug!(match_id, "Match is undecided, no placeholders resolved");

            return Ok(None);
        };

        let txn = self.db.begin().await?;
        let report = Self::resolve_match_in(&txn, &league_match, outcome).await?;
        txn.commit().await?;

        tracing::info!(
            match_id,
            matchday = report.matchday,
            replaced = report.replaced.len(),
            "Resolved knockout placeholders"
        );

        Ok(Some(report))
    }

    /// Propagates a knockout match with `side` as winner, ignoring its score.
    pub async fn force_resolve(&self, match_id: i32, side: Side) -> Result<ResolutionReport, Error> {
        let league_match = self.get_knockout_match(match_id).await?;
        let outcome = MatchOutcome::for_side(&league_match, side);

        let txn = self.db.begin().await?;
        let report = Self::resolve_match_in(&txn, &league_match, outcome).await?;
        txn.commit().await?;

        tracing::info!(
            match_id,
            matchday = report.matchday,
            winner_id = report.winner_id,
            "Force resolved knockout placeholders"
        );

        Ok(report)
    }

    /// Creates a season's knockout fixtures from a layout.
    ///
    /// Fixtures whose tokens cannot be resolved are reported and skipped while the
    /// others proceed. Fixtures that already exist with the same participants and
    /// matchday are left untouched, so running a layout twice creates nothing the
    /// second time. A dry run rolls every change back. A fixture that fails
    /// leaves no placeholder team behind.
    ///
    /// Equivalence compares concrete participants. When a category runs without
    /// automatic progression, decided `WINNER n` / `LOSER n` slots resolve to
    /// their teams here while earlier fixtures still hold the placeholders, so run
    /// [`Self::repropagate_season`] before rebuilding such a bracket.
    ///
    /// # Arguments
    /// - `season_id` - ID of the season receiving the fixtures
    /// - `layout` - Fixture definitions with symbolic participants
    /// - `dry_run` - Validate and report without persisting
    ///
    /// # Returns
    /// - `Ok(BracketReport)` - Created, existing and failed fixtures
    /// - `Err(Error::LeagueError)` - Season does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn build_bracket(
        &self,
        season_id: i32,
        layout: &BracketLayout,
        dry_run: bool,
    ) -> Result<BracketReport, Error> {
        let txn = self.db.begin().await?;

        let season = SeasonRepository::new(&txn)
            .get(season_id)
            .await?
            .ok_or_else(|| LeagueError::SeasonNotFound(season_id.to_string()))?;

        let mut report = BracketReport {
            dry_run,
            ..Default::default()
        };

        for fixture in &layout.fixtures {
            // Placeholders created for a fixture that fails are rolled back with it
            let savepoint = txn.begin().await?;
            let built = self.build_fixture(&savepoint, &season, fixture).await;

            match built {
                Ok(result) => {
                    savepoint.commit().await?;

                    match result {
                        FixtureResult::Created(id) => report.created.push(id),
                        FixtureResult::Existing(id) => report.existing.push(id),
                    }
                }
                Err(Error::DbErr(err)) => return Err(err.into()),
                Err(err) => {
                    savepoint.rollback().await?;

                    tracing::warn!(
                        season_id,
                        matchday = fixture.matchday,
                        home = %fixture.home,
                        away = %fixture.away,
                        "Skipping fixture: {}",
                        err
                    );

                    report.errors.push(FixtureError {
                        matchday: fixture.matchday,
                        home: fixture.home.clone(),
                        away: fixture.away.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        if dry_run {
            txn.rollback().await?;
        } else {
            txn.commit().await?;
        }

        tracing::info!(
            season_id,
            dry_run,
            created = report.created.len(),
            existing = report.existing.len(),
            failed = report.errors.len(),
            "Built knockout bracket"
        );

        Ok(report)
    }

    /// Re-runs every resolution step for a season.
    ///
    /// Group position placeholders are resolved first, then each played knockout
    /// match in matchday order. Already resolved slots are no-ops, making this
    /// the manual recovery for a failed automatic progression.
    pub async fn repropagate_season(&self, season_id: i32) -> Result<RepropagationReport, Error> {
        let txn = self.db.begin().await?;

        let season = SeasonRepository::new(&txn)
            .get(season_id)
            .await?
            .ok_or_else(|| LeagueError::SeasonNotFound(season_id.to_string()))?;

        let group_slots = Self::resolve_group_slots_in(&txn, self.rules, &season).await?;

        let knockout = MatchRepository::new(&txn)
            .played_knockout_for_season(season.id)
            .await?;

        let mut resolutions = Vec::new();
        for league_match in knockout {
            // Earlier resolutions may have rewritten this match's participants
            let Some(current) = MatchRepository::new(&txn).get(league_match.id).await? else {
                continue;
            };

            if let Some(outcome) = decide(&current) {
                resolutions.push(Self::resolve_match_in(&txn, &current, outcome).await?);
            }
        }

        txn.commit().await?;

        tracing::info!(
            season_id,
            group_slots = group_slots.resolved.len(),
            knockout = resolutions.len(),
            "Repropagated season bracket"
        );

        Ok(RepropagationReport {
            group_slots,
            resolutions,
        })
    }

    /// Replaces a knockout match's winner and loser placeholders within its season.
    ///
    /// Every team standing in for `WINNER n` or `LOSER n` (structured slot or name
    /// containment) is swapped for the decided team, then slot placeholders that
    /// no match in any season references anymore are deleted.
    pub async fn resolve_match_in<C: ConnectionTrait>(
        db: &C,
        league_match: &MatchModel,
        outcome: MatchOutcome,
    ) -> Result<ResolutionReport, Error> {
        let matchday = league_match
            .matchday
            .filter(|matchday| *matchday >= KNOCKOUT_MATCHDAY)
            .ok_or(LeagueError::NotKnockout(league_match.id))?;

        let team_repo = TeamRepository::new(db);
        let match_repo = MatchRepository::new(db);

        let mut replaced = Vec::new();
        let mut deleted_placeholders = Vec::new();

        for (slot, team_id) in [
            (PlaceholderSlot::Winner(matchday), outcome.winner_id),
            (PlaceholderSlot::Loser(matchday), outcome.loser_id),
        ] {
            for candidate in team_repo.find_slot_candidates(&slot).await? {
                if candidate.id == team_id {
                    continue;
                }

                let ids = match_repo
                    .ids_referencing(league_match.season_id, candidate.id)
                    .await?;
                if ids.is_empty() {
                    continue;
                }

                match_repo
                    .replace_team(league_match.season_id, candidate.id, team_id)
                    .await?;

                tracing::debug!(
                    season_id = league_match.season_id,
                    placeholder = %candidate.name,
                    team_id,
                    matches = ids.len(),
                    "Replaced {} placeholder",
                    slot.label()
                );

                replaced.extend(ids);
            }

            deleted_placeholders.extend(team_repo.delete_unreferenced_placeholders(&slot).await?);
        }

        replaced.sort_unstable();
        replaced.dedup();

        Ok(ResolutionReport {
            match_id: league_match.id,
            matchday,
            winner_id: outcome.winner_id,
            loser_id: outcome.loser_id,
            replaced,
            deleted_placeholders,
        })
    }

    /// Replaces group position placeholders of a season whose group can name its qualifier.
    ///
    /// Slots of groups still playing their round robin stay pending; slots that
    /// cannot be resolved at all (unknown group, position beyond the group size)
    /// are logged and skipped.
    pub async fn resolve_group_slots_in<C: ConnectionTrait>(
        db: &C,
        rules: &CategoryRules,
        season: &SeasonModel,
    ) -> Result<GroupSlotReport, Error> {
        let team_repo = TeamRepository::new(db);
        let match_repo = MatchRepository::new(db);

        let matches = match_repo.list_for_season(season.id).await?;
        let mut team_ids: Vec<i32> = matches
            .iter()
            .flat_map(|m| [m.home_team_id, m.away_team_id])
            .collect::<HashSet<i32>>()
            .into_iter()
            .collect();
        team_ids.sort_unstable();

        let mut report = GroupSlotReport::default();

        for placeholder in team_repo.get_many(&team_ids).await? {
            let Some(slot) = PlaceholderSlot::from_team(&placeholder) else {
                continue;
            };
            let PlaceholderSlot::GroupPosition { position, group } = &slot else {
                continue;
            };

            let qualifier =
                match QualificationService::resolve_position(db, rules, season, group, *position)
                    .await
                {
                    Ok(qualifier) => qualifier,
                    Err(Error::BracketError(err)) => {
                        tracing::warn!(
                            season_id = season.id,
                            slot = %slot.label(),
                            "Cannot resolve group slot: {}",
                            err
                        );

                        report.skipped.push(format!("{}: {}", slot.label(), err));
                        continue;
                    }
                    Err(err) => return Err(err),
                };

            let team = match qualifier {
                Qualifier::Team(team) => team,
                Qualifier::Pending(_) => {
                    report.pending.push(slot.label());
                    continue;
                }
            };

            let replaced = match_repo
                .ids_referencing(season.id, placeholder.id)
                .await?;
            match_repo
                .replace_team(season.id, placeholder.id, team.id)
                .await?;

            tracing::debug!(
                season_id = season.id,
                slot = %slot.label(),
                team = %team.name,
                matches = replaced.len(),
                "Resolved group slot"
            );

            report.deleted_placeholders.extend(
                team_repo.delete_unreferenced_placeholders(&slot).await?,
            );
            report.resolved.push(SlotResolution {
                slot: slot.label(),
                placeholder_id: placeholder.id,
                team_id: team.id,
                replaced,
            });
        }

        Ok(report)
    }

    /// Resolves a bracket token to the team that should play the fixture.
    ///
    /// Group positions resolve through qualification, falling back to their
    /// placeholder while the group is pending. `WINNER n` / `LOSER n` use the
    /// decided team when matchday `n` has a result, otherwise their placeholder.
    pub async fn resolve_token_in<C: ConnectionTrait>(
        db: &C,
        rules: &CategoryRules,
        season: &SeasonModel,
        token: &BracketToken,
    ) -> Result<TeamModel, Error> {
        let team_repo = TeamRepository::new(db);

        match token {
            BracketToken::Team(name) => Ok(team_repo
                .find_by_name(name)
                .await?
                .ok_or_else(|| BracketError::UnknownTeam(name.clone()))?),
            BracketToken::Slot(PlaceholderSlot::GroupPosition { position, group }) => {
                match QualificationService::resolve_position(db, rules, season, group, *position)
                    .await?
                {
                    Qualifier::Team(team) => Ok(team),
                    Qualifier::Pending(slot) => {
                        Ok(team_repo.get_or_create_placeholder(&slot).await?)
                    }
                }
            }
            BracketToken::Slot(slot) => {
                if let Some(team_id) = Self::decided_slot_team(db, season.id, slot).await? {
                    if let Some(team) = team_repo.get(team_id).await? {
                        return Ok(team);
                    }
                }

                Ok(team_repo.get_or_create_placeholder(slot).await?)
            }
        }
    }

    async fn decided_slot_team<C: ConnectionTrait>(
        db: &C,
        season_id: i32,
        slot: &PlaceholderSlot,
    ) -> Result<Option<i32>, Error> {
        let (matchday, wants_winner) = match slot {
            PlaceholderSlot::Winner(matchday) => (*matchday, true),
            PlaceholderSlot::Loser(matchday) => (*matchday, false),
            PlaceholderSlot::GroupPosition { .. } => return Ok(None),
        };

        let decided = MatchRepository::new(db)
            .find_by_matchday(season_id, matchday)
            .await?
            .iter()
            .filter(|m| m.is_played)
            .find_map(decide);

        Ok(decided.map(|outcome| {
            if wants_winner {
                outcome.winner_id
            } else {
                outcome.loser_id
            }
        }))
    }

    async fn build_fixture<C: ConnectionTrait>(
        &self,
        db: &C,
        season: &SeasonModel,
        fixture: &FixtureDefinition,
    ) -> Result<FixtureResult, Error> {
        let home_token = BracketToken::parse(&fixture.home)?;
        let away_token = BracketToken::parse(&fixture.away)?;

        let home = Self::resolve_token_in(db, self.rules, season, &home_token).await?;
        let away = Self::resolve_token_in(db, self.rules, season, &away_token).await?;

        if home.id == away.id {
            return Err(BracketError::SameTeam(home.name).into());
        }

        let match_repo = MatchRepository::new(db);

        if let Some(existing) = match_repo
            .find_equivalent(season.id, home.id, away.id, Some(fixture.matchday))
            .await?
        {
            return Ok(FixtureResult::Existing(existing.id));
        }

        let created = match_repo
            .create(NewMatch {
                season_id: season.id,
                home_team_id: home.id,
                away_team_id: away.id,
                match_date: fixture.match_date,
                venue: fixture.venue.clone().unwrap_or_default(),
                matchday: Some(fixture.matchday),
            })
            .await?;

        tracing::debug!(
            season_id = season.id,
            matchday = fixture.matchday,
            home = %home.name,
            away = %away.name,
            "Created knockout fixture"
        );

        Ok(FixtureResult::Created(created.id))
    }

    async fn get_knockout_match(&self, match_id: i32) -> Result<MatchModel, Error> {
        let league_match = MatchRepository::new(self.db)
            .get(match_id)
            .await?
            .ok_or(LeagueError::MatchNotFound(match_id))?;

        if !league_match
            .matchday
            .is_some_and(|matchday| matchday >= KNOCKOUT_MATCHDAY)
        {
            return Err(LeagueError::NotKnockout(match_id).into());
        }

        Ok(league_match)
    }
}

#[cfg(test)]
mod tests;
