//! Command-line interface over the league services.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use entity::sea_orm_active_enums::{AwardReason, SeasonCategory};
use sea_orm::DatabaseConnection;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::Config,
    data::season::SeasonRepository,
    error::{league::LeagueError, Error},
    model::{
        award::{AwardInstruction, Side, WinnerSpec},
        bracket::BracketLayout,
        db::SeasonModel,
        import::ImportRow,
    },
    service::{
        award::AwardService,
        import::ImportService,
        league_match::{MatchService, SavedMatch, ScoreEntry},
        placeholder::PlaceholderService,
        standings::StandingsService,
    },
    util::category::parse_category,
};

/// Standings, knockout brackets and result administration for a school league.
#[derive(Parser, Debug)]
#[command(name = "league", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply pending database migrations.
    Migrate,

    /// Print a season's standings.
    Standings {
        /// Season ID or name
        #[arg(long)]
        season: String,
        /// One table per group
        #[arg(long)]
        grouped: bool,
    },

    /// Create knockout fixtures from a JSON layout.
    GenerateBracket {
        #[arg(long)]
        season: String,
        /// Layout file; the standard eight team bracket when omitted
        #[arg(long)]
        layout: Option<PathBuf>,
        /// Kick-off of the first quarterfinal for the standard layout, `YYYY-MM-DDTHH:MM:SS`
        #[arg(long, required_unless_present = "layout")]
        first_kickoff: Option<chrono::NaiveDateTime>,
        #[arg(long)]
        dry_run: bool,
    },

    /// Re-run group slot and knockout resolution for a season.
    Repropagate {
        #[arg(long)]
        season: String,
    },

    /// Propagate a knockout match's result into later fixtures.
    Resolve {
        #[arg(long = "match")]
        match_id: i32,
        /// Advance this side regardless of the score
        #[arg(long)]
        force: Option<Side>,
    },

    /// Award a match to one of its teams.
    Award {
        #[arg(long = "match")]
        match_id: i32,
        /// `home`, `away` or a team ID
        #[arg(long)]
        winner: WinnerSpec,
        /// `protest` or `walkover`
        #[arg(long, value_parser = parse_reason)]
        reason: AwardReason,
        #[arg(long)]
        actor: Option<String>,
    },

    /// Apply awards from a JSON file of instructions.
    ApplyAwards {
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        dry_run: bool,
        #[arg(long)]
        actor: Option<String>,
    },

    /// Void a match.
    Void {
        #[arg(long = "match")]
        match_id: i32,
    },

    /// Void every match between two teams in a category.
    VoidBetween {
        #[arg(long, value_parser = parse_category_arg)]
        category: SeasonCategory,
        team_a: String,
        team_b: String,
        #[arg(long)]
        dry_run: bool,
    },

    /// Create matches from a JSON array of spreadsheet rows.
    ImportMatches {
        #[arg(long)]
        file: PathBuf,
    },

    /// Record a match score.
    Score {
        #[arg(long = "match")]
        match_id: i32,
        home: i32,
        away: i32,
        /// Store a running score without finishing the match
        #[arg(long)]
        interim: bool,
    },

    /// Record a penalty shootout.
    Penalties {
        #[arg(long = "match")]
        match_id: i32,
        home: i32,
        away: i32,
    },

    /// Mark a match as finished.
    Finish {
        #[arg(long = "match")]
        match_id: i32,
        #[arg(long)]
        extra_minutes: Option<i32>,
        #[arg(long)]
        actor: Option<String>,
    },
}

fn parse_reason(value: &str) -> Result<AwardReason, String> {
    match value.trim().to_lowercase().as_str() {
        "protest" => Ok(AwardReason::Protest),
        "walkover" => Ok(AwardReason::Walkover),
        other => Err(format!("expected \"protest\" or \"walkover\", got {:?}", other)),
    }
}

fn parse_category_arg(value: &str) -> Result<SeasonCategory, String> {
    parse_category(value)
        .ok_or_else(|| LeagueError::UnknownCategory(value.to_string()).to_string())
}

/// Runs a parsed command against the configured database.
pub async fn dispatch(
    command: Command,
    config: &Config,
    db: &DatabaseConnection,
) -> Result<(), Error> {
    let rules = &config.rules;
    let actor_or_default =
        |actor: Option<String>| actor.unwrap_or_else(|| config.system_actor.clone());

    match command {
        Command::Migrate => {
            tracing::info!("Database migrations are up to date");
        }
        Command::Standings { season, grouped } => {
            let season = find_season(db, &season).await?;
            let standings = StandingsService::new(db);

            if grouped {
                print_json(&standings.grouped_table(season.id).await?)?;
            } else {
                print_json(&standings.season_table(season.id).await?)?;
            }
        }
        Command::GenerateBracket {
            season,
            layout,
            first_kickoff,
            dry_run,
        } => {
            let season = find_season(db, &season).await?;
            let layout = match (layout, first_kickoff) {
                (Some(path), _) => read_json::<BracketLayout>(&path)?,
                (None, Some(first_kickoff)) => BracketLayout::standard_eight(first_kickoff),
                (None, None) => {
                    return Err(Error::ParseError(
                        "either --layout or --first-kickoff is required".to_string(),
                    ))
                }
            };

            let report = PlaceholderService::new(db, rules)
                .build_bracket(season.id, &layout, dry_run)
                .await?;
            print_json(&report)?;
        }
        Command::Repropagate { season } => {
            let season = find_season(db, &season).await?;
            let report = PlaceholderService::new(db, rules)
                .repropagate_season(season.id)
                .await?;
            print_json(&report)?;
        }
        Command::Resolve { match_id, force } => {
            let service = PlaceholderService::new(db, rules);

            match force {
                Some(side) => print_json(&service.force_resolve(match_id, side).await?)?,
                None => print_json(&service.resolve_match(match_id).await?)?,
            }
        }
        Command::Award {
            match_id,
            winner,
            reason,
            actor,
        } => {
            let saved = AwardService::new(db, rules)
                .award(match_id, winner, reason, &actor_or_default(actor))
                .await?;
            print_saved(db, rules, saved).await?;
        }
        Command::ApplyAwards {
            file,
            dry_run,
            actor,
        } => {
            let instructions = read_json::<Vec<AwardInstruction>>(&file)?;
            let report = AwardService::new(db, rules)
                .apply_awards(&instructions, &actor_or_default(actor), dry_run)
                .await?;
            print_json(&report)?;
        }
        Command::Void { match_id } => {
            let saved = AwardService::new(db, rules)
                .void(match_id, &config.system_actor)
                .await?;
            print_saved(db, rules, saved).await?;
        }
        Command::VoidBetween {
            category,
            team_a,
            team_b,
            dry_run,
        } => {
            let report = AwardService::new(db, rules)
                .void_between(category, &team_a, &team_b, dry_run, &config.system_actor)
                .await?;
            print_json(&report)?;
        }
        Command::ImportMatches { file } => {
            let rows = read_json::<Vec<ImportRow>>(&file)?;
            let report = ImportService::new(db).import_matches(&rows).await?;
            print_json(&report)?;
        }
        Command::Score {
            match_id,
            home,
            away,
            interim,
        } => {
            let entry = if interim {
                ScoreEntry::Interim
            } else {
                ScoreEntry::Final
            };
            let saved = MatchService::new(db, rules)
                .record_score(match_id, home, away, entry)
                .await?;
            print_saved(db, rules, saved).await?;
        }
        Command::Penalties {
            match_id,
            home,
            away,
        } => {
            let saved = MatchService::new(db, rules)
                .set_penalties(match_id, home, away)
                .await?;
            print_saved(db, rules, saved).await?;
        }
        Command::Finish {
            match_id,
            extra_minutes,
            actor,
        } => {
            let saved = MatchService::new(db, rules)
                .mark_finished(match_id, extra_minutes, &actor_or_default(actor))
                .await?;
            print_saved(db, rules, saved).await?;
        }
    }

    Ok(())
}

async fn find_season(db: &DatabaseConnection, identifier: &str) -> Result<SeasonModel, Error> {
    Ok(SeasonRepository::new(db)
        .find_by_id_or_name(identifier)
        .await?
        .ok_or_else(|| LeagueError::SeasonNotFound(identifier.to_string()))?)
}

async fn print_saved(
    db: &DatabaseConnection,
    rules: &crate::config::CategoryRules,
    saved: SavedMatch,
) -> Result<(), Error> {
    let dto = MatchService::new(db, rules)
        .get_match(saved.league_match.id)
        .await?;

    print_json(&serde_json::json!({
        "match": dto,
        "progression": saved.progression,
    }))
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let contents = std::fs::read_to_string(path)?;

    Ok(serde_json::from_str(&contents)?)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}
