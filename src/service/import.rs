//! Match import from parsed spreadsheet rows.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        league_match::{MatchRepository, NewMatch},
        season::SeasonRepository,
        team::TeamRepository,
    },
    error::{league::LeagueError, Error},
    model::{
        db::{SeasonModel, TeamModel},
        import::{ImportReport, ImportRow, ImportRowError},
    },
    util::{similarity::close_matches, time::parse_import_datetime},
};

/// Maximum number of "did you mean" suggestions per unknown team.
pub const SUGGESTION_LIMIT: usize = 3;
/// Minimum similarity for a team name to be suggested.
pub const SUGGESTION_CUTOFF: f64 = 0.82;

/// First data row of a spreadsheet; row 1 holds the headers.
const FIRST_DATA_ROW: usize = 2;

const REQUIRED_COLUMNS: [&str; 4] = ["Season", "Home Team", "Away Team", "Match Date"];

struct RowFailure {
    message: String,
    suggestions: Vec<String>,
}

impl From<LeagueError> for RowFailure {
    fn from(err: LeagueError) -> Self {
        Self {
            message: err.to_string(),
            suggestions: Vec::new(),
        }
    }
}

pub struct ImportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImportService<'a> {
    /// Creates a new instance of [`ImportService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates one match per valid row.
    ///
    /// Rows are validated independently: a row with a missing field, a badly
    /// formatted date, or an unknown season or team is reported and skipped.
    /// Unknown team names carry close matches as suggestions but are never
    /// corrected automatically.
    ///
    /// # Returns
    /// - `Ok(ImportReport)` - Created match IDs and per-row errors numbered as in the spreadsheet
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn import_matches(&self, rows: &[ImportRow]) -> Result<ImportReport, Error> {
        let known_names: Vec<String> = TeamRepository::new(self.db)
            .list_active()
            .await?
            .into_iter()
            .map(|team| team.name)
            .collect();

        let mut report = ImportReport::default();

        for (index, row) in rows.iter().enumerate() {
            let row_number = index + FIRST_DATA_ROW;

            match self.import_row(row, &known_names).await? {
                Ok(match_id) => report.created.push(match_id),
                Err(failure) => {
                    tracing::warn!(row = row_number, "Skipping import row: {}", failure.message);

                    report.errors.push(ImportRowError {
                        row: row_number,
                        message: failure.message,
                        suggestions: failure.suggestions,
                    });
                }
            }
        }

        tracing::info!(
            created = report.created.len(),
            failed = report.errors.len(),
            "Imported matches"
        );

        Ok(report)
    }

    /// Outer error aborts the import, inner error rejects only this row.
    async fn import_row(
        &self,
        row: &ImportRow,
        known_names: &[String],
    ) -> Result<Result<i32, RowFailure>, Error> {
        let (season, home_team, away_team, match_date) = match required_cells(row) {
            Ok(cells) => cells,
            Err(err) => return Ok(Err(err.into())),
        };

        let match_date = match parse_import_datetime(match_date) {
            Ok(match_date) => match_date,
            Err(err) => return Ok(Err(err.into())),
        };

        let season = match self.find_season(season).await? {
            Ok(season) => season,
            Err(failure) => return Ok(Err(failure)),
        };
        let home = match self.find_team(home_team, known_names).await? {
            Ok(team) => team,
            Err(failure) => return Ok(Err(failure)),
        };
        let away = match self.find_team(away_team, known_names).await? {
            Ok(team) => team,
            Err(failure) => return Ok(Err(failure)),
        };

        let created = MatchRepository::new(self.db)
            .create(NewMatch {
                season_id: season.id,
                home_team_id: home.id,
                away_team_id: away.id,
                match_date,
                venue: row.venue.clone().unwrap_or_default().trim().to_string(),
                matchday: row.matchday(),
            })
            .await?;

        Ok(Ok(created.id))
    }

    async fn find_season(&self, identifier: &str) -> Result<Result<SeasonModel, RowFailure>, Error> {
        Ok(SeasonRepository::new(self.db)
            .find_by_id_or_name(identifier)
            .await?
            .ok_or_else(|| LeagueError::SeasonNotFound(identifier.trim().to_string()).into()))
    }

    async fn find_team(
        &self,
        name: &str,
        known_names: &[String],
    ) -> Result<Result<TeamModel, RowFailure>, Error> {
        if let Some(team) = TeamRepository::new(self.db).find_by_name(name).await? {
            return Ok(Ok(team));
        }

        let suggestions = close_matches(
            name,
            known_names.iter().map(String::as_str),
            SUGGESTION_LIMIT,
            SUGGESTION_CUTOFF,
        );

        let mut message = LeagueError::TeamNotFound(name.trim().to_string()).to_string();
        if !suggestions.is_empty() {
            message = format!("{}, did you mean: {}", message, suggestions.join(", "));
        }

        Ok(Err(RowFailure {
            message,
            suggestions,
        }))
    }
}

/// Season, home team, away team and match date cells, trimmed.
fn required_cells(row: &ImportRow) -> Result<(&str, &str, &str, &str), LeagueError> {
    let cells = [
        cell(&row.season),
        cell(&row.home_team),
        cell(&row.away_team),
        cell(&row.match_date),
    ];

    match cells {
        [Some(season), Some(home), Some(away), Some(date)] => Ok((season, home, away, date)),
        _ => {
            let missing: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .zip(cells.iter())
                .filter(|(_, value)| value.is_none())
                .map(|(column, _)| *column)
                .collect();

            Err(LeagueError::MissingField(missing.join(", ")))
        }
    }
}

fn cell(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests;
