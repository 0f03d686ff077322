use serde::{Deserialize, Serialize};

/// Spreadsheet row as parsed by the external importer, keyed by header name.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImportRow {
    #[serde(rename = "Season", default)]
    pub season: Option<String>,
    #[serde(rename = "Home Team", default)]
    pub home_team: Option<String>,
    #[serde(rename = "Away Team", default)]
    pub away_team: Option<String>,
    #[serde(rename = "Match Date", default)]
    pub match_date: Option<String>,
    /// Spreadsheets may hold either a number or text here
    #[serde(rename = "Matchday", default)]
    pub matchday: Option<serde_json::Value>,
    #[serde(rename = "Venue", default)]
    pub venue: Option<String>,
}

impl ImportRow {
    /// Integer matchday, or `None` when the cell is blank or not an integer.
    pub fn matchday(&self) -> Option<i32> {
        match self.matchday.as_ref()? {
            serde_json::Value::Number(number) => number
                .as_i64()
                .or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
                .and_then(|n| i32::try_from(n).ok()),
            serde_json::Value::String(text) => text.trim().parse::<i32>().ok(),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct ImportReport {
    /// IDs of the created matches
    pub created: Vec<i32>,
    pub errors: Vec<ImportRowError>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ImportRowError {
    /// Spreadsheet row number, the header being row 1
    pub row: usize,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}
