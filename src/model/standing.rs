use serde::Serialize;

/// One row of a league table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StandingRow {
    pub team_id: i32,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_diff: i32,
    pub points: u32,
}

impl StandingRow {
    pub fn new(team_id: i32, team_name: &str) -> Self {
        Self {
            team_id,
            team_name: team_name.to_string(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_diff: 0,
            points: 0,
        }
    }

    /// Adds one result from this team's point of view.
    pub fn record(&mut self, scored: i32, conceded: i32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_diff = self.goals_for - self.goals_against;

        match scored.cmp(&conceded) {
            std::cmp::Ordering::Greater => {
                self.wins += 1;
                self.points += 3;
            }
            std::cmp::Ordering::Equal => {
                self.draws += 1;
                self.points += 1;
            }
            std::cmp::Ordering::Less => self.losses += 1,
        }
    }
}

/// League table restricted to the members of a single group.
#[derive(Clone, Debug, Serialize)]
pub struct GroupStandings {
    pub group_id: i32,
    pub group_name: String,
    pub rows: Vec<StandingRow>,
}
