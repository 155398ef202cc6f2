use serde::{Deserialize, Serialize};

/// One row of a league table, taken from the aggregate "TOTAL" standings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub rank: i32,
    pub team_id: String,
    pub team_name: String,
    pub team_logo_url: Option<String>,
    pub points: i32,
    pub played: i32,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    /// Recent-form string such as "W,W,D,L,W", when reported.
    pub form: Option<String>,
}
