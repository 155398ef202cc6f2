use serde::{Deserialize, Serialize};

/// A goal-scorer ranking entry for one competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorer {
    /// Composite identifier, `{player_id}-{team_id}`; a player can appear
    /// once per club within a season.
    pub id: String,
    pub player_id: i64,
    pub player_name: String,
    pub team_id: String,
    pub team_name: String,
    pub team_logo_url: Option<String>,
    pub goals: i32,
    pub played_matches: Option<i32>,
    pub position: Option<String>,
}
