use serde::{Deserialize, Serialize};

/// A competition, e.g. a national top flight or a continental cup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: String,
    pub name: String,
    pub country: Option<String>,
    pub logo_url: Option<String>,
    /// Starting year of the current season, when the provider reports one.
    pub season: Option<i32>,
    /// Competition type as reported by the provider, e.g. "LEAGUE" or "CUP".
    pub kind: Option<String>,
}
