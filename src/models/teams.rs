use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A squad member. Coach-role entries are filtered out during mapping and
/// never appear here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Option<String>,
    pub shirt_number: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    /// Market value in euros, when the provider reports one.
    pub market_value: Option<i64>,
    pub contract_start: Option<NaiveDate>,
    pub contract_end: Option<NaiveDate>,
}

/// A club, optionally carrying its current squad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub short_name: Option<String>,
    pub logo_url: Option<String>,
    pub founded: Option<i32>,
    pub country: Option<String>,
    /// Squad listing when the provider embeds one; `None` when the query
    /// did not include squad data.
    pub players: Option<Vec<Player>>,
}
