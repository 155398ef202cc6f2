use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a match.
///
/// Provider status strings outside the known set map to `Unknown` rather
/// than being aliased to `Scheduled`, so upstream contract drift stays
/// visible to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    Scheduled,
    Live,
    Paused,
    Finished,
    Postponed,
    Cancelled,
    Unknown,
}

impl MatchStatus {
    /// Maps a football-data.org status code to the domain status.
    pub fn from_provider_code(code: &str) -> Self {
        match code {
            "SCHEDULED" | "TIMED" => MatchStatus::Scheduled,
            "LIVE" | "IN_PLAY" => MatchStatus::Live,
            "PAUSED" => MatchStatus::Paused,
            "FINISHED" => MatchStatus::Finished,
            "POSTPONED" => MatchStatus::Postponed,
            "CANCELLED" => MatchStatus::Cancelled,
            _ => MatchStatus::Unknown,
        }
    }

    /// Whether the match is currently being played (live or paused).
    pub fn is_in_play(&self) -> bool {
        matches!(self, MatchStatus::Live | MatchStatus::Paused)
    }
}

/// A single fixture, scheduled or played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    pub league_id: String,
    pub league_name: String,
    pub season: i32,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_team_logo_url: Option<String>,
    pub away_team_logo_url: Option<String>,
    pub venue_name: Option<String>,
    pub date: DateTime<Utc>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub attendance: Option<i32>,
    /// Current match minute; only present while the match is in play.
    pub minute: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_codes_map() {
        assert_eq!(
            MatchStatus::from_provider_code("SCHEDULED"),
            MatchStatus::Scheduled
        );
        assert_eq!(MatchStatus::from_provider_code("IN_PLAY"), MatchStatus::Live);
        assert_eq!(MatchStatus::from_provider_code("LIVE"), MatchStatus::Live);
        assert_eq!(MatchStatus::from_provider_code("PAUSED"), MatchStatus::Paused);
        assert_eq!(
            MatchStatus::from_provider_code("FINISHED"),
            MatchStatus::Finished
        );
        assert_eq!(
            MatchStatus::from_provider_code("POSTPONED"),
            MatchStatus::Postponed
        );
        assert_eq!(
            MatchStatus::from_provider_code("CANCELLED"),
            MatchStatus::Cancelled
        );
    }

    #[test]
    fn test_unrecognized_status_is_unknown_not_scheduled() {
        assert_eq!(
            MatchStatus::from_provider_code("SUSPENDED"),
            MatchStatus::Unknown
        );
        assert_eq!(MatchStatus::from_provider_code(""), MatchStatus::Unknown);
    }

    #[test]
    fn test_in_play_states() {
        assert!(MatchStatus::Live.is_in_play());
        assert!(MatchStatus::Paused.is_in_play());
        assert!(!MatchStatus::Finished.is_in_play());
        assert!(!MatchStatus::Unknown.is_in_play());
    }
}
