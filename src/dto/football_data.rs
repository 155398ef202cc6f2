//! Response shapes for the football-data.org v4 API (Provider A).

use serde::Deserialize;

// Competitions

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionsResponse {
    pub competitions: Vec<Competition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competition {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub emblem: Option<String>,
    pub area: Area,
    pub current_season: Option<Season>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Area {
    pub id: i64,
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: i64,
    pub start_date: String,
    pub end_date: String,
    pub current_matchday: Option<i32>,
}

// Matches

#[derive(Debug, Clone, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadResponse {
    pub aggregate: Option<HeadToHeadAggregate>,
    pub matches: Vec<MatchDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHeadAggregate {
    pub number_of_matches: Option<i32>,
    pub home_wins: Option<i32>,
    pub away_wins: Option<i32>,
    pub draws: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub id: i64,
    pub utc_date: String,
    pub status: String,
    pub minute: Option<i32>,
    pub matchday: Option<i32>,
    pub stage: Option<String>,
    pub home_team: TeamRef,
    pub away_team: TeamRef,
    pub score: Option<Score>,
    pub competition: CompetitionRef,
    pub venue: Option<String>,
    pub attendance: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub crest: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub winner: Option<String>,
    pub full_time: Option<ScoreDetail>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreDetail {
    pub home: Option<i32>,
    pub away: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompetitionRef {
    pub id: i64,
    pub name: String,
}

// Standings

#[derive(Debug, Clone, Deserialize)]
pub struct StandingsResponse {
    pub standings: Vec<Standing>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub stage: String,
    /// Table type: "TOTAL", "HOME" or "AWAY".
    #[serde(rename = "type")]
    pub kind: String,
    pub table: Vec<TableEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableEntry {
    pub position: i32,
    pub team: TeamRef,
    pub played_games: i32,
    pub won: i32,
    pub draw: i32,
    pub lost: i32,
    pub points: i32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub form: Option<String>,
}

// Teams

#[derive(Debug, Clone, Deserialize)]
pub struct TeamsResponse {
    pub teams: Vec<TeamDetail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetail {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub tla: Option<String>,
    pub crest: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub founded: Option<i32>,
    pub club_colors: Option<String>,
    pub venue: Option<String>,
    pub area: Area,
    pub squad: Option<Vec<PlayerDto>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub id: i64,
    pub name: String,
    pub position: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub shirt_number: Option<i32>,
    /// "PLAYER" or "COACH".
    pub role: Option<String>,
    pub market_value: Option<i64>,
    pub contract: Option<Contract>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Contract {
    pub start: Option<String>,
    pub until: Option<String>,
}

// Scorers

#[derive(Debug, Clone, Deserialize)]
pub struct ScorersResponse {
    pub scorers: Vec<ScorerDto>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerDto {
    pub player: ScorerPlayer,
    pub team: TeamRef,
    pub played_matches: Option<i32>,
    pub goals: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorerPlayer {
    pub id: i64,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub date_of_birth: Option<String>,
    pub nationality: Option<String>,
    pub shirt_number: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_dto_deserializes_provider_payload() {
        let json = r#"{
            "id": 497014,
            "utcDate": "2025-03-01T15:00:00Z",
            "status": "IN_PLAY",
            "minute": 67,
            "matchday": 27,
            "stage": "REGULAR_SEASON",
            "homeTeam": {"id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "crest": "https://crests.football-data.org/57.png"},
            "awayTeam": {"id": 61, "name": "Chelsea FC", "shortName": "Chelsea", "crest": null},
            "score": {"winner": null, "fullTime": {"home": 2, "away": 1}},
            "competition": {"id": 2021, "name": "Premier League"},
            "venue": "Emirates Stadium",
            "attendance": 59867
        }"#;

        let dto: MatchDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, 497014);
        assert_eq!(dto.status, "IN_PLAY");
        assert_eq!(dto.minute, Some(67));
        assert_eq!(dto.home_team.name, "Arsenal FC");
        assert_eq!(dto.score.unwrap().full_time.unwrap().home, Some(2));
        assert_eq!(dto.competition.id, 2021);
    }

    #[test]
    fn test_standing_kind_field_uses_type_key() {
        let json = r#"{"stage": "REGULAR_SEASON", "type": "TOTAL", "table": []}"#;
        let standing: Standing = serde_json::from_str(json).unwrap();
        assert_eq!(standing.kind, "TOTAL");
    }
}
