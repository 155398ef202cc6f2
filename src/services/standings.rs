//! League table queries. Providers report several table types per
//! competition; only the aggregate "TOTAL" table is surfaced.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::api::{ApiGateway, Provider};
use crate::cache::{TtlCache, fingerprint};
use crate::constants::{cache_capacity, cache_ttl};
use crate::dto::football_data as fd;
use crate::error::ApiError;
use crate::models::StandingsEntry;

#[derive(Debug)]
pub struct StandingsService {
    gateway: Arc<ApiGateway>,
    cache: TtlCache<Vec<StandingsEntry>>,
}

impl StandingsService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            cache: TtlCache::new(
                "standings",
                cache_capacity::STANDINGS,
                Duration::from_secs(cache_ttl::STANDINGS_SECONDS),
            ),
        }
    }

    /// Fetches a competition's aggregate table, cached for 15 minutes.
    /// A response without a "TOTAL" table yields an empty list, not an
    /// error.
    #[instrument(skip(self))]
    pub async fn standings(
        &self,
        league_id: &str,
        season: Option<i32>,
    ) -> Result<Vec<StandingsEntry>, ApiError> {
        let path = format!("competitions/{league_id}/standings");
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(season) = season {
            params.push(("season", season.to_string()));
        }
        let endpoint = build_endpoint(&path, &params);
        let key = fingerprint(&path, &params);

        if let Some(cached) = self.cache.get(&key).await {
            debug!("Standings cache hit for league {}", league_id);
            return Ok(cached);
        }

        let response: fd::StandingsResponse =
            self.gateway.fetch(Provider::FootballData, &endpoint).await?;
        let entries = map_total_table(&response);
        if entries.is_empty() {
            warn!("No TOTAL standings table for league {}", league_id);
        } else {
            info!(
                "Fetched {} standings entries for league {}",
                entries.len(),
                league_id
            );
        }

        self.cache.put(key, entries.clone()).await;
        Ok(entries)
    }
}

fn build_endpoint(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        path.to_string()
    } else {
        let query = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{path}?{query}")
    }
}

fn map_total_table(response: &fd::StandingsResponse) -> Vec<StandingsEntry> {
    let Some(total) = response.standings.iter().find(|s| s.kind == "TOTAL") else {
        return Vec::new();
    };

    let mut entries: Vec<StandingsEntry> = total.table.iter().map(map_entry).collect();
    entries.sort_by_key(|e| e.rank);
    entries
}

fn map_entry(entry: &fd::TableEntry) -> StandingsEntry {
    StandingsEntry {
        rank: entry.position,
        team_id: entry.team.id.to_string(),
        team_name: entry.team.name.clone(),
        team_logo_url: entry.team.crest.clone(),
        points: entry.points,
        played: entry.played_games,
        won: entry.won,
        draw: entry.draw,
        lost: entry.lost,
        goals_for: entry.goals_for,
        goals_against: entry.goals_against,
        goal_difference: entry.goal_difference,
        form: entry.form.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_row(position: i32, team_id: i64, name: &str) -> serde_json::Value {
        serde_json::json!({
            "position": position,
            "team": {"id": team_id, "name": name, "shortName": null, "crest": null},
            "playedGames": 27, "won": 19, "draw": 5, "lost": 3,
            "points": 62, "goalsFor": 61, "goalsAgainst": 24,
            "goalDifference": 37, "form": "W,W,D,W,L"
        })
    }

    #[test]
    fn test_only_total_table_is_mapped() {
        let response: fd::StandingsResponse = serde_json::from_value(serde_json::json!({
            "standings": [
                {"stage": "REGULAR_SEASON", "type": "HOME", "table": [table_row(1, 10, "Home Leader")]},
                {"stage": "REGULAR_SEASON", "type": "AWAY", "table": [table_row(1, 20, "Away Leader")]},
                {"stage": "REGULAR_SEASON", "type": "TOTAL",
                 "table": [table_row(2, 61, "Chelsea FC"), table_row(1, 57, "Arsenal FC")]}
            ]
        }))
        .unwrap();

        let entries = map_total_table(&response);
        assert_eq!(entries.len(), 2);
        // Ranked ascending by position, not input order.
        assert_eq!(entries[0].rank, 1);
        assert_eq!(entries[0].team_name, "Arsenal FC");
        assert_eq!(entries[1].team_name, "Chelsea FC");
        assert_eq!(entries[0].form.as_deref(), Some("W,W,D,W,L"));
    }

    #[test]
    fn test_missing_total_table_yields_empty_list() {
        let response: fd::StandingsResponse = serde_json::from_value(serde_json::json!({
            "standings": [
                {"stage": "REGULAR_SEASON", "type": "HOME", "table": [table_row(1, 10, "Home Leader")]}
            ]
        }))
        .unwrap();

        assert!(map_total_table(&response).is_empty());
    }
}
