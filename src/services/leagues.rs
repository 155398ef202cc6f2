//! Top-tier competition listing and the closed top-league reference set.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::api::{ApiGateway, Provider};
use crate::cache::{TtlCache, fingerprint};
use crate::constants::{TOP_LEAGUE_IDS, cache_capacity, cache_ttl};
use crate::dto::football_data as fd;
use crate::error::ApiError;
use crate::models::League;

const TOP_LEAGUES_ENDPOINT: &str = "competitions?plan=TIER_ONE";

#[derive(Debug)]
pub struct LeaguesService {
    gateway: Arc<ApiGateway>,
    cache: TtlCache<Vec<League>>,
}

impl LeaguesService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            cache: TtlCache::new(
                "leagues",
                cache_capacity::LEAGUES,
                Duration::from_secs(cache_ttl::LEAGUES_SECONDS),
            ),
        }
    }

    /// Fetches the top-tier competitions, cached for 24 hours.
    #[instrument(skip(self))]
    pub async fn top_leagues(&self) -> Result<Vec<League>, ApiError> {
        let key = fingerprint("competitions", &[("plan", "TIER_ONE".to_string())]);

        if let Some(cached) = self.cache.get(&key).await {
            debug!("Returning {} leagues from cache", cached.len());
            return Ok(cached);
        }

        let response: fd::CompetitionsResponse = self
            .gateway
            .fetch(Provider::FootballData, TOP_LEAGUES_ENDPOINT)
            .await?;
        let leagues: Vec<League> = response.competitions.iter().map(map_league).collect();
        info!("Fetched {} top-tier leagues", leagues.len());

        self.cache.put(key, leagues.clone()).await;
        Ok(leagues)
    }

    /// Whether a league id belongs to the closed set of top leagues used
    /// for filtering favorites.
    pub fn is_top_league(&self, id: &str) -> bool {
        id.parse::<u32>()
            .map(|id| TOP_LEAGUE_IDS.contains(&id))
            .unwrap_or(false)
    }
}

fn map_league(competition: &fd::Competition) -> League {
    League {
        id: competition.id.to_string(),
        name: competition.name.clone(),
        country: Some(competition.area.name.clone()),
        logo_url: competition.emblem.clone(),
        season: competition
            .current_season
            .as_ref()
            .and_then(|s| extract_season(&s.start_date)),
        kind: Some(competition.kind.clone()),
    }
}

fn extract_season(start_date: &str) -> Option<i32> {
    start_date.get(..4).and_then(|y| y.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn service() -> LeaguesService {
        let gateway = ApiGateway::new(Config::with_keys("a", "b")).unwrap();
        LeaguesService::new(Arc::new(gateway))
    }

    #[test]
    fn test_top_league_membership() {
        let leagues = service();
        assert!(leagues.is_top_league("2021"));
        assert!(leagues.is_top_league("2013"));
        assert!(!leagues.is_top_league("9999"));
        assert!(!leagues.is_top_league("not-a-number"));
    }

    #[test]
    fn test_map_league_extracts_season_year() {
        let competition: fd::Competition = serde_json::from_value(serde_json::json!({
            "id": 2021,
            "name": "Premier League",
            "code": "PL",
            "type": "LEAGUE",
            "emblem": "https://crests.football-data.org/PL.png",
            "area": {"id": 2072, "name": "England", "code": "ENG"},
            "currentSeason": {"id": 2287, "startDate": "2025-08-15", "endDate": "2026-05-24", "currentMatchday": 3}
        }))
        .unwrap();

        let league = map_league(&competition);
        assert_eq!(league.id, "2021");
        assert_eq!(league.country.as_deref(), Some("England"));
        assert_eq!(league.season, Some(2025));
        assert_eq!(league.kind.as_deref(), Some("LEAGUE"));
    }

    #[test]
    fn test_map_league_without_current_season() {
        let competition: fd::Competition = serde_json::from_value(serde_json::json!({
            "id": 2001,
            "name": "UEFA Champions League",
            "code": "CL",
            "type": "CUP",
            "emblem": null,
            "area": {"id": 2077, "name": "Europe", "code": null},
            "currentSeason": null
        }))
        .unwrap();

        assert_eq!(map_league(&competition).season, None);
    }
}
