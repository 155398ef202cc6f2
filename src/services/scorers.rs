//! Top-scorer listings per competition.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::api::{ApiGateway, Provider};
use crate::cache::{TtlCache, fingerprint};
use crate::constants::{DEFAULT_SCORERS_LIMIT, cache_capacity, cache_ttl};
use crate::dto::football_data as fd;
use crate::error::ApiError;
use crate::models::Scorer;

#[derive(Debug)]
pub struct ScorersService {
    gateway: Arc<ApiGateway>,
    cache: TtlCache<Vec<Scorer>>,
}

impl ScorersService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            cache: TtlCache::new(
                "scorers",
                cache_capacity::SCORERS,
                Duration::from_secs(cache_ttl::SCORERS_SECONDS),
            ),
        }
    }

    /// Fetches a competition's scorer ranking, cached for 24 hours.
    #[instrument(skip(self))]
    pub async fn scorers(
        &self,
        league_id: &str,
        season: Option<i32>,
        limit: Option<u32>,
    ) -> Result<Vec<Scorer>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_SCORERS_LIMIT);
        let path = format!("competitions/{league_id}/scorers");
        let mut params: Vec<(&str, String)> = vec![("limit", limit.to_string())];
        if let Some(season) = season {
            params.push(("season", season.to_string()));
        }

        let query = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        let endpoint = format!("{path}?{query}");
        let key = fingerprint(&path, &params);

        if let Some(cached) = self.cache.get(&key).await {
            debug!("Scorers cache hit for league {}", league_id);
            return Ok(cached);
        }

        let response: fd::ScorersResponse =
            self.gateway.fetch(Provider::FootballData, &endpoint).await?;
        let scorers: Vec<Scorer> = response.scorers.iter().map(map_scorer).collect();
        info!("Fetched {} scorers for league {}", scorers.len(), league_id);

        self.cache.put(key, scorers.clone()).await;
        Ok(scorers)
    }
}

fn map_scorer(dto: &fd::ScorerDto) -> Scorer {
    Scorer {
        id: format!("{}-{}", dto.player.id, dto.team.id),
        player_id: dto.player.id,
        player_name: dto.player.name.clone(),
        team_id: dto.team.id.to_string(),
        team_name: dto.team.name.clone(),
        team_logo_url: dto.team.crest.clone(),
        goals: dto.goals.unwrap_or(0),
        played_matches: dto.played_matches,
        position: dto.player.position.clone(),
    }
}
