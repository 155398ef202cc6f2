//! Single-team and league-roster lookups, including squad mapping.

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info, instrument};

use crate::api::{ApiGateway, Provider};
use crate::cache::{TtlCache, fingerprint};
use crate::constants::{cache_capacity, cache_ttl};
use crate::dto::football_data as fd;
use crate::error::ApiError;
use crate::models::{Player, Team};

#[derive(Debug)]
pub struct TeamsService {
    gateway: Arc<ApiGateway>,
    teams: TtlCache<Team>,
    league_rosters: TtlCache<Vec<Team>>,
}

impl TeamsService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            teams: TtlCache::new(
                "teams",
                cache_capacity::TEAMS,
                Duration::from_secs(cache_ttl::TEAMS_SECONDS),
            ),
            league_rosters: TtlCache::new(
                "league_rosters",
                cache_capacity::TEAMS,
                Duration::from_secs(cache_ttl::TEAMS_SECONDS),
            ),
        }
    }

    /// Fetches a single team (with its squad when the provider embeds
    /// one), cached for 24 hours.
    #[instrument(skip(self))]
    pub async fn team(&self, id: &str) -> Result<Team, ApiError> {
        let endpoint = format!("teams/{id}");
        let key = fingerprint(&endpoint, &[]);

        if let Some(cached) = self.teams.get(&key).await {
            debug!("Team cache hit for id {}", id);
            return Ok(cached);
        }

        let dto: fd::TeamDetail = self.gateway.fetch(Provider::FootballData, &endpoint).await?;
        let team = map_team(&dto);
        info!(
            "Fetched team {} with {} squad members",
            team.name,
            team.players.as_ref().map(Vec::len).unwrap_or(0)
        );

        self.teams.put(key, team.clone()).await;
        Ok(team)
    }

    /// Fetches all teams registered in a competition, cached for 24 hours.
    #[instrument(skip(self))]
    pub async fn teams_in_league(&self, league_id: &str) -> Result<Vec<Team>, ApiError> {
        let endpoint = format!("competitions/{league_id}/teams");
        let key = fingerprint(&endpoint, &[]);

        if let Some(cached) = self.league_rosters.get(&key).await {
            debug!("League roster cache hit for league {}", league_id);
            return Ok(cached);
        }

        let response: fd::TeamsResponse =
            self.gateway.fetch(Provider::FootballData, &endpoint).await?;
        let teams: Vec<Team> = response.teams.iter().map(map_team).collect();
        info!("Fetched {} teams for league {}", teams.len(), league_id);

        self.league_rosters.put(key, teams.clone()).await;
        Ok(teams)
    }
}

fn map_team(dto: &fd::TeamDetail) -> Team {
    let players: Option<Vec<Player>> = dto
        .squad
        .as_ref()
        .map(|squad| squad.iter().filter_map(map_player).collect());

    Team {
        id: dto.id.to_string(),
        name: dto.name.clone(),
        short_name: dto.short_name.clone().or_else(|| dto.tla.clone()),
        logo_url: dto.crest.clone(),
        founded: dto.founded,
        country: Some(dto.area.name.clone()),
        players,
    }
}

/// Maps a squad entry, dropping coach-role entries entirely.
fn map_player(dto: &fd::PlayerDto) -> Option<Player> {
    if dto.role.as_deref() == Some("COACH") {
        return None;
    }

    Some(Player {
        id: dto.id.to_string(),
        name: dto.name.clone(),
        position: dto.position.clone(),
        shirt_number: dto.shirt_number,
        date_of_birth: dto.date_of_birth.as_deref().and_then(parse_date),
        nationality: dto.nationality.clone(),
        market_value: dto.market_value,
        contract_start: dto
            .contract
            .as_ref()
            .and_then(|c| c.start.as_deref())
            .and_then(parse_date),
        contract_end: dto
            .contract
            .as_ref()
            .and_then(|c| c.until.as_deref())
            .and_then(parse_date),
    })
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}
