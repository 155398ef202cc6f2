//! Match/fixture queries against football-data.org, including the derived
//! today/upcoming/recent windows, live listings and head-to-head history.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, Utc};
use tracing::{debug, info, instrument};

use crate::api::{ApiGateway, Provider};
use crate::cache::{TtlCache, fingerprint};
use crate::constants::{DEFAULT_H2H_LIMIT, cache_capacity, cache_ttl};
use crate::dto::football_data as fd;
use crate::error::ApiError;
use crate::models::{Match, MatchStatus};

/// How many days the derived upcoming/recent windows span.
const DERIVED_RANGE_DAYS: u64 = 7;

#[derive(Debug)]
pub struct FixturesService {
    gateway: Arc<ApiGateway>,
    matches: TtlCache<Vec<Match>>,
    head_to_head: TtlCache<Vec<Match>>,
}

impl FixturesService {
    pub fn new(gateway: Arc<ApiGateway>) -> Self {
        Self {
            gateway,
            matches: TtlCache::new(
                "matches",
                cache_capacity::MATCHES,
                Duration::from_secs(cache_ttl::MATCHES_SECONDS),
            ),
            head_to_head: TtlCache::new(
                "head_to_head",
                cache_capacity::MATCHES,
                Duration::from_secs(cache_ttl::HEAD_TO_HEAD_SECONDS),
            ),
        }
    }

    /// Fetches matches filtered by an optional league-id list and an
    /// optional date range.
    #[instrument(skip(self, league_ids))]
    pub async fn matches(
        &self,
        league_ids: Option<&[String]>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
    ) -> Result<Vec<Match>, ApiError> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(ids) = league_ids
            && !ids.is_empty()
        {
            // Sort the id list so logically identical filters share a key.
            let mut ids: Vec<&str> = ids.iter().map(String::as_str).collect();
            ids.sort_unstable();
            params.push(("competitions", ids.join(",")));
        }
        if let Some(from) = date_from {
            params.push(("dateFrom", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = date_to {
            params.push(("dateTo", to.format("%Y-%m-%d").to_string()));
        }

        let endpoint = build_endpoint("matches", &params);
        let key = fingerprint("matches", &params);

        if let Some(cached) = self.matches.get(&key).await {
            info!("Returning {} matches from cache", cached.len());
            return Ok(cached);
        }

        let response: fd::MatchesResponse =
            self.gateway.fetch(Provider::FootballData, &endpoint).await?;
        let matches: Vec<Match> = response.matches.iter().map(map_match).collect();
        info!("Fetched {} matches from provider", matches.len());

        self.matches.put(key, matches.clone()).await;
        Ok(matches)
    }

    /// Matches scheduled for the current day.
    pub async fn today(&self) -> Result<Vec<Match>, ApiError> {
        let today = Local::now().date_naive();
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
        self.matches(None, Some(today), Some(tomorrow)).await
    }

    /// Matches within the next seven days, optionally filtered by league.
    pub async fn upcoming(&self, league_ids: Option<&[String]>) -> Result<Vec<Match>, ApiError> {
        let today = Local::now().date_naive();
        let until = today
            .checked_add_days(Days::new(DERIVED_RANGE_DAYS))
            .unwrap_or(today);
        self.matches(league_ids, Some(today), Some(until)).await
    }

    /// Matches from the past seven days, optionally filtered by league.
    pub async fn recent(&self, league_ids: Option<&[String]>) -> Result<Vec<Match>, ApiError> {
        let today = Local::now().date_naive();
        let since = today
            .checked_sub_days(Days::new(DERIVED_RANGE_DAYS))
            .unwrap_or(today);
        self.matches(league_ids, Some(since), Some(today)).await
    }

    /// Currently live matches. A fixed query independent of caller
    /// filters, cached for 30 seconds only.
    #[instrument(skip(self))]
    pub async fn live(&self) -> Result<Vec<Match>, ApiError> {
        let params = [("status", "LIVE".to_string())];
        let endpoint = build_endpoint("matches", &params);
        let key = fingerprint("matches", &params);

        if let Some(cached) = self.matches.get(&key).await {
            debug!("Live cache hit: {} matches", cached.len());
            return Ok(cached);
        }

        let response: fd::MatchesResponse =
            self.gateway.fetch(Provider::FootballData, &endpoint).await?;
        let matches: Vec<Match> = response.matches.iter().map(map_match).collect();
        info!("Fetched {} live matches", matches.len());

        self.matches
            .put_with_ttl(
                key,
                matches.clone(),
                Duration::from_secs(cache_ttl::LIVE_MATCHES_SECONDS),
            )
            .await;
        Ok(matches)
    }

    /// Head-to-head history for a match's teams, cached for 7 days.
    #[instrument(skip(self))]
    pub async fn head_to_head(
        &self,
        match_id: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Match>, ApiError> {
        let limit = limit.unwrap_or(DEFAULT_H2H_LIMIT);
        let path = format!("matches/{match_id}/head2head");
        let params = [("limit", limit.to_string())];
        let endpoint = build_endpoint(&path, &params);
        let key = fingerprint(&path, &params);

        if let Some(cached) = self.head_to_head.get(&key).await {
            debug!("Head-to-head cache hit for match {}", match_id);
            return Ok(cached);
        }

        let response: fd::HeadToHeadResponse =
            self.gateway.fetch(Provider::FootballData, &endpoint).await?;
        let matches: Vec<Match> = response.matches.iter().map(map_match).collect();
        info!(
            "Fetched {} head-to-head matches for match {}",
            matches.len(),
            match_id
        );

        self.head_to_head.put(key, matches.clone()).await;
        Ok(matches)
    }
}

/// Builds the request path+query in declaration order. The cache key goes
/// through [`fingerprint`] instead, which canonicalizes parameter order.
fn build_endpoint(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{query}")
}

fn map_match(dto: &fd::MatchDto) -> Match {
    let date = DateTime::parse_from_rfc3339(&dto.utc_date)
        .map(|d| d.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());

    Match {
        id: dto.id.to_string(),
        league_id: dto.competition.id.to_string(),
        league_name: dto.competition.name.clone(),
        season: extract_season(&dto.utc_date),
        home_team_id: dto.home_team.id.to_string(),
        away_team_id: dto.away_team.id.to_string(),
        home_team_name: dto.home_team.name.clone(),
        away_team_name: dto.away_team.name.clone(),
        home_team_logo_url: dto.home_team.crest.clone(),
        away_team_logo_url: dto.away_team.crest.clone(),
        venue_name: dto.venue.clone(),
        date,
        status: MatchStatus::from_provider_code(&dto.status),
        home_score: score_of(dto, |d| d.home),
        away_score: score_of(dto, |d| d.away),
        attendance: dto.attendance,
        minute: dto.minute,
    }
}

fn score_of(dto: &fd::MatchDto, pick: fn(&fd::ScoreDetail) -> Option<i32>) -> Option<i32> {
    dto.score
        .as_ref()
        .and_then(|s| s.full_time.as_ref())
        .and_then(pick)
}

/// Season year, taken from the kickoff date's year.
fn extract_season(utc_date: &str) -> i32 {
    utc_date
        .get(..4)
        .and_then(|y| y.parse().ok())
        .unwrap_or_else(|| Local::now().year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_play_dto() -> fd::MatchDto {
        serde_json::from_value(serde_json::json!({
            "id": 497014,
            "utcDate": "2025-03-01T15:00:00Z",
            "status": "IN_PLAY",
            "minute": 67,
            "homeTeam": {"id": 57, "name": "Arsenal FC", "shortName": "Arsenal", "crest": null},
            "awayTeam": {"id": 61, "name": "Chelsea FC", "shortName": "Chelsea", "crest": null},
            "score": {"winner": null, "fullTime": {"home": 2, "away": 1}},
            "competition": {"id": 2021, "name": "Premier League"},
            "venue": "Emirates Stadium",
            "attendance": null
        }))
        .unwrap()
    }

    #[test]
    fn test_in_play_match_maps_to_live_with_scores() {
        let mapped = map_match(&in_play_dto());
        assert_eq!(mapped.status, MatchStatus::Live);
        assert_eq!(mapped.minute, Some(67));
        assert_eq!(mapped.home_score, Some(2));
        assert_eq!(mapped.away_score, Some(1));
        assert_eq!(mapped.season, 2025);
        assert_eq!(mapped.league_id, "2021");
        assert_eq!(mapped.date.to_rfc3339(), "2025-03-01T15:00:00+00:00");
    }

    #[test]
    fn test_missing_score_block_maps_to_none() {
        let mut dto = in_play_dto();
        dto.score = None;
        let mapped = map_match(&dto);
        assert_eq!(mapped.home_score, None);
        assert_eq!(mapped.away_score, None);
    }

    #[test]
    fn test_endpoint_preserves_order_fingerprint_canonicalizes() {
        let params = [
            ("dateTo", "2025-03-08".to_string()),
            ("dateFrom", "2025-03-01".to_string()),
        ];
        assert_eq!(
            build_endpoint("matches", &params),
            "matches?dateTo=2025-03-08&dateFrom=2025-03-01"
        );
        assert_eq!(
            fingerprint("matches", &params),
            "matches?dateFrom=2025-03-01&dateTo=2025-03-08"
        );
    }

    #[test]
    fn test_extract_season_falls_back_to_current_year() {
        assert_eq!(extract_season("2024-08-17T12:00:00Z"), 2024);
        assert_eq!(extract_season("bad"), Local::now().year());
    }
}
