//! The API Gateway: single owner of both provider clients and both rate
//! limiters.
//!
//! Every network request in the crate flows through [`ApiGateway::fetch`]:
//! limiter gate, one HTTP GET with the provider's credential header,
//! status classification, then decode. Calls to different providers never
//! block each other; calls to the same provider share only that provider's
//! limiter serialization.

use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode, Url, header::ACCEPT};
use serde::de::DeserializeOwned;
use tokio::time::Instant;
use tracing::{debug, error, info, instrument, warn};

use crate::config::Config;
use crate::constants::rate_limit;
use crate::error::ApiError;

use super::http_client::create_http_client_with_timeout;
use super::rate_limit::{DualWindowLimiter, SlidingWindowLimiter};

/// One of the two upstream football-data providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// football-data.org (Provider A): 10 requests per rolling minute.
    FootballData,
    /// api-football (Provider B): 10/minute plus 100 per calendar day.
    ApiFootball,
}

impl Provider {
    pub fn name(&self) -> &'static str {
        match self {
            Provider::FootballData => "football-data.org",
            Provider::ApiFootball => "api-football",
        }
    }

    fn auth_header(&self) -> &'static str {
        match self {
            Provider::FootballData => "X-Auth-Token",
            Provider::ApiFootball => "x-apisports-key",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Owns the HTTP client, the provider configuration and both limiters.
/// Construct one per process and share it across services via `Arc`.
#[derive(Debug)]
pub struct ApiGateway {
    client: Client,
    config: Config,
    football_data_limiter: SlidingWindowLimiter,
    api_football_limiter: DualWindowLimiter,
}

impl ApiGateway {
    /// Builds the gateway, validating the configuration up front so a
    /// missing credential fails at construction rather than on the first
    /// request.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        config.validate()?;
        let client = create_http_client_with_timeout(config.http_timeout_seconds)
            .map_err(|e| ApiError::Unknown(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            config,
            football_data_limiter: SlidingWindowLimiter::new(
                Provider::FootballData.name(),
                rate_limit::FOOTBALL_DATA_PER_MINUTE,
                Duration::from_secs(rate_limit::WINDOW_SECONDS),
            ),
            api_football_limiter: DualWindowLimiter::new(
                Provider::ApiFootball.name(),
                rate_limit::API_FOOTBALL_PER_MINUTE,
                Duration::from_secs(rate_limit::WINDOW_SECONDS),
                rate_limit::API_FOOTBALL_PER_DAY,
            ),
        })
    }

    fn base_url(&self, provider: Provider) -> &str {
        match provider {
            Provider::FootballData => &self.config.football_data_base_url,
            Provider::ApiFootball => &self.config.api_football_base_url,
        }
    }

    fn api_key(&self, provider: Provider) -> &str {
        match provider {
            Provider::FootballData => &self.config.football_data_api_key,
            Provider::ApiFootball => &self.config.api_football_api_key,
        }
    }

    /// Requests recorded against a provider's current accounting window.
    /// Exposed for monitoring and tests.
    pub async fn recorded_requests(&self, provider: Provider) -> usize {
        match provider {
            Provider::FootballData => self.football_data_limiter.recorded_in_window().await,
            Provider::ApiFootball => self.api_football_limiter.recorded_today().await,
        }
    }

    /// Fetches one typed resource from a provider.
    ///
    /// The provider's limiter is acquired first and may suspend the
    /// caller (the one suspension point in this core); the slot stays
    /// recorded even when the upstream answers 429, mirroring the
    /// upstream's own accounting. Errors are never retried here.
    #[instrument(skip(self), fields(provider = %provider))]
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        provider: Provider,
        endpoint: &str,
    ) -> Result<T, ApiError> {
        match provider {
            Provider::FootballData => self.football_data_limiter.acquire().await,
            Provider::ApiFootball => self.api_football_limiter.acquire().await?,
        }

        let url_str = format!("{}/{}", self.base_url(provider).trim_end_matches('/'), endpoint);
        let url = Url::parse(&url_str).map_err(|_| ApiError::invalid_url(&url_str))?;

        info!("Fetching data from {}: {}", provider, url_str);
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .header(provider.auth_header(), self.api_key(provider))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Request failed for URL {}: {}", url_str, e);
                ApiError::from_transport(&url_str, &e)
            })?;

        let status = response.status();
        debug!(
            "Response received: provider={}, status={}, duration={:?}",
            provider,
            status,
            start.elapsed()
        );

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Rate limit exceeded (429) from {} (URL: {})", provider, url_str);
            return Err(ApiError::rate_limit_exceeded(provider.name()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                "HTTP {} from {} (URL: {}), body: {}",
                status.as_u16(),
                provider,
                url_str,
                body.chars().take(200).collect::<String>()
            );
            return Err(ApiError::http_error(status.as_u16(), &url_str));
        }

        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body from {}: {}", url_str, e);
            ApiError::from_transport(&url_str, &e)
        })?;
        debug!("Response length: {} bytes", body.len());

        match serde_json::from_str::<T>(&body) {
            Ok(parsed) => {
                debug!("Successfully decoded response from {}", provider);
                Ok(parsed)
            }
            Err(e) => {
                error!("Failed to decode response from {}: {} (URL: {})", provider, e, url_str);
                if body.trim().is_empty() {
                    Err(ApiError::decoding_error("Response body is empty", &url_str))
                } else if !body.trim_start().starts_with('{') && !body.trim_start().starts_with('[')
                {
                    Err(ApiError::decoding_error("Response is not valid JSON", &url_str))
                } else {
                    Err(ApiError::decoding_error(e.to_string(), &url_str))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        ok: bool,
    }

    async fn gateway_for(server: &MockServer) -> ApiGateway {
        let mut config = Config::with_keys("fd-test-key", "af-test-key");
        config.football_data_base_url = server.uri();
        config.api_football_base_url = server.uri();
        ApiGateway::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_decodes_success_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .and(header("X-Auth-Token", "fd-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let probe: Probe = gateway.fetch(Provider::FootballData, "probe").await.unwrap();
        assert!(probe.ok);
        assert_eq!(gateway.recorded_requests(Provider::FootballData).await, 1);
    }

    #[tokio::test]
    async fn test_api_football_uses_its_own_credential_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .and(header("x-apisports-key", "af-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let probe: Probe = gateway.fetch(Provider::ApiFootball, "probe").await.unwrap();
        assert!(probe.ok);
        assert_eq!(gateway.recorded_requests(Provider::ApiFootball).await, 1);
    }

    #[tokio::test]
    async fn test_429_maps_to_rate_limit_and_still_records() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let result: Result<Probe, _> = gateway.fetch(Provider::FootballData, "probe").await;
        assert!(matches!(result, Err(ApiError::RateLimitExceeded { .. })));
        // The attempt still counts against the local window.
        assert_eq!(gateway.recorded_requests(Provider::FootballData).await, 1);
    }

    #[tokio::test]
    async fn test_non_success_status_maps_to_http_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let result: Result<Probe, _> = gateway.fetch(Provider::FootballData, "probe").await;
        assert!(matches!(result, Err(ApiError::Http { status: 503, .. })));
    }

    #[tokio::test]
    async fn test_unparseable_body_maps_to_decoding_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/probe"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server).await;
        let result: Result<Probe, _> = gateway.fetch(Provider::FootballData, "probe").await;
        assert!(matches!(result, Err(ApiError::Decoding { .. })));
    }

    #[tokio::test]
    async fn test_daily_exhaustion_fails_before_any_request() {
        let server = MockServer::start().await;
        // No mock mounted: a request reaching the server would 404, but
        // the limiter must reject first.
        let gateway = gateway_for(&server).await;
        gateway.api_football_limiter.seed_day_count(100).await;

        let result: Result<Probe, _> = gateway.fetch(Provider::ApiFootball, "probe").await;
        assert!(matches!(result, Err(ApiError::DailyLimitExceeded { .. })));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
