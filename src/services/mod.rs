//! Domain services: one per resource family.
//!
//! Every service follows the same read path: build the fingerprint for
//! the logical query, consult its cache, and only on a miss go through
//! the shared [`ApiGateway`](crate::api::ApiGateway), map the provider
//! DTOs into domain entities, populate the cache and return. Failed
//! fetches are never cached and never retried here.

pub mod fixtures;
pub mod leagues;
pub mod scorers;
pub mod stadiums;
pub mod standings;
pub mod teams;

pub use fixtures::FixturesService;
pub use leagues::LeaguesService;
pub use scorers::ScorersService;
pub use stadiums::StadiumsService;
pub use standings::StandingsService;
pub use teams::TeamsService;

use std::sync::Arc;

use crate::api::ApiGateway;
use crate::config::Config;
use crate::error::ApiError;

/// Bundles one shared gateway and one of each domain service.
///
/// Construct one per process and hand it to the presentation layer; tests
/// can instead build services around a gateway pointed at a fake server
/// via [`SportsData::with_gateway`].
#[derive(Debug)]
pub struct SportsData {
    pub fixtures: FixturesService,
    pub leagues: LeaguesService,
    pub teams: TeamsService,
    pub standings: StandingsService,
    pub scorers: ScorersService,
    pub stadiums: StadiumsService,
}

impl SportsData {
    /// Builds the full service set from a configuration.
    pub fn new(config: Config) -> Result<Self, ApiError> {
        Ok(Self::with_gateway(Arc::new(ApiGateway::new(config)?)))
    }

    /// Builds the service set around an existing gateway.
    pub fn with_gateway(gateway: Arc<ApiGateway>) -> Self {
        Self {
            fixtures: FixturesService::new(gateway.clone()),
            leagues: LeaguesService::new(gateway.clone()),
            teams: TeamsService::new(gateway.clone()),
            standings: StandingsService::new(gateway.clone()),
            scorers: ScorersService::new(gateway.clone()),
            stadiums: StadiumsService::new(gateway),
        }
    }
}
