//! # bsports-core
//!
//! Data-access core for football results and statistics, aggregating two
//! upstream providers behind a single typed API:
//!
//! - **football-data.org v4** — matches, leagues, teams, standings, scorers
//! - **api-football v3** — venues
//!
//! All traffic flows through one [`ApiGateway`] that enforces per-provider
//! rate limits (a rolling-minute window for both providers, plus a daily
//! quota for api-football). Each domain service keeps its own TTL cache so
//! repeated reads within the freshness window never reach the network.
//!
//! ```no_run
//! use bsports_core::{Config, SportsData};
//!
//! # async fn run() -> Result<(), bsports_core::ApiError> {
//! let config = Config::load().await?;
//! let data = SportsData::new(config)?;
//!
//! let today = data.fixtures.today().await?;
//! for m in &today {
//!     println!("{} vs {}", m.home_team_name, m.away_team_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod constants;
pub mod dto;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use api::{ApiGateway, Provider};
pub use config::Config;
pub use error::ApiError;
pub use models::{
    League, Match, MatchStatus, Player, Scorer, Stadium, StandingsEntry, Team,
};
pub use services::{
    FixturesService, LeaguesService, ScorersService, SportsData, StadiumsService,
    StandingsService, TeamsService,
};

/// Crate version from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name from Cargo metadata.
pub const NAME: &str = env!("CARGO_PKG_NAME");
