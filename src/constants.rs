//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and quota values so that the
//! gateway, caches and services agree on a single source of truth.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 100;

/// Default base URL for the football-data.org API (Provider A)
pub const FOOTBALL_DATA_BASE_URL: &str = "https://api.football-data.org/v4";

/// Default base URL for the api-football API (Provider B)
pub const API_FOOTBALL_BASE_URL: &str = "https://v3.football.api-sports.io";

/// Numeric ids of the top-tier competitions exposed by football-data.org.
/// Used for filtering favorites down to the closed reference set.
pub const TOP_LEAGUE_IDS: [u32; 12] = [
    2021, 2014, 2019, 2002, 2015, 2001, 2018, 2003, 2017, 2016, 2022, 2013,
];

/// Cache TTL (Time To Live) values in seconds, per resource family.
///
/// The values balance freshness against provider quota pressure: reference
/// data (leagues, teams, stadiums) is cached aggressively, live scores are
/// not.
pub mod cache_ttl {
    /// TTL for general match listings (5 minutes)
    pub const MATCHES_SECONDS: u64 = 5 * 60;

    /// TTL for live match listings (30 seconds, must track near-real-time state)
    pub const LIVE_MATCHES_SECONDS: u64 = 30;

    /// TTL for head-to-head history (7 days, historical data rarely changes)
    pub const HEAD_TO_HEAD_SECONDS: u64 = 7 * 24 * 60 * 60;

    /// TTL for the competitions listing (24 hours)
    pub const LEAGUES_SECONDS: u64 = 24 * 60 * 60;

    /// TTL for single teams and league rosters (24 hours)
    pub const TEAMS_SECONDS: u64 = 24 * 60 * 60;

    /// TTL for stadiums (7 days, very stable)
    pub const STADIUMS_SECONDS: u64 = 7 * 24 * 60 * 60;

    /// TTL for league standings (15 minutes, updates during active match days)
    pub const STANDINGS_SECONDS: u64 = 15 * 60;

    /// TTL for top scorer listings (24 hours)
    pub const SCORERS_SECONDS: u64 = 24 * 60 * 60;
}

/// Per-family cache capacities. Fingerprint spaces are small, so these
/// mostly exist to bound memory if a caller enumerates queries.
pub mod cache_capacity {
    pub const MATCHES: usize = 200;
    pub const LEAGUES: usize = 8;
    pub const TEAMS: usize = 500;
    pub const STANDINGS: usize = 100;
    pub const SCORERS: usize = 100;
    pub const STADIUMS: usize = 600;
}

/// Published provider quotas enforced by the rate limiters
pub mod rate_limit {
    /// Sliding observation window for per-minute quotas (seconds)
    pub const WINDOW_SECONDS: u64 = 60;

    /// football-data.org: requests allowed per rolling minute
    pub const FOOTBALL_DATA_PER_MINUTE: usize = 10;

    /// api-football: requests allowed per rolling minute
    pub const API_FOOTBALL_PER_MINUTE: usize = 10;

    /// api-football: requests allowed per provider-local calendar day
    pub const API_FOOTBALL_PER_DAY: usize = 100;
}

/// Environment variable names
pub mod env_vars {
    /// API key for football-data.org (Provider A)
    pub const FOOTBALL_DATA_KEY: &str = "FOOTBALL_DATA_ORG_KEY";

    /// API key for api-football (Provider B)
    pub const API_FOOTBALL_KEY: &str = "API_FOOTBALL_KEY";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "BSPORTS_HTTP_TIMEOUT";

    /// Override for the log file path
    pub const LOG_FILE: &str = "BSPORTS_LOG_FILE";
}

/// Default number of head-to-head results requested per match
pub const DEFAULT_H2H_LIMIT: u32 = 5;

/// Default number of scorers requested per competition
pub const DEFAULT_SCORERS_LIMIT: u32 = 10;
