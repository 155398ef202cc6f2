//! Provider-facing plumbing: the HTTP client, the per-provider rate
//! limiters, and the gateway that owns both.

pub mod gateway;
pub mod http_client;
pub mod rate_limit;

pub use gateway::{ApiGateway, Provider};
pub use rate_limit::{DualWindowLimiter, SlidingWindowLimiter};
