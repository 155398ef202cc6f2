//! Provider wire shapes.
//!
//! These structs mirror the JSON the upstreams emit and exist only as
//! decode targets; domain services map them into `models` entities
//! immediately after a fetch.

pub mod api_football;
pub mod football_data;
