//! In-memory domain caches with per-entry TTL.
//!
//! Each domain service owns one or more [`TtlCache`] instances keyed by
//! request fingerprints. The cache is memory-resident only and lost on
//! process termination; expired entries are treated as absent, never
//! served.

pub mod fingerprint;
pub mod store;
pub mod types;

pub use fingerprint::fingerprint;
pub use store::TtlCache;
pub use types::CachedValue;
