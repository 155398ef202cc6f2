//! Provider-agnostic domain entities.
//!
//! All of these are immutable value records: they are produced only by a
//! domain service's response-mapping step and never mutated afterwards.
//! Cross-references between entities are by string identifier, never by
//! pointer.

pub mod leagues;
pub mod matches;
pub mod scorers;
pub mod stadiums;
pub mod standings;
pub mod teams;

pub use leagues::League;
pub use matches::{Match, MatchStatus};
pub use scorers::Scorer;
pub use stadiums::Stadium;
pub use standings::StandingsEntry;
pub use teams::{Player, Team};
