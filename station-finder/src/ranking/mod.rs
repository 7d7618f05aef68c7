//! Route-distance ranking pipeline.
//!
//! Given an origin and the static station list, finds the stations that
//! are closest by road:
//!
//! 1. Stations with malformed or out-of-range coordinates are dropped
//! 2. A driving route is requested for every remaining station, concurrently
//! 3. Stations whose request failed are skipped
//! 4. The rest are filtered by distance, deduplicated by name, sorted
//!    nearest-first and truncated

mod aggregate;
mod config;
mod ranker;

pub use aggregate::{RankedStation, aggregate};
pub use config::RankConfig;
pub use ranker::{RankError, StationRanker, eligible_stations};
