//! Domain types for the station finder.
//!
//! Coordinates and the static station records that both the query
//! service and the seed loader work from.

mod coordinate;
mod station;

pub use coordinate::{InvalidCoordinate, LatLng};
pub use station::StationRecord;
