//! The static fuel station dataset.
//!
//! Compiled into the binaries and loaded once at startup. The query
//! service ranks these records; the seed loader pushes them into the
//! document store.

mod data;

pub use data::all_stations;
