//! Fuel station finder.
//!
//! An HTTP service that answers: "which fuel stations can I drive to
//! from here, nearest first?" plus a loader that seeds the same station
//! list into a document store.

pub mod config;
pub mod domain;
pub mod ranking;
pub mod routing;
pub mod seed;
pub mod stations;
pub mod telemetry;
pub mod web;
