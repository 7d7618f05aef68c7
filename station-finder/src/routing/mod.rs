//! Routing provider client.
//!
//! Computes driving distances between two coordinates using the Mapbox
//! Directions API. The ranking pipeline depends only on the
//! [`RouteProvider`] trait so tests can substitute canned distances.

mod client;
mod error;
mod provider;
mod types;

pub use client::{DEFAULT_BASE_URL, MapboxClient, MapboxConfig};
pub use error::RoutingError;
pub use provider::RouteProvider;
pub use types::{DirectionsResponse, Route};

#[cfg(test)]
pub(crate) mod mock;
