//! Directions API response types.
//!
//! Only the fields the ranking pipeline reads are modelled; everything
//! else in the response (geometry, legs, waypoints) is ignored.

use serde::Deserialize;

/// Response from the Directions API.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    /// `"Ok"` on success, otherwise an error code such as `"NoRoute"`.
    pub code: String,

    /// Human-readable error detail, present when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes, best first.
    #[serde(default)]
    pub routes: Vec<Route>,
}

/// A single route.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    /// Total distance in metres.
    pub distance: f64,
}

impl Route {
    /// Total distance in kilometres.
    pub fn distance_km(&self) -> f64 {
        self.distance / 1000.0
    }
}
