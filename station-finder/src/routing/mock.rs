//! In-memory route provider for tests.

use std::sync::Mutex;

use futures::FutureExt;
use futures::future::BoxFuture;

use crate::domain::LatLng;

use super::error::RoutingError;
use super::provider::RouteProvider;

/// What the mock answers for a destination.
#[derive(Debug, Clone, Copy)]
pub enum MockRoute {
    /// A route of this many kilometres
    Km(f64),
    /// A per-route failure
    Fail,
    /// The access token is rejected
    Unauthorized,
}

/// Route provider answering from a fixed table keyed by destination.
///
/// Destinations missing from the table get [`RoutingError::NoRoute`]. A
/// non-finite origin is rejected for every destination with the
/// provider's `InvalidInput` code.
#[derive(Default)]
pub struct MockProvider {
    routes: Vec<(LatLng, MockRoute)>,
    call_count: Mutex<usize>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, destination: LatLng, route: MockRoute) -> Self {
        self.routes.push((destination, route));
        self
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl RouteProvider for MockProvider {
    fn driving_distance_km(
        &self,
        origin: LatLng,
        destination: LatLng,
    ) -> BoxFuture<'_, Result<f64, RoutingError>> {
        *self.call_count.lock().unwrap() += 1;

        let route = self
            .routes
            .iter()
            .find(|(point, _)| *point == destination)
            .map(|(_, route)| *route);

        let origin_finite = origin.latitude.is_finite() && origin.longitude.is_finite();

        async move {
            // Let other requests interleave, as real ones would.
            tokio::task::yield_now().await;
            if !origin_finite {
                return Err(RoutingError::Provider {
                    code: "InvalidInput".to_string(),
                    message: "Coordinate is invalid".to_string(),
                });
            }
            match route {
                Some(MockRoute::Km(km)) => Ok(km),
                Some(MockRoute::Fail) => Err(RoutingError::ApiError {
                    status: 503,
                    message: "service unavailable".to_string(),
                }),
                Some(MockRoute::Unauthorized) => Err(RoutingError::Unauthorized),
                None => Err(RoutingError::NoRoute),
            }
        }
        .boxed()
    }
}
