//! The routing provider seam used by the ranking pipeline.

use futures::future::BoxFuture;

use crate::domain::LatLng;

use super::error::RoutingError;

/// Something that can compute driving distances.
///
/// Implemented by [`MapboxClient`](super::MapboxClient) for production and by
/// in-memory fakes in tests.
pub trait RouteProvider: Send + Sync {
    /// Driving distance in kilometres from `origin` to `destination`.
    ///
    /// The distance is that of the first route the provider returns.
    fn driving_distance_km(
        &self,
        origin: LatLng,
        destination: LatLng,
    ) -> BoxFuture<'_, Result<f64, RoutingError>>;
}
