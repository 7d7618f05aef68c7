//! Route-distance ranking of stations around an origin.

use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{LatLng, StationRecord};
use crate::routing::{RouteProvider, RoutingError};

use super::aggregate::{RankedStation, aggregate};
use super::config::RankConfig;

/// Errors that abort a whole ranking request.
///
/// Failures for individual stations never surface here; those stations
/// are simply left out of the result.
#[derive(Debug, thiserror::Error)]
pub enum RankError {
    /// The routing provider rejected the request as a whole
    #[error("routing provider unavailable: {0}")]
    Provider(#[source] RoutingError),
}

/// Stations whose coordinates are finite and within geographic bounds.
pub fn eligible_stations(stations: &[StationRecord]) -> Vec<&StationRecord> {
    stations.iter().filter(|s| s.has_valid_location()).collect()
}

/// Ranks stations by driving distance from an origin.
pub struct StationRanker<'a, P: RouteProvider + ?Sized> {
    provider: &'a P,
    config: &'a RankConfig,
}

impl<'a, P: RouteProvider + ?Sized> StationRanker<'a, P> {
    /// Create a new ranker.
    pub fn new(provider: &'a P, config: &'a RankConfig) -> Self {
        Self { provider, config }
    }

    /// Rank `stations` by driving distance from `origin`.
    ///
    /// One route is requested per eligible station, all at once, and
    /// ranking waits until every request has settled. A station whose
    /// request fails is logged and dropped. The only error returned is a
    /// provider-level failure (see [`RoutingError::is_provider_level`]).
    pub async fn rank(
        &self,
        origin: LatLng,
        stations: &[StationRecord],
    ) -> Result<Vec<RankedStation>, RankError> {
        let eligible = eligible_stations(stations);
        debug!(
            total = stations.len(),
            eligible = eligible.len(),
            %origin,
            "requesting route distances"
        );

        let outcomes = join_all(eligible.into_iter().map(|station| async move {
            let result = self
                .provider
                .driving_distance_km(origin, station.location())
                .await;
            (station, result)
        }))
        .await;

        let mut measured = Vec::with_capacity(outcomes.len());
        let mut provider_error = None;

        for (station, result) in outcomes {
            match result {
                Ok(distance_km) => measured.push(RankedStation::new(station.clone(), distance_km)),
                Err(e) if e.is_provider_level() => {
                    if provider_error.is_none() {
                        provider_error = Some(e);
                    }
                }
                Err(e) => {
                    warn!(
                        station = %station.name,
                        error = %e,
                        "error calculating distance, skipping station"
                    );
                }
            }
        }

        if let Some(e) = provider_error {
            return Err(RankError::Provider(e));
        }

        let ranked = aggregate(measured, self.config);

        for entry in &ranked {
            debug!(
                station = %entry.station.name,
                distance_km = entry.distance_km,
                "ranked station"
            );
        }

        Ok(ranked)
    }
}
