//! Application state for the web layer.

use std::sync::Arc;

use crate::domain::StationRecord;
use crate::ranking::RankConfig;
use crate::routing::RouteProvider;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// Routing provider used to measure road distances
    pub routes: Arc<dyn RouteProvider>,

    /// Station records, loaded once at startup and never mutated
    pub stations: Arc<Vec<StationRecord>>,

    /// Ranking configuration
    pub config: Arc<RankConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        routes: impl RouteProvider + 'static,
        stations: Vec<StationRecord>,
        config: RankConfig,
    ) -> Self {
        Self {
            routes: Arc::new(routes),
            stations: Arc::new(stations),
            config: Arc::new(config),
        }
    }
}
