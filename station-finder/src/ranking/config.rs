//! Ranking configuration.

/// Parameters for ranking stations by road distance.
#[derive(Debug, Clone)]
pub struct RankConfig {
    /// Stations further than this by road are discarded (kilometres).
    pub max_distance_km: f64,

    /// Maximum number of stations to return.
    pub max_results: usize,
}

impl RankConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_distance_km: f64, max_results: usize) -> Self {
        Self {
            max_distance_km,
            max_results,
        }
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 10.0,
            max_results: 10,
        }
    }
}
