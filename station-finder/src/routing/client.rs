//! Mapbox Directions HTTP client.
//!
//! Requests a route between two points and reports its length. The access
//! token travels as a query parameter, so it never appears in logs or
//! error messages produced here.

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::trace;

use crate::domain::LatLng;

use super::error::RoutingError;
use super::provider::RouteProvider;
use super::types::DirectionsResponse;

/// Default base URL for the Mapbox API.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com";

/// Routing profile path segment.
const DRIVING_PROFILE: &str = "mapbox/driving";

/// Geometry format requested for routes.
const GEOMETRIES: &str = "geojson";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the Mapbox client.
#[derive(Clone)]
pub struct MapboxConfig {
    /// Access token for the Directions API
    pub access_token: String,
    /// Base URL for the API (defaults to production Mapbox)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MapboxConfig {
    /// Create a new config with the given access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl std::fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("access_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Mapbox Directions API client.
///
/// Requests are issued as they come: there is no concurrency limit, retry
/// or caching.
#[derive(Clone)]
pub struct MapboxClient {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl MapboxClient {
    /// Create a new Mapbox client with the given configuration.
    pub fn new(config: MapboxConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token,
        })
    }

    /// Request driving directions through the given waypoints.
    ///
    /// Waypoints are sent as `longitude,latitude` pairs separated by `;`.
    pub async fn get_directions(
        &self,
        waypoints: &[LatLng],
    ) -> Result<DirectionsResponse, RoutingError> {
        let coordinates = waypoints
            .iter()
            .map(|p| format!("{},{}", p.longitude, p.latitude))
            .collect::<Vec<_>>()
            .join(";");

        let url = format!(
            "{}/directions/v5/{}/{}",
            self.base_url, DRIVING_PROFILE, coordinates
        );
        trace!(%coordinates, "requesting directions");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("geometries", GEOMETRIES),
                ("access_token", self.access_token.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(RoutingError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimited);
        }

        let body = response.text().await?;

        // Mapbox reports bad input as a 4xx with a JSON `code`, so try to parse
        // before falling back to a bare status error.
        let parsed: Result<DirectionsResponse, _> = serde_json::from_str(&body);

        if !status.is_success() {
            return Err(match parsed {
                Ok(directions) => RoutingError::Provider {
                    message: directions.message.unwrap_or_default(),
                    code: directions.code,
                },
                Err(_) => RoutingError::ApiError {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let directions = parsed.map_err(|e| RoutingError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        if directions.code != "Ok" {
            return Err(RoutingError::Provider {
                message: directions.message.unwrap_or_default(),
                code: directions.code,
            });
        }

        Ok(directions)
    }

    /// Driving distance in kilometres of the first route from `origin`
    /// to `destination`.
    pub async fn driving_distance(
        &self,
        origin: LatLng,
        destination: LatLng,
    ) -> Result<f64, RoutingError> {
        let directions = self.get_directions(&[origin, destination]).await?;

        let route = directions.routes.first().ok_or(RoutingError::NoRoute)?;
        Ok(route.distance_km())
    }
}

impl RouteProvider for MapboxClient {
    fn driving_distance_km(
        &self,
        origin: LatLng,
        destination: LatLng,
    ) -> BoxFuture<'_, Result<f64, RoutingError>> {
        self.driving_distance(origin, destination).boxed()
    }
}
