//! Process configuration from environment variables.
//!
//! Credentials are only ever read from the environment; nothing has a
//! compiled-in token.

use std::str::FromStr;

use crate::routing::MapboxConfig;
use crate::seed::FirestoreConfig;

/// Port the query service listens on unless `PORT` says otherwise.
pub const DEFAULT_PORT: u16 = 5001;

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("{0} must be set")]
    Missing(&'static str),

    /// A variable could not be parsed
    #[error("{name}={value:?} is invalid: {reason}")]
    Invalid {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the query service.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port to listen on (all interfaces)
    pub port: u16,
    /// Routing provider client settings
    pub mapbox: MapboxConfig,
}

impl ServerConfig {
    /// Variables that must be set for [`ServerConfig::from_env`] to succeed.
    pub const REQUIRED: &'static [&'static str] = &["MAPBOX_ACCESS_TOKEN"];

    /// Read configuration from the process environment.
    ///
    /// - `MAPBOX_ACCESS_TOKEN` (required)
    /// - `MAPBOX_BASE_URL` (optional)
    /// - `ROUTING_TIMEOUT_SECS` (optional)
    /// - `PORT` (optional, default 5001)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token = required(&lookup, "MAPBOX_ACCESS_TOKEN")?;
        let mut mapbox = MapboxConfig::new(token);

        if let Some(url) = optional(&lookup, "MAPBOX_BASE_URL") {
            mapbox = mapbox.with_base_url(url);
        }
        if let Some(secs) = parsed::<u64>(&lookup, "ROUTING_TIMEOUT_SECS")? {
            mapbox = mapbox.with_timeout(secs);
        }

        let port = parsed::<u16>(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);

        Ok(Self { port, mapbox })
    }
}

/// Configuration for the seed loader.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    pub firestore: FirestoreConfig,
}

impl SeedConfig {
    /// Variables that must be set for [`SeedConfig::from_env`] to succeed.
    pub const REQUIRED: &'static [&'static str] = &["FIRESTORE_PROJECT_ID", "FIRESTORE_ACCESS_TOKEN"];

    /// Read configuration from the process environment.
    ///
    /// - `FIRESTORE_PROJECT_ID` (required)
    /// - `FIRESTORE_ACCESS_TOKEN` (required)
    /// - `FIRESTORE_DATABASE` (optional)
    /// - `FIRESTORE_BASE_URL` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let project = required(&lookup, "FIRESTORE_PROJECT_ID")?;
        let token = required(&lookup, "FIRESTORE_ACCESS_TOKEN")?;
        let mut firestore = FirestoreConfig::new(project, token);

        if let Some(database) = optional(&lookup, "FIRESTORE_DATABASE") {
            firestore = firestore.with_database(database);
        }
        if let Some(url) = optional(&lookup, "FIRESTORE_BASE_URL") {
            firestore = firestore.with_base_url(url);
        }

        Ok(Self { firestore })
    }
}

fn optional(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name).filter(|v| !v.trim().is_empty())
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    optional(lookup, name).ok_or(ConfigError::Missing(name))
}

fn parsed<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    optional(lookup, name)
        .map(|value| {
            value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
                name,
                reason: e.to_string(),
                value,
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::routing::DEFAULT_BASE_URL;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn server_defaults() {
        let config = ServerConfig::from_lookup(env(&[("MAPBOX_ACCESS_TOKEN", "pk.abc")])).unwrap();

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.mapbox.access_token, "pk.abc");
        assert_eq!(config.mapbox.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn server_overrides() {
        let config = ServerConfig::from_lookup(env(&[
            ("MAPBOX_ACCESS_TOKEN", "pk.abc"),
            ("MAPBOX_BASE_URL", "http://localhost:9000"),
            ("ROUTING_TIMEOUT_SECS", "5"),
            ("PORT", "8080"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.mapbox.base_url, "http://localhost:9000");
        assert_eq!(config.mapbox.timeout_secs, 5);
    }

    #[test]
    fn missing_token_is_an_error() {
        let err = ServerConfig::from_lookup(env(&[("MAPBOX_ACCESS_TOKEN", "  ")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("MAPBOX_ACCESS_TOKEN"));
        assert_eq!(err.to_string(), "MAPBOX_ACCESS_TOKEN must be set");
    }

    #[test]
    fn bad_port_is_an_error() {
        let err = ServerConfig::from_lookup(env(&[
            ("MAPBOX_ACCESS_TOKEN", "pk.abc"),
            ("PORT", "seventy"),
        ]))
        .unwrap_err();

        assert!(matches!(err, ConfigError::Invalid { name: "PORT", .. }));
    }

    #[test]
    fn seed_config() {
        let config = SeedConfig::from_lookup(env(&[
            ("FIRESTORE_PROJECT_ID", "fuel-app"),
            ("FIRESTORE_ACCESS_TOKEN", "ya29.abc"),
            ("FIRESTORE_DATABASE", "stations"),
        ]))
        .unwrap();

        assert_eq!(config.firestore.project_id, "fuel-app");
        assert_eq!(config.firestore.access_token, "ya29.abc");
        assert_eq!(config.firestore.database, "stations");
    }

    #[test]
    fn seed_config_requires_project() {
        let err =
            SeedConfig::from_lookup(env(&[("FIRESTORE_ACCESS_TOKEN", "ya29.abc")])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("FIRESTORE_PROJECT_ID"));
    }
}
