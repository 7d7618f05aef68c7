//! Fuel station records.

use serde::Serialize;

use super::LatLng;

/// A fuel station as described by the static dataset.
///
/// Serialises with the field names the HTTP API exposes
/// (`name, address, latitude, longitude, phone, agentId`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    /// Display name, also the deduplication key when ranking
    pub name: String,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub phone: String,
    /// Identifier of the agent assigned to this station
    pub agent_id: String,
}

impl StationRecord {
    /// Create a new station record.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        latitude: f64,
        longitude: f64,
        phone: impl Into<String>,
        agent_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            latitude,
            longitude,
            phone: phone.into(),
            agent_id: agent_id.into(),
        }
    }

    /// The station's position.
    pub fn location(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Whether the station's coordinates are finite and within bounds.
    pub fn has_valid_location(&self) -> bool {
        self.location().is_valid()
    }
}
