//! Pushes the static station dataset into a document store.
//!
//! Every valid record becomes a station document with a freshly assigned
//! id, holding one agent document in its `agents` sub-collection. Ids are
//! not derived from station data, so running the loader twice creates
//! every station twice.

use tracing::{error, info, warn};

use crate::domain::StationRecord;

use super::document::{Document, DocumentPath, FieldValue};
use super::store::{DocumentStore, StoreError};

/// Top-level collection holding station documents.
pub const STATIONS_COLLECTION: &str = "fuelStations";

/// Sub-collection of a station holding its agent.
pub const AGENTS_COLLECTION: &str = "agents";

/// Display name given to every seeded agent.
pub const DEFAULT_AGENT_NAME: &str = "Default Agent";

/// A record that cannot be seeded.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("missing name")]
    MissingName,

    #[error("missing phone")]
    MissingPhone,

    #[error("missing agent id")]
    MissingAgentId,
}

/// Check that a record has everything a station document needs.
pub fn validate_record(station: &StationRecord) -> Result<(), RecordError> {
    if station.name.is_empty() {
        return Err(RecordError::MissingName);
    }
    if station.phone.is_empty() {
        return Err(RecordError::MissingPhone);
    }
    if station.agent_id.is_empty() {
        return Err(RecordError::MissingAgentId);
    }
    Ok(())
}

/// Fields of the station document for `station`.
pub fn station_document(station: &StationRecord) -> Document {
    let mut doc = Document::new();
    doc.insert("name".into(), FieldValue::from(station.name.as_str()));
    doc.insert("pump_location".into(), geo_point(station));
    doc.insert("phone".into(), FieldValue::from(station.phone.as_str()));
    doc.insert("isAvailable".into(), FieldValue::Bool(true));
    doc.insert("createdAt".into(), FieldValue::ServerTimestamp);
    doc.insert("updatedAt".into(), FieldValue::ServerTimestamp);
    doc
}

/// Fields of the agent document nested under `station`'s document.
pub fn agent_document(station: &StationRecord) -> Document {
    let mut doc = Document::new();
    doc.insert("name".into(), FieldValue::from(DEFAULT_AGENT_NAME));
    doc.insert("phone".into(), FieldValue::from(station.phone.as_str()));
    doc.insert("lastKnownLocation".into(), geo_point(station));
    doc
}

fn geo_point(station: &StationRecord) -> FieldValue {
    FieldValue::GeoPoint {
        latitude: station.latitude,
        longitude: station.longitude,
    }
}

/// Outcome of a completed seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Stations written, each with its agent
    pub uploaded: usize,
    /// Records skipped for missing fields
    pub skipped: usize,
}

/// A write failure that stopped the run.
///
/// Documents written before the failure are left in place.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {path} after uploading {uploaded} stations: {source}")]
pub struct SeedError {
    pub path: DocumentPath,
    pub uploaded: usize,
    #[source]
    pub source: StoreError,
}

/// Write every valid record in `stations` to `store`.
///
/// Invalid records are skipped with a warning. The first write error stops
/// the run; nothing is retried or rolled back.
pub async fn seed_stations<S: DocumentStore + ?Sized>(
    store: &S,
    stations: &[StationRecord],
) -> Result<SeedReport, SeedError> {
    let mut report = SeedReport::default();

    for station in stations {
        if let Err(e) = validate_record(station) {
            warn!(station = ?station, reason = %e, "skipping station with missing data");
            report.skipped += 1;
            continue;
        }

        let station_path = DocumentPath::with_auto_id(STATIONS_COLLECTION);
        write(store, &station_path, station_document(station), &report).await?;

        let agent_path = station_path.child(AGENTS_COLLECTION, station.agent_id.as_str());
        write(store, &agent_path, agent_document(station), &report).await?;

        report.uploaded += 1;
        info!(station = %station.name, path = %station_path, "uploaded station");
    }

    info!(
        uploaded = report.uploaded,
        skipped = report.skipped,
        "all stations uploaded"
    );
    Ok(report)
}

async fn write<S: DocumentStore + ?Sized>(
    store: &S,
    path: &DocumentPath,
    document: Document,
    report: &SeedReport,
) -> Result<(), SeedError> {
    store.set(path, document).await.map_err(|source| {
        error!(%path, error = %source, "error uploading stations, aborting");
        SeedError {
            path: path.clone(),
            uploaded: report.uploaded,
            source,
        }
    })
}
