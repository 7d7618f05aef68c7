//! Seeding the station dataset into a document store.
//!
//! The loader writes through the [`DocumentStore`] trait; production uses
//! [`FirestoreStore`], dry runs and tests use [`MemoryStore`].

mod document;
mod firestore;
mod loader;
mod memory;
mod store;

pub use document::{Document, DocumentPath, FieldValue, auto_id};
pub use firestore::{FirestoreConfig, FirestoreStore};
pub use loader::{
    AGENTS_COLLECTION, DEFAULT_AGENT_NAME, RecordError, STATIONS_COLLECTION, SeedError, SeedReport,
    agent_document, seed_stations, station_document, validate_record,
};
pub use memory::MemoryStore;
pub use store::{DocumentStore, StoreError};
