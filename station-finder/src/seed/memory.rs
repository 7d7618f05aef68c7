//! In-memory document store.
//!
//! Used for dry runs of the seed loader and in tests. Applies the same
//! value rules as the managed store for the value kinds the loader writes.

use std::collections::BTreeMap;
use std::sync::Mutex;

use chrono::Utc;
use futures::FutureExt;
use futures::future::BoxFuture;

use crate::domain::LatLng;

use super::document::{Document, DocumentPath, FieldValue};
use super::store::{DocumentStore, StoreError};

/// Document store held in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: Mutex<BTreeMap<DocumentPath, Document>>,
    /// Number of further writes to accept before failing; `None` for no limit
    remaining_writes: Mutex<Option<usize>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every write after the first `n`.
    pub fn failing_after(n: usize) -> Self {
        Self {
            documents: Mutex::default(),
            remaining_writes: Mutex::new(Some(n)),
        }
    }

    /// Number of stored documents, nested ones included.
    pub fn len(&self) -> usize {
        self.lock_documents().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The document at `path`, if any.
    pub fn get(&self, path: &DocumentPath) -> Option<Document> {
        self.lock_documents().get(path).cloned()
    }

    /// Paths of all documents directly in a top-level collection.
    pub fn paths_in(&self, collection: &str) -> Vec<DocumentPath> {
        self.lock_documents()
            .keys()
            .filter(|p| p.parent().is_none() && p.collection() == collection)
            .cloned()
            .collect()
    }

    /// Paths of all documents in a sub-collection of `parent`.
    pub fn children_of(&self, parent: &DocumentPath, collection: &str) -> Vec<DocumentPath> {
        self.lock_documents()
            .keys()
            .filter(|p| p.parent().as_ref() == Some(parent) && p.collection() == collection)
            .cloned()
            .collect()
    }

    fn lock_documents(&self) -> std::sync::MutexGuard<'_, BTreeMap<DocumentPath, Document>> {
        // A poisoned map is still a consistent map: writes are single inserts.
        self.documents
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self, path: &DocumentPath, document: Document) -> Result<(), StoreError> {
        {
            let mut remaining = self
                .remaining_writes
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            match remaining.as_mut() {
                Some(0) => {
                    return Err(StoreError::Api {
                        status: 503,
                        message: format!("write to {path} rejected"),
                    });
                }
                Some(n) => *n -= 1,
                None => {}
            }
        }

        let now = Utc::now();
        let mut resolved = Document::new();

        for (field, value) in document {
            let value = match value {
                FieldValue::ServerTimestamp => FieldValue::Timestamp(now),
                FieldValue::GeoPoint {
                    latitude,
                    longitude,
                } => {
                    LatLng::new(latitude, longitude).validate().map_err(|e| {
                        StoreError::InvalidValue {
                            field: field.clone(),
                            reason: e.to_string(),
                        }
                    })?;
                    FieldValue::GeoPoint {
                        latitude,
                        longitude,
                    }
                }
                other => other,
            };
            resolved.insert(field, value);
        }

        self.lock_documents().insert(path.clone(), resolved);
        Ok(())
    }
}

impl DocumentStore for MemoryStore {
    fn set<'a>(
        &'a self,
        path: &'a DocumentPath,
        document: Document,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        let result = self.write(path, document);
        async move { result }.boxed()
    }
}
