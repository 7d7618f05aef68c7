//! Document addressing and field values.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of an automatically assigned document identifier.
const AUTO_ID_LEN: usize = 20;

/// Generate a random document identifier.
///
/// 20 alphanumeric characters, the same shape the managed store's own
/// client libraries use.
pub fn auto_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(AUTO_ID_LEN)
        .map(char::from)
        .collect()
}

/// Path to a document, possibly nested under other documents.
///
/// Rendered as alternating collection and document ids, e.g.
/// `fuelStations/Xk3.../agents/agent001`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentPath {
    segments: Vec<(String, String)>,
}

impl DocumentPath {
    /// A top-level document.
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            segments: vec![(collection.into(), id.into())],
        }
    }

    /// A new top-level document with an automatically assigned id.
    pub fn with_auto_id(collection: impl Into<String>) -> Self {
        Self::new(collection, auto_id())
    }

    /// A document in a sub-collection of this one.
    pub fn child(&self, collection: impl Into<String>, id: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push((collection.into(), id.into()));
        Self { segments }
    }

    /// The document's own id.
    pub fn id(&self) -> &str {
        // Constructors always push at least one segment.
        &self.segments[self.segments.len() - 1].1
    }

    /// The collection the document lives in.
    pub fn collection(&self) -> &str {
        &self.segments[self.segments.len() - 1].0
    }

    /// The enclosing document, if this one is nested.
    pub fn parent(&self) -> Option<DocumentPath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (collection, id)) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{collection}/{id}")?;
        }
        Ok(())
    }
}

/// A value stored in a document field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    String(String),
    Bool(bool),
    GeoPoint { latitude: f64, longitude: f64 },
    Timestamp(DateTime<Utc>),
    /// Placeholder resolved to the store's clock when the write is applied
    ServerTimestamp,
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Field name to value.
pub type Document = BTreeMap<String, FieldValue>;
