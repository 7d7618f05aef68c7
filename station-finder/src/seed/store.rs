//! The document store seam used by the seed loader.

use futures::future::BoxFuture;

use super::document::{Document, DocumentPath};

/// Errors from writing to a document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Credentials rejected
    #[error("unauthorized: check FIRESTORE_ACCESS_TOKEN")]
    Unauthorized,

    /// Store returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// A field value the store cannot hold
    #[error("invalid value for field {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// A store of nested documents.
pub trait DocumentStore: Send + Sync {
    /// Create or overwrite the document at `path`.
    ///
    /// [`FieldValue::ServerTimestamp`](super::FieldValue::ServerTimestamp)
    /// fields are set from the store's clock.
    fn set<'a>(
        &'a self,
        path: &'a DocumentPath,
        document: Document,
    ) -> BoxFuture<'a, Result<(), StoreError>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = StoreError::Api {
            status: 400,
            message: "bad request".into(),
        };
        assert_eq!(err.to_string(), "API error 400: bad request");

        let err = StoreError::InvalidValue {
            field: "pump_location".into(),
            reason: "latitude out of range".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value for field pump_location: latitude out of range"
        );
    }
}
