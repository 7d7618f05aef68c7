//! Cloud Firestore REST store.
//!
//! Each `set` is a single `documents:commit` call carrying one `update`
//! write. Server timestamp fields are sent as `REQUEST_TIME` transforms
//! rather than values.

use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::{Map, Value, json};
use tracing::debug;

use super::document::{Document, DocumentPath, FieldValue};
use super::store::{DocumentStore, StoreError};

/// Default base URL for the Firestore REST API.
pub const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Default database id.
pub const DEFAULT_DATABASE: &str = "(default)";

/// Configuration for the Firestore store.
#[derive(Clone)]
pub struct FirestoreConfig {
    /// Google Cloud project id
    pub project_id: String,
    /// OAuth2 bearer token
    pub access_token: String,
    /// Database id within the project
    pub database: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl FirestoreConfig {
    /// Create a new config for the default database of `project_id`.
    pub fn new(project_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            access_token: access_token.into(),
            database: DEFAULT_DATABASE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
        }
    }

    /// Use a named database.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set a custom base URL (for testing or the emulator).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl std::fmt::Debug for FirestoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirestoreConfig")
            .field("project_id", &self.project_id)
            .field("access_token", &"<redacted>")
            .field("database", &self.database)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Firestore document store over the REST API.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    http: reqwest::Client,
    base_url: String,
    /// `projects/{project}/databases/{database}/documents`
    documents_root: String,
}

impl FirestoreStore {
    /// Create a new Firestore store with the given configuration.
    pub fn new(config: FirestoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| StoreError::Api {
                status: 0,
                message: "Invalid access token format".to_string(),
            })?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            documents_root: format!(
                "projects/{}/databases/{}/documents",
                config.project_id, config.database
            ),
        })
    }

    /// Full resource name of a document.
    fn resource_name(&self, path: &DocumentPath) -> String {
        format!("{}/{}", self.documents_root, path)
    }

    /// Body of a `documents:commit` request writing `document` at `path`.
    fn commit_body(&self, path: &DocumentPath, document: &Document) -> Value {
        let mut fields = Map::new();
        let mut transforms = Vec::new();

        for (name, value) in document {
            match encode_value(value) {
                Some(encoded) => {
                    fields.insert(name.clone(), encoded);
                }
                None => transforms.push(json!({
                    "fieldPath": name,
                    "setToServerValue": "REQUEST_TIME",
                })),
            }
        }

        let mut write = json!({
            "update": {
                "name": self.resource_name(path),
                "fields": fields,
            }
        });
        if !transforms.is_empty() {
            write["updateTransforms"] = Value::Array(transforms);
        }

        json!({ "writes": [write] })
    }

    async fn commit(&self, path: &DocumentPath, document: Document) -> Result<(), StoreError> {
        let url = format!("{}/{}:commit", self.base_url, self.documents_root);
        let body = self.commit_body(path, &document);

        debug!(%path, "committing document");
        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(StoreError::Unauthorized);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

impl DocumentStore for FirestoreStore {
    fn set<'a>(
        &'a self,
        path: &'a DocumentPath,
        document: Document,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        self.commit(path, document).boxed()
    }
}

/// Encode a field as a Firestore `Value`; `None` for server timestamps.
fn encode_value(value: &FieldValue) -> Option<Value> {
    let encoded = match value {
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Bool(b) => json!({ "booleanValue": b }),
        FieldValue::GeoPoint {
            latitude,
            longitude,
        } => json!({
            "geoPointValue": { "latitude": latitude, "longitude": longitude }
        }),
        FieldValue::Timestamp(t) => json!({ "timestampValue": t.to_rfc3339() }),
        FieldValue::ServerTimestamp => return None,
    };
    Some(encoded)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::Json;
    use axum::Router;
    use axum::extract::State;
    use axum::http::{HeaderMap as AxumHeaders, StatusCode};
    use axum::routing::post;

    use super::*;

    fn store(base_url: &str) -> FirestoreStore {
        FirestoreStore::new(FirestoreConfig::new("demo-project", "ya29.token").with_base_url(base_url))
            .unwrap()
    }

    #[test]
    fn config_defaults_and_debug_redaction() {
        let config = FirestoreConfig::new("demo-project", "ya29.secret");
        assert_eq!(config.database, DEFAULT_DATABASE);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(!format!("{config:?}").contains("ya29.secret"));
    }

    #[test]
    fn commit_body_splits_fields_and_transforms() {
        let store = store("http://localhost");
        let path = DocumentPath::new("fuelStations", "abc").child("agents", "agent001");

        let mut document = Document::new();
        document.insert("name".into(), FieldValue::from("Default Agent"));
        document.insert("isAvailable".into(), FieldValue::Bool(true));
        document.insert(
            "lastKnownLocation".into(),
            FieldValue::GeoPoint {
                latitude: 10.19,
                longitude: 76.4,
            },
        );
        document.insert("createdAt".into(), FieldValue::ServerTimestamp);

        let body = store.commit_body(&path, &document);
        let write = &body["writes"][0];

        assert_eq!(
            write["update"]["name"],
            "projects/demo-project/databases/(default)/documents/fuelStations/abc/agents/agent001"
        );
        let fields = &write["update"]["fields"];
        assert_eq!(fields["name"]["stringValue"], "Default Agent");
        assert_eq!(fields["isAvailable"]["booleanValue"], true);
        assert_eq!(fields["lastKnownLocation"]["geoPointValue"]["latitude"], 10.19);
        assert!(fields.get("createdAt").is_none());
        assert_eq!(write["updateTransforms"][0]["fieldPath"], "createdAt");
        assert_eq!(
            write["updateTransforms"][0]["setToServerValue"],
            "REQUEST_TIME"
        );
    }

    #[test]
    fn commit_body_without_timestamps_has_no_transforms() {
        let store = store("http://localhost");
        let body = store.commit_body(&DocumentPath::new("c", "d"), &Document::new());
        assert!(body["writes"][0].get("updateTransforms").is_none());
    }

    type Seen = Arc<Mutex<Vec<(Option<String>, Value)>>>;

    async fn fake_commit(
        State(seen): State<Seen>,
        headers: AxumHeaders,
        Json(body): Json<Value>,
    ) -> StatusCode {
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let ok = auth.as_deref() == Some("Bearer ya29.token");
        seen.lock().unwrap().push((auth, body));
        if ok {
            StatusCode::OK
        } else {
            StatusCode::UNAUTHORIZED
        }
    }

    async fn spawn_fake() -> (String, Seen) {
        let seen: Seen = Arc::default();
        let app = Router::new()
            .route("/projects/demo-project/databases/*rest", post(fake_commit))
            .with_state(seen.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}"), seen)
    }

    #[tokio::test]
    async fn set_posts_commit_with_bearer_token() {
        let (base, seen) = spawn_fake().await;
        let store = store(&base);
        let path = DocumentPath::new("fuelStations", "abc");

        let mut document = Document::new();
        document.insert("phone".into(), FieldValue::from("9876543210"));
        store.set(&path, document).await.unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0.as_deref(), Some("Bearer ya29.token"));
        assert_eq!(
            seen[0].1["writes"][0]["update"]["fields"]["phone"]["stringValue"],
            "9876543210"
        );
    }

    #[tokio::test]
    async fn rejected_token_is_unauthorized() {
        let (base, _seen) = spawn_fake().await;
        let store =
            FirestoreStore::new(FirestoreConfig::new("demo-project", "expired").with_base_url(&base))
                .unwrap();

        let result = store
            .set(&DocumentPath::new("fuelStations", "abc"), Document::new())
            .await;
        assert!(matches!(result, Err(StoreError::Unauthorized)));
    }
}
