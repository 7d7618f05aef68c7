//! Routing provider error types.

use std::fmt;

/// Errors from requesting a route.
#[derive(Debug)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    ApiError { status: u16, message: String },

    /// Provider answered but reported a routing failure (e.g. `InvalidInput`)
    Provider { code: String, message: String },

    /// Provider answered `Ok` but returned no routes
    NoRoute,

    /// Rate limited by the API
    RateLimited,

    /// Access token rejected
    Unauthorized,
}

impl RoutingError {
    /// Whether this error affects every request to the provider, rather
    /// than just the one route that produced it.
    ///
    /// A rejected access token fails every station the same way, so the
    /// ranking pipeline aborts instead of returning an empty list.
    pub fn is_provider_level(&self) -> bool {
        matches!(self, RoutingError::Unauthorized)
    }
}

impl fmt::Display for RoutingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutingError::Http(e) => write!(f, "HTTP error: {e}"),
            RoutingError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            RoutingError::ApiError { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            RoutingError::Provider { code, message } => {
                write!(f, "routing failed ({code}): {message}")
            }
            RoutingError::NoRoute => write!(f, "no route between the requested points"),
            RoutingError::RateLimited => write!(f, "rate limited by routing provider"),
            RoutingError::Unauthorized => write!(f, "unauthorized (invalid access token)"),
        }
    }
}

impl std::error::Error for RoutingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RoutingError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RoutingError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the access token.
        RoutingError::Http(err.without_url())
    }
}
