//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::StationRecord;
use crate::ranking::{RankError, StationRanker};

use super::dto::*;
use super::state::AppState;

/// Body returned when the ranking fails as a whole.
const FETCH_FAILED: &str = "Failed to fetch stations.";

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/getStationsAlongRoute", get(stations_along_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness check.
async fn index() -> &'static str {
    "Fuel Station Finder Backend is running!"
}

/// Nearest stations by road from the given origin, nearest first.
async fn stations_along_route(
    State(state): State<AppState>,
    query: Result<Query<StationsQuery>, QueryRejection>,
) -> Result<Json<Vec<StationRecord>>, AppError> {
    let Query(req) = query.map_err(|rejection| AppError::BadRequest {
        message: rejection.body_text(),
    })?;
    let origin = req.origin().map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })?;

    let ranker = StationRanker::new(state.routes.as_ref(), &state.config);
    let ranked = ranker.rank(origin, &state.stations).await?;

    Ok(Json(ranked.into_iter().map(|r| r.station).collect()))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<RankError> for AppError {
    fn from(e: RankError) -> Self {
        error!(error = %e, "error with routing provider");
        AppError::Internal {
            message: FETCH_FAILED.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_client_error() {
            warn!(%status, %message, "rejected request");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
