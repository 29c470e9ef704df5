//! Health check endpoints.
//!
//! Used by load balancers and monitoring to verify service health.

use crate::state::AppState;
use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness check.
///
/// Does not touch the store.
///
/// ```text
/// GET /health
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

/// Readiness check response.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    /// Overall readiness
    pub ready: bool,
    /// Document store reachable
    pub store: bool,
}

/// Readiness check: pings the document store.
///
/// # Status Codes
///
/// - 200 OK: store reachable
/// - 503 Service Unavailable: store unreachable
///
/// ```text
/// GET /ready
/// ```
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let store = match state.store.ping().await {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(error = %err, "Document store not ready");
            false
        }
    };

    let status = if store {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(ReadinessResponse { ready: store, store }))
}

/// API health response.
#[derive(Debug, Serialize)]
pub struct ApiHealthResponse {
    /// Always `true`
    pub success: bool,
    /// Service banner
    pub message: &'static str,
    /// Server time
    pub timestamp: DateTime<Utc>,
}

/// API health check for the front end.
///
/// ```text
/// GET /api/health
/// ```
#[allow(clippy::unused_async)]
pub async fn api_health() -> Json<ApiHealthResponse> {
    Json(ApiHealthResponse {
        success: true,
        message: "Travel Document API is running",
        timestamp: Utc::now(),
    })
}
