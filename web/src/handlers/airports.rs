//! Airport directory endpoint.

use axum::Json;
use serde::Serialize;
use travel_docs_core::airport::{self, Airport};

/// Airport list response.
#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    /// Always `true`
    pub success: bool,
    /// Every known airport
    pub airports: &'static [Airport],
    /// Number of airports
    pub count: usize,
}

/// List known airports.
///
/// ```text
/// GET /api/airports
/// ```
#[allow(clippy::unused_async)]
pub async fn list_airports() -> Json<AirportsResponse> {
    let airports = airport::all();
    Json(AirportsResponse {
        success: true,
        airports,
        count: airports.len(),
    })
}
