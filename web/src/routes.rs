//! Router configuration.

use crate::handlers::{airports, documents, health, images};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use travel_docs_core::validation::{BaggageTagRequest, BoardingPassRequest, ETicketRequest};

/// Build the complete Axum router.
///
/// Health checks live at the root; everything else under `/api`. Layers, from
/// the outside in: correlation id, request tracing, permissive CORS.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health::api_health))
        .route("/airports", get(airports::list_airports))
        // Generate and store
        .route(
            "/generate/boarding-pass",
            post(documents::generate_document::<BoardingPassRequest>),
        )
        .route(
            "/generate/e-ticket",
            post(documents::generate_document::<ETicketRequest>),
        )
        .route(
            "/generate/baggage-tag",
            post(documents::generate_document::<BaggageTagRequest>),
        )
        // Images
        .route("/generate/qr-code", post(images::generate_qr_code))
        .route("/generate/barcode", post(images::generate_barcode))
        // Generate only
        .route(
            "/preview/boarding-pass",
            post(documents::preview_document::<BoardingPassRequest>),
        )
        .route(
            "/preview/e-ticket",
            post(documents::preview_document::<ETicketRequest>),
        )
        .route(
            "/preview/baggage-tag",
            post(documents::preview_document::<BaggageTagRequest>),
        )
        // Stored documents
        .route("/documents", get(documents::list_documents))
        .route(
            "/documents/:id",
            get(documents::get_document).delete(documents::delete_document),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}
