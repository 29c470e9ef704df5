//! Axum HTTP surface for travel-docs.
//!
//! Handlers are a thin shell around `travel-docs-core`:
//!
//! ```text
//! JSON form ──► validate ──► TravelDocument::generate ──► DocumentStore::insert
//!                  │                                            │
//!                  └─ 400 {success:false,...}        500 on store failure
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use travel_docs_core::InMemoryDocumentStore;
//! use travel_docs_core::environment::SystemClock;
//! use travel_docs_web::{AppState, build_router};
//!
//! let store = InMemoryDocumentStore::new(Arc::new(SystemClock));
//! let app = build_router(AppState::new(Arc::new(store)));
//! # let _ = app;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export key types for convenience
pub use error::AppError;
pub use extractors::CorrelationId;
pub use middleware::{CORRELATION_ID_HEADER, correlation_id_layer};
pub use routes::build_router;
pub use state::AppState;

