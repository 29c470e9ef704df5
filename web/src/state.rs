//! Application state for Axum handlers.

use std::sync::Arc;
use travel_docs_core::DocumentStore;

/// State shared across all HTTP handlers.
///
/// The store is behind a trait object so the same router serves the
/// in-memory and `PostgreSQL` backends.
#[derive(Clone)]
pub struct AppState {
    /// Document persistence
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Create state around a document store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
