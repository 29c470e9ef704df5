//! Document persistence.
//!
//! A stored document keeps three independent payloads: the raw request as
//! received, the encoded string, and the printable fields. Rows are keyed by
//! an auto-increment id and are never updated, only inserted and deleted.
//!
//! # Implementations
//!
//! - [`InMemoryDocumentStore`] (this crate): development and tests
//! - `PostgresDocumentStore` (in `travel-docs-postgres`): production

use crate::document::{DocumentKind, GeneratedDocument};
use crate::environment::Clock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

/// Auto-increment document identifier.
pub type DocumentId = i64;

/// Boxed future returned by [`DocumentStore`] methods.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Errors that can occur during store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database connection or query failed.
    #[error("Database error: {0}")]
    Database(String),

    /// A payload could not be (de)serialized.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// A document about to be stored.
#[derive(Clone, Debug, PartialEq)]
pub struct NewDocument {
    /// Document type
    pub kind: DocumentKind,
    /// Raw request body
    pub data: serde_json::Value,
    /// Encoded document string
    pub iata_data: String,
    /// Printable fields
    pub display_data: serde_json::Value,
}

impl NewDocument {
    /// Pair a raw request with its generated outputs.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if the display fields cannot be
    /// turned into JSON.
    pub fn from_generated(
        data: serde_json::Value,
        generated: &GeneratedDocument,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            kind: generated.kind,
            data,
            iata_data: generated.iata_data.clone(),
            display_data: serde_json::to_value(&generated.display_data)?,
        })
    }
}

/// A persisted document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDocument {
    /// Auto-increment id
    pub id: DocumentId,
    /// Document type
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Raw request body
    pub data: serde_json::Value,
    /// Encoded document string
    pub iata_data: String,
    /// Printable fields
    pub display_data: serde_json::Value,
    /// Insertion time
    pub created_at: DateTime<Utc>,
}

/// Document persistence abstraction.
///
/// # Dyn Compatibility
///
/// Methods return boxed futures so the store can be shared as
/// `Arc<dyn DocumentStore>` in HTTP state.
pub trait DocumentStore: Send + Sync {
    /// Insert a document and return it with its new id and timestamp.
    ///
    /// # Errors
    ///
    /// - `Database`: the write failed
    fn insert(&self, document: NewDocument) -> StoreFuture<'_, StoredDocument>;

    /// Fetch one document.
    ///
    /// Returns `Ok(None)` when no document has this id.
    ///
    /// # Errors
    ///
    /// - `Database`: the read failed
    /// - `Serialization`: a stored payload is corrupt
    fn get(&self, id: DocumentId) -> StoreFuture<'_, Option<StoredDocument>>;

    /// All documents, newest first.
    ///
    /// # Errors
    ///
    /// - `Database`: the read failed
    /// - `Serialization`: a stored payload is corrupt
    fn list(&self) -> StoreFuture<'_, Vec<StoredDocument>>;

    /// Delete one document. Returns whether a row was removed.
    ///
    /// # Errors
    ///
    /// - `Database`: the write failed
    fn delete(&self, id: DocumentId) -> StoreFuture<'_, bool>;

    /// Check the backing storage is reachable.
    ///
    /// # Errors
    ///
    /// - `Database`: the backend cannot be reached
    fn ping(&self) -> StoreFuture<'_, ()>;
}

#[derive(Debug, Default)]
struct MemoryState {
    last_id: DocumentId,
    documents: BTreeMap<DocumentId, StoredDocument>,
}

/// `BTreeMap`-backed store. Ids start at 1 and are never reused.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    state: Arc<RwLock<MemoryState>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryDocumentStore {
    /// Create an empty store stamping rows with `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Arc::new(RwLock::new(MemoryState::default())),
            clock,
        }
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.state.read().await.documents.len()
    }

    /// Whether the store holds no documents.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.documents.is_empty()
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore").finish_non_exhaustive()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn insert(&self, document: NewDocument) -> StoreFuture<'_, StoredDocument> {
        Box::pin(async move {
            let mut state = self.state.write().await;
            state.last_id += 1;

            let stored = StoredDocument {
                id: state.last_id,
                kind: document.kind,
                data: document.data,
                iata_data: document.iata_data,
                display_data: document.display_data,
                created_at: self.clock.now(),
            };
            state.documents.insert(stored.id, stored.clone());

            tracing::debug!(id = stored.id, kind = %stored.kind, "Document stored in memory");
            Ok(stored)
        })
    }

    fn get(&self, id: DocumentId) -> StoreFuture<'_, Option<StoredDocument>> {
        Box::pin(async move { Ok(self.state.read().await.documents.get(&id).cloned()) })
    }

    fn list(&self) -> StoreFuture<'_, Vec<StoredDocument>> {
        Box::pin(async move {
            let state = self.state.read().await;
            let mut documents: Vec<_> = state.documents.values().cloned().collect();
            // Newest first; ids break ties between equal timestamps
            documents.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
            Ok(documents)
        })
    }

    fn delete(&self, id: DocumentId) -> StoreFuture<'_, bool> {
        Box::pin(async move { Ok(self.state.write().await.documents.remove(&id).is_some()) })
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(async { Ok(()) })
    }
}
