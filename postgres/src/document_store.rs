//! `documents` table access.

use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use travel_docs_core::store::StoreFuture;
use travel_docs_core::{
    DocumentId, DocumentKind, DocumentStore, NewDocument, StoreError, StoredDocument,
};

const INSERT_DOCUMENT: &str = r"
    INSERT INTO documents (kind, data, iata_data, display_data)
    VALUES ($1, $2, $3, $4)
    RETURNING id, kind, data, iata_data, display_data, created_at
";

const SELECT_DOCUMENT: &str =
    "SELECT id, kind, data, iata_data, display_data, created_at FROM documents WHERE id = $1";

const SELECT_DOCUMENTS: &str = r"
    SELECT id, kind, data, iata_data, display_data, created_at
    FROM documents
    ORDER BY created_at DESC, id DESC
";

/// `PostgreSQL`-backed [`DocumentStore`].
///
/// Rows are never updated. Listing orders by insertion time, newest first,
/// with the id as tie-breaker.
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    /// Connect a pool of at most `max_connections` to `database_url`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the connection cannot be
    /// established.
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(database_error)?;

        tracing::info!(max_connections, "Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    #[must_use]
    pub const fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Underlying connection pool.
    #[must_use]
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the `documents` table and its ordering index if missing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if either statement fails.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS documents (
                id BIGSERIAL PRIMARY KEY,
                kind TEXT NOT NULL,
                data JSONB NOT NULL,
                iata_data TEXT NOT NULL,
                display_data JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_documents_created ON documents(created_at DESC, id DESC)",
        )
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        tracing::debug!("documents schema ready");
        Ok(())
    }

    fn row_to_document(row: &PgRow) -> Result<StoredDocument, StoreError> {
        let kind: String = row.try_get("kind").map_err(database_error)?;
        let kind = kind
            .parse::<DocumentKind>()
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let Json(data): Json<serde_json::Value> = row.try_get("data").map_err(database_error)?;
        let Json(display_data): Json<serde_json::Value> =
            row.try_get("display_data").map_err(database_error)?;

        Ok(StoredDocument {
            id: row.try_get("id").map_err(database_error)?,
            kind,
            data,
            iata_data: row.try_get("iata_data").map_err(database_error)?,
            display_data,
            created_at: row.try_get("created_at").map_err(database_error)?,
        })
    }
}

#[allow(clippy::needless_pass_by_value)]
fn database_error(err: sqlx::Error) -> StoreError {
    StoreError::Database(err.to_string())
}

impl DocumentStore for PostgresDocumentStore {
    fn insert(&self, document: NewDocument) -> StoreFuture<'_, StoredDocument> {
        Box::pin(async move {
            let row = sqlx::query(INSERT_DOCUMENT)
                .bind(document.kind.as_str())
                .bind(Json(&document.data))
                .bind(&document.iata_data)
                .bind(Json(&document.display_data))
                .fetch_one(&self.pool)
                .await
                .map_err(database_error)?;

            let stored = Self::row_to_document(&row)?;
            tracing::debug!(id = stored.id, kind = %stored.kind, "Document inserted");
            metrics::counter!("travel_docs_store_writes_total", "op" => "insert").increment(1);
            Ok(stored)
        })
    }

    fn get(&self, id: DocumentId) -> StoreFuture<'_, Option<StoredDocument>> {
        Box::pin(async move {
            let row = sqlx::query(SELECT_DOCUMENT)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(database_error)?;

            row.as_ref().map(Self::row_to_document).transpose()
        })
    }

    fn list(&self) -> StoreFuture<'_, Vec<StoredDocument>> {
        Box::pin(async move {
            let rows = sqlx::query(SELECT_DOCUMENTS)
                .fetch_all(&self.pool)
                .await
                .map_err(database_error)?;

            rows.iter().map(Self::row_to_document).collect()
        })
    }

    fn delete(&self, id: DocumentId) -> StoreFuture<'_, bool> {
        Box::pin(async move {
            let result = sqlx::query("DELETE FROM documents WHERE id = $1")
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(database_error)?;

            let deleted = result.rows_affected() > 0;
            if deleted {
                metrics::counter!("travel_docs_store_writes_total", "op" => "delete").increment(1);
            }
            Ok(deleted)
        })
    }

    fn ping(&self) -> StoreFuture<'_, ()> {
        Box::pin(async move {
            sqlx::query("SELECT 1")
                .execute(&self.pool)
                .await
                .map_err(database_error)?;
            Ok(())
        })
    }
}
