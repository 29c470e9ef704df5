//! `PostgreSQL` document store for travel-docs.
//!
//! Implements the `DocumentStore` trait from `travel-docs-core` on a single
//! `documents` table. Request and display payloads live in `JSONB` columns;
//! the encoded string is plain `TEXT`.
//!
//! # Example
//!
//! ```no_run
//! use travel_docs_postgres::PostgresDocumentStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PostgresDocumentStore::new("postgres://localhost/travel_docs", 5).await?;
//! store.ensure_schema().await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod document_store;

pub use document_store::PostgresDocumentStore;
