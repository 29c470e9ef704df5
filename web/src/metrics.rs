//! Business metrics.
//!
//! # Exported Metrics
//!
//! ## Counters
//! - `travel_docs_documents_generated_total{kind, persisted}` - Documents encoded
//! - `travel_docs_validation_failures_total{kind}` - Forms rejected by validation
//! - `travel_docs_documents_deleted_total` - Documents deleted
//! - `travel_docs_images_rendered_total{kind, format}` - QR code and barcode PNGs
//! - `travel_docs_store_writes_total{op}` - Rows written by the `PostgreSQL` store

use metrics::describe_counter;
use travel_docs_core::DocumentKind;

/// Register metric descriptions.
///
/// Call once at startup, after the recorder is installed.
pub fn register_business_metrics() {
    describe_counter!(
        "travel_docs_documents_generated_total",
        "Documents encoded, by kind and whether they were persisted"
    );
    describe_counter!(
        "travel_docs_validation_failures_total",
        "Document forms rejected by validation, by kind"
    );
    describe_counter!(
        "travel_docs_documents_deleted_total",
        "Stored documents deleted"
    );
    describe_counter!(
        "travel_docs_images_rendered_total",
        "QR code and barcode images rendered, by kind and format"
    );
    describe_counter!(
        "travel_docs_store_writes_total",
        "Rows written by the PostgreSQL store, by operation"
    );
}

/// Record a generated document.
pub fn record_document_generated(kind: DocumentKind, persisted: bool) {
    metrics::counter!(
        "travel_docs_documents_generated_total",
        "kind" => kind.as_str(),
        "persisted" => if persisted { "true" } else { "false" }
    )
    .increment(1);
}

/// Record a rejected form.
pub fn record_validation_failure(kind: DocumentKind) {
    metrics::counter!("travel_docs_validation_failures_total", "kind" => kind.as_str()).increment(1);
}

/// Record a deleted document.
pub fn record_document_deleted() {
    metrics::counter!("travel_docs_documents_deleted_total").increment(1);
}

/// Record a rendered image; `format` is `qr` or `barcode`.
pub fn record_image_rendered(kind: DocumentKind, format: &'static str) {
    metrics::counter!(
        "travel_docs_images_rendered_total",
        "kind" => kind.as_str(),
        "format" => format
    )
    .increment(1);
}
