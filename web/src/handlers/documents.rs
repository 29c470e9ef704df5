//! Document endpoints.
//!
//! - POST /api/generate/{boarding-pass,e-ticket,baggage-tag} - validate, encode, store
//! - POST /api/preview/{boarding-pass,e-ticket,baggage-tag} - validate and encode only
//! - GET /api/documents - list stored documents, newest first
//! - GET /api/documents/:id - one stored document
//! - DELETE /api/documents/:id - delete a stored document

use crate::error::AppError;
use crate::extractors::CorrelationId;
use crate::metrics;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use travel_docs_core::validation::{BaggageTagRequest, BoardingPassRequest, ETicketRequest};
use travel_docs_core::{
    DocumentId, DocumentKind, GeneratedDocument, NewDocument, StoredDocument, TravelDocument,
    ValidationError,
};

/// A form that validates into a [`TravelDocument`].
pub trait DocumentForm: DeserializeOwned + Send {
    /// Kind of document this form produces.
    const KIND: DocumentKind;

    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found.
    fn into_document(self) -> Result<TravelDocument, ValidationError>;
}

impl DocumentForm for BoardingPassRequest {
    const KIND: DocumentKind = DocumentKind::BoardingPass;

    fn into_document(self) -> Result<TravelDocument, ValidationError> {
        self.validate().map(TravelDocument::from)
    }
}

impl DocumentForm for ETicketRequest {
    const KIND: DocumentKind = DocumentKind::ETicket;

    fn into_document(self) -> Result<TravelDocument, ValidationError> {
        self.validate().map(TravelDocument::from)
    }
}

impl DocumentForm for BaggageTagRequest {
    const KIND: DocumentKind = DocumentKind::BaggageTag;

    fn into_document(self) -> Result<TravelDocument, ValidationError> {
        self.validate().map(TravelDocument::from)
    }
}

/// Response for a stored document.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    /// Always `true`
    pub success: bool,
    /// Id of the stored document
    pub document_id: DocumentId,
    /// Generated outputs
    pub document: GeneratedDocument,
}

/// Response for a preview.
#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    /// Always `true`
    pub success: bool,
    /// Generated outputs
    pub document: GeneratedDocument,
}

/// Response listing stored documents.
#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    /// Always `true`
    pub success: bool,
    /// Stored documents, newest first
    pub documents: Vec<StoredDocument>,
    /// Number of documents
    pub count: usize,
}

/// Response for a single stored document.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    /// Always `true`
    pub success: bool,
    /// The document
    pub document: StoredDocument,
}

/// Response for a deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Always `true`
    pub success: bool,
    /// Confirmation message
    pub message: String,
}

/// Parse and validate a form, counting failures.
pub(crate) fn validate_form<F: DocumentForm>(body: &Value) -> Result<TravelDocument, AppError> {
    let document = F::deserialize(body)
        .map_err(|e| AppError::bad_request(format!("Invalid request body: {e}")))
        .and_then(|form| form.into_document().map_err(AppError::from));

    if let Err(err) = &document {
        metrics::record_validation_failure(F::KIND);
        tracing::info!(kind = %F::KIND, error = %err, "Document form rejected");
    }
    document
}

/// Generate a document and store it.
///
/// The raw request body is stored as received.
///
/// # Errors
///
/// - 400 if the body is not JSON or fails validation
/// - 500 if the store fails
pub async fn generate_document<F: DocumentForm>(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<GenerateResponse>), AppError> {
    let Json(body) = body?;
    let generated = validate_form::<F>(&body)?.generate();

    let stored = state
        .store
        .insert(NewDocument::from_generated(body, &generated)?)
        .await?;

    metrics::record_document_generated(generated.kind, true);
    tracing::info!(
        correlation_id = %correlation_id,
        document_id = stored.id,
        kind = %generated.kind,
        "Document generated"
    );

    Ok((
        StatusCode::CREATED,
        Json(GenerateResponse {
            success: true,
            document_id: stored.id,
            document: generated,
        }),
    ))
}

/// Generate a document without storing it.
///
/// # Errors
///
/// - 400 if the body is not JSON or fails validation
#[allow(clippy::unused_async)]
pub async fn preview_document<F: DocumentForm>(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PreviewResponse>, AppError> {
    let Json(body) = body?;
    let generated = validate_form::<F>(&body)?.generate();
    metrics::record_document_generated(generated.kind, false);

    Ok(Json(PreviewResponse {
        success: true,
        document: generated,
    }))
}

/// List stored documents, newest first.
///
/// # Errors
///
/// - 500 if the store fails
pub async fn list_documents(State(state): State<AppState>) -> Result<Json<DocumentsResponse>, AppError> {
    let documents = state.store.list().await?;
    Ok(Json(DocumentsResponse {
        success: true,
        count: documents.len(),
        documents,
    }))
}

/// Fetch one stored document.
///
/// # Errors
///
/// - 404 if no document has this id
/// - 500 if the store fails
pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<DocumentId>,
) -> Result<Json<DocumentResponse>, AppError> {
    let document = state
        .store
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found("Document", id))?;

    Ok(Json(DocumentResponse {
        success: true,
        document,
    }))
}

/// Delete a stored document.
///
/// # Errors
///
/// - 404 if no document has this id
/// - 500 if the store fails
pub async fn delete_document(
    State(state): State<AppState>,
    correlation_id: CorrelationId,
    Path(id): Path<DocumentId>,
) -> Result<Json<DeleteResponse>, AppError> {
    if !state.store.delete(id).await? {
        return Err(AppError::not_found("Document", id));
    }

    metrics::record_document_deleted();
    tracing::info!(correlation_id = %correlation_id, document_id = id, "Document deleted");

    Ok(Json(DeleteResponse {
        success: true,
        message: format!("Document {id} deleted"),
    }))
}
