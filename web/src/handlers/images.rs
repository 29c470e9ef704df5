//! QR code and barcode image endpoints.
//!
//! - POST /api/generate/qr-code - PNG of the document's QR payload
//! - POST /api/generate/barcode - PNG of the document's CODE128 content
//!
//! The body is any document form. Its kind comes from an explicit `type`
//! field when present, otherwise from the fields it carries: `bagNumber`
//! means a baggage tag, `ticketNumber` an e-ticket, anything else a
//! boarding pass.

use crate::error::AppError;
use crate::handlers::documents::validate_form;
use crate::metrics;
use axum::{Json, extract::rejection::JsonRejection};
use serde::Serialize;
use serde_json::Value;
use travel_docs_core::render::{self, RenderError};
use travel_docs_core::validation::{BaggageTagRequest, BoardingPassRequest, ETicketRequest};
use travel_docs_core::document::UnknownDocumentKind;
use travel_docs_core::{DocumentKind, TravelDocument};

/// Image response envelope.
#[derive(Debug, Serialize)]
pub struct ImageResponse<T> {
    /// Always `true`
    pub success: bool,
    /// Rendered image
    pub data: T,
}

/// A rendered QR code.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCodeImage {
    /// `data:image/png;base64,...`
    pub qr_image_url: String,
    /// Text encoded in the QR code
    pub qr_payload: String,
}

/// A rendered barcode.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BarcodeImage {
    /// `data:image/png;base64,...`
    pub barcode_image_url: String,
    /// Text encoded in the barcode
    pub barcode_data: String,
}

/// Render the QR code of a document form.
///
/// # Errors
///
/// - 400 if the body is not JSON, fails validation, or does not fit a QR code
/// - 500 if PNG encoding fails
#[allow(clippy::unused_async)]
pub async fn generate_qr_code(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ImageResponse<QrCodeImage>>, AppError> {
    let Json(body) = body?;
    let document = document_from_body(&body)?;
    let qr_payload = document.qr_payload();
    let qr_image_url = render::qr_code_data_url(&qr_payload).map_err(render_error)?;

    metrics::record_image_rendered(document.kind(), "qr");
    Ok(Json(ImageResponse {
        success: true,
        data: QrCodeImage {
            qr_image_url,
            qr_payload,
        },
    }))
}

/// Render the CODE128 barcode of a document form.
///
/// # Errors
///
/// - 400 if the body is not JSON, fails validation, or holds non-ASCII content
/// - 500 if PNG encoding fails
#[allow(clippy::unused_async)]
pub async fn generate_barcode(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ImageResponse<BarcodeImage>>, AppError> {
    let Json(body) = body?;
    let document = document_from_body(&body)?;
    let barcode_data = document.barcode_data();
    let barcode_image_url = render::barcode_data_url(&barcode_data).map_err(render_error)?;

    metrics::record_image_rendered(document.kind(), "barcode");
    Ok(Json(ImageResponse {
        success: true,
        data: BarcodeImage {
            barcode_image_url,
            barcode_data,
        },
    }))
}

/// Kind of document a form describes.
///
/// # Errors
///
/// Returns 400 if `type` is present but not a known kind.
pub fn infer_kind(body: &Value) -> Result<DocumentKind, AppError> {
    if let Some(kind) = body.get("type").and_then(Value::as_str) {
        return kind.parse().map_err(|e: UnknownDocumentKind| AppError::bad_request(e.to_string()));
    }

    let has = |field: &str| body.get(field).is_some_and(|v| !v.is_null());
    Ok(if has("bagNumber") {
        DocumentKind::BaggageTag
    } else if has("ticketNumber") {
        DocumentKind::ETicket
    } else {
        DocumentKind::BoardingPass
    })
}

fn document_from_body(body: &Value) -> Result<TravelDocument, AppError> {
    match infer_kind(body)? {
        DocumentKind::BoardingPass => validate_form::<BoardingPassRequest>(body),
        DocumentKind::ETicket => validate_form::<ETicketRequest>(body),
        DocumentKind::BaggageTag => validate_form::<BaggageTagRequest>(body),
    }
}

fn render_error(err: RenderError) -> AppError {
    if err.is_content_error() {
        AppError::bad_request(err.to_string())
    } else {
        AppError::internal("Image rendering failed").with_source(err.into())
    }
}
