//! # Travel Docs Core
//!
//! Pure domain logic for the travel document generator.
//!
//! This crate turns validated passenger and flight records into the strings
//! that end up inside barcodes, QR codes and printed previews:
//!
//! - **Boarding passes**: IATA BCBP-style fixed-field string ([`bcbp`])
//! - **E-tickets**: pipe-delimited ticket string ([`eticket`])
//! - **Baggage tags**: bag tag number plus a printable tag ([`baggage`])
//!
//! [`render`] turns QR payloads and barcode content into PNG data URLs.
//!
//! Everything here is synchronous and side-effect free except the
//! [`store`] module, which defines the persistence seam used by the web shell.
//!
//! ## Flow
//!
//! ```text
//! JSON request ──► validation ──► TravelDocument ──► generate()
//!                                                     ├─ encode()        (barcode / IATA data)
//!                                                     ├─ display()       (human-readable preview)
//!                                                     └─ qr_payload()    (labeled-line QR text)
//! ```
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use travel_docs_core::bcbp;
//! use travel_docs_core::record::FlightRecord;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = FlightRecord {
//!     first_name: "John".to_string(),
//!     last_name: "Doe".to_string(),
//!     flight: "PR 2727".to_string(),
//!     from: "mnl".to_string(),
//!     to: "ceb".to_string(),
//!     date: NaiveDate::from_ymd_opt(2025, 9, 10).ok_or("bad date")?,
//!     time: None,
//!     seat: "17A".to_string(),
//!     class_code: "Y".to_string(),
//! };
//!
//! let encoded = bcbp::encode(&record);
//! assert_eq!(encoded.as_str(), "M1DOE/JOHNEABC123MNLCEBPR2727253Y17A001A00010");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod airport;
pub mod baggage;
pub mod bcbp;
pub mod display;
pub mod document;
pub mod environment;
pub mod eticket;
pub mod qr;
pub mod record;
pub mod render;
pub mod store;
pub mod validation;

// Re-export the types most callers need
pub use bcbp::EncodedBoardingPass;
pub use document::{DisplayData, DocumentKind, GeneratedDocument, TravelDocument};
pub use record::{BaggageTagRecord, BoardingDetails, BoardingPass, CabinClass, ETicketRecord, FlightRecord};
pub use store::{DocumentId, DocumentStore, InMemoryDocumentStore, NewDocument, StoreError, StoredDocument};
pub use validation::ValidationError;
