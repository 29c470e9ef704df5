//! Travel documents as a single tagged type.
//!
//! Each variant carries its own record; every operation is an exhaustive
//! match, so adding a document type is a compile error until all of
//! encoding, display, QR and barcode content are handled.

use crate::baggage::{self, BaggageTagDisplay};
use crate::bcbp;
use crate::display::{self, BoardingPassDisplay};
use crate::eticket::{self, ETicketDisplay};
use crate::qr;
use crate::record::{BaggageTagRecord, BoardingPass, ETicketRecord};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document type discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    /// Boarding pass
    BoardingPass,
    /// Electronic ticket receipt
    ETicket,
    /// Baggage tag
    BaggageTag,
}

impl DocumentKind {
    /// Stable wire name, also used as the stored `kind` column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BoardingPass => "boardingPass",
            Self::ETicket => "eTicket",
            Self::BaggageTag => "baggageTag",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown document kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown document kind: {0}")]
pub struct UnknownDocumentKind(pub String);

impl FromStr for DocumentKind {
    type Err = UnknownDocumentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "boardingPass" => Ok(Self::BoardingPass),
            "eTicket" => Ok(Self::ETicket),
            "baggageTag" => Ok(Self::BaggageTag),
            other => Err(UnknownDocumentKind(other.to_string())),
        }
    }
}

/// A document ready to be encoded and rendered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TravelDocument {
    /// Boarding pass
    BoardingPass(BoardingPass),
    /// Electronic ticket receipt
    ETicket(ETicketRecord),
    /// Baggage tag
    BaggageTag(BaggageTagRecord),
}

/// Printable fields of any document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayData {
    /// Boarding pass fields
    BoardingPass(BoardingPassDisplay),
    /// E-ticket fields
    ETicket(ETicketDisplay),
    /// Baggage tag fields
    BaggageTag(BaggageTagDisplay),
}

/// Everything the presentation layer needs for one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedDocument {
    /// Document type
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Encoded document string
    pub iata_data: String,
    /// Printable fields
    pub display_data: DisplayData,
    /// QR code text
    pub qr_payload: String,
    /// CODE128 barcode content
    pub barcode_data: String,
}

impl TravelDocument {
    /// Document type of this value.
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::BoardingPass(_) => DocumentKind::BoardingPass,
            Self::ETicket(_) => DocumentKind::ETicket,
            Self::BaggageTag(_) => DocumentKind::BaggageTag,
        }
    }

    /// Encoded document string.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::BoardingPass(pass) => bcbp::encode(&pass.record).into_string(),
            Self::ETicket(record) => eticket::encode(record),
            Self::BaggageTag(record) => baggage::encode(record),
        }
    }

    /// Printable fields.
    #[must_use]
    pub fn display(&self) -> DisplayData {
        match self {
            Self::BoardingPass(pass) => DisplayData::BoardingPass(display::boarding_pass(&pass.record)),
            Self::ETicket(record) => DisplayData::ETicket(eticket::display(record)),
            Self::BaggageTag(record) => DisplayData::BaggageTag(baggage::display(record)),
        }
    }

    /// QR code text.
    #[must_use]
    pub fn qr_payload(&self) -> String {
        match self {
            Self::BoardingPass(pass) => qr::boarding_pass(pass),
            Self::ETicket(record) => qr::eticket(record),
            Self::BaggageTag(record) => qr::baggage_tag(record),
        }
    }

    /// Barcode content: the BCBP string, the ticket number, or the bag tag.
    #[must_use]
    pub fn barcode_data(&self) -> String {
        match self {
            Self::BoardingPass(_) | Self::BaggageTag(_) => self.encode(),
            Self::ETicket(record) => record.ticket_number.clone(),
        }
    }

    /// Produce all renderable outputs at once.
    #[must_use]
    pub fn generate(&self) -> GeneratedDocument {
        GeneratedDocument {
            kind: self.kind(),
            iata_data: self.encode(),
            display_data: self.display(),
            qr_payload: self.qr_payload(),
            barcode_data: self.barcode_data(),
        }
    }
}

impl From<BoardingPass> for TravelDocument {
    fn from(pass: BoardingPass) -> Self {
        Self::BoardingPass(pass)
    }
}

impl From<ETicketRecord> for TravelDocument {
    fn from(record: ETicketRecord) -> Self {
        Self::ETicket(record)
    }
}

impl From<BaggageTagRecord> for TravelDocument {
    fn from(record: BaggageTagRecord) -> Self {
        Self::BaggageTag(record)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::{BoardingDetails, FlightRecord};
    use chrono::NaiveDate;

    fn boarding_pass() -> TravelDocument {
        TravelDocument::BoardingPass(BoardingPass {
            record: FlightRecord {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                flight: "PR 2727".to_string(),
                from: "mnl".to_string(),
                to: "ceb".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
                time: None,
                seat: "17A".to_string(),
                class_code: "X".to_string(),
            },
            details: BoardingDetails::default(),
        })
    }

    fn eticket() -> TravelDocument {
        TravelDocument::ETicket(ETicketRecord {
            ticket_number: "0161234567890".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            flight: "UA 100".to_string(),
            from: "SFO".to_string(),
            to: "ORD".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            time: None,
            pnr: Some("XYZ789".to_string()),
        })
    }

    #[test]
    fn test_kind_round_trips_through_str() {
        for kind in [DocumentKind::BoardingPass, DocumentKind::ETicket, DocumentKind::BaggageTag] {
            assert_eq!(kind.as_str().parse::<DocumentKind>().unwrap(), kind);
        }
        assert!("boarding-pass".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn test_generate_boarding_pass() {
        let generated = boarding_pass().generate();
        assert_eq!(generated.kind, DocumentKind::BoardingPass);
        assert_eq!(generated.iata_data, "M1DOE/JOHNEABC123MNLCEBPR2727253X17A001A00010");
        assert_eq!(generated.barcode_data, generated.iata_data);
        assert!(generated.qr_payload.starts_with("BOARDING PASS\n"));

        // Unknown class: encoded verbatim, displayed as Economy
        let DisplayData::BoardingPass(display) = generated.display_data else {
            unreachable!("boarding pass display expected");
        };
        assert_eq!(display.class, "ECONOMY (X)");
    }

    #[test]
    fn test_eticket_barcode_is_ticket_number() {
        let doc = eticket();
        assert_eq!(doc.barcode_data(), "0161234567890");
        let generated = doc.generate();
        assert_eq!(generated.barcode_data, "0161234567890");
        assert_eq!(generated.iata_data, "0161234567890|JOHN DOE|UA100|SFOORD|250101");
    }

    #[test]
    fn test_document_json_is_tagged() {
        let json = serde_json::to_value(eticket()).unwrap();
        assert_eq!(json["type"], "eTicket");
        assert_eq!(json["ticketNumber"], "0161234567890");

        let back: TravelDocument = serde_json::from_value(json).unwrap();
        assert_eq!(back.kind(), DocumentKind::ETicket);
    }

    #[test]
    fn test_generated_document_wire_names() {
        let json = serde_json::to_value(boarding_pass().generate()).unwrap();
        assert_eq!(json["type"], "boardingPass");
        assert!(json["iataData"].is_string());
        assert!(json["displayData"]["name"].is_string());
        assert!(json["qrPayload"].is_string());
        assert!(json["barcodeData"].is_string());
    }
}
