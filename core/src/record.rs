//! Input records for each document type.
//!
//! Records are plain owned data. They are produced by [`crate::validation`]
//! (or built directly in tests) and consumed read-only by the encoders and
//! formatters. Nothing in this module re-validates field contents.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Cabin classes
// ============================================================================

/// Cabin class, identified by its single-letter booking code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CabinClass {
    /// `Y`
    Economy,
    /// `W`
    PremiumEconomy,
    /// `J`
    Business,
    /// `F`
    First,
}

impl CabinClass {
    /// All known classes, cheapest first.
    pub const ALL: [Self; 4] = [
        Self::Economy,
        Self::PremiumEconomy,
        Self::Business,
        Self::First,
    ];

    /// Look up a class by its booking code.
    ///
    /// Matching is exact: `"y"` is not a known code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Y" => Some(Self::Economy),
            "W" => Some(Self::PremiumEconomy),
            "J" => Some(Self::Business),
            "F" => Some(Self::First),
            _ => None,
        }
    }

    /// Single-letter booking code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Economy => 'Y',
            Self::PremiumEconomy => 'W',
            Self::Business => 'J',
            Self::First => 'F',
        }
    }

    /// Human-readable class name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::PremiumEconomy => "Premium Economy",
            Self::Business => "Business",
            Self::First => "First",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Boarding pass
// ============================================================================

/// Passenger and flight data encoded into a boarding pass.
///
/// Callers guarantee that `from`/`to` are three letters and that the name
/// fields are non-empty. Case is normalised by the encoder, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    /// Passenger given name
    pub first_name: String,
    /// Passenger family name
    pub last_name: String,
    /// Carrier and flight number, e.g. `"PR 2727"`
    pub flight: String,
    /// Origin airport code
    pub from: String,
    /// Destination airport code
    pub to: String,
    /// Departure date
    pub date: NaiveDate,
    /// Departure time, shown on previews only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Seat, e.g. `"17A"`
    pub seat: String,
    /// Booking class code, encoded verbatim
    #[serde(rename = "class")]
    pub class_code: String,
}

impl FlightRecord {
    /// Known cabin class for this record's booking code, if any.
    #[must_use]
    pub fn cabin_class(&self) -> Option<CabinClass> {
        CabinClass::from_code(&self.class_code)
    }
}

/// Presentation-only extras printed on a boarding pass.
///
/// None of these reach the BCBP string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardingDetails {
    /// Departure gate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate: Option<String>,
    /// Booking reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnr: Option<String>,
    /// Boarding time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_time: Option<NaiveTime>,
    /// Check-in sequence as printed, e.g. `"001A"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}

/// A boarding pass: the encoded record plus its printed extras.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardingPass {
    /// Encoded flight data
    #[serde(flatten)]
    pub record: FlightRecord,
    /// Printed-only data
    #[serde(flatten)]
    pub details: BoardingDetails,
}

// ============================================================================
// E-ticket
// ============================================================================

/// Electronic ticket receipt data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ETicketRecord {
    /// Ticket number, at least 13 characters (airline prefix first)
    pub ticket_number: String,
    /// Passenger given name
    pub first_name: String,
    /// Passenger family name
    pub last_name: String,
    /// Carrier and flight number
    pub flight: String,
    /// Origin airport code
    pub from: String,
    /// Destination airport code
    pub to: String,
    /// Departure date
    pub date: NaiveDate,
    /// Departure time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    /// Booking reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pnr: Option<String>,
}

// ============================================================================
// Baggage tag
// ============================================================================

/// Checked bag data printed on a baggage tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaggageTagRecord {
    /// Passenger given name
    pub first_name: String,
    /// Passenger family name
    pub last_name: String,
    /// Booking reference
    pub pnr: String,
    /// Carrier and flight number
    pub flight: String,
    /// Origin airport code
    pub from: String,
    /// Destination airport code
    pub to: String,
    /// Bag weight in whole kilograms
    pub weight_kg: u32,
    /// Bag tag number
    pub bag_number: String,
}
