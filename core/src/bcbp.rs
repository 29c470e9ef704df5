//! Bar-Coded Boarding Pass (BCBP) encoding.
//!
//! Produces the fixed-field string placed inside a boarding pass barcode.
//! Fields are concatenated in IATA order with no separators:
//!
//! ```text
//! M1 DOE/JOHN E ABC123 MNLCEB PR2727 253 Y 17A 001A 0001 0
//! │  │        │ │      │      │      │   │ │   │    │    └ version
//! │  │        │ │      │      │      │   │ │   │    └ passenger status
//! │  │        │ │      │      │      │   │ │   └ check-in sequence
//! │  │        │ │      │      │      │   │ └ seat
//! │  │        │ │      │      │      │   └ class code (verbatim)
//! │  │        │ │      │      │      └ Julian day of year
//! │  │        │ │      │      └ flight, spaces removed
//! │  │        │ │      └ from + to
//! │  │        │ └ PNR placeholder
//! │  │        └ electronic ticket indicator
//! │  └ LAST/FIRST
//! └ format code
//! ```
//!
//! The encoder is total: it never fails and never truncates. Field widths
//! follow directly from the input lengths, so callers must validate first
//! (see [`crate::validation`]).

use crate::record::FlightRecord;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format code for a single-leg boarding pass.
pub const FORMAT_CODE: &str = "M1";
/// Electronic ticket indicator.
pub const ELECTRONIC_TICKET_INDICATOR: &str = "E";
/// Booking reference written in place of a real PNR.
pub const PNR_PLACEHOLDER: &str = "ABC123";
/// Check-in sequence token.
pub const CHECK_IN_SEQUENCE: &str = "001A";
/// Passenger status token.
pub const PASSENGER_STATUS: &str = "0001";
/// Version digit.
pub const VERSION_NUMBER: &str = "0";

/// An encoded boarding pass string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedBoardingPass(String);

impl EncodedBoardingPass {
    /// Borrow the encoded string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take ownership of the encoded string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for strings produced by [`encode`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for EncodedBoardingPass {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncodedBoardingPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EncodedBoardingPass> for String {
    fn from(encoded: EncodedBoardingPass) -> Self {
        encoded.0
    }
}

/// Derived fields of a boarding pass, before concatenation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardingPassFields {
    /// `LAST/FIRST`, uppercase
    pub name: String,
    /// Origin and destination codes, uppercase, joined
    pub route: String,
    /// Flight with spaces removed
    pub flight: String,
    /// Zero-padded day of year, `001`..=`366`
    pub julian_date: String,
    /// Class code as given
    pub class_code: String,
    /// Seat, uppercase
    pub seat: String,
    /// Two-digit year. Derived but not part of the encoded string.
    pub year: String,
}

impl BoardingPassFields {
    /// Derive every field from a record.
    #[must_use]
    pub fn from_record(record: &FlightRecord) -> Self {
        Self {
            name: formatted_name(&record.first_name, &record.last_name),
            route: format!("{}{}", record.from.to_uppercase(), record.to.to_uppercase()),
            flight: strip_spaces(&record.flight),
            julian_date: julian_day(record.date),
            class_code: record.class_code.clone(),
            seat: record.seat.to_uppercase(),
            year: two_digit_year(record.date),
        }
    }

    /// Concatenate the fields in BCBP order.
    #[must_use]
    pub fn encode(&self) -> EncodedBoardingPass {
        let parts: [&str; 12] = [
            FORMAT_CODE,
            &self.name,
            ELECTRONIC_TICKET_INDICATOR,
            PNR_PLACEHOLDER,
            &self.route,
            &self.flight,
            &self.julian_date,
            &self.class_code,
            &self.seat,
            CHECK_IN_SEQUENCE,
            PASSENGER_STATUS,
            VERSION_NUMBER,
        ];

        EncodedBoardingPass(parts.concat())
    }
}

/// Encode a flight record as a BCBP string.
///
/// Deterministic and allocation-only; safe to call from any thread.
#[must_use]
pub fn encode(record: &FlightRecord) -> EncodedBoardingPass {
    let fields = BoardingPassFields::from_record(record);
    tracing::trace!(julian_date = %fields.julian_date, route = %fields.route, "Encoding boarding pass");
    fields.encode()
}

/// Day of year as three zero-padded digits.
#[must_use]
pub fn julian_day(date: NaiveDate) -> String {
    format!("{:03}", date.ordinal())
}

/// Last two digits of the year.
#[must_use]
pub fn two_digit_year(date: NaiveDate) -> String {
    format!("{:02}", date.year().rem_euclid(100))
}

/// `LAST/FIRST`, both uppercased.
#[must_use]
pub fn formatted_name(first_name: &str, last_name: &str) -> String {
    format!("{}/{}", last_name.to_uppercase(), first_name.to_uppercase())
}

/// Remove every space character. Other whitespace is kept.
#[must_use]
pub fn strip_spaces(value: &str) -> String {
    value.chars().filter(|c| *c != ' ').collect()
}
