//! Request validation.
//!
//! Request types mirror the JSON the front end posts: every field optional,
//! strings unparsed. `validate` turns a request into a record the encoders
//! can trust, or reports the first problem found.

use crate::record::{BaggageTagRecord, BoardingDetails, BoardingPass, ETicketRecord, FlightRecord};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum length of an e-ticket number.
pub const MIN_TICKET_NUMBER_LEN: usize = 13;

/// Reasons a request is rejected before encoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is absent or blank.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An airport code is not exactly three letters.
    #[error("Airport codes must be 3 letters")]
    InvalidAirportCode,

    /// A date is not `YYYY-MM-DD`.
    #[error("Invalid date format. Use YYYY-MM-DD")]
    InvalidDate,

    /// A time is not `HH:MM`.
    #[error("Invalid time format. Use HH:MM")]
    InvalidTime,

    /// An e-ticket number is shorter than [`MIN_TICKET_NUMBER_LEN`].
    #[error("Ticket number must be at least 13 digits")]
    TicketNumberTooShort,

    /// A bag weight is not a positive whole number of kilograms.
    #[error("Baggage weight must be a positive whole number of kilograms")]
    InvalidWeight,
}

/// Boarding pass form data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardingPassRequest {
    /// Passenger given name
    pub first_name: Option<String>,
    /// Passenger family name
    pub last_name: Option<String>,
    /// Carrier and flight number
    pub flight: Option<String>,
    /// Origin airport code
    pub from: Option<String>,
    /// Destination airport code
    pub to: Option<String>,
    /// Departure date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Departure time, `HH:MM`
    pub time: Option<String>,
    /// Seat
    pub seat: Option<String>,
    /// Booking class code
    #[serde(rename = "class")]
    pub class_code: Option<String>,
    /// Departure gate
    pub gate: Option<String>,
    /// Booking reference
    pub pnr: Option<String>,
    /// Boarding time, `HH:MM`
    pub boarding_time: Option<String>,
    /// Check-in sequence
    pub sequence: Option<String>,
}

impl BoardingPassRequest {
    /// Check required fields, airport codes, date and times.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered, required fields
    /// first in form order.
    pub fn validate(self) -> Result<BoardingPass, ValidationError> {
        let first_name = required(self.first_name, "firstName")?;
        let last_name = required(self.last_name, "lastName")?;
        let flight = required(self.flight, "flight")?;
        let from = required(self.from, "from")?;
        let to = required(self.to, "to")?;
        let date = required(self.date, "date")?;
        let time = required(self.time, "time")?;
        let seat = required(self.seat, "seat")?;
        let class_code = required(self.class_code, "class")?;

        check_airports(&from, &to)?;

        Ok(BoardingPass {
            record: FlightRecord {
                first_name,
                last_name,
                flight,
                from,
                to,
                date: parse_date(&date)?,
                time: Some(parse_time(&time)?),
                seat,
                class_code,
            },
            details: BoardingDetails {
                gate: optional(self.gate),
                pnr: optional(self.pnr),
                boarding_time: optional(self.boarding_time)
                    .map(|t| parse_time(&t))
                    .transpose()?,
                sequence: optional(self.sequence),
            },
        })
    }
}

/// E-ticket form data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ETicketRequest {
    /// Ticket number
    pub ticket_number: Option<String>,
    /// Passenger given name
    pub first_name: Option<String>,
    /// Passenger family name
    pub last_name: Option<String>,
    /// Carrier and flight number
    pub flight: Option<String>,
    /// Origin airport code
    pub from: Option<String>,
    /// Destination airport code
    pub to: Option<String>,
    /// Departure date, `YYYY-MM-DD`
    pub date: Option<String>,
    /// Departure time, `HH:MM`
    pub time: Option<String>,
    /// Booking reference, optional
    pub pnr: Option<String>,
}

impl ETicketRequest {
    /// Check required fields, ticket number length, airport codes and date.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(self) -> Result<ETicketRecord, ValidationError> {
        let ticket_number = required(self.ticket_number, "ticketNumber")?;
        let first_name = required(self.first_name, "firstName")?;
        let last_name = required(self.last_name, "lastName")?;
        let flight = required(self.flight, "flight")?;
        let from = required(self.from, "from")?;
        let to = required(self.to, "to")?;
        let date = required(self.date, "date")?;
        let time = required(self.time, "time")?;

        if ticket_number.chars().count() < MIN_TICKET_NUMBER_LEN {
            return Err(ValidationError::TicketNumberTooShort);
        }
        check_airports(&from, &to)?;

        Ok(ETicketRecord {
            ticket_number,
            first_name,
            last_name,
            flight,
            from,
            to,
            date: parse_date(&date)?,
            time: Some(parse_time(&time)?),
            pnr: optional(self.pnr),
        })
    }
}

/// Baggage tag form data.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaggageTagRequest {
    /// Passenger given name
    pub first_name: Option<String>,
    /// Passenger family name
    pub last_name: Option<String>,
    /// Booking reference
    pub pnr: Option<String>,
    /// Carrier and flight number
    pub flight: Option<String>,
    /// Origin airport code
    pub from: Option<String>,
    /// Destination airport code
    pub to: Option<String>,
    /// Weight in kilograms, as typed; JSON numbers are accepted too
    #[serde(default, deserialize_with = "string_or_number")]
    pub weight: Option<String>,
    /// Bag tag number
    pub bag_number: Option<String>,
}

impl BaggageTagRequest {
    /// Check required fields, airport codes and weight.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(self) -> Result<BaggageTagRecord, ValidationError> {
        let first_name = required(self.first_name, "firstName")?;
        let last_name = required(self.last_name, "lastName")?;
        let pnr = required(self.pnr, "pnr")?;
        let flight = required(self.flight, "flight")?;
        let from = required(self.from, "from")?;
        let to = required(self.to, "to")?;
        let weight = required(self.weight, "weight")?;
        let bag_number = required(self.bag_number, "bagNumber")?;

        check_airports(&from, &to)?;

        let weight_kg = weight
            .parse::<u32>()
            .ok()
            .filter(|w| *w > 0)
            .ok_or(ValidationError::InvalidWeight)?;

        Ok(BaggageTagRecord {
            first_name,
            last_name,
            pnr,
            flight,
            from,
            to,
            weight_kg,
            bag_number,
        })
    }
}

/// Accept `"23"` and `23` alike.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected string or number, found {other}"
        ))),
    }
}

/// Trimmed value, or `MissingField` when absent or blank.
fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    optional(value).ok_or(ValidationError::MissingField(field))
}

/// Trimmed value, with blank treated as absent.
fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn check_airports(from: &str, to: &str) -> Result<(), ValidationError> {
    if is_airport_code(from) && is_airport_code(to) {
        Ok(())
    } else {
        Err(ValidationError::InvalidAirportCode)
    }
}

/// Exactly three ASCII letters, any case.
#[must_use]
pub fn is_airport_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Parse `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidDate`] for anything else.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)
}

/// Parse `HH:MM`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidTime`] for anything else.
pub fn parse_time(value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ValidationError::InvalidTime)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn boarding_request() -> BoardingPassRequest {
        BoardingPassRequest {
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            flight: Some("PR 2727".to_string()),
            from: Some("mnl".to_string()),
            to: Some("CEB".to_string()),
            date: Some("2025-09-10".to_string()),
            time: Some("13:15".to_string()),
            seat: Some("17A".to_string()),
            class_code: Some("Y".to_string()),
            ..BoardingPassRequest::default()
        }
    }

    #[test]
    fn test_valid_boarding_pass() {
        let pass = boarding_request().validate().unwrap();
        assert_eq!(pass.record.from, "mnl");
        assert_eq!(pass.record.date, NaiveDate::from_ymd_opt(2025, 9, 10).unwrap());
        assert_eq!(pass.record.time, NaiveTime::from_hms_opt(13, 15, 0));
        assert_eq!(pass.details, BoardingDetails::default());
    }

    #[test]
    fn test_missing_fields_reported_in_form_order() {
        let request = BoardingPassRequest {
            seat: None,
            flight: None,
            ..boarding_request()
        };
        assert_eq!(
            request.validate().unwrap_err(),
            ValidationError::MissingField("flight")
        );
    }

    #[test]
    fn test_blank_field_is_missing() {
        let request = BoardingPassRequest {
            class_code: Some("   ".to_string()),
            ..boarding_request()
        };
        let err = request.validate().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: class");
    }

    #[test]
    fn test_airport_code_length() {
        let request = BoardingPassRequest {
            from: Some("PHIL".to_string()),
            ..boarding_request()
        };
        assert_eq!(request.validate().unwrap_err(), ValidationError::InvalidAirportCode);

        let request = BoardingPassRequest {
            to: Some("C3B".to_string()),
            ..boarding_request()
        };
        assert_eq!(request.validate().unwrap_err(), ValidationError::InvalidAirportCode);
    }

    #[test]
    fn test_invalid_date_and_time() {
        let request = BoardingPassRequest {
            date: Some("10/09/2025".to_string()),
            ..boarding_request()
        };
        assert_eq!(request.validate().unwrap_err(), ValidationError::InvalidDate);

        let request = BoardingPassRequest {
            date: Some("2025-02-30".to_string()),
            ..boarding_request()
        };
        assert_eq!(request.validate().unwrap_err(), ValidationError::InvalidDate);

        let request = BoardingPassRequest {
            boarding_time: Some("noon".to_string()),
            ..boarding_request()
        };
        assert_eq!(request.validate().unwrap_err(), ValidationError::InvalidTime);
    }

    #[test]
    fn test_optional_details_trimmed() {
        let request = BoardingPassRequest {
            gate: Some(" 07 ".to_string()),
            pnr: Some(String::new()),
            boarding_time: Some("12:45".to_string()),
            ..boarding_request()
        };
        let pass = request.validate().unwrap();
        assert_eq!(pass.details.gate.as_deref(), Some("07"));
        assert_eq!(pass.details.pnr, None);
        assert_eq!(pass.details.boarding_time, NaiveTime::from_hms_opt(12, 45, 0));
    }

    #[test]
    fn test_eticket_number_length() {
        let request = ETicketRequest {
            ticket_number: Some("016123456789".to_string()),
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            flight: Some("UA 100".to_string()),
            from: Some("SFO".to_string()),
            to: Some("ORD".to_string()),
            date: Some("2025-09-10".to_string()),
            time: Some("08:00".to_string()),
            pnr: Some(" abc123 ".to_string()),
        };
        assert_eq!(
            request.clone().validate().unwrap_err(),
            ValidationError::TicketNumberTooShort
        );

        let request = ETicketRequest {
            ticket_number: Some("0161234567890".to_string()),
            ..request
        };
        let record = request.validate().unwrap();
        assert_eq!(record.ticket_number, "0161234567890");
        assert_eq!(record.pnr.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_baggage_weight() {
        let request = BaggageTagRequest {
            first_name: Some("Priya".to_string()),
            last_name: Some("Patel".to_string()),
            pnr: Some("ABC123".to_string()),
            flight: Some("AI0121".to_string()),
            from: Some("BOM".to_string()),
            to: Some("DEL".to_string()),
            weight: Some("23".to_string()),
            bag_number: Some("0000-615742".to_string()),
        };
        assert_eq!(request.clone().validate().unwrap().weight_kg, 23);

        for bad in ["0", "-1", "23.5", "heavy"] {
            let request = BaggageTagRequest {
                weight: Some(bad.to_string()),
                ..request.clone()
            };
            assert_eq!(request.validate().unwrap_err(), ValidationError::InvalidWeight);
        }
    }

    #[test]
    fn test_weight_accepts_json_number() {
        let request: BaggageTagRequest =
            serde_json::from_str(r#"{"weight": 23, "bagNumber": "1234567890"}"#).unwrap();
        assert_eq!(request.weight.as_deref(), Some("23"));

        let request: BaggageTagRequest = serde_json::from_str(r#"{"weight": "7"}"#).unwrap();
        assert_eq!(request.weight.as_deref(), Some("7"));
    }

    #[test]
    fn test_is_airport_code() {
        assert!(is_airport_code("BOM"));
        assert!(is_airport_code("ceb"));
        assert!(!is_airport_code("BO"));
        assert!(!is_airport_code("BÖM"));
        assert!(!is_airport_code("B0M"));
    }
}
