//! Human-readable boarding pass fields for previews.
//!
//! Shares nothing with the encoder except the input record.

use crate::airport;
use crate::record::{CabinClass, FlightRecord};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Class name used when a booking code is not recognised.
pub const DEFAULT_CLASS_NAME: &str = "Economy";

/// Printable boarding pass fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardingPassDisplay {
    /// `FIRST LAST`, uppercase
    pub name: String,
    /// Flight, uppercase
    pub flight: String,
    /// Origin code, uppercase
    pub from: String,
    /// Destination code, uppercase
    pub to: String,
    /// Origin city, when the airport is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_city: Option<String>,
    /// Destination city, when the airport is known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_city: Option<String>,
    /// `DD MON YYYY`
    pub date: String,
    /// `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Seat, uppercase
    pub seat: String,
    /// `<CLASSNAME> (<CODE>)`, uppercase
    pub class: String,
}

/// Build the printable fields for a boarding pass.
#[must_use]
pub fn boarding_pass(record: &FlightRecord) -> BoardingPassDisplay {
    BoardingPassDisplay {
        name: display_name(&record.first_name, &record.last_name),
        flight: record.flight.to_uppercase(),
        from: record.from.to_uppercase(),
        to: record.to.to_uppercase(),
        from_city: airport::city_name(&record.from),
        to_city: airport::city_name(&record.to),
        date: format_date(record.date),
        time: record.time.map(format_time),
        seat: record.seat.to_uppercase(),
        class: class_label(&record.class_code),
    }
}

/// Class name for a booking code, defaulting to [`DEFAULT_CLASS_NAME`].
#[must_use]
pub fn class_name(code: &str) -> &'static str {
    CabinClass::from_code(code).map_or(DEFAULT_CLASS_NAME, CabinClass::name)
}

/// `<CLASSNAME> (<CODE>)`, uppercase as printed on the pass.
#[must_use]
pub fn class_label(code: &str) -> String {
    format!("{} ({code})", class_name(code)).to_uppercase()
}

/// `DD MON YYYY`, uppercase.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d %b %Y").to_string().to_uppercase()
}

/// `HH:MM`, 24-hour.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// `FIRST LAST`, uppercase.
#[must_use]
pub fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}").to_uppercase()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> FlightRecord {
        FlightRecord {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            flight: "pr 2727".to_string(),
            from: "bom".to_string(),
            to: "ceb".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
            time: NaiveTime::from_hms_opt(13, 15, 0),
            seat: "17a".to_string(),
            class_code: "J".to_string(),
        }
    }

    #[test]
    fn test_boarding_pass_display() {
        let display = boarding_pass(&sample());
        assert_eq!(display.name, "JOHN DOE");
        assert_eq!(display.flight, "PR 2727");
        assert_eq!(display.from, "BOM");
        assert_eq!(display.to, "CEB");
        assert_eq!(display.from_city.as_deref(), Some("MUMBAI"));
        assert_eq!(display.to_city, None);
        assert_eq!(display.date, "10 SEP 2025");
        assert_eq!(display.time.as_deref(), Some("13:15"));
        assert_eq!(display.seat, "17A");
        assert_eq!(display.class, "BUSINESS (J)");
    }

    #[test]
    fn test_class_names() {
        assert_eq!(class_name("Y"), "Economy");
        assert_eq!(class_name("W"), "Premium Economy");
        assert_eq!(class_name("J"), "Business");
        assert_eq!(class_name("F"), "First");
    }

    #[test]
    fn test_unknown_class_defaults_to_economy() {
        assert_eq!(class_name("X"), "Economy");
        assert_eq!(class_label("X"), "ECONOMY (X)");
    }

    #[test]
    fn test_lowercase_code_is_uppercased_in_label() {
        // Codes are case sensitive, so `f` is not First
        assert_eq!(class_label("f"), "ECONOMY (F)");
        assert_eq!(class_label("W"), "PREMIUM ECONOMY (W)");

        let mut record = sample();
        record.class_code = "w".to_string();
        assert_eq!(boarding_pass(&record).class, "ECONOMY (W)");
    }

    #[test]
    fn test_format_date_pads_day() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(format_date(date), "01 JAN 2025");
    }

    #[test]
    fn test_display_omits_missing_time() {
        let mut record = sample();
        record.time = None;
        let json = serde_json::to_value(boarding_pass(&record)).unwrap();
        assert!(json.get("time").is_none());
        assert_eq!(json["fromCity"], "MUMBAI");
    }
}
