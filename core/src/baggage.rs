//! Baggage tag formatting.
//!
//! The bag tag number is the whole barcode payload; everything else is
//! printed on the tag only.

use crate::airport;
use crate::display::display_name;
use crate::record::BaggageTagRecord;
use serde::{Deserialize, Serialize};

/// Printable baggage tag fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaggageTagDisplay {
    /// `FIRST LAST`, uppercase
    pub name: String,
    /// Flight, uppercase
    pub flight: String,
    /// Origin code, uppercase
    pub from: String,
    /// Destination code, uppercase
    pub to: String,
    /// Origin city, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_city: Option<String>,
    /// Destination city, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_city: Option<String>,
    /// Booking reference, uppercase
    pub pnr: String,
    /// `<n> KG`
    pub weight: String,
    /// Bag tag number as given
    pub tag_number: String,
}

/// Barcode payload for a bag: the tag number, untouched.
#[must_use]
pub fn encode(record: &BaggageTagRecord) -> String {
    record.bag_number.clone()
}

/// Build the printable tag fields.
#[must_use]
pub fn display(record: &BaggageTagRecord) -> BaggageTagDisplay {
    BaggageTagDisplay {
        name: display_name(&record.first_name, &record.last_name),
        flight: record.flight.to_uppercase(),
        from: record.from.to_uppercase(),
        to: record.to.to_uppercase(),
        from_city: airport::city_name(&record.from),
        to_city: airport::city_name(&record.to),
        pnr: record.pnr.to_uppercase(),
        weight: format!("{} KG", record.weight_kg),
        tag_number: record.bag_number.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BaggageTagRecord {
        BaggageTagRecord {
            first_name: "Priya".to_string(),
            last_name: "Patel".to_string(),
            pnr: "abc123".to_string(),
            flight: "ai0121".to_string(),
            from: "bom".to_string(),
            to: "del".to_string(),
            weight_kg: 23,
            bag_number: "0000-615742".to_string(),
        }
    }

    #[test]
    fn test_encode_is_tag_number() {
        assert_eq!(encode(&sample()), "0000-615742");
    }

    #[test]
    fn test_display_baggage_tag() {
        let display = display(&sample());
        assert_eq!(display.name, "PRIYA PATEL");
        assert_eq!(display.flight, "AI0121");
        assert_eq!(display.from, "BOM");
        assert_eq!(display.to, "DEL");
        assert_eq!(display.from_city.as_deref(), Some("MUMBAI"));
        assert_eq!(display.to_city.as_deref(), Some("DELHI"));
        assert_eq!(display.pnr, "ABC123");
        assert_eq!(display.weight, "23 KG");
        assert_eq!(display.tag_number, "0000-615742");
    }
}
