//! E-ticket encoding and receipt formatting.

use crate::bcbp::strip_spaces;
use crate::display::{display_name, format_date, format_time};
use crate::record::ETicketRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field separator in the encoded e-ticket string.
pub const SEPARATOR: char = '|';

/// Status printed on every issued ticket.
pub const STATUS_CONFIRMED: &str = "CONFIRMED";

/// Printable e-ticket receipt fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ETicketDisplay {
    /// Ticket number split after the airline prefix, e.g. `016 1234567890`
    pub ticket_number: String,
    /// Airline name, or the carrier code when unknown
    pub airline: String,
    /// `FIRST LAST`, uppercase
    pub name: String,
    /// Flight, uppercase
    pub flight: String,
    /// `DD MON YYYY`
    pub date: String,
    /// Origin code, uppercase
    pub from: String,
    /// Destination code, uppercase
    pub to: String,
    /// `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Ticket status
    pub status: String,
}

/// Encode an e-ticket as
/// `ticket|FIRST LAST|FLIGHT|FROMTO|YYMMDD`.
#[must_use]
pub fn encode(record: &ETicketRecord) -> String {
    let route = format!("{}{}", record.from.to_uppercase(), record.to.to_uppercase());
    let fields = [
        record.ticket_number.clone(),
        display_name(&record.first_name, &record.last_name),
        strip_spaces(&record.flight),
        route,
        compact_date(record.date),
    ];

    fields.join(&SEPARATOR.to_string())
}

/// Build the printable receipt fields.
#[must_use]
pub fn display(record: &ETicketRecord) -> ETicketDisplay {
    let code = carrier_code(&record.flight);
    let airline = airline_name(&code).map_or(code, str::to_string);

    ETicketDisplay {
        ticket_number: split_ticket_number(&record.ticket_number),
        airline,
        name: display_name(&record.first_name, &record.last_name),
        flight: record.flight.to_uppercase(),
        date: format_date(record.date),
        from: record.from.to_uppercase(),
        to: record.to.to_uppercase(),
        time: record.time.map(format_time),
        status: STATUS_CONFIRMED.to_string(),
    }
}

/// Airline name for a two-letter carrier code.
#[must_use]
pub fn airline_name(code: &str) -> Option<&'static str> {
    match code {
        "UA" => Some("UNITED AIRLINES"),
        "AA" => Some("AMERICAN AIRLINES"),
        "DL" => Some("DELTA AIR LINES"),
        "LH" => Some("LUFTHANSA"),
        "BA" => Some("BRITISH AIRWAYS"),
        "AF" => Some("AIR FRANCE"),
        _ => None,
    }
}

/// First two characters of the flight, uppercased.
#[must_use]
pub fn carrier_code(flight: &str) -> String {
    flight.to_uppercase().chars().take(2).collect()
}

/// Insert a space after the three-character airline prefix.
#[must_use]
pub fn split_ticket_number(ticket_number: &str) -> String {
    match ticket_number.char_indices().nth(3) {
        Some((idx, _)) => format!("{} {}", &ticket_number[..idx], &ticket_number[idx..]),
        None => format!("{ticket_number} "),
    }
}

/// `YYMMDD`.
#[must_use]
pub fn compact_date(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}
