//! QR code payloads.
//!
//! A payload is a title line followed by `Label: value` lines. Absent
//! optional values produce no line at all.

use crate::display::format_time;
use crate::record::{BaggageTagRecord, BoardingPass, ETicketRecord};

/// Builder for a labeled-line payload.
#[derive(Debug, Clone)]
pub struct LabeledLines {
    buf: String,
}

impl LabeledLines {
    /// Start a payload with a title line.
    #[must_use]
    pub fn new(title: &str) -> Self {
        Self {
            buf: title.to_string(),
        }
    }

    /// Append `label: value`.
    #[must_use]
    pub fn line(mut self, label: &str, value: impl AsRef<str>) -> Self {
        self.buf.push('\n');
        self.buf.push_str(label);
        self.buf.push_str(": ");
        self.buf.push_str(value.as_ref());
        self
    }

    /// Append `label: value` only when a value is present.
    #[must_use]
    pub fn optional_line<V: AsRef<str>>(self, label: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.line(label, v),
            None => self,
        }
    }

    /// Finish the payload.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Payload for a boarding pass.
#[must_use]
pub fn boarding_pass(pass: &BoardingPass) -> String {
    let record = &pass.record;
    let details = &pass.details;

    LabeledLines::new("BOARDING PASS")
        .line("Passenger", passenger(&record.first_name, &record.last_name))
        .line("Flight", &record.flight)
        .line("From", &record.from)
        .line("To", &record.to)
        .line("Date", record.date.to_string())
        .optional_line("Time", record.time.map(format_time))
        .line("Seat", &record.seat)
        .optional_line("Gate", details.gate.as_ref())
        .optional_line("PNR", details.pnr.as_ref())
        .optional_line("Boarding", details.boarding_time.map(format_time))
        .line("Class", &record.class_code)
        .optional_line("Seq", details.sequence.as_ref())
        .finish()
}

/// Payload for an e-ticket.
#[must_use]
pub fn eticket(record: &ETicketRecord) -> String {
    LabeledLines::new("E-TICKET")
        .line("Ticket", &record.ticket_number)
        .line("Passenger", passenger(&record.first_name, &record.last_name))
        .line("Flight", &record.flight)
        .line("From", &record.from)
        .line("To", &record.to)
        .line("Date", record.date.to_string())
        .optional_line("Time", record.time.map(format_time))
        .optional_line("PNR", record.pnr.as_ref())
        .finish()
}

/// Payload for a baggage tag.
#[must_use]
pub fn baggage_tag(record: &BaggageTagRecord) -> String {
    LabeledLines::new("BAGGAGE TAG")
        .line("Passenger", passenger(&record.first_name, &record.last_name))
        .line("Flight", &record.flight)
        .line("From", &record.from)
        .line("To", &record.to)
        .line("PNR", &record.pnr)
        .line("Tag", &record.bag_number)
        .finish()
}

fn passenger(first_name: &str, last_name: &str) -> String {
    format!("{first_name} {last_name}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::{BoardingDetails, FlightRecord};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_labeled_lines() {
        let payload = LabeledLines::new("TITLE")
            .line("A", "1")
            .optional_line("B", None::<&str>)
            .optional_line("C", Some("3"))
            .finish();
        assert_eq!(payload, "TITLE\nA: 1\nC: 3");
    }

    #[test]
    fn test_boarding_pass_payload() {
        let pass = BoardingPass {
            record: FlightRecord {
                first_name: "Rahul".to_string(),
                last_name: "Sharma".to_string(),
                flight: "AI 2727".to_string(),
                from: "BOM".to_string(),
                to: "DEL".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
                time: NaiveTime::from_hms_opt(13, 15, 0),
                seat: "17A".to_string(),
                class_code: "Y".to_string(),
            },
            details: BoardingDetails {
                gate: Some("07".to_string()),
                pnr: Some("ABC123".to_string()),
                boarding_time: NaiveTime::from_hms_opt(12, 45, 0),
                sequence: Some("001A".to_string()),
            },
        };

        assert_eq!(
            boarding_pass(&pass),
            "BOARDING PASS\nPassenger: Rahul Sharma\nFlight: AI 2727\nFrom: BOM\nTo: DEL\n\
             Date: 2025-09-10\nTime: 13:15\nSeat: 17A\nGate: 07\nPNR: ABC123\n\
             Boarding: 12:45\nClass: Y\nSeq: 001A"
        );
    }

    #[test]
    fn test_boarding_pass_payload_skips_missing_details() {
        let pass = BoardingPass {
            record: FlightRecord {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                flight: "PR 2727".to_string(),
                from: "MNL".to_string(),
                to: "CEB".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 9, 10).unwrap(),
                time: None,
                seat: "17A".to_string(),
                class_code: "Y".to_string(),
            },
            details: BoardingDetails::default(),
        };

        let payload = boarding_pass(&pass);
        assert!(!payload.contains("Gate"));
        assert!(!payload.contains("Time"));
        assert!(payload.ends_with("Seat: 17A\nClass: Y"));
    }

    #[test]
    fn test_baggage_tag_payload() {
        let record = BaggageTagRecord {
            first_name: "Priya".to_string(),
            last_name: "Patel".to_string(),
            pnr: "ABC123".to_string(),
            flight: "AI0121".to_string(),
            from: "BOM".to_string(),
            to: "DEL".to_string(),
            weight_kg: 23,
            bag_number: "0000-615742".to_string(),
        };

        assert_eq!(
            baggage_tag(&record),
            "BAGGAGE TAG\nPassenger: Priya Patel\nFlight: AI0121\nFrom: BOM\nTo: DEL\n\
             PNR: ABC123\nTag: 0000-615742"
        );
    }

    #[test]
    fn test_eticket_payload() {
        let mut record = ETicketRecord {
            ticket_number: "0161234567890".to_string(),
            first_name: "Priya".to_string(),
            last_name: "Patel".to_string(),
            flight: "UA 100".to_string(),
            from: "SFO".to_string(),
            to: "ORD".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            time: NaiveTime::from_hms_opt(8, 30, 0),
            pnr: Some("XYZ789".to_string()),
        };

        assert_eq!(
            eticket(&record),
            "E-TICKET\nTicket: 0161234567890\nPassenger: Priya Patel\nFlight: UA 100\n\
             From: SFO\nTo: ORD\nDate: 2025-01-01\nTime: 08:30\nPNR: XYZ789"
        );

        record.pnr = None;
        assert!(eticket(&record).ends_with("Time: 08:30"));
    }
}
