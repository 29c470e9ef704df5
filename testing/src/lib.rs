//! # Travel Docs Testing
//!
//! Test utilities for the travel-docs crates.
//!
//! This crate provides:
//! - Deterministic clocks
//! - Store doubles, including one that always fails
//! - Sample records and form requests
//! - proptest strategies for flight records
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use travel_docs_core::InMemoryDocumentStore;
//! use travel_docs_testing::{fixtures, test_clock};
//!
//! let store = InMemoryDocumentStore::new(Arc::new(test_clock()));
//! let pass = fixtures::boarding_pass_request().validate().unwrap();
//! assert_eq!(pass.record.last_name, "Doe");
//! # let _ = store;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Mock implementations of injected dependencies.
pub mod mocks {
    use chrono::{DateTime, Duration, Utc};
    use std::sync::Mutex;
    use travel_docs_core::environment::Clock;
    use travel_docs_core::store::StoreFuture;
    use travel_docs_core::{DocumentId, DocumentStore, NewDocument, StoreError, StoredDocument};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time.
    ///
    /// # Example
    ///
    /// ```
    /// use travel_docs_testing::mocks::FixedClock;
    /// use travel_docs_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// assert_eq!(clock.now(), clock.now());
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Clock that advances by a fixed step on every read.
    ///
    /// Gives each stored document a distinct, increasing timestamp.
    #[derive(Debug)]
    pub struct SteppingClock {
        next: Mutex<DateTime<Utc>>,
        step: Duration,
    }

    impl SteppingClock {
        /// Start at `start`, advancing by `step` per call.
        #[must_use]
        pub const fn new(start: DateTime<Utc>, step: Duration) -> Self {
            Self {
                next: Mutex::new(start),
                step,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            // A poisoned lock still holds a valid timestamp
            let mut next = self
                .next
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            let now = *next;
            *next = now + self.step;
            now
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + Duration::days(20_089))
    }

    /// Store whose every operation fails with a database error.
    #[derive(Debug, Clone, Default)]
    pub struct FailingDocumentStore;

    impl FailingDocumentStore {
        fn fail<T: Send + 'static>() -> StoreFuture<'static, T> {
            Box::pin(async { Err(StoreError::Database("connection refused".to_string())) })
        }
    }

    impl DocumentStore for FailingDocumentStore {
        fn insert(&self, _document: NewDocument) -> StoreFuture<'_, StoredDocument> {
            Self::fail()
        }

        fn get(&self, _id: DocumentId) -> StoreFuture<'_, Option<StoredDocument>> {
            Self::fail()
        }

        fn list(&self) -> StoreFuture<'_, Vec<StoredDocument>> {
            Self::fail()
        }

        fn delete(&self, _id: DocumentId) -> StoreFuture<'_, bool> {
            Self::fail()
        }

        fn ping(&self) -> StoreFuture<'_, ()> {
            Self::fail()
        }
    }
}

/// Sample records and requests.
pub mod fixtures {
    use chrono::NaiveDate;
    use serde_json::{Value, json};
    use travel_docs_core::FlightRecord;
    use travel_docs_core::validation::{BaggageTagRequest, BoardingPassRequest, ETicketRequest};

    /// Encodes to `M1DOE/JOHNEABC123MNLCEBPR2727253Y17A001A00010`.
    ///
    /// # Panics
    ///
    /// Never in practice; the date is hardcoded.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn sample_flight_record() -> FlightRecord {
        FlightRecord {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            flight: "PR 2727".to_string(),
            from: "MNL".to_string(),
            to: "CEB".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 10).expect("hardcoded date is valid"),
            time: None,
            seat: "17A".to_string(),
            class_code: "Y".to_string(),
        }
    }

    /// Complete boarding pass form, as JSON.
    #[must_use]
    pub fn boarding_pass_json() -> Value {
        json!({
            "firstName": "John",
            "lastName": "Doe",
            "flight": "PR 2727",
            "from": "MNL",
            "to": "CEB",
            "date": "2025-09-10",
            "time": "13:15",
            "seat": "17A",
            "class": "Y",
            "gate": "07",
            "pnr": "XYZ789",
            "boardingTime": "12:45"
        })
    }

    /// Complete e-ticket form, as JSON.
    #[must_use]
    pub fn eticket_json() -> Value {
        json!({
            "ticketNumber": "0161234567890",
            "firstName": "Priya",
            "lastName": "Patel",
            "flight": "UA 100",
            "from": "SFO",
            "to": "ORD",
            "date": "2025-01-01",
            "time": "08:30",
            "pnr": "XYZ789"
        })
    }

    /// Complete baggage tag form, as JSON.
    #[must_use]
    pub fn baggage_tag_json() -> Value {
        json!({
            "firstName": "Rahul",
            "lastName": "Sharma",
            "pnr": "ABC123",
            "flight": "AI0121",
            "from": "BOM",
            "to": "DEL",
            "weight": "23",
            "bagNumber": "0000-615742"
        })
    }

    /// [`boarding_pass_json`] as a typed request.
    ///
    /// # Panics
    ///
    /// Never in practice; the fixture matches the request shape.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn boarding_pass_request() -> BoardingPassRequest {
        serde_json::from_value(boarding_pass_json()).expect("fixture matches request shape")
    }

    /// [`eticket_json`] as a typed request.
    ///
    /// # Panics
    ///
    /// Never in practice; the fixture matches the request shape.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn eticket_request() -> ETicketRequest {
        serde_json::from_value(eticket_json()).expect("fixture matches request shape")
    }

    /// [`baggage_tag_json`] as a typed request.
    ///
    /// # Panics
    ///
    /// Never in practice; the fixture matches the request shape.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn baggage_tag_request() -> BaggageTagRequest {
        serde_json::from_value(baggage_tag_json()).expect("fixture matches request shape")
    }
}

/// Test helpers.
pub mod helpers {
    /// Install a test-writer tracing subscriber once per process.
    ///
    /// Later calls are no-ops, so every test may call it.
    pub fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "travel_docs=debug".into()),
            )
            .with_test_writer()
            .try_init();
    }
}

/// Property-based testing utilities using proptest.
pub mod properties {
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use travel_docs_core::FlightRecord;

    /// Upper-case three-letter airport codes.
    pub fn airport_code() -> impl Strategy<Value = String> {
        "[A-Z]{3}"
    }

    /// Any calendar date between 2000 and 2099.
    pub fn travel_date() -> impl Strategy<Value = NaiveDate> {
        (2000i32..2100, 1u32..=366).prop_filter_map("valid ordinal", |(year, ordinal)| {
            NaiveDate::from_yo_opt(year, ordinal)
        })
    }

    /// Flight records with arbitrary names, routes, dates and seats.
    pub fn flight_record() -> impl Strategy<Value = FlightRecord> {
        (
            "[A-Za-z]{1,12}",
            "[A-Za-z]{1,12}",
            "[A-Z]{2} ?[0-9]{1,4}",
            airport_code(),
            airport_code(),
            travel_date(),
            "[0-9]{1,2}[a-fA-F]",
            "[YWJF]",
        )
            .prop_map(
                |(first_name, last_name, flight, from, to, date, seat, class_code)| FlightRecord {
                    first_name,
                    last_name,
                    flight,
                    from,
                    to,
                    date,
                    time: None,
                    seat,
                    class_code,
                },
            )
    }
}

// Re-export commonly used items
pub use mocks::{FailingDocumentStore, FixedClock, SteppingClock, test_clock};

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;
    use travel_docs_core::DocumentStore;
    use travel_docs_core::environment::Clock;

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        assert_eq!(clock.now(), clock.now());
        assert_eq!(clock.now(), Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_stepping_clock_advances() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let clock = SteppingClock::new(start, Duration::seconds(1));
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start + Duration::seconds(1));
    }

    #[test]
    fn test_fixtures_validate() {
        assert!(fixtures::boarding_pass_request().validate().is_ok());
        assert!(fixtures::eticket_request().validate().is_ok());
        let tag = fixtures::baggage_tag_request().validate().unwrap();
        assert_eq!(tag.weight_kg, 23);
    }

    #[test]
    fn test_sample_record_encodes() {
        let encoded = travel_docs_core::bcbp::encode(&fixtures::sample_flight_record());
        assert_eq!(encoded.as_str(), "M1DOE/JOHNEABC123MNLCEBPR2727253Y17A001A00010");
    }

    #[tokio::test]
    async fn test_failing_store_fails() {
        let store = FailingDocumentStore;
        assert!(store.ping().await.is_err());
        assert!(store.list().await.is_err());
    }

    proptest! {
        #[test]
        fn prop_generated_records_encode_with_route(record in properties::flight_record()) {
            let encoded = travel_docs_core::bcbp::encode(&record);
            let route = format!("{}{}", record.from, record.to);
            prop_assert!(encoded.as_str().contains(&route));
        }
    }
}
