//! Pragmatic crate exposes trip scheduling via simple **pragmatic** json contract: availability
//! queries, trip creation, status updates and a fleet state document which seeds the scheduler.
//!
//! # Examples
//!
//! ```
//! use fleet_core::prelude::*;
//! use fleet_pragmatic::format::contract::check_availability_serialized;
//! use fleet_pragmatic::format::state::PragmaticState;
//! use std::io::BufReader;
//! use std::sync::Arc;
//!
//! let state = r#"{
//!   "drivers": [{ "id": 1, "name": "John Doe", "rating": 4.8, "weeklyHours": 35, "status": "Available" }],
//!   "trucks": [{ "id": 1, "licensePlate": "TRK-001", "capacity": 10, "status": "Available" }]
//! }"#;
//! let model = BufReader::new(state.as_bytes()).read_pragmatic().unwrap();
//! let scheduler = model.into_scheduler(Arc::new(Environment::silent()), TripIdentity::default());
//!
//! let query = r#"{ "start": "2024-05-02T08:00:00Z", "end": "2024-05-02T16:00:00Z" }"#;
//! let response = check_availability_serialized(&scheduler, BufReader::new(query.as_bytes())).unwrap();
//!
//! assert!(response.contains("TRK-001"));
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub mod format;
pub mod validation;

use fleet_core::models::common::Timestamp;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// A local date time without offset as sent by html `datetime-local` inputs, seconds are optional.
const LOCAL_DATE_TIME: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]");

/// Formats unix timestamp as RFC3339 string in UTC.
pub fn format_time(time: Timestamp) -> Result<String, String> {
    OffsetDateTime::from_unix_timestamp(time)
        .map_err(|err| err.to_string())
        .and_then(|time| time.format(&Rfc3339).map_err(|err| err.to_string()))
}

/// Parses RFC3339 string into unix timestamp. A local date time without offset is read as UTC.
pub fn parse_time(time: &str) -> Result<Timestamp, String> {
    OffsetDateTime::parse(time, &Rfc3339)
        .or_else(|err| {
            PrimitiveDateTime::parse(time, LOCAL_DATE_TIME).map(PrimitiveDateTime::assume_utc).map_err(|_| err)
        })
        .map(|time| time.unix_timestamp())
        .map_err(|err| err.to_string())
}
