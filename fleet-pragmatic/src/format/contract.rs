//! Implements json request/response contract on top of the scheduler: availability query, trip
//! creation, trip listing and status update. Typed functions return pragmatic models or a
//! `FormatError`, serialized ones accept json input and return json output or json error payload.

#[cfg(test)]
#[path = "../../tests/unit/format/contract_test.rs"]
mod contract_test;

use crate::format::FormatError;
use crate::format::mapping::*;
use crate::format::model::*;
use fleet_core::scheduling::Scheduler;
use serde::Serialize;
use std::io::{BufReader, Read};

/// Returns drivers and trucks which are free within requested interval.
pub fn check_availability(
    scheduler: &Scheduler,
    query: &AvailabilityQuery,
) -> Result<AvailabilityResponse, FormatError> {
    let requested = parse_interval(&query.start, &query.end)?;
    let availability = scheduler.availability(&requested)?;

    Ok(AvailabilityResponse {
        available_drivers: availability.drivers.iter().map(from_driver).collect(),
        available_trucks: availability.trucks.iter().map(from_truck).collect(),
    })
}

/// Validates and admits a new trip.
pub fn create_trip(scheduler: &Scheduler, request: &TripRequest) -> Result<ApiTrip, FormatError> {
    let draft = to_draft(request)?;
    let trip = scheduler.propose_trip(&draft)?;

    from_trip(&trip)
}

/// Returns all trips sorted by id.
pub fn list_trips(scheduler: &Scheduler) -> Result<Vec<ApiTrip>, FormatError> {
    from_trips(&scheduler.list_trips())
}

/// Changes status of existing trip.
pub fn update_trip_status(scheduler: &Scheduler, update: &StatusUpdate) -> Result<ApiTrip, FormatError> {
    let trip = scheduler.update_status(update.trip, to_trip_status(update.status))?;

    from_trip(&trip)
}

/// Runs availability query serialized as json.
pub fn check_availability_serialized<R: Read>(scheduler: &Scheduler, query: BufReader<R>) -> Result<String, String> {
    to_json_result(deserialize_query(query).and_then(|query| check_availability(scheduler, &query)))
}

/// Runs trip creation request serialized as json.
pub fn create_trip_serialized<R: Read>(scheduler: &Scheduler, request: BufReader<R>) -> Result<String, String> {
    to_json_result(deserialize_trip_request(request).and_then(|request| create_trip(scheduler, &request)))
}

/// Returns all trips serialized as json.
pub fn list_trips_serialized(scheduler: &Scheduler) -> Result<String, String> {
    to_json_result(list_trips(scheduler))
}

/// Runs status update request serialized as json.
pub fn update_trip_status_serialized<R: Read>(scheduler: &Scheduler, update: BufReader<R>) -> Result<String, String> {
    to_json_result(deserialize_status_update(update).and_then(|update| update_trip_status(scheduler, &update)))
}

fn to_json_result<T: Serialize>(result: Result<T, FormatError>) -> Result<String, String> {
    result
        .and_then(|value| {
            serde_json::to_string_pretty(&value)
                .map_err(|err| FormatError::new(crate::format::INTERNAL_ERROR_KIND, format!("cannot serialize: {err}")))
        })
        .map_err(|err| err.to_json())
}
