#[cfg(test)]
#[path = "../../tests/unit/validation/trips_test.rs"]
mod trips_test;

use super::*;
use fleet_core::scheduling::overlaps;
use std::collections::{BTreeSet, HashSet};

/// Checks that trips have unique ids.
fn check_e1101_no_trips_with_duplicate_ids(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.trips().map(|(trip, _)| trip.id)).map_or(Ok(()), |ids| {
        Err(FormatError::new_with_code("E1101", "DuplicateId", format!("duplicated trip ids: {}", join(&ids))))
    })
}

/// Checks that trips have unique codes.
fn check_e1102_no_trips_with_duplicate_codes(ctx: &ValidationContext) -> Result<(), FormatError> {
    get_duplicates(ctx.trips().map(|(trip, _)| trip.code.as_str())).map_or(Ok(()), |codes| {
        Err(FormatError::new_with_code("E1102", "DuplicateId", format!("duplicated trip codes: {}", join(&codes))))
    })
}

/// Checks that trip intervals can be parsed and start before they end.
fn check_e1103_trip_intervals_are_valid(ctx: &ValidationContext) -> Result<(), FormatError> {
    let ids = ctx
        .trips()
        .filter(|(_, interval)| !interval.is_some_and(|interval| interval.is_valid()))
        .map(|(trip, _)| trip.id)
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new_with_code("E1103", "InvalidInterval", format!("invalid trip intervals: {}", join(&ids))))
    }
}

/// Checks that trips reference known customers, locations, drivers and trucks.
fn check_e1104_trip_references_are_known(ctx: &ValidationContext) -> Result<(), FormatError> {
    let customers = ctx.customers().map(|customer| customer.id).collect::<HashSet<_>>();
    let locations = ctx.locations().map(|location| location.id).collect::<HashSet<_>>();
    let drivers = ctx.drivers().map(|driver| driver.id).collect::<HashSet<_>>();
    let trucks = ctx.trucks().map(|truck| truck.id).collect::<HashSet<_>>();

    let ids = ctx
        .trips()
        .filter(|(trip, _)| {
            !customers.contains(&trip.customer)
                || !locations.contains(&trip.origin)
                || !locations.contains(&trip.destination)
                || !drivers.contains(&trip.driver)
                || !trucks.contains(&trip.truck)
        })
        .map(|(trip, _)| trip.id)
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new_with_code(
            "E1104",
            "NotFound",
            format!("trips reference unknown customer, location, driver or truck: {}", join(&ids)),
        ))
    }
}

/// Checks that no driver or truck is assigned to binding trips with overlapping intervals.
fn check_e1105_no_double_booking(ctx: &ValidationContext) -> Result<(), FormatError> {
    let trips = ctx.binding_trips().collect::<Vec<_>>();

    let ids = trips
        .iter()
        .enumerate()
        .flat_map(|(idx, (trip, interval))| {
            trips
                .iter()
                .skip(idx + 1)
                .filter(move |(other, other_interval)| {
                    (trip.driver == other.driver || trip.truck == other.truck) && overlaps(interval, other_interval)
                })
                .flat_map(move |(other, _)| [trip.id, other.id])
        })
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();

    if ids.is_empty() {
        Ok(())
    } else {
        Err(FormatError::new_with_code(
            "E1105",
            "ResourceConflict",
            format!("binding trips assign the same driver or truck within overlapping intervals: {}", join(&ids)),
        ))
    }
}

/// Validates trip catalog.
pub fn validate_trips(ctx: &ValidationContext) -> Result<(), Vec<FormatError>> {
    combine_error_results(&[
        check_e1101_no_trips_with_duplicate_ids(ctx),
        check_e1102_no_trips_with_duplicate_codes(ctx),
        check_e1103_trip_intervals_are_valid(ctx),
        check_e1104_trip_references_are_known(ctx),
        check_e1105_no_double_booking(ctx),
    ])
}
