//! This module provides functionality to validate fleet state for logical correctness.

#[cfg(test)]
#[path = "../../tests/unit/validation/validation_test.rs"]
mod validation_test;

use crate::format::mapping::{parse_interval, to_trip_status};
use crate::format::model::*;
use crate::format::{FormatError, MultiFormatError};
use fleet_core::models::common::TimeInterval;
use fleet_core::scheduling::is_binding;

mod common;
use self::common::*;

mod resources;
use self::resources::validate_resources;

mod trips;
use self::trips::validate_trips;

/// Keeps fleet state together with trip intervals which could be parsed.
pub struct ValidationContext<'a> {
    /// Original fleet state.
    pub state: &'a FleetState,
    intervals: Vec<Option<TimeInterval>>,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(state: &'a FleetState) -> Self {
        let intervals = state.trips.iter().map(|trip| parse_interval(&trip.start, &trip.end).ok()).collect();

        Self { state, intervals }
    }

    /// Validates fleet state on set of rules.
    pub fn validate(&self) -> Result<(), MultiFormatError> {
        let errors = validate_resources(self)
            .err()
            .unwrap_or_default()
            .into_iter()
            .chain(validate_trips(self).err().unwrap_or_default())
            .collect::<Vec<_>>();

        if errors.is_empty() { Ok(()) } else { Err(errors.into()) }
    }

    fn drivers(&self) -> impl Iterator<Item = &ApiDriver> {
        self.state.drivers.iter()
    }

    fn trucks(&self) -> impl Iterator<Item = &ApiTruck> {
        self.state.trucks.iter()
    }

    fn customers(&self) -> impl Iterator<Item = &ApiCustomer> {
        self.state.customers.iter()
    }

    fn locations(&self) -> impl Iterator<Item = &ApiLocation> {
        self.state.locations.iter()
    }

    /// Returns trips with their parsed intervals, interval is `None` when it cannot be parsed.
    fn trips(&self) -> impl Iterator<Item = (&ApiTrip, Option<&TimeInterval>)> {
        self.state.trips.iter().zip(self.intervals.iter().map(|interval| interval.as_ref()))
    }

    /// Returns binding trips which have valid intervals.
    fn binding_trips(&self) -> impl Iterator<Item = (&ApiTrip, &TimeInterval)> {
        self.trips()
            .filter(|(trip, _)| is_binding(to_trip_status(trip.status)))
            .filter_map(|(trip, interval)| interval.filter(|interval| interval.is_valid()).map(|valid| (trip, valid)))
    }
}

/// Validates fleet state and returns all found errors.
pub fn validate_state(state: &FleetState) -> Result<(), MultiFormatError> {
    ValidationContext::new(state).validate()
}

fn combine_error_results(results: &[Result<(), FormatError>]) -> Result<(), Vec<FormatError>> {
    let errors = results.iter().cloned().flat_map(|result| result.err()).collect::<Vec<_>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
