//! Maps pragmatic models into core ones and back.

use crate::format::model::*;
use crate::format::{FormatError, INTERNAL_ERROR_KIND};
use crate::{format_time, parse_time};
use fleet_core::models::common::{TimeInterval, Timestamp};
use fleet_core::models::*;

/// An error kind reported for timestamps which cannot be parsed.
const INVALID_INTERVAL_KIND: &str = "InvalidInterval";

pub(crate) fn parse_timestamp(field: &str, time: &str) -> Result<Timestamp, FormatError> {
    parse_time(time)
        .map_err(|err| FormatError::new(INVALID_INTERVAL_KIND, format!("cannot parse {field} time '{time}': {err}")))
}

pub(crate) fn parse_interval(start: &str, end: &str) -> Result<TimeInterval, FormatError> {
    Ok(TimeInterval::new(parse_timestamp("start", start)?, parse_timestamp("end", end)?))
}

fn format_timestamp(time: Timestamp) -> Result<String, FormatError> {
    format_time(time)
        .map_err(|err| FormatError::new(INTERNAL_ERROR_KIND, format!("cannot format time '{time}': {err}")))
}

pub(crate) fn to_driver(driver: &ApiDriver) -> Driver {
    Driver {
        id: driver.id,
        name: driver.name.clone(),
        rating: driver.rating,
        weekly_hours: driver.weekly_hours,
        status: match driver.status {
            ApiDriverStatus::Available => DriverStatus::Available,
            ApiDriverStatus::OnTrip => DriverStatus::OnTrip,
        },
    }
}

pub(crate) fn from_driver(driver: &Driver) -> ApiDriver {
    ApiDriver {
        id: driver.id,
        name: driver.name.clone(),
        rating: driver.rating,
        weekly_hours: driver.weekly_hours,
        status: match driver.status {
            DriverStatus::Available => ApiDriverStatus::Available,
            DriverStatus::OnTrip => ApiDriverStatus::OnTrip,
        },
    }
}

pub(crate) fn to_truck(truck: &ApiTruck) -> Truck {
    Truck {
        id: truck.id,
        license_plate: truck.license_plate.clone(),
        capacity: truck.capacity,
        status: match truck.status {
            ApiTruckStatus::Available => TruckStatus::Available,
            ApiTruckStatus::InUse => TruckStatus::InUse,
            ApiTruckStatus::Maintenance => TruckStatus::Maintenance,
        },
    }
}

pub(crate) fn from_truck(truck: &Truck) -> ApiTruck {
    ApiTruck {
        id: truck.id,
        license_plate: truck.license_plate.clone(),
        capacity: truck.capacity,
        status: match truck.status {
            TruckStatus::Available => ApiTruckStatus::Available,
            TruckStatus::InUse => ApiTruckStatus::InUse,
            TruckStatus::Maintenance => ApiTruckStatus::Maintenance,
        },
    }
}

pub(crate) fn to_customer(customer: &ApiCustomer) -> Customer {
    Customer::new(customer.id, customer.name.as_str())
}

pub(crate) fn from_customer(customer: &Customer) -> ApiCustomer {
    ApiCustomer { id: customer.id, name: customer.name.clone() }
}

pub(crate) fn to_location(location: &ApiLocation) -> Location {
    Location::new(location.id, location.name.as_str())
}

pub(crate) fn from_location(location: &Location) -> ApiLocation {
    ApiLocation { id: location.id, name: location.name.clone() }
}

pub(crate) fn to_trip_status(status: ApiTripStatus) -> TripStatus {
    match status {
        ApiTripStatus::Upcoming => TripStatus::Upcoming,
        ApiTripStatus::Ongoing => TripStatus::Ongoing,
        ApiTripStatus::Completed => TripStatus::Completed,
        ApiTripStatus::Delayed => TripStatus::Delayed,
    }
}

fn from_trip_status(status: TripStatus) -> ApiTripStatus {
    match status {
        TripStatus::Upcoming => ApiTripStatus::Upcoming,
        TripStatus::Ongoing => ApiTripStatus::Ongoing,
        TripStatus::Completed => ApiTripStatus::Completed,
        TripStatus::Delayed => ApiTripStatus::Delayed,
    }
}

fn to_priority(priority: ApiPriority) -> Priority {
    match priority {
        ApiPriority::Low => Priority::Low,
        ApiPriority::Medium => Priority::Medium,
        ApiPriority::High => Priority::High,
    }
}

fn from_priority(priority: Priority) -> ApiPriority {
    match priority {
        Priority::Low => ApiPriority::Low,
        Priority::Medium => ApiPriority::Medium,
        Priority::High => ApiPriority::High,
    }
}

fn to_load_type(load_type: ApiLoadType) -> LoadType {
    match load_type {
        ApiLoadType::Dry => LoadType::Dry,
        ApiLoadType::Chilled => LoadType::Chilled,
        ApiLoadType::Ref => LoadType::Ref,
        ApiLoadType::Combi => LoadType::Combi,
    }
}

fn from_load_type(load_type: LoadType) -> ApiLoadType {
    match load_type {
        LoadType::Dry => ApiLoadType::Dry,
        LoadType::Chilled => ApiLoadType::Chilled,
        LoadType::Ref => ApiLoadType::Ref,
        LoadType::Combi => ApiLoadType::Combi,
    }
}

pub(crate) fn to_trip(trip: &ApiTrip) -> Result<Trip, FormatError> {
    Ok(Trip {
        id: trip.id,
        code: trip.code.clone(),
        customer: trip.customer,
        origin: trip.origin,
        destination: trip.destination,
        driver: trip.driver,
        truck: trip.truck,
        interval: parse_interval(&trip.start, &trip.end)?,
        status: to_trip_status(trip.status),
        cargo_type: trip.cargo_type.clone(),
        priority: to_priority(trip.priority),
        load_type: trip.load_type.map(to_load_type),
        instructions: trip.special_instructions.clone(),
    })
}

pub(crate) fn from_trip(trip: &Trip) -> Result<ApiTrip, FormatError> {
    Ok(ApiTrip {
        id: trip.id,
        code: trip.code.clone(),
        customer: trip.customer,
        origin: trip.origin,
        destination: trip.destination,
        driver: trip.driver,
        truck: trip.truck,
        start: format_timestamp(trip.interval.start)?,
        end: format_timestamp(trip.interval.end)?,
        status: from_trip_status(trip.status),
        cargo_type: trip.cargo_type.clone(),
        priority: from_priority(trip.priority),
        load_type: trip.load_type.map(from_load_type),
        special_instructions: trip.instructions.clone(),
    })
}

pub(crate) fn from_trips(trips: &[Trip]) -> Result<Vec<ApiTrip>, FormatError> {
    trips.iter().map(from_trip).collect()
}

/// Converts trip request into a draft. Missing fields stay unset so that admission reports them,
/// an interval is set only when both start and end are present.
pub(crate) fn to_draft(request: &TripRequest) -> Result<TripDraft, FormatError> {
    let interval = match (&request.start, &request.end) {
        (Some(start), Some(end)) => Some(parse_interval(start, end)?),
        _ => None,
    };

    Ok(TripDraft {
        customer: request.customer,
        origin: request.origin,
        destination: request.destination,
        driver: request.driver,
        truck: request.truck,
        interval,
        cargo_type: request.cargo_type.clone(),
        priority: request.priority.map(to_priority),
        load_type: request.load_type.map(to_load_type),
        instructions: request.special_instructions.clone(),
    })
}
