#[cfg(test)]
#[path = "../../tests/unit/format/model_test.rs"]
mod model_test;

use crate::format::FormatError;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

// region Resources

/// A driver status.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ApiDriverStatus {
    /// Driver can be assigned.
    Available,
    /// Driver is on a trip.
    #[serde(rename = "On Trip")]
    OnTrip,
}

/// A driver.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiDriver {
    /// An unique driver id.
    pub id: u64,
    /// A full name.
    pub name: String,
    /// A rating in `[0, 5]` range.
    #[serde(default)]
    pub rating: f64,
    /// Hours worked during current week.
    #[serde(default)]
    pub weekly_hours: f64,
    /// A current status.
    pub status: ApiDriverStatus,
}

/// A truck status.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ApiTruckStatus {
    /// Truck can be assigned.
    Available,
    /// Truck is used by a trip.
    #[serde(rename = "In Use")]
    InUse,
    /// Truck is in maintenance and cannot be assigned at all.
    Maintenance,
}

/// A truck.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTruck {
    /// An unique truck id.
    pub id: u64,
    /// A license plate.
    pub license_plate: String,
    /// A capacity in tonnes.
    pub capacity: u32,
    /// A current status.
    pub status: ApiTruckStatus,
}

/// A customer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApiCustomer {
    /// An unique customer id.
    pub id: u64,
    /// A customer name.
    pub name: String,
}

/// A location.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ApiLocation {
    /// An unique location id.
    pub id: u64,
    /// A location name.
    pub name: String,
}

// endregion

// region Trips

/// A trip status.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ApiTripStatus {
    Upcoming,
    Ongoing,
    Completed,
    Delayed,
}

/// A trip priority.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ApiPriority {
    Low,
    Medium,
    High,
}

/// A load type.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ApiLoadType {
    Dry,
    Chilled,
    Ref,
    Combi,
}

/// A trip.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTrip {
    /// An unique trip id.
    pub id: u64,
    /// An unique trip code.
    pub code: String,
    /// A customer id.
    pub customer: u64,
    /// An origin location id.
    pub origin: u64,
    /// A destination location id.
    pub destination: u64,
    /// A driver id.
    pub driver: u64,
    /// A truck id.
    pub truck: u64,
    /// A start time in RFC3339 format.
    pub start: String,
    /// An end time in RFC3339 format.
    pub end: String,
    /// A trip status.
    pub status: ApiTripStatus,
    /// A cargo type.
    pub cargo_type: String,
    /// A trip priority.
    pub priority: ApiPriority,
    /// A load type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_type: Option<ApiLoadType>,
    /// Special instructions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_instructions: Option<String>,
}

// endregion

// region Contract

/// An availability query.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AvailabilityQuery {
    /// A start of requested interval in RFC3339 format.
    pub start: String,
    /// An end of requested interval (exclusive) in RFC3339 format.
    pub end: String,
}

/// An availability query response.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    /// Drivers free within requested interval, sorted by id.
    pub available_drivers: Vec<ApiDriver>,
    /// Trucks free within requested interval and not in maintenance, sorted by id.
    pub available_trucks: Vec<ApiTruck>,
}

/// A trip creation request. All fields except load type and instructions are required,
/// missing ones are reported by admission.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRequest {
    pub customer: Option<u64>,
    pub origin: Option<u64>,
    pub destination: Option<u64>,
    pub driver: Option<u64>,
    pub truck: Option<u64>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub cargo_type: Option<String>,
    pub priority: Option<ApiPriority>,
    pub load_type: Option<ApiLoadType>,
    #[serde(alias = "instructions")]
    pub special_instructions: Option<String>,
}

/// A trip status update request.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct StatusUpdate {
    /// A trip id.
    pub trip: u64,
    /// A new status.
    pub status: ApiTripStatus,
}

// endregion

// region State

/// A fleet state: resources, reference data and trip catalog.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FleetState {
    /// Drivers.
    #[serde(default)]
    pub drivers: Vec<ApiDriver>,
    /// Trucks.
    #[serde(default)]
    pub trucks: Vec<ApiTruck>,
    /// Customers.
    #[serde(default)]
    pub customers: Vec<ApiCustomer>,
    /// Locations.
    #[serde(default)]
    pub locations: Vec<ApiLocation>,
    /// Trips.
    #[serde(default)]
    pub trips: Vec<ApiTrip>,
}

// endregion

/// Deserializes fleet state in json format from `BufReader`.
pub fn deserialize_state<R: Read>(reader: BufReader<R>) -> Result<FleetState, FormatError> {
    serde_json::from_reader(reader).map_err(|err| FormatError::new_malformed("fleet state", err))
}

/// Deserializes availability query in json format from `BufReader`.
pub fn deserialize_query<R: Read>(reader: BufReader<R>) -> Result<AvailabilityQuery, FormatError> {
    serde_json::from_reader(reader).map_err(|err| FormatError::new_malformed("availability query", err))
}

/// Deserializes trip request in json format from `BufReader`.
pub fn deserialize_trip_request<R: Read>(reader: BufReader<R>) -> Result<TripRequest, FormatError> {
    serde_json::from_reader(reader).map_err(|err| FormatError::new_malformed("trip request", err))
}

/// Deserializes status update in json format from `BufReader`.
pub fn deserialize_status_update<R: Read>(reader: BufReader<R>) -> Result<StatusUpdate, FormatError> {
    serde_json::from_reader(reader).map_err(|err| FormatError::new_malformed("status update", err))
}

/// Serializes fleet state in json into `writer`.
pub fn serialize_state<W: Write>(state: &FleetState, writer: &mut BufWriter<W>) -> Result<(), std::io::Error> {
    serde_json::to_writer_pretty(writer, state).map_err(std::io::Error::from)
}
