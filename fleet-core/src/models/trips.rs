#[cfg(test)]
#[path = "../../tests/unit/models/trips_test.rs"]
mod trips_test;

use crate::models::common::*;
use std::fmt;

/// Specifies a trip status.
///
/// Allowed transitions are `Upcoming → Ongoing → Completed` with an alternative
/// `Upcoming | Ongoing → Delayed → Completed` branch.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TripStatus {
    Upcoming,
    Ongoing,
    Completed,
    Delayed,
}

impl TripStatus {
    /// Checks whether status can be changed to the given one.
    pub fn can_transition_to(&self, next: TripStatus) -> bool {
        use TripStatus::*;

        matches!(
            (self, next),
            (Upcoming, Ongoing) | (Upcoming, Delayed) | (Ongoing, Completed) | (Ongoing, Delayed) | (Delayed, Completed)
        )
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Specifies a trip priority.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// Specifies a kind of load transported by a truck.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LoadType {
    Dry,
    Chilled,
    Ref,
    Combi,
}

/// Represents a trip: a commitment of one driver and one truck for a time interval.
#[derive(Clone, Debug, PartialEq)]
pub struct Trip {
    /// An unique trip id.
    pub id: TripId,
    /// An unique human readable trip code.
    pub code: String,
    /// A customer reference.
    pub customer: CustomerId,
    /// An origin location reference.
    pub origin: LocationId,
    /// A destination location reference.
    pub destination: LocationId,
    /// An assigned driver reference.
    pub driver: DriverId,
    /// An assigned truck reference.
    pub truck: TruckId,
    /// A scheduled interval.
    pub interval: TimeInterval,
    /// A current status.
    pub status: TripStatus,
    /// A cargo type, e.g. electronics, pallets, loose cargo.
    pub cargo_type: String,
    /// A trip priority.
    pub priority: Priority,
    /// A load type.
    pub load_type: Option<LoadType>,
    /// Special instructions for the crew.
    pub instructions: Option<String>,
}

/// A trip proposal submitted for admission. Every field except `load_type` and `instructions`
/// is required.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TripDraft {
    pub customer: Option<CustomerId>,
    pub origin: Option<LocationId>,
    pub destination: Option<LocationId>,
    pub driver: Option<DriverId>,
    pub truck: Option<TruckId>,
    pub interval: Option<TimeInterval>,
    pub cargo_type: Option<String>,
    pub priority: Option<Priority>,
    pub load_type: Option<LoadType>,
    pub instructions: Option<String>,
}
