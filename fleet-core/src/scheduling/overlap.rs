#[cfg(test)]
#[path = "../../tests/unit/scheduling/overlap_test.rs"]
mod overlap_test;

use crate::models::TripStatus;
use crate::models::common::TimeInterval;

/// Checks whether two half-open intervals share at least one instant. Intervals which only
/// touch each other (one ends exactly when another starts) do not overlap.
pub fn overlaps(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.intersects(b)
}

/// Checks whether trip with given status still reserves its driver and truck.
///
/// Delayed trips stay binding as their release time is not known.
pub fn is_binding(status: TripStatus) -> bool {
    match status {
        TripStatus::Upcoming | TripStatus::Ongoing | TripStatus::Delayed => true,
        TripStatus::Completed => false,
    }
}
