#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use crate::models::common::{Timestamp, TripId, TruckId};
use crate::models::{EntityKind, TripStatus};

/// An error returned by scheduling operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Interval start is not before its end.
    InvalidInterval { start: Timestamp, end: Timestamp },
    /// A required field is not specified.
    MissingField(&'static str),
    /// Requested driver or truck is already bound by other trips.
    ResourceConflict { trips: Vec<TripId> },
    /// Requested truck cannot be used regardless of schedule.
    ResourceUnavailable { truck: TruckId },
    /// Referenced entity is unknown.
    NotFound { kind: EntityKind, id: u64 },
    /// Trip id or code is already used. This is an internal invariant breach.
    DuplicateId { id: TripId, code: String },
    /// No trip id is left after the given one. This is an internal invariant breach.
    IdExhausted { last: TripId },
    /// Trip status change is not allowed.
    InvalidTransition { trip: TripId, from: TripStatus, to: TripStatus },
}

/// A type alias for result type with `ScheduleError`.
pub type ScheduleResult<T> = Result<T, ScheduleError>;

impl ScheduleError {
    /// Returns error kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            ScheduleError::InvalidInterval { .. } => "InvalidInterval",
            ScheduleError::MissingField(_) => "MissingField",
            ScheduleError::ResourceConflict { .. } => "ResourceConflict",
            ScheduleError::ResourceUnavailable { .. } => "ResourceUnavailable",
            ScheduleError::NotFound { .. } => "NotFound",
            ScheduleError::DuplicateId { .. } => "DuplicateId",
            ScheduleError::IdExhausted { .. } => "IdExhausted",
            ScheduleError::InvalidTransition { .. } => "InvalidTransition",
        }
    }

    /// Returns true if error signals broken internal consistency and cannot be fixed by a caller.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ScheduleError::DuplicateId { .. } | ScheduleError::IdExhausted { .. })
    }
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidInterval { start, end } => {
                write!(f, "interval start '{start}' must be before its end '{end}'")
            }
            ScheduleError::MissingField(field) => write!(f, "required field '{field}' is missing"),
            ScheduleError::ResourceConflict { trips } => write!(
                f,
                "driver or truck is already assigned to overlapping trips: {}",
                trips.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(", ")
            ),
            ScheduleError::ResourceUnavailable { truck } => write!(f, "truck '{truck}' is in maintenance"),
            ScheduleError::NotFound { kind, id } => write!(f, "cannot find {kind} with id '{id}'"),
            ScheduleError::DuplicateId { id, code } => write!(f, "trip with id '{id}' or code '{code}' already exists"),
            ScheduleError::IdExhausted { last } => write!(f, "no trip id is available after '{last}'"),
            ScheduleError::InvalidTransition { trip, from, to } => {
                write!(f, "trip '{trip}' cannot change status from '{from}' to '{to}'")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}
