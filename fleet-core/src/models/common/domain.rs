#[cfg(test)]
#[path = "../../../tests/unit/models/common/domain_test.rs"]
mod domain_test;

use crate::models::common::{Duration, Timestamp};
use crate::utils::{ScheduleError, ScheduleResult};
use std::fmt;

/// Represents a half-open time interval `[start, end)`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TimeInterval {
    /// Inclusive start of the interval.
    pub start: Timestamp,
    /// Exclusive end of the interval.
    pub end: Timestamp,
}

impl TimeInterval {
    /// Creates a new [`TimeInterval`] without checking its bounds.
    pub fn new(start: Timestamp, end: Timestamp) -> Self {
        Self { start, end }
    }

    /// Creates a new [`TimeInterval`], fails with `InvalidInterval` when `start` is not before `end`.
    pub fn try_new(start: Timestamp, end: Timestamp) -> ScheduleResult<Self> {
        let interval = Self { start, end };
        interval.validate().map(|_| interval)
    }

    /// Returns true if interval starts strictly before it ends.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Checks interval bounds.
    pub fn validate(&self) -> ScheduleResult<()> {
        if self.is_valid() { Ok(()) } else { Err(ScheduleError::InvalidInterval { start: self.start, end: self.end }) }
    }

    /// Returns interval duration.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Checks whether the interval shares at least one instant with another one.
    pub fn intersects(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Checks whether given timestamp belongs to the interval.
    pub fn contains(&self, time: Timestamp) -> bool {
        self.start <= time && time < self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
