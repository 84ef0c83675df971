//! This module reimports commonly used types.

pub use crate::models::common::{TimeInterval, Timestamp, TripId};
pub use crate::models::{
    Customer, Driver, DriverStatus, Location, MasterData, Priority, Registry, ResourceRegistry, Trip, TripDraft,
    TripStatus, Truck, TruckStatus,
};
pub use crate::scheduling::{Availability, Scheduler, TripCatalog, TripIdentity, compute_availability};
pub use crate::utils::{Environment, InfoLogger, ScheduleError, ScheduleResult};
