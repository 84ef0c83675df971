#[cfg(test)]
#[path = "../../tests/unit/scheduling/availability_test.rs"]
mod availability_test;

use crate::models::common::{DriverId, TimeInterval, TripId, TruckId};
use crate::models::{Driver, Trip, Truck};
use crate::scheduling::{TripCatalog, TripStore, is_binding, overlaps};
use crate::utils::{ScheduleResult, parallel_collect};
use rustc_hash::FxHashSet;

/// Represents drivers and trucks which can be assigned to a trip within requested interval.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Availability {
    /// Free drivers sorted by id.
    pub drivers: Vec<Driver>,
    /// Free trucks which are not in maintenance, sorted by id.
    pub trucks: Vec<Truck>,
}

impl Availability {
    /// Checks whether driver with given id is available.
    pub fn has_driver(&self, id: DriverId) -> bool {
        self.drivers.iter().any(|driver| driver.id == id)
    }

    /// Checks whether truck with given id is available.
    pub fn has_truck(&self, id: TruckId) -> bool {
        self.trucks.iter().any(|truck| truck.id == id)
    }
}

/// Computes drivers and trucks which have no binding trip overlapping `requested` interval.
/// Trucks in maintenance are never available.
pub fn compute_availability(
    requested: &TimeInterval,
    drivers: &[Driver],
    trucks: &[Truck],
    catalog: &TripCatalog,
) -> ScheduleResult<Availability> {
    requested.validate()?;

    Ok(catalog.read(|store| get_availability(requested, drivers, trucks, store)))
}

/// Returns ids of binding trips which overlap `requested` interval and use given driver or truck.
pub fn find_conflicts(
    requested: &TimeInterval,
    driver: DriverId,
    truck: TruckId,
    catalog: &TripCatalog,
) -> ScheduleResult<Vec<TripId>> {
    requested.validate()?;

    Ok(catalog.read(|store| get_conflicts(requested, driver, truck, store)))
}

/// Computes availability on the store snapshot, interval is expected to be valid.
pub(crate) fn get_availability(
    requested: &TimeInterval,
    drivers: &[Driver],
    trucks: &[Truck],
    store: &dyn TripStore,
) -> Availability {
    let (busy_drivers, busy_trucks) = get_overlapping_trips(requested, store).into_iter().fold(
        (FxHashSet::<DriverId>::default(), FxHashSet::<TruckId>::default()),
        |(mut busy_drivers, mut busy_trucks), trip| {
            busy_drivers.insert(trip.driver);
            busy_trucks.insert(trip.truck);
            (busy_drivers, busy_trucks)
        },
    );

    let mut drivers = drivers.iter().filter(|driver| !busy_drivers.contains(&driver.id)).cloned().collect::<Vec<_>>();
    drivers.sort_by_key(|driver| driver.id);

    let mut trucks = trucks
        .iter()
        .filter(|truck| !truck.is_in_maintenance() && !busy_trucks.contains(&truck.id))
        .cloned()
        .collect::<Vec<_>>();
    trucks.sort_by_key(|truck| truck.id);

    Availability { drivers, trucks }
}

pub(crate) fn get_conflicts(
    requested: &TimeInterval,
    driver: DriverId,
    truck: TruckId,
    store: &dyn TripStore,
) -> Vec<TripId> {
    let mut conflicts = get_overlapping_trips(requested, store)
        .into_iter()
        .filter(|trip| trip.driver == driver || trip.truck == truck)
        .map(|trip| trip.id)
        .collect::<Vec<_>>();
    conflicts.sort_unstable();

    conflicts
}

fn get_overlapping_trips<'a>(requested: &TimeInterval, store: &'a dyn TripStore) -> Vec<&'a Trip> {
    let binding = store.iter().filter(|trip| is_binding(trip.status)).collect::<Vec<_>>();

    parallel_collect(&binding, |trip| overlaps(&trip.interval, requested).then_some(*trip))
        .into_iter()
        .flatten()
        .collect()
}
