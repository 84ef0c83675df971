#[cfg(test)]
#[path = "../../tests/unit/models/resources_test.rs"]
mod resources_test;

use crate::models::common::{CustomerId, DriverId, LocationId, TruckId};
use rustc_hash::FxHashMap;
use std::fmt;

/// Specifies a driver status as tracked by the fleet.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DriverStatus {
    /// Driver is not on a trip right now.
    Available,
    /// Driver is on a trip right now.
    OnTrip,
}

/// Represents a driver, person who drives a truck.
#[derive(Clone, Debug, PartialEq)]
pub struct Driver {
    /// An unique driver id.
    pub id: DriverId,
    /// A full name.
    pub name: String,
    /// A rating in range `[0, 5]`.
    pub rating: f64,
    /// Hours worked during the current week.
    pub weekly_hours: f64,
    /// A current status. It is descriptive only: scheduling conflicts are derived from trips.
    pub status: DriverStatus,
}

impl Driver {
    /// Creates a new available driver with default rating.
    pub fn new(id: DriverId, name: &str) -> Self {
        Self { id, name: name.to_string(), rating: 5., weekly_hours: 0., status: DriverStatus::Available }
    }
}

/// Specifies a truck status.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TruckStatus {
    /// Truck is idle.
    Available,
    /// Truck is used by some trip right now.
    InUse,
    /// Truck is in maintenance and cannot be assigned to any trip.
    Maintenance,
}

/// Represents a truck.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Truck {
    /// An unique truck id.
    pub id: TruckId,
    /// A license plate.
    pub license_plate: String,
    /// A capacity in tonnes.
    pub capacity: u32,
    /// A current status.
    pub status: TruckStatus,
}

impl Truck {
    /// Creates a new available truck.
    pub fn new(id: TruckId, license_plate: &str, capacity: u32) -> Self {
        Self { id, license_plate: license_plate.to_string(), capacity, status: TruckStatus::Available }
    }

    /// Returns true if truck is in maintenance.
    pub fn is_in_maintenance(&self) -> bool {
        self.status == TruckStatus::Maintenance
    }
}

/// A customer (client or consignee) reference data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }
}

/// A geographic point (hub or customer site) reference data.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
}

impl Location {
    pub fn new(id: LocationId, name: &str) -> Self {
        Self { id, name: name.to_string() }
    }
}

/// Specifies a kind of entity referenced by a trip.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EntityKind {
    Customer,
    Location,
    Driver,
    Truck,
    Trip,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            EntityKind::Customer => "customer",
            EntityKind::Location => "location",
            EntityKind::Driver => "driver",
            EntityKind::Truck => "truck",
            EntityKind::Trip => "trip",
        };

        write!(f, "{name}")
    }
}

/// Provides read-only access to the current state of drivers and trucks.
pub trait ResourceRegistry: Send + Sync {
    /// Returns all known drivers.
    fn drivers(&self) -> Vec<Driver>;

    /// Returns all known trucks.
    fn trucks(&self) -> Vec<Truck>;

    /// Returns a driver by its id.
    fn driver(&self, id: DriverId) -> Option<Driver>;

    /// Returns a truck by its id.
    fn truck(&self, id: TruckId) -> Option<Truck>;
}

/// Provides read-only access to customers and locations.
pub trait MasterData: Send + Sync {
    /// Returns a customer by its id.
    fn customer(&self, id: CustomerId) -> Option<Customer>;

    /// Returns a location by its id.
    fn location(&self, id: LocationId) -> Option<Location>;
}

/// An in-memory registry of resources and reference data.
#[derive(Default)]
pub struct Registry {
    drivers: FxHashMap<DriverId, Driver>,
    trucks: FxHashMap<TruckId, Truck>,
    customers: FxHashMap<CustomerId, Customer>,
    locations: FxHashMap<LocationId, Location>,
}

impl Registry {
    /// Creates a new instance of `Registry`. Entities with the same id replace previous ones.
    pub fn new(drivers: Vec<Driver>, trucks: Vec<Truck>, customers: Vec<Customer>, locations: Vec<Location>) -> Self {
        Self {
            drivers: drivers.into_iter().map(|driver| (driver.id, driver)).collect(),
            trucks: trucks.into_iter().map(|truck| (truck.id, truck)).collect(),
            customers: customers.into_iter().map(|customer| (customer.id, customer)).collect(),
            locations: locations.into_iter().map(|location| (location.id, location)).collect(),
        }
    }

    /// Returns all customers sorted by id.
    pub fn customers(&self) -> Vec<Customer> {
        sorted_by_id(self.customers.values().cloned(), |customer| customer.id)
    }

    /// Returns all locations sorted by id.
    pub fn locations(&self) -> Vec<Location> {
        sorted_by_id(self.locations.values().cloned(), |location| location.id)
    }
}

impl ResourceRegistry for Registry {
    fn drivers(&self) -> Vec<Driver> {
        sorted_by_id(self.drivers.values().cloned(), |driver| driver.id)
    }

    fn trucks(&self) -> Vec<Truck> {
        sorted_by_id(self.trucks.values().cloned(), |truck| truck.id)
    }

    fn driver(&self, id: DriverId) -> Option<Driver> {
        self.drivers.get(&id).cloned()
    }

    fn truck(&self, id: TruckId) -> Option<Truck> {
        self.trucks.get(&id).cloned()
    }
}

impl MasterData for Registry {
    fn customer(&self, id: CustomerId) -> Option<Customer> {
        self.customers.get(&id).cloned()
    }

    fn location(&self, id: LocationId) -> Option<Location> {
        self.locations.get(&id).cloned()
    }
}

fn sorted_by_id<T, F>(items: impl Iterator<Item = T>, key_fn: F) -> Vec<T>
where
    F: Fn(&T) -> u64,
{
    let mut items = items.collect::<Vec<_>>();
    items.sort_by_key(key_fn);

    items
}
