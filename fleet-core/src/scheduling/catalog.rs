#[cfg(test)]
#[path = "../../tests/unit/scheduling/catalog_test.rs"]
mod catalog_test;

use crate::models::common::TripId;
use crate::models::{EntityKind, Trip, TripStatus};
use crate::scheduling::is_binding;
use crate::utils::{ScheduleError, ScheduleResult};
use rustc_hash::{FxHashMap, FxHashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Specifies a storage of trip records. Implementations are not required to be synchronized:
/// [`TripCatalog`] guards the store with a single-writer/multiple-reader lock.
pub trait TripStore: Send + Sync {
    /// Returns an iterator over all stored trips in no particular order.
    fn iter(&self) -> Box<dyn Iterator<Item = &Trip> + '_>;

    /// Returns a trip by its id.
    fn get(&self, id: TripId) -> Option<&Trip>;

    /// Inserts a new trip, fails with `DuplicateId` if its id or code is already used.
    fn insert(&mut self, trip: Trip) -> ScheduleResult<()>;

    /// Overwrites status of an existing trip.
    fn set_status(&mut self, id: TripId, status: TripStatus) -> ScheduleResult<()>;

    /// Returns amount of stored trips.
    fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns true if store has no trips.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether given code is used by any stored trip.
    fn contains_code(&self, code: &str) -> bool {
        self.iter().any(|trip| trip.code == code)
    }

    /// Returns the id following the largest stored one, fails with `IdExhausted` when there is none.
    fn next_id(&self) -> ScheduleResult<TripId> {
        get_next_id(self.iter().map(|trip| trip.id).max())
    }
}

fn get_next_id(last: Option<TripId>) -> ScheduleResult<TripId> {
    match last {
        Some(last) => last.checked_add(1).ok_or(ScheduleError::IdExhausted { last }),
        None => Ok(1),
    }
}

/// A trip store which keeps everything in memory.
#[derive(Default)]
pub struct InMemoryStore {
    trips: Vec<Trip>,
    index: FxHashMap<TripId, usize>,
    codes: FxHashSet<String>,
}

impl TripStore for InMemoryStore {
    fn iter(&self) -> Box<dyn Iterator<Item = &Trip> + '_> {
        Box::new(self.trips.iter())
    }

    fn get(&self, id: TripId) -> Option<&Trip> {
        self.index.get(&id).and_then(|&idx| self.trips.get(idx))
    }

    fn insert(&mut self, trip: Trip) -> ScheduleResult<()> {
        if self.index.contains_key(&trip.id) || self.codes.contains(&trip.code) {
            return Err(ScheduleError::DuplicateId { id: trip.id, code: trip.code });
        }

        self.index.insert(trip.id, self.trips.len());
        self.codes.insert(trip.code.clone());
        self.trips.push(trip);

        Ok(())
    }

    fn set_status(&mut self, id: TripId, status: TripStatus) -> ScheduleResult<()> {
        let trip = self
            .index
            .get(&id)
            .and_then(|&idx| self.trips.get_mut(idx))
            .ok_or(ScheduleError::NotFound { kind: EntityKind::Trip, id })?;

        trip.status = status;

        Ok(())
    }

    fn len(&self) -> usize {
        self.trips.len()
    }

    fn contains_code(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    fn next_id(&self) -> ScheduleResult<TripId> {
        get_next_id(self.index.keys().max().copied())
    }
}

/// An authoritative collection of trips. Reads run concurrently, mutations are exclusive.
pub struct TripCatalog {
    store: RwLock<Box<dyn TripStore>>,
}

impl TripCatalog {
    /// Creates a new instance of `TripCatalog` on top of given store.
    pub fn new(store: Box<dyn TripStore>) -> Self {
        Self { store: RwLock::new(store) }
    }

    /// Creates an in-memory catalog filled with given trips.
    pub fn with_trips(trips: Vec<Trip>) -> ScheduleResult<Self> {
        let mut store = InMemoryStore::default();
        trips.into_iter().try_for_each(|trip| store.insert(trip))?;

        Ok(Self::new(Box::new(store)))
    }

    /// Returns all trips which still reserve their resources, in no particular order.
    pub fn list_binding_trips(&self) -> Vec<Trip> {
        self.read(|store| store.iter().filter(|trip| is_binding(trip.status)).cloned().collect())
    }

    /// Returns all trips sorted by id.
    pub fn all(&self) -> Vec<Trip> {
        let mut trips = self.read(|store| store.iter().cloned().collect::<Vec<_>>());
        trips.sort_by_key(|trip| trip.id);

        trips
    }

    /// Returns a trip by its id.
    pub fn get(&self, id: TripId) -> Option<Trip> {
        self.read(|store| store.get(id).cloned())
    }

    /// Returns amount of trips in the catalog.
    pub fn size(&self) -> usize {
        self.read(|store| store.len())
    }

    /// Appends a new trip to the catalog.
    pub fn append(&self, trip: Trip) -> ScheduleResult<()> {
        self.write(|store| store.insert(trip))
    }

    /// Changes trip status following the trip status state machine. Intervals are never changed,
    /// so no new overlaps between binding trips can appear.
    pub fn update_status(&self, id: TripId, status: TripStatus) -> ScheduleResult<Trip> {
        self.write(|store| {
            let current =
                store.get(id).map(|trip| trip.status).ok_or(ScheduleError::NotFound { kind: EntityKind::Trip, id })?;

            if !current.can_transition_to(status) {
                return Err(ScheduleError::InvalidTransition { trip: id, from: current, to: status });
            }

            store.set_status(id, status)?;

            store.get(id).cloned().ok_or(ScheduleError::NotFound { kind: EntityKind::Trip, id })
        })
    }

    /// Runs read-only operation on a consistent snapshot of the store.
    pub fn read<R>(&self, op: impl FnOnce(&dyn TripStore) -> R) -> R {
        let guard: RwLockReadGuard<'_, Box<dyn TripStore>> = self.store.read().unwrap_or_else(PoisonError::into_inner);

        op(guard.as_ref())
    }

    /// Runs operation which has exclusive access to the store.
    pub fn write<R>(&self, op: impl FnOnce(&mut dyn TripStore) -> R) -> R {
        let mut guard: RwLockWriteGuard<'_, Box<dyn TripStore>> =
            self.store.write().unwrap_or_else(PoisonError::into_inner);

        op(guard.as_mut())
    }
}

impl Default for TripCatalog {
    fn default() -> Self {
        Self::new(Box::<InMemoryStore>::default())
    }
}
