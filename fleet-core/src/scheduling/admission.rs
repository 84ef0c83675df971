#[cfg(test)]
#[path = "../../tests/unit/scheduling/admission_test.rs"]
mod admission_test;

use crate::models::common::*;
use crate::models::*;
use crate::scheduling::*;
use crate::utils::{Environment, ScheduleError, ScheduleResult};
use std::slice;
use std::sync::Arc;

/// Specifies how codes of admitted trips are generated.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TripIdentity {
    prefix: String,
}

impl TripIdentity {
    /// Creates a new instance of `TripIdentity` with given code prefix.
    pub fn new(prefix: &str) -> Self {
        Self { prefix: prefix.to_string() }
    }

    /// Returns a trip code for given trip id.
    pub fn code(&self, id: TripId) -> String {
        format!("{}-{:05}", self.prefix, id)
    }
}

impl Default for TripIdentity {
    fn default() -> Self {
        Self::new("TRP")
    }
}

/// Serves availability queries and admits new trips into the catalog.
pub struct Scheduler {
    registry: Arc<dyn ResourceRegistry>,
    master_data: Arc<dyn MasterData>,
    catalog: TripCatalog,
    identity: TripIdentity,
    environment: Arc<Environment>,
}

impl Scheduler {
    /// Creates a new instance of `Scheduler`.
    pub fn new(
        registry: Arc<dyn ResourceRegistry>,
        master_data: Arc<dyn MasterData>,
        catalog: TripCatalog,
        environment: Arc<Environment>,
    ) -> Self {
        Self { registry, master_data, catalog, identity: TripIdentity::default(), environment }
    }

    /// Sets trip identity policy.
    pub fn with_identity(mut self, identity: TripIdentity) -> Self {
        self.identity = identity;
        self
    }

    /// Returns trip catalog.
    pub fn catalog(&self) -> &TripCatalog {
        &self.catalog
    }

    /// Returns drivers and trucks which are free within requested interval.
    pub fn availability(&self, requested: &TimeInterval) -> ScheduleResult<Availability> {
        compute_availability(requested, &self.registry.drivers(), &self.registry.trucks(), &self.catalog)
    }

    /// Returns all trips sorted by id.
    pub fn list_trips(&self) -> Vec<Trip> {
        self.catalog.all()
    }

    /// Validates proposed trip against business rules and current catalog state and, if accepted,
    /// appends it to the catalog as an upcoming trip.
    pub fn propose_trip(&self, draft: &TripDraft) -> ScheduleResult<Trip> {
        let result = self.admit(draft);

        match &result {
            Ok(trip) => self.log(&format!(
                "trip '{}' admitted: driver '{}', truck '{}', interval {}",
                trip.code, trip.driver, trip.truck, trip.interval
            )),
            Err(err) if err.is_fatal() => self.log(&format!("internal error on trip admission: {err}")),
            Err(err) => self.log(&format!("trip proposal rejected ({}): {err}", err.kind())),
        }

        result
    }

    /// Changes status of existing trip.
    pub fn update_status(&self, id: TripId, status: TripStatus) -> ScheduleResult<Trip> {
        let result = self.catalog.update_status(id, status);

        match &result {
            Ok(trip) => self.log(&format!("trip '{}' status changed to '{}'", trip.code, trip.status)),
            Err(err) => self.log(&format!("cannot change trip '{id}' status ({}): {err}", err.kind())),
        }

        result
    }

    fn admit(&self, draft: &TripDraft) -> ScheduleResult<Trip> {
        let fields = RequiredFields::try_from(draft)?;
        fields.interval.validate()?;

        let (driver, truck) = self.resolve_references(&fields)?;

        self.catalog.write(|store| {
            let availability =
                get_availability(&fields.interval, slice::from_ref(&driver), slice::from_ref(&truck), &*store);

            if !availability.has_driver(driver.id) || !availability.has_truck(truck.id) {
                let trips = get_conflicts(&fields.interval, driver.id, truck.id, &*store);
                if !trips.is_empty() {
                    return Err(ScheduleError::ResourceConflict { trips });
                }
            }

            if truck.is_in_maintenance() {
                return Err(ScheduleError::ResourceUnavailable { truck: truck.id });
            }

            let id = self.next_free_id(&*store)?;
            let trip = Trip {
                id,
                code: self.identity.code(id),
                customer: fields.customer,
                origin: fields.origin,
                destination: fields.destination,
                driver: driver.id,
                truck: truck.id,
                interval: fields.interval,
                status: TripStatus::Upcoming,
                cargo_type: fields.cargo_type.to_string(),
                priority: fields.priority,
                load_type: draft.load_type,
                instructions: draft.instructions.clone(),
            };

            store.insert(trip.clone()).map(|_| trip)
        })
    }

    /// Returns the next unused id whose generated code is not taken by a loaded trip.
    fn next_free_id(&self, store: &dyn TripStore) -> ScheduleResult<TripId> {
        let mut id = store.next_id()?;
        while store.contains_code(&self.identity.code(id)) {
            id = id.checked_add(1).ok_or(ScheduleError::IdExhausted { last: id })?;
        }

        Ok(id)
    }

    fn resolve_references(&self, fields: &RequiredFields) -> ScheduleResult<(Driver, Truck)> {
        let not_found = |kind: EntityKind, id: u64| ScheduleError::NotFound { kind, id };

        self.master_data.customer(fields.customer).ok_or_else(|| not_found(EntityKind::Customer, fields.customer))?;
        self.master_data.location(fields.origin).ok_or_else(|| not_found(EntityKind::Location, fields.origin))?;
        self.master_data
            .location(fields.destination)
            .ok_or_else(|| not_found(EntityKind::Location, fields.destination))?;

        let driver = self.registry.driver(fields.driver).ok_or_else(|| not_found(EntityKind::Driver, fields.driver))?;
        let truck = self.registry.truck(fields.truck).ok_or_else(|| not_found(EntityKind::Truck, fields.truck))?;

        Ok((driver, truck))
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}

/// Keeps required draft fields once their presence is checked.
struct RequiredFields<'a> {
    customer: CustomerId,
    origin: LocationId,
    destination: LocationId,
    driver: DriverId,
    truck: TruckId,
    interval: TimeInterval,
    cargo_type: &'a str,
    priority: Priority,
}

impl<'a> TryFrom<&'a TripDraft> for RequiredFields<'a> {
    type Error = ScheduleError;

    fn try_from(draft: &'a TripDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            customer: draft.customer.ok_or(ScheduleError::MissingField("customer"))?,
            origin: draft.origin.ok_or(ScheduleError::MissingField("origin"))?,
            destination: draft.destination.ok_or(ScheduleError::MissingField("destination"))?,
            driver: draft.driver.ok_or(ScheduleError::MissingField("driver"))?,
            truck: draft.truck.ok_or(ScheduleError::MissingField("truck"))?,
            interval: draft.interval.ok_or(ScheduleError::MissingField("interval"))?,
            cargo_type: draft
                .cargo_type
                .as_deref()
                .map(str::trim)
                .filter(|cargo_type| !cargo_type.is_empty())
                .ok_or(ScheduleError::MissingField("cargo_type"))?,
            priority: draft.priority.ok_or(ScheduleError::MissingField("priority"))?,
        })
    }
}
