#[cfg(test)]
#[path = "../../../tests/unit/format/state/reader_test.rs"]
mod reader_test;

use crate::format::mapping::*;
use crate::format::model::{FleetState, deserialize_state};
use crate::format::{FormatError, MultiFormatError};
use crate::validation::ValidationContext;
use fleet_core::models::Registry;
use fleet_core::scheduling::{Scheduler, TripCatalog, TripIdentity};
use fleet_core::utils::Environment;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// Keeps core models created from fleet state.
pub struct FleetModel {
    /// Drivers, trucks, customers and locations.
    pub registry: Arc<Registry>,
    /// Trip catalog.
    pub catalog: TripCatalog,
}

impl FleetModel {
    /// Creates a scheduler which owns the catalog and uses the registry for lookups.
    pub fn into_scheduler(self, environment: Arc<Environment>, identity: TripIdentity) -> Scheduler {
        Scheduler::new(self.registry.clone(), self.registry, self.catalog, environment).with_identity(identity)
    }
}

/// Reads fleet state definition from various sources.
pub trait PragmaticState {
    /// Reads and validates fleet state defined in pragmatic format.
    fn read_pragmatic(self) -> Result<FleetModel, MultiFormatError>;
}

impl<R: Read> PragmaticState for BufReader<R> {
    fn read_pragmatic(self) -> Result<FleetModel, MultiFormatError> {
        deserialize_state(self)?.read_pragmatic()
    }
}

impl PragmaticState for String {
    fn read_pragmatic(self) -> Result<FleetModel, MultiFormatError> {
        BufReader::new(self.as_bytes()).read_pragmatic()
    }
}

impl PragmaticState for FleetState {
    fn read_pragmatic(self) -> Result<FleetModel, MultiFormatError> {
        ValidationContext::new(&self).validate()?;

        map_to_model(&self).map_err(MultiFormatError::from)
    }
}

fn map_to_model(state: &FleetState) -> Result<FleetModel, FormatError> {
    let registry = Registry::new(
        state.drivers.iter().map(to_driver).collect(),
        state.trucks.iter().map(to_truck).collect(),
        state.customers.iter().map(to_customer).collect(),
        state.locations.iter().map(to_location).collect(),
    );

    let trips = state.trips.iter().map(to_trip).collect::<Result<Vec<_>, _>>()?;
    let catalog = TripCatalog::with_trips(trips)?;

    Ok(FleetModel { registry: Arc::new(registry), catalog })
}
