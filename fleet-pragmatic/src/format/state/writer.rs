#[cfg(test)]
#[path = "../../../tests/unit/format/state/writer_test.rs"]
mod writer_test;

use crate::format::FormatError;
use crate::format::mapping::*;
use crate::format::model::{FleetState, serialize_state};
use fleet_core::models::{Registry, ResourceRegistry};
use fleet_core::scheduling::TripCatalog;
use std::io::{BufWriter, Write};

/// Creates fleet state from registry and current catalog content.
pub fn create_fleet_state(registry: &Registry, catalog: &TripCatalog) -> Result<FleetState, FormatError> {
    Ok(FleetState {
        drivers: registry.drivers().iter().map(from_driver).collect(),
        trucks: registry.trucks().iter().map(from_truck).collect(),
        customers: registry.customers().iter().map(from_customer).collect(),
        locations: registry.locations().iter().map(from_location).collect(),
        trips: from_trips(&catalog.all())?,
    })
}

/// Writes fleet state in pragmatic json format into `writer`.
pub fn write_pragmatic_state<W: Write>(
    registry: &Registry,
    catalog: &TripCatalog,
    writer: &mut BufWriter<W>,
) -> Result<(), String> {
    let state = create_fleet_state(registry, catalog).map_err(|err| err.to_string())?;

    serialize_state(&state, writer).map_err(|err| format!("cannot write fleet state: '{err}'"))
}
