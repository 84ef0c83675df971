//! Loads fleet state into a scheduler and writes it back.

#[cfg(test)]
#[path = "../../tests/unit/extensions/fleet_test.rs"]
mod fleet_test;

use crate::extensions::config::Config;
use fleet_core::models::Registry;
use fleet_core::scheduling::Scheduler;
use fleet_pragmatic::format::MultiFormatError;
use fleet_pragmatic::format::model::deserialize_state;
use fleet_pragmatic::format::state::{PragmaticState, write_pragmatic_state};
use fleet_pragmatic::validation::validate_state;
use std::io::{BufReader, BufWriter, Read, Write};
use std::sync::Arc;

/// Keeps scheduler together with the registry it was created from.
pub struct FleetContext {
    /// A resource registry used by scheduler.
    pub registry: Arc<Registry>,
    /// A scheduler.
    pub scheduler: Scheduler,
}

impl FleetContext {
    /// Writes current fleet state into the writer.
    pub fn write_state<W: Write>(&self, writer: &mut BufWriter<W>) -> Result<(), String> {
        write_pragmatic_state(&self.registry, self.scheduler.catalog(), writer)
    }
}

/// Reads fleet state and creates a scheduler using given config.
pub fn load_fleet<R: Read>(state: BufReader<R>, config: &Config) -> Result<FleetContext, String> {
    let model = state
        .read_pragmatic()
        .map_err(|err| format!("fleet state has {} errors:\n{}", err.errors.len(), err.format_many("\n")))?;
    let registry = model.registry.clone();
    let scheduler = model.into_scheduler(config.create_environment(), config.create_identity());

    Ok(FleetContext { registry, scheduler })
}

/// Validates fleet state and returns all found errors serialized as json.
pub fn check_fleet<R: Read>(state: BufReader<R>) -> Result<(), String> {
    deserialize_state(state)
        .map_err(MultiFormatError::from)
        .and_then(|state| validate_state(&state))
        .map_err(|err| err.to_json())
}
