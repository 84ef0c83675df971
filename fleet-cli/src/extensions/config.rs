//! Command line configuration.

#[cfg(test)]
#[path = "../../tests/unit/extensions/config_test.rs"]
mod config_test;

use fleet_core::prelude::{Environment, InfoLogger, TripIdentity};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A command line configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
    /// Specifies trip configuration.
    pub trips: Option<TripsConfig>,
}

/// A logging configuration.
#[derive(Clone, Debug, Deserialize)]
pub struct LoggingConfig {
    /// Specifies whether logging to stderr is enabled. Default is false.
    #[serde(default)]
    pub enabled: bool,
}

/// A trips configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripsConfig {
    /// A prefix of generated trip codes. Default is `TRP`.
    pub code_prefix: Option<String>,
}

impl Config {
    /// Creates environment with logger configured.
    pub fn create_environment(&self) -> Arc<Environment> {
        let enabled = self.logging.as_ref().is_some_and(|logging| logging.enabled);

        Arc::new(if enabled {
            let logger: InfoLogger = Arc::new(|msg: &str| eprintln!("{msg}"));
            Environment::new(logger)
        } else {
            Environment::silent()
        })
    }

    /// Creates trip identity policy.
    pub fn create_identity(&self) -> TripIdentity {
        self.trips
            .as_ref()
            .and_then(|trips| trips.code_prefix.as_deref())
            .map_or_else(TripIdentity::default, TripIdentity::new)
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}
