//! Core crate contains building blocks to schedule shipment trips: interval overlap detection,
//! trip catalog, driver and truck availability calculation and trip admission.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use fleet_core::prelude::*;
//!
//! let registry = Arc::new(Registry::new(
//!     vec![Driver::new(1, "John Doe")],
//!     vec![Truck::new(1, "ABC-123", 10)],
//!     vec![Customer::new(1, "Acme")],
//!     vec![Location::new(1, "Hub"), Location::new(2, "Store")],
//! ));
//! let environment = Arc::new(Environment::default());
//! let scheduler = Scheduler::new(registry.clone(), registry, TripCatalog::default(), environment);
//!
//! let interval = TimeInterval::new(0, 3600);
//! let availability = scheduler.availability(&interval).unwrap();
//! assert_eq!(availability.drivers.len(), 1);
//!
//! let draft = TripDraft {
//!     customer: Some(1),
//!     origin: Some(1),
//!     destination: Some(2),
//!     driver: Some(1),
//!     truck: Some(1),
//!     interval: Some(interval),
//!     cargo_type: Some("Pallets".to_string()),
//!     priority: Some(Priority::High),
//!     ..TripDraft::default()
//! };
//! let trip = scheduler.propose_trip(&draft).unwrap();
//! assert_eq!(trip.status, TripStatus::Upcoming);
//! ```

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod models;
pub mod prelude;
pub mod scheduling;
pub mod utils;
