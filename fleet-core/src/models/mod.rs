//! A collection of models to represent drivers, trucks, reference data and trips.

pub mod common;

mod resources;
pub use self::resources::*;

mod trips;
pub use self::trips::*;
