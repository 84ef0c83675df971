//! Contains command line extensions: configuration and fleet state handling.

pub mod config;
pub mod fleet;
