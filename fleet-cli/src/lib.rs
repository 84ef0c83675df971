//! A fleet trip scheduling library public API used by command line interface.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

pub mod extensions;
