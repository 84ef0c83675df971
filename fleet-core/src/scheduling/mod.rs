//! Scheduling logic: overlap detection, trip catalog, availability calculation and trip admission.

mod overlap;
pub use self::overlap::*;

mod catalog;
pub use self::catalog::*;

mod availability;
pub use self::availability::*;

mod admission;
pub use self::admission::*;
