/// Represents a timestamp as seconds since unix epoch.
pub type Timestamp = i64;

/// Represents a time duration in seconds.
pub type Duration = i64;

/// An unique identifier of a driver.
pub type DriverId = u64;

/// An unique identifier of a truck.
pub type TruckId = u64;

/// An unique identifier of a trip.
pub type TripId = u64;

/// An unique identifier of a customer.
pub type CustomerId = u64;

/// An unique identifier of a location.
pub type LocationId = u64;
