//! Domain services for the OGS dashboard.

pub mod location;

pub use location::{normalize_location, Location, UNKNOWN_LOCATION};
