//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category;
mod plate;

pub use category::VehicleCategory;
pub use plate::LicensePlate;
