//! Domain Entities
//!
//! - `Vehicle` - A parked vehicle record with its fee rule
//! - `ParkingLot` - The bounded set of parked vehicles plus session revenue

mod lot;
mod vehicle;

pub use lot::{LotSnapshot, ParkingLot, Receipt, LOT_CAPACITY};
pub use vehicle::{current_timestamp, format_timestamp, Timestamp, Vehicle, SECONDS_PER_HOUR};
