//! Parking Use Case
//!
//! Wraps the `ParkingLot` entity with its lifecycle: restore from storage on
//! open, report admissions and releases through an event sink, and write the
//! parked set back on shutdown.

mod service;

pub use service::{LoadReport, ParkingService};
