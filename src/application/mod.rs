//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ParkingService` - Load the lot, admit/release vehicles, save on shutdown

pub mod parking;

pub use parking::{LoadReport, ParkingService};
