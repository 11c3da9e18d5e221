//! Parklot - parking lot tracker
//!
//! Tracks vehicles parked in a lot of fixed capacity, bills them by category
//! and time parked, and keeps the parked set in a flat text file between runs.
//!
//! ## Architecture
//!
//! - `domain` - Vehicles, the lot, and the ports they talk through
//! - `application` - `ParkingService`, the load/admit/release/save lifecycle
//! - `infrastructure` - Text file storage and NDJSON event output
//! - `presentation` - CLI definition and service wiring
//! - `config` - TOML configuration with environment overrides

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{LoadReport, ParkingService};
pub use config::Config;
pub use domain::entities::{LotSnapshot, ParkingLot, Receipt, Timestamp, Vehicle, LOT_CAPACITY};
pub use domain::ports::{LotEvent, LotEventSink, NoopEventSink, VehicleRepository};
pub use domain::value_objects::{LicensePlate, VehicleCategory};
pub use error::{ParkingError, ParkingResult};
pub use infrastructure::{TextFileVehicleRepository, DEFAULT_DATA_FILE};
