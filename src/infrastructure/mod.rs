//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `repositories/` - Parked-vehicle storage (plain text file)
//! - `events/` - Event sinks (NDJSON)

pub mod events;
pub mod repositories;

pub use events::JsonEventSink;
pub use repositories::{TextFileVehicleRepository, DEFAULT_DATA_FILE};
