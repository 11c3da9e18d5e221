//! Domain Layer
//!
//! The core of parklot - vehicle rules and lot bookkeeping without I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (VehicleCategory, LicensePlate)
//! - `entities/` - Vehicle records and the ParkingLot that owns them
//! - `ports/` - Interface definitions for infrastructure (storage, events)
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system
//! 2. **Explicit time** - Fees and releases take `now` as an argument
//! 3. **Ports & Adapters** - Persistence and notifications go through traits

pub mod entities;
pub mod ports;
pub mod value_objects;
