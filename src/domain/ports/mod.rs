//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod lot_events;
pub mod vehicle_repository;

pub use lot_events::{LotEvent, LotEventSink, NoopEventSink};
pub use vehicle_repository::{LoadResult, SkippedLine, VehicleRepository};
