//! Service Factory
//!
//! Creates the parking service with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::ParkingService;
use crate::domain::ports::LotEventSink;
use crate::infrastructure::TextFileVehicleRepository;

/// Type alias for the concrete ParkingService backed by the text file store
pub type ConcreteParkingService<E> = ParkingService<TextFileVehicleRepository, E>;

/// Open the lot stored at `data_file`, reporting events to `events`
pub fn open_parking_service<E: LotEventSink>(
    data_file: impl Into<PathBuf>,
    events: E,
) -> ConcreteParkingService<E> {
    ParkingService::open(TextFileVehicleRepository::new(), data_file, events)
}
