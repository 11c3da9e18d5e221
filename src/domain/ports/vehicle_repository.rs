//! VehicleRepository port - abstraction for parked-vehicle persistence
//!
//! This trait allows the service to load/save the parked set without knowing
//! about the on-disk line format.

use std::path::Path;

use crate::domain::entities::Vehicle;
use crate::error::ParkingResult;

/// A stored line that could not be turned into a vehicle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// Outcome of loading the parked set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadResult {
    /// Vehicles in stored order
    pub vehicles: Vec<Vehicle>,
    /// Lines that were ignored
    pub skipped: Vec<SkippedLine>,
    /// False when the source did not exist
    pub source_found: bool,
}

impl LoadResult {
    /// Result for a source that does not exist yet
    pub fn missing() -> Self {
        Self::default()
    }
}

/// Abstract repository for the parked set
pub trait VehicleRepository {
    /// Read every well-formed record from `path`.
    ///
    /// A missing file yields an empty result; malformed lines are reported
    /// in `LoadResult::skipped`, never as errors.
    fn load(&self, path: &Path) -> ParkingResult<LoadResult>;

    /// Replace the contents of `path` with `vehicles`, in order
    fn save(&self, vehicles: &[Vehicle], path: &Path) -> ParkingResult<()>;
}

impl<T: VehicleRepository + ?Sized> VehicleRepository for &T {
    fn load(&self, path: &Path) -> ParkingResult<LoadResult> {
        (**self).load(path)
    }

    fn save(&self, vehicles: &[Vehicle], path: &Path) -> ParkingResult<()> {
        (**self).save(vehicles, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_result_is_empty() {
        let result = LoadResult::missing();
        assert!(result.vehicles.is_empty());
        assert!(result.skipped.is_empty());
        assert!(!result.source_found);
    }
}
