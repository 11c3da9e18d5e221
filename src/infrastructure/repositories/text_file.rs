//! Plain-text Vehicle Repository
//!
//! One vehicle per line, whitespace separated, no header:
//!
//! ```text
//! Car AB-123 1700000000
//! Truck TR-1 1700003600
//! ```

use std::io::Write;
use std::path::Path;

use crate::domain::entities::{Timestamp, Vehicle};
use crate::domain::ports::{LoadResult, SkippedLine, VehicleRepository};
use crate::domain::value_objects::{LicensePlate, VehicleCategory};
use crate::error::{ParkingError, ParkingResult};

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "parking_data.txt";

/// Line-oriented text repository
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFileVehicleRepository;

impl TextFileVehicleRepository {
    pub fn new() -> Self {
        Self
    }
}

/// Encode a vehicle as `<Category> <Plate> <Timestamp>`
pub fn encode_line(vehicle: &Vehicle) -> String {
    format!(
        "{} {} {}",
        vehicle.category(),
        vehicle.plate(),
        vehicle.admitted_at()
    )
}

/// Decode one stored line.
///
/// Returns the reason on failure so the caller can report skipped lines.
pub fn decode_line(line: &str) -> Result<Vehicle, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [category, plate, timestamp] = tokens.as_slice() else {
        return Err(format!("expected 3 fields, found {}", tokens.len()));
    };

    let category: VehicleCategory = category.parse().map_err(|e: ParkingError| e.to_string())?;
    let plate = LicensePlate::parse(plate).map_err(|e| e.to_string())?;
    let admitted_at: u64 = timestamp
        .parse()
        .map_err(|_| format!("invalid timestamp '{}'", timestamp))?;
    let admitted_at = Timestamp::try_from(admitted_at)
        .map_err(|_| format!("timestamp out of range '{}'", timestamp))?;

    Ok(Vehicle::restored(category, plate, admitted_at))
}

/// Decode a whole document, skipping blank and malformed lines
pub fn decode_document(content: &str) -> LoadResult {
    let mut result = LoadResult {
        source_found: true,
        ..LoadResult::default()
    };

    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match decode_line(line) {
            Ok(vehicle) => result.vehicles.push(vehicle),
            Err(reason) => result.skipped.push(SkippedLine {
                line: index + 1,
                content: line.to_string(),
                reason,
            }),
        }
    }

    result
}

/// Encode vehicles in order, one line each
pub fn encode_document(vehicles: &[Vehicle]) -> String {
    let mut out = String::new();
    for vehicle in vehicles {
        out.push_str(&encode_line(vehicle));
        out.push('\n');
    }
    out
}

impl VehicleRepository for TextFileVehicleRepository {
    fn load(&self, path: &Path) -> ParkingResult<LoadResult> {
        let bytes = match std::fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(LoadResult::missing());
            }
            Err(source) => {
                return Err(ParkingError::Storage {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        Ok(decode_document(&String::from_utf8_lossy(&bytes)))
    }

    fn save(&self, vehicles: &[Vehicle], path: &Path) -> ParkingResult<()> {
        let storage_err = |source: std::io::Error| ParkingError::Storage {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(storage_err)?;

        // Write next to the target and rename over it, so a failed save
        // leaves the previous file intact.
        let mut tmp = tempfile::NamedTempFile::new_in(parent).map_err(storage_err)?;
        tmp.write_all(encode_document(vehicles).as_bytes())
            .map_err(storage_err)?;
        tmp.flush().map_err(storage_err)?;

        // Renaming would succeed without write permission on the target itself.
        if path.exists() {
            std::fs::OpenOptions::new()
                .write(true)
                .open(path)
                .map_err(storage_err)?;
        }
        tmp.persist(path).map_err(|e| storage_err(e.error))?;

        Ok(())
    }
}
