//! ParkingLot entity - the bounded set of parked vehicles
//!
//! The lot is a pure data structure: persistence and notifications are
//! handled by `ParkingService` through ports.

use serde::Serialize;

use super::vehicle::{Timestamp, Vehicle};
use crate::domain::value_objects::{LicensePlate, VehicleCategory};
use crate::error::{ParkingError, ParkingResult};

/// Number of spaces in the lot
pub const LOT_CAPACITY: usize = 7;

/// Result of a successful release
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub plate: LicensePlate,
    pub category: VehicleCategory,
    pub admitted_at: Timestamp,
    pub released_at: Timestamp,
    pub fee: f64,
}

/// Read-only view of the lot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LotSnapshot {
    pub occupied: usize,
    pub capacity: usize,
    pub total_revenue: f64,
    pub vehicles: Vec<Vehicle>,
}

impl LotSnapshot {
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn available(&self) -> usize {
        self.capacity.saturating_sub(self.occupied)
    }
}

/// Vehicles currently parked, in admission order, plus session revenue
#[derive(Debug, Clone, PartialEq)]
pub struct ParkingLot {
    vehicles: Vec<Vehicle>,
    capacity: usize,
    total_revenue: f64,
}

impl Default for ParkingLot {
    fn default() -> Self {
        Self::new()
    }
}

impl ParkingLot {
    /// Create an empty lot with the fixed capacity
    pub fn new() -> Self {
        Self {
            vehicles: Vec::with_capacity(LOT_CAPACITY),
            capacity: LOT_CAPACITY,
            total_revenue: 0.0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupied(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Park a vehicle. A full lot rejects and drops it.
    pub fn admit(&mut self, vehicle: Vehicle) -> ParkingResult<()> {
        if self.is_full() {
            return Err(ParkingError::LotFull {
                plate: vehicle.plate().to_string(),
            });
        }
        self.vehicles.push(vehicle);
        Ok(())
    }

    /// Find the vehicle that would be released for `plate`
    pub fn find(&self, plate: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.plate() == plate)
    }

    /// Release the first vehicle with `plate`, billing it at `now`.
    ///
    /// On `NotFound` the lot is left untouched.
    pub fn release(&mut self, plate: &str, now: Timestamp) -> ParkingResult<Receipt> {
        let index = self
            .vehicles
            .iter()
            .position(|v| v.plate() == plate)
            .ok_or_else(|| ParkingError::NotFound {
                plate: plate.to_string(),
            })?;

        let vehicle = self.vehicles.remove(index);
        let fee = vehicle.fee(now);
        self.total_revenue += fee;

        Ok(Receipt {
            plate: vehicle.plate().clone(),
            category: vehicle.category(),
            admitted_at: vehicle.admitted_at(),
            released_at: now,
            fee,
        })
    }

    pub fn snapshot(&self) -> LotSnapshot {
        LotSnapshot {
            occupied: self.vehicles.len(),
            capacity: self.capacity,
            total_revenue: self.total_revenue,
            vehicles: self.vehicles.clone(),
        }
    }

    /// Drop every parked vehicle (shutdown after a final save)
    pub fn clear(&mut self) {
        self.vehicles.clear();
    }
}
