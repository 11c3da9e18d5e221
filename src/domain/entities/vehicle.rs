//! Vehicle entity - a parked vehicle and its fee rule
//!
//! A vehicle is a pure data record. The current time is always passed in
//! (`fee(now)`), so billing is deterministic and testable without a clock.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{LicensePlate, VehicleCategory};

/// Seconds since the Unix epoch
pub type Timestamp = i64;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Minimum billed duration, in hours
const MINIMUM_BILLED_HOURS: f64 = 1.0;

/// A vehicle admitted to (or restored into) the lot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    category: VehicleCategory,
    plate: LicensePlate,
    admitted_at: Timestamp,
}

impl Vehicle {
    /// Create a vehicle arriving right now
    pub fn new(category: VehicleCategory, plate: LicensePlate) -> Self {
        Self::restored(category, plate, current_timestamp())
    }

    /// Create a vehicle with an optional admission time.
    ///
    /// `0` means "not supplied" and is replaced with the current time.
    pub fn with_admission(
        category: VehicleCategory,
        plate: LicensePlate,
        admitted_at: Timestamp,
    ) -> Self {
        if admitted_at == 0 {
            Self::new(category, plate)
        } else {
            Self::restored(category, plate, admitted_at)
        }
    }

    /// Rebuild a vehicle from storage, keeping the admission time verbatim
    pub fn restored(category: VehicleCategory, plate: LicensePlate, admitted_at: Timestamp) -> Self {
        Self {
            category,
            plate,
            admitted_at,
        }
    }

    pub fn category(&self) -> VehicleCategory {
        self.category
    }

    pub fn plate(&self) -> &LicensePlate {
        &self.plate
    }

    pub fn admitted_at(&self) -> Timestamp {
        self.admitted_at
    }

    /// Hours parked at `now`, with fractional precision
    pub fn elapsed_hours(&self, now: Timestamp) -> f64 {
        now.saturating_sub(self.admitted_at) as f64 / SECONDS_PER_HOUR
    }

    /// Fee owed if the vehicle leaves at `now`.
    ///
    /// Anything under an hour is billed as exactly one hour; longer stays are
    /// billed proportionally with no rounding.
    pub fn fee(&self, now: Timestamp) -> f64 {
        let hours = self.elapsed_hours(now).max(MINIMUM_BILLED_HOURS);
        hours * self.category.hourly_rate()
    }

    /// One-line listing: category, plate and local admission time
    pub fn describe(&self) -> String {
        format!(
            "{:<15}{:<15}Entry: {}",
            self.category.as_str(),
            self.plate.as_str(),
            format_timestamp(self.admitted_at)
        )
    }
}

/// Current wall-clock time in whole seconds
pub fn current_timestamp() -> Timestamp {
    Utc::now().timestamp()
}

/// Render a timestamp in local time, ctime style (`Tue Dec  2 14:05:09 2025`)
pub fn format_timestamp(ts: Timestamp) -> String {
    match DateTime::<Utc>::from_timestamp(ts, 0) {
        Some(utc) => utc
            .with_timezone(&Local)
            .format("%a %b %e %H:%M:%S %Y")
            .to_string(),
        None => format!("@{}", ts),
    }
}
