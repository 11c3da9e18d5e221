//! License plate value object
//!
//! The data file separates fields by whitespace, so a plate is a single
//! non-empty token.

use serde::{Deserialize, Serialize};

use crate::error::{ParkingError, ParkingResult};

/// Identifier of a parked vehicle
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicensePlate(String);

impl LicensePlate {
    /// Validate and wrap a plate. Surrounding whitespace is trimmed.
    pub fn parse(raw: impl AsRef<str>) -> ParkingResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ParkingError::InvalidPlate {
                value: raw.as_ref().to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for LicensePlate {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for LicensePlate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for LicensePlate {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for LicensePlate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
