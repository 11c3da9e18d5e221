//! Vehicle category value object - decides the hourly rate

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParkingError;

/// Category of a parked vehicle
///
/// The set is closed; the persisted spelling is the variant name
/// (`Car`, `Truck`, `Motorbike`), matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
pub enum VehicleCategory {
    /// Standard sized vehicle
    Car,
    /// Large vehicle, highest rate
    Truck,
    /// Two-wheeler, lowest rate
    Motorbike,
}

impl VehicleCategory {
    /// Every category, in menu order
    pub const ALL: [VehicleCategory; 3] = [
        VehicleCategory::Car,
        VehicleCategory::Truck,
        VehicleCategory::Motorbike,
    ];

    /// Flat charge per started-or-partial hour (minimum one hour)
    pub fn hourly_rate(&self) -> f64 {
        match self {
            VehicleCategory::Car => 20.0,
            VehicleCategory::Truck => 50.0,
            VehicleCategory::Motorbike => 10.0,
        }
    }

    /// Name used in the data file and in user-facing output
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleCategory::Car => "Car",
            VehicleCategory::Truck => "Truck",
            VehicleCategory::Motorbike => "Motorbike",
        }
    }
}

impl std::fmt::Display for VehicleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleCategory {
    type Err = ParkingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParkingError::InvalidCategory {
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_rates() {
        assert_eq!(VehicleCategory::Car.hourly_rate(), 20.0);
        assert_eq!(VehicleCategory::Truck.hourly_rate(), 50.0);
        assert_eq!(VehicleCategory::Motorbike.hourly_rate(), 10.0);
    }

    #[test]
    fn category_parse_is_exact_match() {
        assert_eq!("Car".parse::<VehicleCategory>().unwrap(), VehicleCategory::Car);
        assert_eq!(
            "Motorbike".parse::<VehicleCategory>().unwrap(),
            VehicleCategory::Motorbike
        );
        assert!("car".parse::<VehicleCategory>().is_err());
        assert!("TRUCK".parse::<VehicleCategory>().is_err());
    }

    #[test]
    fn category_parse_rejects_unknown() {
        let err = "Bus".parse::<VehicleCategory>().unwrap_err();
        assert!(matches!(err, ParkingError::InvalidCategory { ref value } if value == "Bus"));
    }

    #[test]
    fn category_display_round_trips_through_from_str() {
        for category in VehicleCategory::ALL {
            let parsed: VehicleCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }
}
