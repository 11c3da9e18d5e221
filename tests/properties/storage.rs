//! Property tests for the stored line format.

use proptest::prelude::*;

use parklot::infrastructure::repositories::{decode_document, decode_line, encode_line};
use parklot::{LicensePlate, Vehicle, VehicleCategory};

fn category() -> impl Strategy<Value = VehicleCategory> {
    prop_oneof![
        Just(VehicleCategory::Car),
        Just(VehicleCategory::Truck),
        Just(VehicleCategory::Motorbike),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arbitrary input never panics the decoder.
    #[test]
    fn property_decode_never_panics(content in any::<String>()) {
        let result = decode_document(&content);
        let non_blank = content.lines().filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(result.vehicles.len() + result.skipped.len(), non_blank);
    }

    /// PROPERTY: Stored vehicles come back exactly as written.
    #[test]
    fn property_encoded_line_decodes_to_same_vehicle(
        category in category(),
        plate in "[A-Za-z0-9-]{1,12}",
        admitted_at in 0i64..i64::MAX,
    ) {
        let vehicle = Vehicle::restored(category, LicensePlate::parse(&plate).unwrap(), admitted_at);
        prop_assert_eq!(decode_line(&encode_line(&vehicle)), Ok(vehicle));
    }

    /// PROPERTY: Negative timestamps are never accepted.
    #[test]
    fn property_negative_timestamps_are_rejected(ts in i64::MIN..0) {
        let line = format!("Car AB-1 {}", ts);
        prop_assert!(decode_line(&line).is_err());
    }
}
