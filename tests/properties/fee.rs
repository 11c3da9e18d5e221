//! Property tests for fee calculation.

use proptest::prelude::*;

use parklot::{LicensePlate, Vehicle, VehicleCategory};

fn category() -> impl Strategy<Value = VehicleCategory> {
    prop_oneof![
        Just(VehicleCategory::Car),
        Just(VehicleCategory::Truck),
        Just(VehicleCategory::Motorbike),
    ]
}

fn parked(category: VehicleCategory, admitted_at: i64) -> Vehicle {
    Vehicle::restored(category, LicensePlate::parse("P-1").unwrap(), admitted_at)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Anything under an hour bills exactly one hour.
    #[test]
    fn property_short_stays_bill_one_hour(
        category in category(),
        start in 0i64..4_000_000_000,
        elapsed in 0i64..3600,
    ) {
        let vehicle = parked(category, start);
        prop_assert_eq!(vehicle.fee(start + elapsed), category.hourly_rate());
    }

    /// PROPERTY: Longer stays bill proportionally, never below the minimum.
    #[test]
    fn property_long_stays_bill_proportionally(
        category in category(),
        start in 0i64..4_000_000_000,
        elapsed in 3600i64..1_000_000,
    ) {
        let vehicle = parked(category, start);
        let expected = elapsed as f64 / 3600.0 * category.hourly_rate();
        let fee = vehicle.fee(start + elapsed);

        prop_assert!((fee - expected).abs() < 1e-6);
        prop_assert!(fee >= category.hourly_rate());
    }

    /// PROPERTY: Fee is a pure function of `now`.
    #[test]
    fn property_fee_is_idempotent(
        category in category(),
        start in 0i64..4_000_000_000,
        elapsed in 0i64..1_000_000,
    ) {
        let vehicle = parked(category, start);
        let before = vehicle.clone();

        prop_assert_eq!(vehicle.fee(start + elapsed), vehicle.fee(start + elapsed));
        prop_assert_eq!(vehicle, before);
    }

    /// PROPERTY: A longer stay never costs less.
    #[test]
    fn property_fee_is_monotonic(
        category in category(),
        a in 0i64..1_000_000,
        b in 0i64..1_000_000,
    ) {
        let vehicle = parked(category, 0);
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(vehicle.fee(short) <= vehicle.fee(long));
    }
}
