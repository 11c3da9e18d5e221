//! Property tests for lot capacity and revenue bookkeeping.

use proptest::prelude::*;

use parklot::{LicensePlate, ParkingLot, Vehicle, VehicleCategory, LOT_CAPACITY};

#[derive(Debug, Clone)]
enum Op {
    Admit(usize),
    Release(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..12).prop_map(Op::Admit),
        (0usize..12).prop_map(Op::Release),
    ]
}

fn plate(i: usize) -> LicensePlate {
    LicensePlate::parse(format!("P-{}", i)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Occupancy never exceeds capacity, and revenue equals the
    /// sum of every receipt.
    #[test]
    fn property_lot_stays_within_capacity(ops in proptest::collection::vec(op(), 0..60)) {
        let mut lot = ParkingLot::new();
        let mut receipts_total = 0.0;
        let mut now = 1_700_000_000i64;

        for op in ops {
            now += 900;
            let before = lot.snapshot();
            match op {
                Op::Admit(i) => {
                    let vehicle = Vehicle::restored(VehicleCategory::Car, plate(i), now);
                    match lot.admit(vehicle) {
                        Ok(()) => prop_assert_eq!(lot.occupied(), before.occupied + 1),
                        Err(_) => {
                            prop_assert_eq!(before.occupied, LOT_CAPACITY);
                            prop_assert_eq!(lot.snapshot(), before);
                        }
                    }
                }
                Op::Release(i) => match lot.release(plate(i).as_str(), now) {
                    Ok(receipt) => {
                        receipts_total += receipt.fee;
                        prop_assert_eq!(lot.occupied(), before.occupied - 1);
                    }
                    Err(_) => prop_assert_eq!(lot.snapshot(), before),
                },
            }

            prop_assert!(lot.occupied() <= LOT_CAPACITY);
            prop_assert!((lot.total_revenue() - receipts_total).abs() < 1e-9);
        }
    }
}
