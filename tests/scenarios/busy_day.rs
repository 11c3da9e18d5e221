//! A lot fills up, turns a vehicle away, and empties again across runs.

use crate::common::*;
use crate::{assert_failure, assert_stdout_contains, assert_success};

#[test]
fn busy_day_fills_rejects_and_releases() {
    let env = TestEnv::new();

    assert_success!(env.run(&["park", "car", "AB-123"]));
    assert_success!(env.run(&["park", "truck", "TR-1"]));
    for i in 0..5 {
        let plate = format!("MB-{}", i);
        assert_success!(env.run(&["park", "motorbike", &plate]));
    }

    let rejected = env.run(&["park", "car", "EIGHTH"]);
    assert_failure!(rejected);
    assert_stdout_contains!(rejected, "Parking Lot is Full! EIGHTH cannot enter.");

    let status = env.run(&["status"]);
    assert_stdout_contains!(status, "PARKING LOT STATUS (7/7)");

    let receipt = env.run(&["unpark", "AB-123"]);
    assert_success!(receipt);
    assert_stdout_contains!(receipt, "Total Fee: $20.00");

    let missing = env.run(&["unpark", "ZZ-999"]);
    assert_failure!(missing);

    // Space freed by the departure is usable by the next run
    assert_success!(env.run(&["park", "car", "EIGHTH"]));

    let data = env.read_data();
    let plates: Vec<&str> = data_lines(&data)
        .iter()
        .map(|l| l.split_whitespace().nth(1).unwrap())
        .collect();
    assert_eq!(
        plates,
        vec!["TR-1", "MB-0", "MB-1", "MB-2", "MB-3", "MB-4", "EIGHTH"]
    );

    // Revenue belongs to the session that earned it
    let status = env.run(&["status"]);
    assert_stdout_contains!(status, "Total Revenue: $0.00");
}

#[test]
fn corrupt_lines_are_dropped_on_next_save() {
    let env = TestEnv::with_data("Car GOOD 1700000000\ngarbage line\n");

    assert_success!(env.run(&["park", "truck", "NEW"]));

    let data = env.read_data();
    assert_eq!(data_lines(&data).len(), 2);
    assert!(data.starts_with("Car GOOD 1700000000\n"));
    assert!(!data.contains("garbage"));
}
