//! Scenario tests for parklot.
//!
//! Scenarios run complete user journeys through the binary, one process
//! per step, so every step goes through load and save.
//!
//! Run with: cargo test --test scenarios

mod common;

#[path = "scenarios/busy_day.rs"]
mod busy_day;
