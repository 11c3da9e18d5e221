//! Common test utilities for parklot CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated working and config directories plus CLI runners
//! - Assertion macros: `assert_output_contains!`, `assert_stdout_contains!`

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
