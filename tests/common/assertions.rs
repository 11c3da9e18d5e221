//! Custom assertion macros for CLI and scenario tests.
//!
//! These macros print the full output on failure to aid debugging.

/// Assert that stdout or stderr contains `expected`.
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $expected:expr) => {
        let combined = $result.combined_output();
        assert!(
            combined.contains($expected),
            "Expected output to contain '{}'.\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $expected,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that stdout contains `expected`.
#[macro_export]
macro_rules! assert_stdout_contains {
    ($result:expr, $expected:expr) => {
        assert!(
            $result.stdout.contains($expected),
            "Expected stdout to contain '{}'.\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $expected,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that the command succeeded.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.is_success(),
            "Expected success, got exit code {}.\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that the command failed.
#[macro_export]
macro_rules! assert_failure {
    ($result:expr) => {
        assert!(
            !$result.is_success(),
            "Expected failure, but command succeeded.\n\
             stdout:\n{}",
            $result.stdout
        );
    };
}
