//! Error types for parklot
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for parklot operations
pub type ParkingResult<T> = Result<T, ParkingError>;

/// Main error type for parking operations
#[derive(Error, Debug)]
pub enum ParkingError {
    /// Admission attempted while every space is occupied
    #[error("parking lot is full: {plate} cannot enter")]
    LotFull { plate: String },

    /// Release requested for a plate that is not parked
    #[error("vehicle with plate {plate} not found")]
    NotFound { plate: String },

    /// Category outside the closed set
    #[error("invalid vehicle category '{value}' (expected Car, Truck or Motorbike)")]
    InvalidCategory { value: String },

    /// Plate is empty or contains whitespace
    #[error("invalid license plate '{value}': must be a single token without whitespace")]
    InvalidPlate { value: String },

    /// Data file could not be read or written
    #[error("could not access data file {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file existed but could not be read, so saving would discard it
    #[error("refusing to overwrite {path}: it could not be read at startup")]
    UnreadSource { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParkingError {
    /// True for conditions the caller can simply retry or route around.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ParkingError::LotFull { .. } | ParkingError::NotFound { .. }
        )
    }
}
