//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod text_file;

pub use text_file::{
    decode_document, decode_line, encode_document, encode_line, TextFileVehicleRepository,
    DEFAULT_DATA_FILE,
};
