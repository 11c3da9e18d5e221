pub mod interactive;
pub mod receipt;
pub mod status;
pub mod version;
