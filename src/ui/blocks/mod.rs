pub mod occupancy;
pub mod summary;
