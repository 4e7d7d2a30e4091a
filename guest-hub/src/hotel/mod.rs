//! Hotel configuration assembly
//!
//! - [`directory`] - which tables belong to which hotel slug
//! - [`loader`] - concurrent fetch of the tables
//! - [`builder`] - tables → [`shared::HotelConfiguration`]

pub mod builder;
pub mod directory;
pub mod loader;

pub use builder::{BuildDefaults, SourceTables, build};
pub use directory::{HotelDirectory, HotelSources};
pub use loader::load_hotel;
