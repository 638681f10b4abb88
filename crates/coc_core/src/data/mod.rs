//! Data structures for the static unit catalog.
//!
//! This module contains pure data structures that describe units,
//! production buildings, and Town-Hall tables. All structs are designed
//! to be deserialized from RON files.
//!
//! **Note:** This module contains no IO - it only defines data types.
//! File loading is handled by `coc_tools`.

mod building_data;
mod catalog_data;
mod unit_data;

pub use building_data::BuildingData;
pub use catalog_data::{CatalogData, TownHallData};
pub use unit_data::{Category, UnitData};
