//! # CoC Core
//!
//! Unit-progression calculator for a player's heroes, troops and spells.
//!
//! This crate contains **only** pure computation:
//! - No network access
//! - No file IO
//! - No global state
//!
//! Given a static [`catalog::UnitCatalog`] and a [`player::PlayerSnapshot`],
//! it resolves the highest level each unit can reach at a Town-Hall tier
//! and how much time and which resources remain until that level.
//!
//! ## Crate Structure
//!
//! - [`data`] - Serde data types for the static catalog
//! - [`catalog`] - Indexed, read-only catalog
//! - [`unit`] - Unit definitions and tier-gate policies
//! - [`progression`] - Per-unit records, totals and display ordering
//! - [`summary`] - Category breakdowns and overviews for display
//! - [`player`] - Player snapshot model

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod catalog;
pub mod data;
pub mod error;
pub mod player;
pub mod progression;
pub mod resource;
pub mod summary;
pub mod unit;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::UnitCatalog;
    pub use crate::data::{BuildingData, CatalogData, Category, TownHallData, UnitData};
    pub use crate::error::{CalcError, Result};
    pub use crate::player::{PlayerSnapshot, UnitLevel, Village};
    pub use crate::progression::{
        arrange, ComputedRecords, ProgressionAggregator, ProgressionRecord, SkippedUnit,
    };
    pub use crate::resource::{Resource, ResourceAmounts};
    pub use crate::summary::{category_breakdown, overview, Summary, TOTAL_LABEL};
    pub use crate::unit::{GatePolicy, Unit, UnitDefinition};
}
