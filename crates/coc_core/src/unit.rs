//! Unit definitions and tier-gated level resolution.
//!
//! Heroes, troops and spells share one concrete [`UnitDefinition`] type.
//! What differs between them is how the maximum level at a tier is
//! resolved, captured by [`GatePolicy`]:
//!
//! - [`GatePolicy::TownHall`] - heroes, gated directly by Town-Hall tier.
//! - [`GatePolicy::Laboratory`] - troops and spells, gated by the
//!   Laboratory tier derived from the Town-Hall tier, and by whether their
//!   production building exists yet.

use crate::catalog::UnitCatalog;
use crate::data::{Category, UnitData};
use crate::error::{CalcError, Result};
use crate::resource::Resource;

/// Tier-gate entry a Laboratory unit must clear before it has any
/// reachable level.
///
/// Entry 0 of a Laboratory table describes the level a troop or spell has
/// by default, so availability is decided by entry 1. Single-level tables
/// fall back to entry 0.
pub const LAB_THRESHOLD_INDEX: usize = 1;

/// Strategy for resolving the maximum level of a unit at a Town-Hall tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatePolicy {
    /// Gates are Town-Hall tiers.
    TownHall,
    /// Gates are Laboratory tiers; the unit needs `building` to exist.
    Laboratory {
        /// Production building that unlocks the unit.
        building: String,
    },
}

impl GatePolicy {
    /// Select the policy for a unit from its category.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::CatalogLoad`] if a troop or spell has no
    /// unlock building.
    pub fn for_unit(data: &UnitData) -> Result<Self> {
        if !data.category.is_lab_gated() {
            return Ok(Self::TownHall);
        }

        data.unlock_building
            .clone()
            .map(|building| Self::Laboratory { building })
            .ok_or_else(|| {
                CalcError::CatalogLoad(format!(
                    "unit '{}' is missing its unlock building",
                    data.name
                ))
            })
    }

    /// Resolve the highest level reachable at a Town-Hall tier.
    ///
    /// # Errors
    ///
    /// - [`CalcError::MalformedDefinition`] if `gates` is empty.
    /// - [`CalcError::UnknownBuilding`] / [`CalcError::UnknownTier`] if the
    ///   catalog cannot answer the Laboratory lookups.
    pub fn resolve(
        &self,
        unit: &str,
        gates: &[u32],
        catalog: &UnitCatalog,
        town_hall: u32,
    ) -> Result<u32> {
        let Some(&first) = gates.first() else {
            return Err(CalcError::MalformedDefinition {
                unit: unit.to_string(),
                reason: "empty tier-gate table".to_string(),
            });
        };

        match self {
            Self::TownHall => {
                if town_hall < first {
                    return Ok(0);
                }
                Ok(highest_level_within(gates, town_hall))
            }
            Self::Laboratory { building } => {
                if !catalog.unit_available_at_tier(building, town_hall)? {
                    tracing::trace!(unit, building, town_hall, "production building locked");
                    return Ok(0);
                }

                let lab = catalog.town_hall_to_lab(town_hall)?;
                let threshold = gates.get(LAB_THRESHOLD_INDEX).copied().unwrap_or(first);
                if lab < threshold {
                    return Ok(0);
                }
                Ok(highest_level_within(gates, lab))
            }
        }
    }
}

/// One plus the index of the last gate at or below `tier`, or 0.
///
/// Searching from the back makes runs of equal gates resolve to their
/// highest level, and keeps the result non-decreasing in `tier` even for
/// tables that are not sorted.
#[must_use]
pub fn highest_level_within(gates: &[u32], tier: u32) -> u32 {
    gates
        .iter()
        .rposition(|&gate| gate <= tier)
        .map_or(0, |index| level_from_len(index + 1))
}

fn level_from_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Sum of the first `level` entries of a per-level table.
fn cumulative(table: &[u64], level: u32) -> u64 {
    let take = usize::try_from(level).unwrap_or(usize::MAX);
    table
        .iter()
        .take(take)
        .fold(0, |acc, &entry| acc.saturating_add(entry))
}

/// Immutable static definition of one unit, resolved from [`UnitData`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitDefinition {
    name: String,
    category: Category,
    tier_gate: Vec<u32>,
    upgrade_cost: Vec<u64>,
    upgrade_time: Vec<u64>,
    upgrade_resource: Resource,
    gate: GatePolicy,
}

impl UnitDefinition {
    /// Build a definition from its data record.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::CatalogLoad`] if required fields for the
    /// unit's category are missing.
    pub fn from_data(data: UnitData) -> Result<Self> {
        let gate = GatePolicy::for_unit(&data)?;
        Ok(Self {
            name: data.name,
            category: data.category,
            tier_gate: data.tier_gate,
            upgrade_cost: data.upgrade_cost,
            upgrade_time: data.upgrade_time,
            upgrade_resource: data.upgrade_resource,
            gate,
        })
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit group.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Level reachable at the highest known tier.
    #[must_use]
    pub fn max_absolute_level(&self) -> u32 {
        level_from_len(self.tier_gate.len())
    }

    /// Highest level reachable at a Town-Hall tier.
    ///
    /// # Errors
    ///
    /// See [`GatePolicy::resolve`].
    pub fn max_level_at_tier(&self, catalog: &UnitCatalog, town_hall: u32) -> Result<u32> {
        self.gate
            .resolve(&self.name, &self.tier_gate, catalog, town_hall)
    }

    /// Total cost of all upgrades below `level`; zero at level 0.
    ///
    /// Levels past the end of the table add nothing further.
    #[must_use]
    pub fn upgrade_cost(&self, level: u32) -> u64 {
        cumulative(&self.upgrade_cost, level)
    }

    /// Total upgrade time in hours below `level`; zero at level 0.
    #[must_use]
    pub fn upgrade_time(&self, level: u32) -> u64 {
        cumulative(&self.upgrade_time, level)
    }

    /// Resource consumed by this unit's upgrades.
    #[must_use]
    pub const fn upgrade_resource(&self) -> Resource {
        self.upgrade_resource
    }
}

/// A unit definition bound to one player's current level.
///
/// Built per request from a player snapshot and dropped afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit<'a> {
    definition: &'a UnitDefinition,
    current_level: u32,
}

impl<'a> Unit<'a> {
    /// Bind a definition to a level. Use 0 for units not yet unlocked.
    #[must_use]
    pub const fn new(definition: &'a UnitDefinition, current_level: u32) -> Self {
        Self {
            definition,
            current_level,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.definition.name()
    }

    /// The player's current level.
    #[must_use]
    pub const fn current_level(&self) -> u32 {
        self.current_level
    }

    /// See [`UnitDefinition::max_absolute_level`].
    #[must_use]
    pub fn max_absolute_level(&self) -> u32 {
        self.definition.max_absolute_level()
    }

    /// See [`UnitDefinition::max_level_at_tier`].
    pub fn max_level_at_tier(&self, catalog: &UnitCatalog, town_hall: u32) -> Result<u32> {
        self.definition.max_level_at_tier(catalog, town_hall)
    }

    /// See [`UnitDefinition::upgrade_cost`].
    #[must_use]
    pub fn upgrade_cost(&self, level: u32) -> u64 {
        self.definition.upgrade_cost(level)
    }

    /// See [`UnitDefinition::upgrade_time`].
    #[must_use]
    pub fn upgrade_time(&self, level: u32) -> u64 {
        self.definition.upgrade_time(level)
    }

    /// See [`UnitDefinition::upgrade_resource`].
    #[must_use]
    pub const fn upgrade_resource(&self) -> Resource {
        self.definition.upgrade_resource()
    }
}
