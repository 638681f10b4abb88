//! Unit data structures for data-driven unit definitions.

use serde::{Deserialize, Serialize};

use crate::resource::Resource;

/// Unit group a definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Heroes, gated directly by Town-Hall tier.
    Hero,
    /// Troops, gated by Laboratory tier and their production building.
    Troop,
    /// Spells, gated by Laboratory tier and their spell factory.
    Spell,
}

impl Category {
    /// All categories in summary order.
    pub const ALL: [Self; 3] = [Self::Hero, Self::Troop, Self::Spell];

    /// Plural label used for category total rows.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Hero => "Heroes",
            Self::Troop => "Troops",
            Self::Spell => "Spells",
        }
    }

    /// Whether upgrades are researched in the Laboratory.
    #[must_use]
    pub const fn is_lab_gated(&self) -> bool {
        matches!(self, Self::Troop | Self::Spell)
    }
}

/// Data-driven unit definition.
///
/// One entry per unit, with per-level tables indexed by `level - 1`.
///
/// # Example RON
///
/// ```ron
/// UnitData(
///     name: "Barbarian",
///     category: Troop,
///     tier_gate: [1, 1, 3, 5, 6, 7, 8, 9, 10, 11, 12],
///     upgrade_cost: [20000, 60000, 200000, 650000, 1400000, 2500000, 4000000, 6000000, 8500000, 12000000, 0],
///     upgrade_time: [5, 24, 48, 72, 96, 120, 168, 216, 264, 312, 0],
///     upgrade_resource: Elixir,
///     unlock_building: Some("Barracks"),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitData {
    /// Display name, unique within its category.
    pub name: String,

    /// Unit group.
    pub category: Category,

    /// Minimum tier required for each level.
    ///
    /// Town-Hall tiers for heroes, Laboratory tiers for troops and spells.
    pub tier_gate: Vec<u32>,

    /// Cost to upgrade from each level.
    #[serde(default)]
    pub upgrade_cost: Vec<u64>,

    /// Time in hours to upgrade from each level.
    #[serde(default)]
    pub upgrade_time: Vec<u64>,

    /// Resource consumed by every upgrade of this unit.
    pub upgrade_resource: Resource,

    /// Production building that must exist before the unit can be used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_building: Option<String>,
}

impl UnitData {
    /// Number of levels described by the tier-gate table.
    #[must_use]
    pub fn level_count(&self) -> usize {
        self.tier_gate.len()
    }

    /// Whether the tier-gate table never decreases.
    #[must_use]
    pub fn has_monotonic_gates(&self) -> bool {
        self.tier_gate.windows(2).all(|w| w[0] <= w[1])
    }
}
