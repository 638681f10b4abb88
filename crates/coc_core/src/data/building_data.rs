//! Building data structures for tier-gated production buildings.

use serde::{Deserialize, Serialize};

/// Data-driven building unlock table.
///
/// Only the Town-Hall tier at which each building level unlocks is
/// needed: a unit exists at a tier once its production building does.
///
/// # Example RON
///
/// ```ron
/// BuildingData(
///     name: "Dark Barracks",
///     unlock_tiers: [7, 7, 8, 8, 9, 9, 10, 11, 12, 13],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildingData {
    /// Building name as referenced by `UnitData::unlock_building`.
    pub name: String,

    /// Town-Hall tier required for each building level.
    pub unlock_tiers: Vec<u32>,
}

impl BuildingData {
    /// Check if any level of this building is available at a Town-Hall tier.
    #[must_use]
    pub fn is_unlocked_at(&self, town_hall: u32) -> bool {
        self.unlock_tiers.iter().any(|&t| t <= town_hall)
    }
}
