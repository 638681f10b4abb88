//! Test fixtures and helpers.
//!
//! A small but complete catalog covering every gate policy, and a player
//! snapshot to run it against.

use std::collections::BTreeMap;

use coc_core::catalog::UnitCatalog;
use coc_core::data::{BuildingData, CatalogData, Category, TownHallData, UnitData};
use coc_core::player::{PlayerSnapshot, UnitLevel, Village};
use coc_core::resource::Resource;

/// Build a unit whose level `n` costs `cost_step * n` and takes
/// `time_step * n` hours.
#[must_use]
pub fn unit_data(
    name: &str,
    category: Category,
    tier_gate: &[u32],
    resource: Resource,
    unlock_building: Option<&str>,
) -> UnitData {
    let levels = tier_gate.len() as u64;
    UnitData {
        name: name.to_string(),
        category,
        tier_gate: tier_gate.to_vec(),
        upgrade_cost: (1..=levels).map(|n| n * 1_000).collect(),
        upgrade_time: (1..=levels).map(|n| n * 12).collect(),
        upgrade_resource: resource,
        unlock_building: unlock_building.map(str::to_string),
    }
}

fn building(name: &str, unlock_tiers: &[u32]) -> BuildingData {
    BuildingData {
        name: name.to_string(),
        unlock_tiers: unlock_tiers.to_vec(),
    }
}

/// Town-Hall tiers covered by [`sample_catalog_data`].
pub const SAMPLE_TOWN_HALLS: std::ops::RangeInclusive<u32> = 1..=11;

/// Sample catalog data.
///
/// - Archer Queen gates `[9, 9, 9, 9, 9, 10, 10, 10]`.
/// - Minion gates `[1, 4, 4, 6, 6]`, unlocked by the Dark Barracks at
///   Town Hall 7, where the Laboratory is level 4.
#[must_use]
pub fn sample_catalog_data() -> CatalogData {
    CatalogData {
        heroes: vec![
            unit_data(
                "Barbarian King",
                Category::Hero,
                &[7, 7, 7, 7, 7, 8, 8, 8, 8, 8],
                Resource::DarkElixir,
                None,
            ),
            unit_data(
                "Archer Queen",
                Category::Hero,
                &[9, 9, 9, 9, 9, 10, 10, 10],
                Resource::DarkElixir,
                None,
            ),
            unit_data(
                "Grand Warden",
                Category::Hero,
                &[11, 11, 11, 11, 11],
                Resource::Elixir,
                None,
            ),
        ],
        troops: vec![
            unit_data(
                "Barbarian",
                Category::Troop,
                &[1, 1, 3, 5, 6, 7, 8],
                Resource::Elixir,
                Some("Barracks"),
            ),
            unit_data(
                "Minion",
                Category::Troop,
                &[1, 4, 4, 6, 6],
                Resource::DarkElixir,
                Some("Dark Barracks"),
            ),
            unit_data(
                "Wall Wrecker",
                Category::Troop,
                &[1, 8, 9],
                Resource::Gold,
                Some("Workshop"),
            ),
        ],
        spells: vec![
            unit_data(
                "Lightning Spell",
                Category::Spell,
                &[1, 1, 2, 3, 4, 5, 6],
                Resource::Elixir,
                Some("Spell Factory"),
            ),
            unit_data(
                "Poison Spell",
                Category::Spell,
                &[1, 6, 6, 7, 8],
                Resource::DarkElixir,
                Some("Dark Spell Factory"),
            ),
        ],
        buildings: vec![
            building("Barracks", &[1, 1, 2, 3, 4, 5, 6, 7, 8, 9]),
            building("Dark Barracks", &[7, 7, 8, 8, 9]),
            building("Workshop", &[9, 10]),
            building("Spell Factory", &[5, 6, 7, 9, 10]),
            building("Dark Spell Factory", &[8, 9, 10]),
        ],
        town_hall: TownHallData {
            lab_levels: BTreeMap::from([
                (1, 0),
                (2, 0),
                (3, 1),
                (4, 2),
                (5, 3),
                (6, 4),
                (7, 4),
                (8, 6),
                (9, 7),
                (10, 8),
                (11, 9),
            ]),
            resource_names: BTreeMap::new(),
        },
    }
}

/// [`sample_catalog_data`] indexed into a catalog.
#[must_use]
pub fn sample_catalog() -> UnitCatalog {
    UnitCatalog::from_data(sample_catalog_data()).expect("sample catalog data is valid")
}

/// A home-village unit level entry.
#[must_use]
pub fn level(name: &str, level: u32) -> UnitLevel {
    UnitLevel {
        name: name.to_string(),
        level,
        village: Village::Home,
    }
}

/// A Town Hall 9 player with some units unlocked.
///
/// Grand Warden, Wall Wrecker and Poison Spell are absent and count as
/// level 0; the builder-base entry is ignored.
#[must_use]
pub fn sample_snapshot() -> PlayerSnapshot {
    PlayerSnapshot {
        name: "Chief".to_string(),
        tag: "#2PP0JQC9L".to_string(),
        town_hall_level: 9,
        heroes: vec![
            level("Barbarian King", 6),
            level("Archer Queen", 3),
            UnitLevel {
                name: "Battle Machine".to_string(),
                level: 10,
                village: Village::BuilderBase,
            },
        ],
        troops: vec![level("Barbarian", 5), level("Minion", 2)],
        spells: vec![level("Lightning Spell", 4)],
    }
}
