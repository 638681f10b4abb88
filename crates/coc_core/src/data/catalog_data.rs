//! Catalog data structure combining all static balance tables.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::building_data::BuildingData;
use super::unit_data::{Category, UnitData};
use crate::resource::Resource;

/// Town-Hall level tables that are not tied to a single unit.
///
/// # Example RON
///
/// ```ron
/// TownHallData(
///     lab_levels: { 3: 1, 4: 2, 5: 3, 6: 4, 7: 5 },
///     resource_names: { DarkElixir: "DE" },
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TownHallData {
    /// Town-Hall tier to maximum Laboratory tier.
    pub lab_levels: BTreeMap<u32, u32>,

    /// Display-name overrides for resources.
    #[serde(default)]
    pub resource_names: BTreeMap<Resource, String>,
}

/// Complete catalog data definition.
///
/// Contains every unit group plus the auxiliary tables needed to resolve
/// tier gates. Assembled by a loader from one or more RON files; the order
/// of each unit list is the canonical display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    /// Hero definitions.
    #[serde(default)]
    pub heroes: Vec<UnitData>,

    /// Troop definitions.
    #[serde(default)]
    pub troops: Vec<UnitData>,

    /// Spell definitions.
    #[serde(default)]
    pub spells: Vec<UnitData>,

    /// Production building unlock tables.
    #[serde(default)]
    pub buildings: Vec<BuildingData>,

    /// Town-Hall level tables.
    #[serde(default)]
    pub town_hall: TownHallData,
}

impl CatalogData {
    /// Unit list for a category.
    #[must_use]
    pub fn units(&self, category: Category) -> &[UnitData] {
        match category {
            Category::Hero => &self.heroes,
            Category::Troop => &self.troops,
            Category::Spell => &self.spells,
        }
    }

    /// Find a building by name.
    #[must_use]
    pub fn get_building(&self, name: &str) -> Option<&BuildingData> {
        self.buildings.iter().find(|b| b.name == name)
    }

    /// Total number of unit definitions across all categories.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.heroes.len() + self.troops.len() + self.spells.len()
    }

    /// Validate internal consistency of catalog data.
    ///
    /// Checks for:
    /// - Units listed under the wrong category, or listed twice
    /// - Empty or non-monotonic tier-gate tables
    /// - Cost and time tables that do not match the tier-gate length
    /// - Laboratory units without a known unlock building
    /// - A Town-Hall to Laboratory map that decreases
    ///
    /// Returns a list of validation errors.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for category in Category::ALL {
            let mut seen = HashSet::new();

            for unit in self.units(category) {
                if unit.category != category {
                    errors.push(format!(
                        "Unit '{}' is listed under {} but has category {:?}",
                        unit.name,
                        category.label(),
                        unit.category
                    ));
                }

                if !seen.insert(unit.name.as_str()) {
                    errors.push(format!(
                        "Duplicate unit '{}' in {}",
                        unit.name,
                        category.label()
                    ));
                }

                if unit.tier_gate.is_empty() {
                    errors.push(format!("Unit '{}' has an empty tier-gate table", unit.name));
                } else if !unit.has_monotonic_gates() {
                    errors.push(format!(
                        "Unit '{}' has a decreasing tier-gate table",
                        unit.name
                    ));
                }

                if unit.upgrade_cost.len() != unit.level_count() {
                    errors.push(format!(
                        "Unit '{}' has {} cost entries for {} levels",
                        unit.name,
                        unit.upgrade_cost.len(),
                        unit.level_count()
                    ));
                }

                if unit.upgrade_time.len() != unit.level_count() {
                    errors.push(format!(
                        "Unit '{}' has {} time entries for {} levels",
                        unit.name,
                        unit.upgrade_time.len(),
                        unit.level_count()
                    ));
                }

                if category.is_lab_gated() {
                    match &unit.unlock_building {
                        None => errors.push(format!(
                            "Unit '{}' has no unlock building",
                            unit.name
                        )),
                        Some(building) if self.get_building(building).is_none() => {
                            errors.push(format!(
                                "Unit '{}' is unlocked by unknown building '{}'",
                                unit.name, building
                            ));
                        }
                        Some(_) => {}
                    }
                }
            }
        }

        let mut buildings = HashSet::new();
        for building in &self.buildings {
            if !buildings.insert(building.name.as_str()) {
                errors.push(format!("Duplicate building '{}'", building.name));
            }
        }

        let has_lab_units = !self.troops.is_empty() || !self.spells.is_empty();
        if has_lab_units && self.town_hall.lab_levels.is_empty() {
            errors.push("Town Hall to Laboratory map is empty".to_string());
        }

        // BTreeMap iterates in Town-Hall order.
        let labs: Vec<_> = self.town_hall.lab_levels.iter().collect();
        for pair in labs.windows(2) {
            let ((th_a, lab_a), (th_b, lab_b)) = (pair[0], pair[1]);
            if lab_b < lab_a {
                errors.push(format!(
                    "Laboratory level drops from {lab_a} at Town Hall {th_a} to {lab_b} at Town Hall {th_b}"
                ));
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_catalog_data() -> CatalogData {
        CatalogData {
            heroes: vec![UnitData {
                name: "Barbarian King".to_string(),
                category: Category::Hero,
                tier_gate: vec![7, 7, 8],
                upgrade_cost: vec![5_000, 6_000, 0],
                upgrade_time: vec![12, 24, 0],
                upgrade_resource: Resource::DarkElixir,
                unlock_building: None,
            }],
            troops: vec![UnitData {
                name: "Barbarian".to_string(),
                category: Category::Troop,
                tier_gate: vec![1, 1, 3],
                upgrade_cost: vec![20_000, 60_000, 0],
                upgrade_time: vec![5, 24, 0],
                upgrade_resource: Resource::Elixir,
                unlock_building: Some("Barracks".to_string()),
            }],
            spells: vec![],
            buildings: vec![BuildingData {
                name: "Barracks".to_string(),
                unlock_tiers: vec![1, 1, 2],
            }],
            town_hall: TownHallData {
                lab_levels: BTreeMap::from([(3, 1), (4, 2), (7, 5), (8, 6)]),
                resource_names: BTreeMap::new(),
            },
        }
    }

    #[test]
    fn test_unit_count() {
        let data = create_test_catalog_data();
        assert_eq!(data.units(Category::Troop).len(), 1);
        assert!(data.units(Category::Spell).is_empty());
        assert_eq!(data.unit_count(), 2);
    }

    #[test]
    fn test_validate_valid_data() {
        let data = create_test_catalog_data();
        let errors = data.validate();
        assert!(errors.is_empty(), "Errors: {:?}", errors);
    }

    #[test]
    fn test_validate_unknown_building() {
        let mut data = create_test_catalog_data();
        data.troops[0].unlock_building = Some("Workshop".to_string());

        let errors = data.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("unknown building 'Workshop'"));
    }

    #[test]
    fn test_validate_table_lengths_and_gates() {
        let mut data = create_test_catalog_data();
        data.heroes[0].tier_gate = vec![8, 7, 7];
        data.heroes[0].upgrade_time.pop();

        let errors = data.validate();
        assert!(errors.iter().any(|e| e.contains("decreasing tier-gate")));
        assert!(errors.iter().any(|e| e.contains("2 time entries for 3 levels")));
    }

    #[test]
    fn test_validate_category_mismatch_and_duplicates() {
        let mut data = create_test_catalog_data();
        let mut misplaced = data.heroes[0].clone();
        misplaced.category = Category::Spell;
        data.heroes.push(misplaced);

        let errors = data.validate();
        assert!(errors.iter().any(|e| e.contains("listed under Heroes")));
        assert!(errors.iter().any(|e| e.contains("Duplicate unit 'Barbarian King'")));
    }

    #[test]
    fn test_validate_decreasing_lab_map() {
        let mut data = create_test_catalog_data();
        data.town_hall.lab_levels.insert(9, 4);

        let errors = data.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("drops from 6 at Town Hall 8 to 4 at Town Hall 9"));
    }
}
