//! The static unit catalog.
//!
//! [`UnitCatalog`] is built once from [`CatalogData`] and then only read.
//! It holds no interior mutability, so a single instance can be shared by
//! reference across any number of concurrent calculations.

use std::collections::{BTreeMap, HashMap};

use crate::data::{BuildingData, CatalogData, Category};
use crate::error::{CalcError, Result};
use crate::player::UnitLevel;
use crate::resource::Resource;
use crate::unit::{Unit, UnitDefinition};

/// Indexed, read-only view of the static balance data.
#[derive(Debug, Clone, Default)]
pub struct UnitCatalog {
    /// Definitions per category, indexed by unit name.
    units: HashMap<Category, HashMap<String, UnitDefinition>>,
    /// Canonical display order per category.
    order: HashMap<Category, Vec<String>>,
    /// Production buildings by name.
    buildings: HashMap<String, BuildingData>,
    lab_levels: BTreeMap<u32, u32>,
    resource_names: BTreeMap<Resource, String>,
}

impl UnitCatalog {
    /// Build the catalog from parsed data.
    ///
    /// Categories with no units are left unloaded, so that
    /// [`load_category`](Self::load_category) reports them as missing.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::CatalogLoad`] if a unit sits in the wrong
    /// category list, a name is duplicated, or a troop/spell is missing
    /// its unlock building.
    pub fn from_data(data: CatalogData) -> Result<Self> {
        let mut catalog = Self {
            lab_levels: data.town_hall.lab_levels,
            resource_names: data.town_hall.resource_names,
            ..Self::default()
        };

        for building in data.buildings {
            if catalog.buildings.contains_key(&building.name) {
                return Err(CalcError::CatalogLoad(format!(
                    "duplicate building '{}'",
                    building.name
                )));
            }
            catalog.buildings.insert(building.name.clone(), building);
        }

        let groups = [
            (Category::Hero, data.heroes),
            (Category::Troop, data.troops),
            (Category::Spell, data.spells),
        ];

        for (category, units) in groups {
            if units.is_empty() {
                continue;
            }

            let mut index = HashMap::with_capacity(units.len());
            let mut order = Vec::with_capacity(units.len());

            for unit in units {
                if unit.category != category {
                    return Err(CalcError::CatalogLoad(format!(
                        "unit '{}' has category {:?} but is listed under {}",
                        unit.name,
                        unit.category,
                        category.label()
                    )));
                }
                if index.contains_key(&unit.name) {
                    return Err(CalcError::CatalogLoad(format!(
                        "duplicate unit '{}' in {}",
                        unit.name,
                        category.label()
                    )));
                }

                let definition = UnitDefinition::from_data(unit)?;
                order.push(definition.name().to_string());
                index.insert(definition.name().to_string(), definition);
            }

            catalog.units.insert(category, index);
            catalog.order.insert(category, order);
        }

        tracing::debug!(
            heroes = catalog.category_len(Category::Hero),
            troops = catalog.category_len(Category::Troop),
            spells = catalog.category_len(Category::Spell),
            buildings = catalog.buildings.len(),
            "built unit catalog"
        );

        Ok(catalog)
    }

    fn category_len(&self, category: Category) -> usize {
        self.units.get(&category).map_or(0, HashMap::len)
    }

    /// All definitions of a category, indexed by name.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::CatalogLoad`] if no data was supplied for the
    /// category.
    pub fn load_category(&self, category: Category) -> Result<&HashMap<String, UnitDefinition>> {
        self.units.get(&category).ok_or_else(|| {
            CalcError::CatalogLoad(format!("no {} data loaded", category.label()))
        })
    }

    /// Look up a single definition.
    #[must_use]
    pub fn get(&self, category: Category, name: &str) -> Option<&UnitDefinition> {
        self.units.get(&category)?.get(name)
    }

    /// Canonical display order of a category; empty if not loaded.
    #[must_use]
    pub fn display_order(&self, category: Category) -> Vec<&str> {
        self.order
            .get(&category)
            .map(|names| names.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Town-Hall tier at which each level of a building unlocks.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnknownBuilding`] if the building is absent.
    pub fn building_unlock_tiers(&self, building: &str) -> Result<&[u32]> {
        Ok(&self.building(building)?.unlock_tiers)
    }

    fn building(&self, name: &str) -> Result<&BuildingData> {
        self.buildings
            .get(name)
            .ok_or_else(|| CalcError::UnknownBuilding(name.to_string()))
    }

    /// Whether any level of `building` exists at a Town-Hall tier.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnknownBuilding`] if the building is absent.
    pub fn unit_available_at_tier(&self, building: &str, town_hall: u32) -> Result<bool> {
        Ok(self.building(building)?.is_unlocked_at(town_hall))
    }

    /// Maximum Laboratory tier available at a Town-Hall tier.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnknownTier`] for tiers outside the table.
    pub fn town_hall_to_lab(&self, town_hall: u32) -> Result<u32> {
        self.lab_levels
            .get(&town_hall)
            .copied()
            .ok_or(CalcError::UnknownTier(town_hall))
    }

    /// Town-Hall tiers with a known Laboratory tier, ascending.
    pub fn known_town_halls(&self) -> impl Iterator<Item = u32> + '_ {
        self.lab_levels.keys().copied()
    }

    /// Display name of a resource.
    #[must_use]
    pub fn resource_name(&self, resource: Resource) -> &str {
        self.resource_names
            .get(&resource)
            .map_or_else(|| resource.default_name(), String::as_str)
    }

    /// Bind every unit of a category to the player's levels.
    ///
    /// Units come back in display order. Catalog units missing from
    /// `levels` get level 0; entries that are not home-village units or
    /// that the catalog does not know are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::CatalogLoad`] if the category is not loaded.
    pub fn instantiate(&self, category: Category, levels: &[UnitLevel]) -> Result<Vec<Unit<'_>>> {
        let definitions = self.load_category(category)?;

        let mut current: HashMap<&str, u32> = HashMap::with_capacity(levels.len());
        for entry in levels.iter().filter(|entry| entry.is_home()) {
            if !definitions.contains_key(&entry.name) {
                tracing::debug!(unit = %entry.name, category = category.label(), "ignoring unit unknown to catalog");
                continue;
            }
            current.entry(entry.name.as_str()).or_insert(entry.level);
        }

        Ok(self
            .display_order(category)
            .into_iter()
            .filter_map(|name| definitions.get(name))
            .map(|definition| {
                let level = current.get(definition.name()).copied().unwrap_or(0);
                Unit::new(definition, level)
            })
            .collect())
    }
}
