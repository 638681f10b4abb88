//! Player snapshot as returned by the game API.
//!
//! Only the fields the calculator consumes are modelled; everything else
//! in the payload is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::data::Category;

/// Village a unit belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Village {
    /// Main village.
    #[default]
    Home,
    /// Builder base.
    BuilderBase,
    /// Any village this crate does not track.
    #[serde(other)]
    Other,
}

/// A unit the player has unlocked, with its current level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitLevel {
    /// Display name as reported by the API.
    pub name: String,
    /// Current level.
    pub level: u32,
    /// Village the unit belongs to.
    #[serde(default)]
    pub village: Village,
}

impl UnitLevel {
    /// Whether this entry belongs to the main village.
    #[must_use]
    pub fn is_home(&self) -> bool {
        self.village == Village::Home
    }
}

/// A single player's progress snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// In-game name.
    #[serde(default)]
    pub name: String,
    /// Player tag, including the leading `#`.
    #[serde(default)]
    pub tag: String,
    /// Current Town-Hall tier.
    pub town_hall_level: u32,
    /// Unlocked heroes.
    #[serde(default)]
    pub heroes: Vec<UnitLevel>,
    /// Unlocked troops.
    #[serde(default)]
    pub troops: Vec<UnitLevel>,
    /// Unlocked spells.
    #[serde(default)]
    pub spells: Vec<UnitLevel>,
}

impl PlayerSnapshot {
    /// Unit levels reported for a category.
    #[must_use]
    pub fn units(&self, category: Category) -> &[UnitLevel] {
        match category {
            Category::Hero => &self.heroes,
            Category::Troop => &self.troops,
            Category::Spell => &self.spells,
        }
    }
}
