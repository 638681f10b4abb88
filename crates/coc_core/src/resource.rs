//! Upgrade resources and per-resource amounts.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

/// One of the three in-game currencies consumed by unit upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Resource {
    /// Elixir.
    Elixir,
    /// Dark Elixir.
    DarkElixir,
    /// Gold.
    Gold,
}

impl Resource {
    /// All resources in table column order.
    pub const ALL: [Self; 3] = [Self::Elixir, Self::DarkElixir, Self::Gold];

    /// Default display name, used when the catalog does not override it.
    #[must_use]
    pub const fn default_name(&self) -> &'static str {
        match self {
            Self::Elixir => "Elixir",
            Self::DarkElixir => "Dark Elixir",
            Self::Gold => "Gold",
        }
    }
}

/// Amounts of each resource.
///
/// A single unit only ever fills the bucket of its own upgrade resource;
/// the other two stay zero. Totals are built by adding these together.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceAmounts {
    /// Elixir amount.
    pub elixir: u64,
    /// Dark Elixir amount.
    pub dark_elixir: u64,
    /// Gold amount.
    pub gold: u64,
}

impl ResourceAmounts {
    /// All buckets empty.
    pub const ZERO: Self = Self {
        elixir: 0,
        dark_elixir: 0,
        gold: 0,
    };

    /// Amounts with `amount` in the `resource` bucket and zero elsewhere.
    #[must_use]
    pub const fn single(resource: Resource, amount: u64) -> Self {
        let mut amounts = Self::ZERO;
        match resource {
            Resource::Elixir => amounts.elixir = amount,
            Resource::DarkElixir => amounts.dark_elixir = amount,
            Resource::Gold => amounts.gold = amount,
        }
        amounts
    }

    /// Amount held in one bucket.
    #[must_use]
    pub const fn get(&self, resource: Resource) -> u64 {
        match resource {
            Resource::Elixir => self.elixir,
            Resource::DarkElixir => self.dark_elixir,
            Resource::Gold => self.gold,
        }
    }

    /// Sum of all buckets, saturating at `u64::MAX`.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.elixir
            .saturating_add(self.dark_elixir)
            .saturating_add(self.gold)
    }

    /// Whether every bucket is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

/// Bucket-wise addition, saturating at `u64::MAX`.
impl Add for ResourceAmounts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            elixir: self.elixir.saturating_add(rhs.elixir),
            dark_elixir: self.dark_elixir.saturating_add(rhs.dark_elixir),
            gold: self.gold.saturating_add(rhs.gold),
        }
    }
}

impl AddAssign for ResourceAmounts {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for ResourceAmounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}
