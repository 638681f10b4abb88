//! Remaining-progress records and their aggregation.
//!
//! [`ProgressionAggregator`] turns a set of [`Unit`]s and a target
//! Town-Hall tier into [`ProgressionRecord`]s. Records can then be summed
//! into category and grand totals with [`ProgressionRecord::sum`].

use serde::{Deserialize, Serialize};

use crate::catalog::UnitCatalog;
use crate::error::{CalcError, Result};
use crate::resource::ResourceAmounts;
use crate::unit::Unit;

/// Level, time and cost figures for one unit or one aggregate row.
///
/// Every `remaining_*` field is clamped at zero, so a player already past
/// the maximum for the viewed tier shows nothing left to do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProgressionRecord {
    /// Unit name or aggregate label.
    pub name: String,
    /// Player's current level.
    pub current_level: u32,
    /// Highest level reachable at the target tier.
    pub max_level: u32,
    /// Levels left to reach `max_level`.
    pub remaining_level: u32,
    /// Upgrade hours already spent.
    pub current_time: u64,
    /// Upgrade hours needed to reach `max_level` from scratch.
    pub max_time: u64,
    /// Upgrade hours left.
    pub remaining_time: u64,
    /// Resources left to spend.
    pub remaining_cost: ResourceAmounts,
    /// Resources needed to reach `max_level` from scratch.
    pub max_cost: ResourceAmounts,
}

impl ProgressionRecord {
    /// Build the record of one unit given its resolved maximum level.
    #[must_use]
    pub fn for_unit(unit: &Unit<'_>, max_level: u32) -> Self {
        let current_level = unit.current_level();
        let resource = unit.upgrade_resource();

        let current_time = unit.upgrade_time(current_level);
        let max_time = unit.upgrade_time(max_level);
        let current_cost = unit.upgrade_cost(current_level);
        let max_cost = unit.upgrade_cost(max_level);

        Self {
            name: unit.name().to_string(),
            current_level,
            max_level,
            remaining_level: max_level.saturating_sub(current_level),
            current_time,
            max_time,
            remaining_time: max_time.saturating_sub(current_time),
            remaining_cost: ResourceAmounts::single(resource, max_cost.saturating_sub(current_cost)),
            max_cost: ResourceAmounts::single(resource, max_cost),
        }
    }

    /// Element-wise sum of `records`, named `label`.
    ///
    /// Summing partial sums gives the same figures as summing the flat
    /// list, which is how category totals roll up into a grand total.
    /// Every field saturates instead of overflowing.
    #[must_use]
    pub fn sum<'r, I>(records: I, label: &str) -> Self
    where
        I: IntoIterator<Item = &'r ProgressionRecord>,
    {
        let mut total = Self {
            name: label.to_string(),
            ..Self::default()
        };

        for record in records {
            total.current_level = total.current_level.saturating_add(record.current_level);
            total.max_level = total.max_level.saturating_add(record.max_level);
            total.remaining_level = total.remaining_level.saturating_add(record.remaining_level);
            total.current_time = total.current_time.saturating_add(record.current_time);
            total.max_time = total.max_time.saturating_add(record.max_time);
            total.remaining_time = total.remaining_time.saturating_add(record.remaining_time);
            total.remaining_cost += record.remaining_cost;
            total.max_cost += record.max_cost;
        }

        total
    }
}

/// A unit left out of a computation, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUnit {
    /// Unit name.
    pub name: String,
    /// Why it was skipped.
    pub error: CalcError,
}

/// Output of [`ProgressionAggregator::compute_records`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedRecords {
    /// One record per usable unit, in input order.
    pub records: Vec<ProgressionRecord>,
    /// Units excluded because their definition is malformed.
    pub skipped: Vec<SkippedUnit>,
}

impl ComputedRecords {
    /// Find a record by unit name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ProgressionRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Sum of all records, named `label`.
    #[must_use]
    pub fn total(&self, label: &str) -> ProgressionRecord {
        ProgressionRecord::sum(&self.records, label)
    }
}

/// Computes progression records against a shared catalog.
#[derive(Debug, Clone, Copy)]
pub struct ProgressionAggregator<'a> {
    catalog: &'a UnitCatalog,
}

impl<'a> ProgressionAggregator<'a> {
    /// Create an aggregator reading from `catalog`.
    #[must_use]
    pub const fn new(catalog: &'a UnitCatalog) -> Self {
        Self { catalog }
    }

    /// Compute one record per unit at a Town-Hall tier.
    ///
    /// Units with a malformed definition are skipped and listed in
    /// [`ComputedRecords::skipped`]; the rest of the batch still completes.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::UnknownBuilding`] or [`CalcError::UnknownTier`]
    /// when the catalog does not cover the requested tier.
    pub fn compute_records(&self, units: &[Unit<'_>], town_hall: u32) -> Result<ComputedRecords> {
        let mut computed = ComputedRecords {
            records: Vec::with_capacity(units.len()),
            skipped: Vec::new(),
        };

        for unit in units {
            match unit.max_level_at_tier(self.catalog, town_hall) {
                Ok(max_level) => {
                    tracing::trace!(
                        unit = unit.name(),
                        current = unit.current_level(),
                        max_level,
                        "resolved max level"
                    );
                    computed.records.push(ProgressionRecord::for_unit(unit, max_level));
                }
                Err(error) if error.is_unit_local() => {
                    tracing::warn!(unit = unit.name(), %error, "skipping unit");
                    computed.skipped.push(SkippedUnit {
                        name: unit.name().to_string(),
                        error,
                    });
                }
                Err(error) => return Err(error),
            }
        }

        Ok(computed)
    }
}

/// Place records in a caller-supplied display order.
///
/// Names in `order` without a record are skipped. Records sharing a name
/// keep their relative order.
///
/// # Errors
///
/// Returns [`CalcError::UnknownUnitInOrder`] for the first record whose
/// name does not appear in `order`.
pub fn arrange<S: AsRef<str>>(
    records: Vec<ProgressionRecord>,
    order: &[S],
) -> Result<Vec<ProgressionRecord>> {
    let mut positions = std::collections::HashMap::with_capacity(order.len());
    for (position, name) in order.iter().enumerate() {
        positions.entry(name.as_ref()).or_insert(position);
    }

    let mut placed = records
        .into_iter()
        .map(|record| match positions.get(record.name.as_str()) {
            Some(&position) => Ok((position, record)),
            None => Err(CalcError::UnknownUnitInOrder(record.name)),
        })
        .collect::<Result<Vec<_>>>()?;

    // Stable, so duplicates stay in input order.
    placed.sort_by_key(|(position, _)| *position);

    Ok(placed.into_iter().map(|(_, record)| record).collect())
}
