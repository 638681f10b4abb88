//! Ready-to-render progress summaries for a player.
//!
//! - [`category_breakdown`] - one row per unit of a category, plus a total.
//! - [`overview`] - one row per category, plus a grand total.

use crate::catalog::UnitCatalog;
use crate::data::Category;
use crate::error::Result;
use crate::player::PlayerSnapshot;
use crate::progression::{arrange, ProgressionAggregator, ProgressionRecord, SkippedUnit};

/// Label of the trailing total row.
pub const TOTAL_LABEL: &str = "Total";

/// Ordered rows for display, with the tier they were computed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Town-Hall tier the rows were computed for.
    pub town_hall: u32,
    /// Rows in display order; the last one is [`TOTAL_LABEL`].
    pub rows: Vec<ProgressionRecord>,
    /// Units excluded from the figures.
    pub skipped: Vec<SkippedUnit>,
}

impl Summary {
    /// The trailing total row.
    #[must_use]
    pub fn total(&self) -> Option<&ProgressionRecord> {
        self.rows.last().filter(|row| row.name == TOTAL_LABEL)
    }
}

/// Per-unit progress of one category toward `target`, defaulting to the
/// player's own Town-Hall tier.
///
/// # Errors
///
/// Propagates catalog lookup errors; see
/// [`ProgressionAggregator::compute_records`].
pub fn category_breakdown(
    catalog: &UnitCatalog,
    snapshot: &PlayerSnapshot,
    category: Category,
    target: Option<u32>,
) -> Result<Summary> {
    let town_hall = target.unwrap_or(snapshot.town_hall_level);
    let units = catalog.instantiate(category, snapshot.units(category))?;
    let computed = ProgressionAggregator::new(catalog).compute_records(&units, town_hall)?;

    let mut rows = computed.records;
    let total = ProgressionRecord::sum(&rows, TOTAL_LABEL);
    rows.push(total);

    let mut order = catalog.display_order(category);
    order.push(TOTAL_LABEL);

    Ok(Summary {
        town_hall,
        rows: arrange(rows, &order)?,
        skipped: computed.skipped,
    })
}

/// Progress of every category toward `target`, one row each.
///
/// # Errors
///
/// Fails if any category is missing from the catalog, or on catalog
/// lookup errors.
pub fn overview(
    catalog: &UnitCatalog,
    snapshot: &PlayerSnapshot,
    target: Option<u32>,
) -> Result<Summary> {
    let town_hall = target.unwrap_or(snapshot.town_hall_level);
    let aggregator = ProgressionAggregator::new(catalog);

    let mut rows = Vec::with_capacity(Category::ALL.len() + 1);
    let mut skipped = Vec::new();

    for category in Category::ALL {
        let units = catalog.instantiate(category, snapshot.units(category))?;
        let computed = aggregator.compute_records(&units, town_hall)?;
        rows.push(computed.total(category.label()));
        skipped.extend(computed.skipped);
    }

    let total = ProgressionRecord::sum(&rows, TOTAL_LABEL);
    rows.push(total);

    let order = Category::ALL
        .iter()
        .map(Category::label)
        .chain(std::iter::once(TOTAL_LABEL))
        .collect::<Vec<_>>();

    tracing::debug!(town_hall, skipped = skipped.len(), "built overview");

    Ok(Summary {
        town_hall,
        rows: arrange(rows, &order)?,
        skipped,
    })
}
