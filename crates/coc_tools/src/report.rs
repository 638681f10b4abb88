//! Plain-text rendering of progress summaries.
//!
//! Every figure shown is a remaining value: levels still to research,
//! hours still to wait and resources still to spend.

use std::fmt::Write as _;

use coc_core::catalog::UnitCatalog;
use coc_core::data::Category;
use coc_core::player::PlayerSnapshot;
use coc_core::progression::ProgressionRecord;
use coc_core::resource::Resource;
use coc_core::summary::Summary;
use serde::Serialize;

const HOURS_PER_DAY: u64 = 24;

/// Format a duration in hours as `Nd Nh`.
#[must_use]
pub fn format_hours(hours: u64) -> String {
    format!("{}d {}h", hours / HOURS_PER_DAY, hours % HOURS_PER_DAY)
}

/// Format an amount with comma thousands separators.
#[must_use]
pub fn format_amount(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

/// Title line for a player's summary.
///
/// A category breakdown names the category; the overview does not.
#[must_use]
pub fn progress_title(
    snapshot: &PlayerSnapshot,
    category: Option<Category>,
    town_hall: u32,
) -> String {
    let scope = match category {
        Some(category) => format!("{} at ", category.label().to_lowercase()),
        None => String::new(),
    };
    format!(
        "Resources remaining until {} ({}) has maxed {scope}Town Hall level {town_hall}",
        snapshot.name, snapshot.tag
    )
}

fn row_cells(record: &ProgressionRecord) -> [String; 6] {
    [
        record.name.clone(),
        record.remaining_level.to_string(),
        format_hours(record.remaining_time),
        format_amount(record.remaining_cost.elixir),
        format_amount(record.remaining_cost.dark_elixir),
        format_amount(record.remaining_cost.gold),
    ]
}

/// Render a summary as an aligned text table.
///
/// The name column is left-aligned, all others right-aligned. Skipped
/// units are listed after the table.
#[must_use]
pub fn render_table(catalog: &UnitCatalog, summary: &Summary) -> String {
    let header = [
        "Name".to_string(),
        "Level".to_string(),
        "Time".to_string(),
        catalog.resource_name(Resource::Elixir).to_string(),
        catalog.resource_name(Resource::DarkElixir).to_string(),
        catalog.resource_name(Resource::Gold).to_string(),
    ];
    let rows: Vec<[String; 6]> = summary.rows.iter().map(row_cells).collect();

    let mut widths = [0usize; 6];
    for row in std::iter::once(&header).chain(&rows) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(&rows) {
        let mut line = String::new();
        for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
            if i == 0 {
                let _ = write!(line, "{cell:<width$}");
            } else {
                let _ = write!(line, " | {cell:>width$}");
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    for skipped in &summary.skipped {
        let _ = writeln!(out, "Skipped {}: {}", skipped.name, skipped.error);
    }

    out
}

/// JSON shape of `progress --json` output.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Player name.
    pub player: &'a str,
    /// Player tag.
    pub tag: &'a str,
    /// Town-Hall tier the rows were computed for.
    pub town_hall: u32,
    /// Rows in display order.
    pub rows: &'a [ProgressionRecord],
    /// Names of units left out of the figures.
    pub skipped: Vec<&'a str>,
}

impl<'a> JsonReport<'a> {
    /// Borrow a summary for serialization.
    #[must_use]
    pub fn new(snapshot: &'a PlayerSnapshot, summary: &'a Summary) -> Self {
        Self {
            player: &snapshot.name,
            tag: &snapshot.tag,
            town_hall: summary.town_hall,
            rows: &summary.rows,
            skipped: summary.skipped.iter().map(|s| s.name.as_str()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coc_core::summary::{category_breakdown, overview};
    use coc_test_utils::fixtures::{sample_catalog, sample_snapshot};

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0), "0d 0h");
        assert_eq!(format_hours(23), "0d 23h");
        assert_eq!(format_hours(50), "2d 2h");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0");
        assert_eq!(format_amount(999), "999");
        assert_eq!(format_amount(1_000), "1,000");
        assert_eq!(format_amount(43_000), "43,000");
        assert_eq!(format_amount(1_234_567), "1,234,567");
    }

    #[test]
    fn test_progress_title() {
        assert_eq!(
            progress_title(&sample_snapshot(), None, 9),
            "Resources remaining until Chief (#2PP0JQC9L) has maxed Town Hall level 9"
        );
    }

    #[test]
    fn test_progress_title_names_category() {
        let snapshot = sample_snapshot();
        assert_eq!(
            progress_title(&snapshot, Some(Category::Hero), 9),
            "Resources remaining until Chief (#2PP0JQC9L) has maxed heroes at Town Hall level 9"
        );
        assert_eq!(
            progress_title(&snapshot, Some(Category::Spell), 11),
            "Resources remaining until Chief (#2PP0JQC9L) has maxed spells at Town Hall level 11"
        );
    }

    #[test]
    fn test_render_hero_table() {
        let catalog = sample_catalog();
        let summary = category_breakdown(&catalog, &sample_snapshot(), Category::Hero, None).unwrap();
        let table = render_table(&catalog, &summary);
        let lines: Vec<_> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[0].ends_with("Gold"));
        assert!(lines[0].contains("Dark Elixir"));
        assert!(lines[4].starts_with("Total"));
        assert!(lines[4].contains("43,000"));
        // Columns line up.
        let bars: Vec<_> = lines.iter().map(|l| l.find('|')).collect();
        assert!(bars.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_json_report() {
        let catalog = sample_catalog();
        let snapshot = sample_snapshot();
        let summary = overview(&catalog, &snapshot, None).unwrap();

        let value = serde_json::to_value(JsonReport::new(&snapshot, &summary)).unwrap();
        assert_eq!(value["town_hall"], 9);
        assert_eq!(value["rows"].as_array().unwrap().len(), 4);
        assert_eq!(value["rows"][3]["name"], "Total");
    }
}
