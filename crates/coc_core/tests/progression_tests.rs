//! End-to-end progression tests against the sample catalog.

use coc_core::prelude::*;
use coc_test_utils::fixtures::{
    level, sample_catalog, sample_catalog_data, sample_snapshot, unit_data, SAMPLE_TOWN_HALLS,
};

fn max_level(catalog: &UnitCatalog, category: Category, name: &str, town_hall: u32) -> u32 {
    catalog
        .get(category, name)
        .expect("unit in sample catalog")
        .max_level_at_tier(catalog, town_hall)
        .unwrap()
}

// ==========================================================================
// Max level at tier
// ==========================================================================

#[test]
fn test_hero_max_level_at_own_tier() {
    let catalog = sample_catalog();
    assert_eq!(max_level(&catalog, Category::Hero, "Archer Queen", 9), 5);
}

#[test]
fn test_hero_unavailable_below_first_gate() {
    let catalog = sample_catalog();
    assert_eq!(max_level(&catalog, Category::Hero, "Archer Queen", 8), 0);
}

#[test]
fn test_troop_gated_by_lab_and_building() {
    let catalog = sample_catalog();
    // Town Hall 7 -> Laboratory 4; Dark Barracks unlocks at Town Hall 7.
    assert_eq!(catalog.town_hall_to_lab(7).unwrap(), 4);
    assert_eq!(max_level(&catalog, Category::Troop, "Minion", 7), 3);
    // Town Hall 6 still has Laboratory 4 but no Dark Barracks.
    assert_eq!(max_level(&catalog, Category::Troop, "Minion", 6), 0);
}

#[test]
fn test_max_level_is_monotonic_across_known_tiers() {
    let catalog = sample_catalog();

    for category in Category::ALL {
        for (name, definition) in catalog.load_category(category).unwrap() {
            let mut previous = 0;
            for town_hall in SAMPLE_TOWN_HALLS {
                let current = definition.max_level_at_tier(&catalog, town_hall).unwrap();
                assert!(
                    current >= previous,
                    "{name} dropped from {previous} to {current} at Town Hall {town_hall}"
                );
                assert!(current <= definition.max_absolute_level());
                previous = current;
            }
        }
    }
}

#[test]
fn test_upgrade_cost_prefix_sums() {
    let mut data = unit_data("Wizard", Category::Troop, &[1, 4, 4], Resource::Elixir, Some("Barracks"));
    data.upgrade_cost = vec![1_000, 2_000, 4_000];
    let definition = UnitDefinition::from_data(data).unwrap();

    assert_eq!(definition.upgrade_cost(2), 3_000);
    assert_eq!(definition.upgrade_cost(0), 0);
}

// ==========================================================================
// Records and totals
// ==========================================================================

#[test]
fn test_sum_of_single_bucket_records() {
    let gold = ProgressionRecord {
        name: "a".to_string(),
        remaining_cost: ResourceAmounts::single(Resource::Gold, 100),
        ..ProgressionRecord::default()
    };
    let elixir = ProgressionRecord {
        name: "b".to_string(),
        remaining_cost: ResourceAmounts::single(Resource::Elixir, 50),
        ..ProgressionRecord::default()
    };

    let total = ProgressionRecord::sum([&gold, &elixir], "Total");
    assert_eq!(total.name, "Total");
    assert_eq!(total.remaining_cost.gold, 100);
    assert_eq!(total.remaining_cost.elixir, 50);
}

#[test]
fn test_current_level_above_viewed_tier_is_clamped() {
    let catalog = sample_catalog();
    let queen = catalog.get(Category::Hero, "Archer Queen").unwrap();
    // Level 8 player looking at Town Hall 9, where the cap is 5.
    let units = [Unit::new(queen, 8)];

    let computed = ProgressionAggregator::new(&catalog)
        .compute_records(&units, 9)
        .unwrap();
    let record = &computed.records[0];

    assert_eq!(record.max_level, 5);
    assert_eq!(record.remaining_level, 0);
    assert_eq!(record.remaining_time, 0);
    assert!(record.remaining_cost.is_zero());
}

#[test]
fn test_compute_records_is_idempotent() {
    let catalog = sample_catalog();
    let snapshot = sample_snapshot();
    let units = catalog
        .instantiate(Category::Troop, snapshot.units(Category::Troop))
        .unwrap();
    let aggregator = ProgressionAggregator::new(&catalog);

    let first = aggregator.compute_records(&units, 9).unwrap();
    let second = aggregator.compute_records(&units, 9).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unit_contributes_to_one_bucket_only() {
    let catalog = sample_catalog();
    let units = catalog.instantiate(Category::Troop, &[]).unwrap();

    let computed = ProgressionAggregator::new(&catalog)
        .compute_records(&units, 11)
        .unwrap();

    for record in &computed.records {
        let definition = catalog.get(Category::Troop, &record.name).unwrap();
        let resource = definition.upgrade_resource();
        assert_eq!(record.max_cost.total(), record.max_cost.get(resource), "{}", record.name);
    }
}

#[test]
fn test_unknown_building_propagates() {
    let mut data = sample_catalog_data();
    data.troops[0].unlock_building = Some("Barracks 2".to_string());
    let catalog = UnitCatalog::from_data(data).unwrap();
    let units = catalog.instantiate(Category::Troop, &[]).unwrap();

    let result = ProgressionAggregator::new(&catalog).compute_records(&units, 9);
    assert_eq!(result, Err(CalcError::UnknownBuilding("Barracks 2".to_string())));
}

// ==========================================================================
// Summaries
// ==========================================================================

#[test]
fn test_category_breakdown_rows_in_display_order() {
    let catalog = sample_catalog();
    let summary = category_breakdown(&catalog, &sample_snapshot(), Category::Hero, None).unwrap();

    let names: Vec<_> = summary.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Barbarian King", "Archer Queen", "Grand Warden", TOTAL_LABEL]);
    assert_eq!(summary.town_hall, 9);

    // Barbarian King 6 -> 10, Archer Queen 3 -> 5, Grand Warden locked.
    let total = summary.total().unwrap();
    assert_eq!(total.remaining_level, 4 + 2);
    assert_eq!(summary.rows[2].max_level, 0);
    // Dark Elixir: (55 - 21) * 1000 + (15 - 6) * 1000.
    assert_eq!(total.remaining_cost.dark_elixir, 43_000);
    assert_eq!(total.remaining_cost.elixir, 0);
}

#[test]
fn test_category_breakdown_with_target_tier() {
    let catalog = sample_catalog();
    let summary =
        category_breakdown(&catalog, &sample_snapshot(), Category::Hero, Some(11)).unwrap();

    assert_eq!(summary.town_hall, 11);
    let warden = summary.rows.iter().find(|r| r.name == "Grand Warden").unwrap();
    assert_eq!(warden.current_level, 0);
    assert_eq!(warden.remaining_level, 5);
    assert_eq!(warden.remaining_cost.elixir, 15_000);
}

#[test]
fn test_overview_totals_match_breakdowns() {
    let catalog = sample_catalog();
    let snapshot = sample_snapshot();
    let overview = overview(&catalog, &snapshot, None).unwrap();

    let names: Vec<_> = overview.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Heroes", "Troops", "Spells", TOTAL_LABEL]);

    for (row, category) in overview.rows.iter().zip(Category::ALL) {
        let breakdown = category_breakdown(&catalog, &snapshot, category, None).unwrap();
        let expected = breakdown.total().unwrap();
        assert_eq!(row.remaining_cost, expected.remaining_cost, "{}", row.name);
        assert_eq!(row.remaining_time, expected.remaining_time, "{}", row.name);
    }

    let grand = overview.total().unwrap();
    let flat: Vec<_> = Category::ALL
        .iter()
        .flat_map(|&category| {
            category_breakdown(&catalog, &snapshot, category, None)
                .unwrap()
                .rows
                .into_iter()
                .filter(|r| r.name != TOTAL_LABEL)
        })
        .collect();
    assert_eq!(grand.remaining_cost, ProgressionRecord::sum(&flat, TOTAL_LABEL).remaining_cost);
}

#[test]
fn test_breakdown_ignores_builder_base_and_unknown_units() {
    let catalog = sample_catalog();
    let mut snapshot = sample_snapshot();
    snapshot.troops.push(level("Electro Dragon", 3));

    let summary = category_breakdown(&catalog, &snapshot, Category::Troop, None).unwrap();
    assert!(summary.rows.iter().all(|r| r.name != "Electro Dragon"));
    assert_eq!(summary.rows.len(), 4);
}

#[test]
fn test_breakdown_reports_skipped_units() {
    let mut data = sample_catalog_data();
    data.spells[1].tier_gate.clear();
    let catalog = UnitCatalog::from_data(data).unwrap();

    let summary = category_breakdown(&catalog, &sample_snapshot(), Category::Spell, None).unwrap();
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].name, "Poison Spell");
    let names: Vec<_> = summary.rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Lightning Spell", TOTAL_LABEL]);
}

#[test]
fn test_sample_data_is_valid() {
    let errors = sample_catalog_data().validate();
    assert!(errors.is_empty(), "Errors: {errors:?}");
}
