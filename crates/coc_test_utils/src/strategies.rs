//! Proptest strategies for progression testing.
//!
//! These strategies generate random but reproducible tier-gate tables,
//! unit definitions and records for property-based tests.

use proptest::prelude::*;

use coc_core::data::{Category, UnitData};
use coc_core::progression::ProgressionRecord;
use coc_core::resource::{Resource, ResourceAmounts};

/// Generate a tier value (0-15).
pub fn arb_tier() -> impl Strategy<Value = u32> {
    0u32..16
}

/// Generate a non-empty, non-decreasing tier-gate table.
pub fn arb_tier_gate(max_len: usize) -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(1u32..15, 1..max_len).prop_map(|mut gates| {
        gates.sort_unstable();
        gates
    })
}

/// Generate a non-empty tier-gate table in any order.
pub fn arb_unsorted_tier_gate(max_len: usize) -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(1u32..15, 1..max_len)
}

/// Generate any upgrade resource.
pub fn arb_resource() -> impl Strategy<Value = Resource> {
    prop_oneof![
        Just(Resource::Elixir),
        Just(Resource::DarkElixir),
        Just(Resource::Gold),
    ]
}

/// Generate a hero with matching cost and time tables.
pub fn arb_hero_data() -> impl Strategy<Value = UnitData> {
    (arb_tier_gate(12), arb_resource())
        .prop_flat_map(|(tier_gate, resource)| {
            let levels = tier_gate.len();
            (
                Just(tier_gate),
                Just(resource),
                proptest::collection::vec(0u64..10_000_000, levels),
                proptest::collection::vec(0u64..500, levels),
            )
        })
        .prop_map(|(tier_gate, upgrade_resource, upgrade_cost, upgrade_time)| UnitData {
            name: "Generated Hero".to_string(),
            category: Category::Hero,
            tier_gate,
            upgrade_cost,
            upgrade_time,
            upgrade_resource,
            unlock_building: None,
        })
}

/// Generate resource amounts.
pub fn arb_amounts() -> impl Strategy<Value = ResourceAmounts> {
    (0u64..1_000_000_000, 0u64..1_000_000, 0u64..1_000_000_000).prop_map(
        |(elixir, dark_elixir, gold)| ResourceAmounts {
            elixir,
            dark_elixir,
            gold,
        },
    )
}

/// Generate an arbitrary record.
pub fn arb_record() -> impl Strategy<Value = ProgressionRecord> {
    (
        (0u32..100, 0u32..100, 0u32..100),
        (0u64..10_000, 0u64..10_000, 0u64..10_000),
        arb_amounts(),
        arb_amounts(),
    )
        .prop_map(
            |(
                (current_level, max_level, remaining_level),
                (current_time, max_time, remaining_time),
                remaining_cost,
                max_cost,
            )| ProgressionRecord {
                name: "generated".to_string(),
                current_level,
                max_level,
                remaining_level,
                current_time,
                max_time,
                remaining_time,
                remaining_cost,
                max_cost,
            },
        )
}

/// Generate a list of records.
pub fn arb_record_list(max_len: usize) -> impl Strategy<Value = Vec<ProgressionRecord>> {
    proptest::collection::vec(arb_record(), 0..max_len)
}
