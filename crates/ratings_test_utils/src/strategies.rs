//! Property-based testing strategies.
//!
//! Ranges are kept within what real ship designs produce so that products
//! of ratings stay well inside `f64` precision.

use proptest::prelude::*;
use ratings_core::stats::StatSnapshot;

/// Generate a non-negative rating.
pub fn arb_rating() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 0.0f64..1.0e6]
}

/// Generate a per-shot damage value (positive).
pub fn arb_damage() -> impl Strategy<Value = f64> {
    (1u32..400u32).prop_map(|tenths| f64::from(tenths) / 10.0)
}

/// Generate an attack profile of up to `max_kinds` damage values.
pub fn arb_attacks(max_kinds: usize) -> impl Strategy<Value = Vec<(f64, u32)>> {
    proptest::collection::vec((arb_damage(), 1u32..6u32), 0..=max_kinds)
}

/// Generate structure (0-500).
pub fn arb_structure() -> impl Strategy<Value = f64> {
    (0u32..500u32).prop_map(f64::from)
}

/// Generate shields (0-20).
pub fn arb_shields() -> impl Strategy<Value = f64> {
    (0u32..20u32).prop_map(f64::from)
}

/// Generate a fighter complement `(capacity, launch_rate, damage)`.
pub fn arb_fighters() -> impl Strategy<Value = (f64, f64, f64)> {
    prop_oneof![
        Just((0.0, 0.0, 0.0)),
        (0u32..12u32, 0u32..6u32, 1u32..12u32)
            .prop_map(|(c, l, d)| (f64::from(c), f64::from(l), f64::from(d))),
    ]
}

/// Generate a complete ship snapshot.
pub fn arb_stats() -> impl Strategy<Value = StatSnapshot> {
    (arb_attacks(3), arb_structure(), arb_shields(), arb_fighters()).prop_map(
        |(attacks, structure, shields, (capacity, launch_rate, damage))| {
            StatSnapshot::from((attacks, structure, shields, capacity, launch_rate, damage))
        },
    )
}

/// Generate a ship snapshot with no weapons and no fighters.
pub fn arb_unarmed_stats() -> impl Strategy<Value = StatSnapshot> {
    (arb_structure(), arb_shields()).prop_map(|(structure, shields)| {
        StatSnapshot::from((vec![], structure, shields, 0.0, 0.0, 0.0))
    })
}
