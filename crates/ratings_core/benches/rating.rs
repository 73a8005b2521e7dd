//! Rating benchmarks for ratings_core.
//!
//! Run with: `cargo bench -p ratings_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ratings_core::combine::combine_all;
use ratings_core::fleet::{empire_rating, FleetRating};
use ratings_core::rating::ShipRating;
use ratings_core::stats::StatSnapshot;
use ratings_core::universe::FleetId;
use ratings_test_utils::fixtures::UniverseBuilder;

/// Runs rating benchmarks for the ratings_core crate.
pub fn rating_benchmark(c: &mut Criterion) {
    let carrier = ShipRating::new(StatSnapshot::from((
        vec![(18.0, 2), (6.0, 3)],
        120.0,
        4.0,
        8.0,
        3.0,
        6.0,
    )));
    let enemy = StatSnapshot::from((vec![(15.0, 4)], 96.0, 2.0, 0.0, 0.0, 0.0));

    c.bench_function("ship_rating_vs_enemy", |b| {
        b.iter(|| black_box(&carrier).get_rating(Some(black_box(&enemy))))
    });

    let ratings: Vec<f64> = (0..1000).map(f64::from).collect();
    c.bench_function("combine_1000", |b| {
        b.iter(|| combine_all(black_box(&ratings).iter().copied()))
    });

    let mut builder = UniverseBuilder::new();
    for fleet in 0..50 {
        let first = fleet * 10;
        let ships: Vec<i32> = (first..first + 10).collect();
        for &id in &ships {
            builder = builder.warship(id, 18.0, 3, 48.0, f64::from(id % 3));
        }
        builder = builder.military_fleet(1000 + fleet, &ships);
    }
    let universe = builder.build();

    c.bench_function("fleet_rating_10_ships", |b| {
        b.iter(|| FleetRating::from_fleet(&universe, FleetId(1000), false).get_rating(Some(&enemy)))
    });

    c.bench_function("empire_rating_50_fleets", |b| {
        b.iter(|| empire_rating(&universe, Some(black_box(&enemy)), true))
    });
}

criterion_group!(benches, rating_benchmark);
criterion_main!(benches);
