//! Fleet, empire and standard fighter ratings over in-memory universes.

use ratings_core::fleet::{empire_rating, fleet_rating, FleetRating};
use ratings_core::grades::{Grade, PilotingGrades, SpeciesGradeCache};
use ratings_core::stats::StatSnapshot;
use ratings_core::standard::{empire_standard_fighter, ShipCensus};
use ratings_core::universe::{FleetId, FleetRole};
use ratings_test_utils::fixtures::{ship, UniverseBuilder};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9 * a.abs().max(1.0), "{a} != {b}");
}

#[test]
fn fleet_of_two_frigates_quadruples() {
    let universe = UniverseBuilder::new()
        .warship(1, 4.0, 1, 15.0, 0.0)
        .warship(2, 4.0, 1, 15.0, 0.0)
        .military_fleet(100, &[1, 2])
        .build();

    let fleet = FleetRating::from_fleet(&universe, FleetId(100), false);
    assert_eq!(fleet.len(), 2);
    assert_close(fleet.get_rating(None), 240.0);
    assert_close(fleet_rating(&universe, FleetId(100), None), 240.0);
}

#[test]
fn same_enemy_profile_applies_to_every_ship() {
    let universe = UniverseBuilder::new()
        .warship(1, 5.0, 2, 20.0, 0.0)
        .warship(2, 5.0, 2, 20.0, 0.0)
        .military_fleet(100, &[1, 2])
        .build();
    let enemy = ship(&[(3.0, 1)], 10.0, 1.0);

    // Each ship rates 160 against the enemy; two equal ratings combine to 4x.
    assert_close(fleet_rating(&universe, FleetId(100), Some(&enemy)), 640.0);
}

#[test]
fn missing_fleet_and_ships_degrade_to_zero() {
    let universe = UniverseBuilder::new()
        .warship(1, 4.0, 1, 15.0, 0.0)
        .military_fleet(100, &[1, 99])
        .build();

    assert_eq!(fleet_rating(&universe, FleetId(404), None), 0.0);

    let fleet = FleetRating::from_fleet(&universe, FleetId(100), false);
    assert_eq!(fleet.len(), 2);
    assert_eq!(fleet.ship_combat_stats()[1].stats(), &StatSnapshot::empty());
    assert_close(fleet.get_rating(None), 60.0);
}

#[test]
fn carrier_fleet_is_armed() {
    let universe = UniverseBuilder::new()
        .carrier(1, 30.0, 4.0, 2.0, 6.0)
        .warship(2, 0.0, 0, 80.0, 0.0)
        .military_fleet(100, &[1])
        .fleet(101, FleetRole::Exploration, &[2])
        .build();

    assert!(FleetRating::from_fleet(&universe, FleetId(100), true).has_armed_ships());
    assert!(!FleetRating::from_fleet(&universe, FleetId(101), true).has_armed_ships());
    assert_close(fleet_rating(&universe, FleetId(100), None), 8.8 * 33.52);
}

#[test]
fn empire_rating_combines_military_fleets_only() {
    let universe = UniverseBuilder::new()
        .warship(1, 4.0, 1, 15.0, 0.0)
        .warship(2, 4.0, 1, 15.0, 0.0)
        .warship(3, 40.0, 5, 500.0, 0.0)
        .military_fleet(100, &[1])
        .military_fleet(101, &[2])
        .fleet(102, FleetRole::Invasion, &[3])
        .build();

    assert_close(empire_rating(&universe, None, true), 240.0);
}

#[test]
fn standard_fighter_is_most_common_military_ship() {
    let universe = UniverseBuilder::new()
        .warship(1, 18.0, 3, 48.0, 0.0)
        .warship(2, 18.0, 3, 48.0, 0.0)
        .warship(3, 6.0, 1, 16.0, 0.0)
        .warship(4, 6.0, 1, 16.0, 0.0)
        .warship(5, 6.0, 1, 16.0, 0.0)
        .military_fleet(100, &[1, 3])
        .military_fleet(101, &[2])
        .fleet(102, FleetRole::Exploration, &[4, 5])
        .build();

    let census = ShipCensus::of_military(&universe);
    assert_eq!(census.total(), 3);

    let standard = empire_standard_fighter(&universe);
    assert_eq!(standard.stats(), &ship(&[(18.0, 3)], 48.0, 0.0));
}

#[test]
fn standard_fighter_defaults_without_military() {
    let universe = UniverseBuilder::new()
        .warship(1, 18.0, 3, 48.0, 0.0)
        .fleet(100, FleetRole::Exploration, &[1])
        .build();

    let standard = empire_standard_fighter(&universe);
    assert_eq!(standard.stats(), &StatSnapshot::default_ship());
    assert_close(standard.get_rating(None), 60.0);
}

#[test]
fn grade_cache_reads_universe_species() {
    let universe = UniverseBuilder::new()
        .species("SP_HUMAN", &["AVERAGE_SUPPLY", "GOOD_SHIELDS"])
        .species("SP_EGASSEM", &["GREAT_ATTACKTROOPS", "BAD_WEAPONS"])
        .build();
    let mut cache = SpeciesGradeCache::new(&universe);

    assert_eq!(
        cache.get_piloting_grades("SP_EGASSEM"),
        PilotingGrades {
            weapons: Grade::Bad,
            shields: Grade::Neutral,
            troops: Grade::Great,
        }
    );
    assert_eq!(cache.get_piloting_grades("SP_HUMAN").shields, Grade::Good);
    assert_eq!(cache.get_piloting_grades("SP_HUMAN").shields, Grade::Good);
    assert_eq!(cache.len(), 2);
}
