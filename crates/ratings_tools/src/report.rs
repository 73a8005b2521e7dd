//! Rating reports over a universe snapshot.

use std::fmt;

use ratings_core::combine::combine_all;
use ratings_core::data::Universe;
use ratings_core::fleet::FleetRating;
use ratings_core::grades::{apply_piloting_grades, SpeciesGradeCache};
use ratings_core::model::RatingModel;
use ratings_core::rating::ShipRating;
use ratings_core::standard::{empire_standard_fighter, ShipCensus};
use ratings_core::stats::StatSnapshot;
use ratings_core::universe::{FleetId, GameUniverse};
use serde::Serialize;

use crate::load::Result;

/// What to rate and how.
#[derive(Debug, Clone, Default)]
pub struct RateOptions {
    /// Fleets to rate; all military fleets when empty.
    pub fleets: Vec<FleetId>,
    /// Fleet whose most common ship is the enemy profile.
    pub enemy_fleet: Option<FleetId>,
    /// Rate ships at full (refuelled, repaired) strength.
    pub consider_refuel: bool,
    /// Adjust ship stats by their crew's piloting grades.
    pub apply_pilots: bool,
    /// Model constants.
    pub model: RatingModel,
}

/// Rating of one fleet.
#[derive(Debug, Clone, Serialize)]
pub struct FleetReport {
    /// Fleet rated.
    pub fleet: FleetId,
    /// Ships captured.
    pub ships: usize,
    /// Whether any ship can deal damage.
    pub armed: bool,
    /// Combined rating.
    pub rating: f64,
}

/// Ratings of several fleets.
#[derive(Debug, Clone, Serialize)]
pub struct RatingReport {
    /// Enemy profile used, if any.
    pub enemy: Option<StatSnapshot>,
    /// Per-fleet ratings.
    pub fleets: Vec<FleetReport>,
    /// All fleet ratings combined.
    pub combined: f64,
}

/// The standard fighter and how representative it is.
#[derive(Debug, Clone, Serialize)]
pub struct StandardReport {
    /// Standard fighter stats.
    pub stats: StatSnapshot,
    /// Its neutral rating.
    pub rating: f64,
    /// Ships sharing this profile.
    pub count: u32,
    /// Military ships counted.
    pub total: u32,
}

/// Rate the requested fleets.
///
/// Unlike the rating engine itself, an explicitly requested fleet that does
/// not exist is an error here.
pub fn rate(universe: &Universe, options: &RateOptions) -> Result<RatingReport> {
    let fleet_ids = if options.fleets.is_empty() {
        universe.military_fleet_ids()
    } else {
        for &id in &options.fleets {
            universe.fleet(id)?;
        }
        options.fleets.clone()
    };

    let enemy = match options.enemy_fleet {
        Some(id) => {
            universe.fleet(id)?;
            let mut census = ShipCensus::default();
            census.add_fleet(&FleetRating::from_fleet(universe, id, false));
            census
                .mode()
                .map(|(signature, _)| StatSnapshot::from_signature(signature))
        }
        None => None,
    };

    let mut grades = SpeciesGradeCache::new(universe);
    let fleets: Vec<FleetReport> = fleet_ids
        .into_iter()
        .map(|id| {
            let fleet = if options.apply_pilots {
                piloted_fleet(universe, id, options, &mut grades)
            } else {
                FleetRating::from_fleet_with_model(
                    universe,
                    id,
                    options.consider_refuel,
                    options.model,
                )
            };
            let report = FleetReport {
                fleet: id,
                ships: fleet.len(),
                armed: fleet.has_armed_ships(),
                rating: fleet.get_rating(enemy.as_ref()),
            };
            tracing::debug!(fleet = %id, rating = report.rating, "Rated fleet");
            report
        })
        .collect();

    let combined = combine_all(fleets.iter().map(|fleet| fleet.rating));
    Ok(RatingReport {
        enemy,
        fleets,
        combined,
    })
}

fn piloted_fleet(
    universe: &Universe,
    fleet_id: FleetId,
    options: &RateOptions,
    grades: &mut SpeciesGradeCache<&Universe>,
) -> FleetRating {
    let ship_ids = universe.fleet_ship_ids(fleet_id).unwrap_or_default();
    let ships = ship_ids
        .into_iter()
        .map(|ship_id| {
            let stats = StatSnapshot::from_ship(universe, ship_id, options.consider_refuel);
            let species = universe
                .ship_data(ship_id)
                .ok()
                .and_then(|ship| ship.species.as_deref());
            let stats = match species {
                Some(species) => {
                    apply_piloting_grades(&stats, &grades.get_piloting_grades(species))
                }
                None => stats,
            };
            ShipRating::with_model(stats, options.model)
        })
        .collect();
    FleetRating::from_ratings(ships)
}

/// Describe the empire's standard fighter.
pub fn standard(universe: &Universe) -> StandardReport {
    let census = ShipCensus::of_military(universe);
    let fighter = empire_standard_fighter(universe);
    let stats = fighter.stats().clone();
    StandardReport {
        count: census.count(&stats.signature()),
        total: census.total(),
        rating: fighter.get_rating(None),
        stats,
    }
}

impl fmt::Display for RatingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.enemy {
            Some(enemy) => writeln!(f, "Enemy: {enemy}")?,
            None => writeln!(f, "Enemy: neutral baseline")?,
        }
        for fleet in &self.fleets {
            writeln!(
                f,
                "{:<12} ships {:>3}  armed {:<5}  rating {:>12.2}",
                fleet.fleet.to_string(),
                fleet.ships,
                fleet.armed,
                fleet.rating
            )?;
        }
        write!(f, "Combined rating {:.2}", self.combined)
    }
}

impl fmt::Display for StandardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Standard fighter: {}", self.stats)?;
        writeln!(f, "Shared by {} of {} military ships", self.count, self.total)?;
        write!(f, "Neutral rating {:.2}", self.rating)
    }
}

#[cfg(test)]
mod tests {
    use ratings_core::error::RatingError;
    use ratings_core::universe::{FleetRole, ShipId};

    use super::*;
    use crate::load::ToolError;

    fn universe() -> Universe {
        let mut data = ratings_test_utils::fixtures::UniverseBuilder::new()
            .warship(1, 4.0, 1, 15.0, 0.0)
            .warship(2, 4.0, 1, 15.0, 0.0)
            .warship(3, 3.0, 1, 10.0, 1.0)
            .military_fleet(100, &[1])
            .military_fleet(101, &[2])
            .fleet(200, FleetRole::Other, &[3])
            .species("SP_SHIELDED", &["GOOD_SHIELDS"])
            .into_data();
        data.ships[1].species = Some("SP_SHIELDED".to_string());
        Universe::from_data(data)
    }

    #[test]
    fn test_rates_all_military_by_default() {
        let report = rate(&universe(), &RateOptions::default()).expect("report");
        assert_eq!(report.fleets.len(), 2);
        assert!((report.combined - 240.0).abs() < 1e-9);
        assert!(report.enemy.is_none());
    }

    #[test]
    fn test_unknown_fleet_is_error() {
        let options = RateOptions {
            fleets: vec![FleetId(999)],
            ..RateOptions::default()
        };
        assert!(matches!(
            rate(&universe(), &options),
            Err(ToolError::Rating(RatingError::FleetNotFound(FleetId(999))))
        ));
    }

    #[test]
    fn test_enemy_fleet_profile() {
        let options = RateOptions {
            fleets: vec![FleetId(100)],
            enemy_fleet: Some(FleetId(200)),
            ..RateOptions::default()
        };
        let report = rate(&universe(), &options).expect("report");
        let enemy = report.enemy.expect("enemy profile");
        assert_eq!(enemy.to_raw(), (vec![(3.0, 1)], 10.0, 1.0, 0.0, 0.0, 0.0));
        // (4 - 1) attack * 15 structure
        assert!((report.fleets[0].rating - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_pilots_adjust_shields() {
        let options = RateOptions {
            fleets: vec![FleetId(101)],
            apply_pilots: true,
            ..RateOptions::default()
        };
        let report = rate(&universe(), &options).expect("report");
        // GOOD shields add 1 to structure in the neutral baseline.
        assert!((report.fleets[0].rating - 4.0 * 16.0).abs() < 1e-9);
        let piloted = universe();
        let ship = piloted.ship_data(ShipId(2)).expect("ship");
        assert_eq!(ship.species.as_deref(), Some("SP_SHIELDED"));
    }

    #[test]
    fn test_standard_report() {
        let report = standard(&universe());
        assert_eq!(report.count, 2);
        assert_eq!(report.total, 2);
        assert!((report.rating - 60.0).abs() < 1e-9);
        assert!(report.to_string().starts_with("Standard fighter: attacks [4x1]"));
    }

    #[test]
    fn test_report_json() {
        let report = rate(&universe(), &RateOptions::default()).expect("report");
        let json = serde_json::to_value(&report).expect("json");
        assert_eq!(json["fleets"][0]["fleet"], 100);
        assert!(report.to_string().contains("Combined rating 240.00"));
    }
}
