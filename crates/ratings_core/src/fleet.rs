//! Fleet and empire level ratings.
//!
//! A [`FleetRating`] is a snapshot: it reads every ship once at construction
//! and does not follow later changes to the fleet. Rebuild it to refresh.

use tracing::debug;

use crate::combine::combine_all;
use crate::model::RatingModel;
use crate::rating::ShipRating;
use crate::stats::{StatSignature, StatSnapshot};
use crate::universe::{FleetId, GameUniverse};

/// Ratings of every ship in one fleet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetRating {
    ships: Vec<ShipRating>,
}

impl FleetRating {
    /// Wrap already-built ship ratings.
    #[must_use]
    pub fn from_ratings(ships: Vec<ShipRating>) -> Self {
        Self { ships }
    }

    /// Read every ship of a fleet with the default model.
    ///
    /// A fleet that does not resolve yields an empty rating.
    pub fn from_fleet<U: GameUniverse>(
        universe: &U,
        fleet_id: FleetId,
        consider_refuel: bool,
    ) -> Self {
        Self::from_fleet_with_model(universe, fleet_id, consider_refuel, RatingModel::default())
    }

    /// Read every ship of a fleet with a custom model.
    pub fn from_fleet_with_model<U: GameUniverse>(
        universe: &U,
        fleet_id: FleetId,
        consider_refuel: bool,
        model: RatingModel,
    ) -> Self {
        let Some(ship_ids) = universe.fleet_ship_ids(fleet_id) else {
            debug!(fleet = %fleet_id, "Fleet not resolvable, using empty rating");
            return Self::default();
        };
        let model = model.or_default();
        let ships = ship_ids
            .into_iter()
            .map(|id| ShipRating::from_ship(universe, id, consider_refuel, model))
            .collect();
        Self { ships }
    }

    /// Combined rating of all ships against the same `enemy` profile.
    ///
    /// Empty fleets rate 0.
    #[must_use]
    pub fn get_rating(&self, enemy: Option<&StatSnapshot>) -> f64 {
        combine_all(self.ships.iter().map(|ship| ship.get_rating(enemy)))
    }

    /// Per-ship rating wrappers.
    #[must_use]
    pub fn ship_combat_stats(&self) -> &[ShipRating] {
        &self.ships
    }

    /// Per-ship stats in canonical form.
    #[must_use]
    pub fn ship_stats(&self) -> Vec<StatSignature> {
        self.ships.iter().map(|ship| ship.stats().signature()).collect()
    }

    /// Number of ships captured.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ships.len()
    }

    /// Whether no ships were captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Whether any ship can deal damage.
    #[must_use]
    pub fn has_armed_ships(&self) -> bool {
        self.ships.iter().any(|ship| ship.stats().is_armed())
    }
}

/// Rate a fleet as it currently stands (no refuel/repair assumed).
pub fn fleet_rating<U: GameUniverse>(
    universe: &U,
    fleet_id: FleetId,
    enemy: Option<&StatSnapshot>,
) -> f64 {
    FleetRating::from_fleet(universe, fleet_id, false).get_rating(enemy)
}

/// Combined rating of every military fleet.
pub fn empire_rating<U: GameUniverse>(
    universe: &U,
    enemy: Option<&StatSnapshot>,
    consider_refuel: bool,
) -> f64 {
    combine_all(
        universe
            .military_fleet_ids()
            .into_iter()
            .map(|id| FleetRating::from_fleet(universe, id, consider_refuel).get_rating(enemy)),
    )
}
