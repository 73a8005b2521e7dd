//! Per-ship combat rating.
//!
//! A rating is `effective attack × effective structure`, so a ship lacking
//! either offense or survivability rates zero on its own.
//!
//! Against a concrete enemy the model is asymmetric:
//! - my shields shrink each enemy shot (floored at a small epsilon), and the
//!   damage they absorb scales my structure up, capped at
//!   [`RatingModel::max_shield_factor`];
//! - enemy shields shrink each of my shots the same way.
//!
//! Without an enemy, shields simply add to structure.
//!
//! Fighters add damage averaged over the combat bouts, and fighters shot
//! down soak enemy shots, which counts as extra structure.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::model::RatingModel;
use crate::stats::{BasicStats, FighterStats, StatSnapshot};
use crate::universe::{GameUniverse, ShipId};

/// Fighters launched in each of the first two bouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FighterWaves {
    /// Fighters launched in bout 1.
    pub first: f64,
    /// Fighters launched in bout 2.
    pub second: f64,
}

impl FighterWaves {
    /// Compute launch waves from a fighter complement.
    #[must_use]
    pub fn from_stats(fighters: &FighterStats) -> Self {
        let first = fighters.capacity.min(fighters.launch_rate);
        let second = (fighters.capacity - fighters.launch_rate)
            .max(0.0)
            .min(fighters.launch_rate);
        Self { first, second }
    }

    /// Average fighter damage per bout.
    #[must_use]
    pub fn damage_per_bout(&self, fighter_damage: f64, model: &RatingModel) -> f64 {
        let survival = model.fighter_survival_rate;
        let total = fighter_damage * (self.first * (1.0 + survival) + self.second);
        total / f64::from(model.combat_bouts)
    }

    /// Expected fighters destroyed, each soaking one enemy shot.
    #[must_use]
    pub fn shot_down(&self, model: &RatingModel) -> f64 {
        let survival = model.fighter_survival_rate;
        (1.0 - survival * survival) * self.first + (1.0 - survival) * self.second
    }
}

/// Rates one ship, optionally against a specific enemy profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipRating {
    stats: StatSnapshot,
    #[serde(default, deserialize_with = "crate::model::deserialize_or_default")]
    model: RatingModel,
}

impl ShipRating {
    /// Rate `stats` with the default model.
    #[must_use]
    pub fn new(stats: StatSnapshot) -> Self {
        Self::with_model(stats, RatingModel::default())
    }

    /// Rate `stats` with a custom model.
    ///
    /// A model that fails [`RatingModel::validate`] is replaced by the default.
    #[must_use]
    pub fn with_model(stats: StatSnapshot, model: RatingModel) -> Self {
        Self {
            stats,
            model: model.or_default(),
        }
    }

    /// Read a live ship and wrap it.
    pub fn from_ship<U: GameUniverse>(
        universe: &U,
        ship_id: ShipId,
        consider_refuel: bool,
        model: RatingModel,
    ) -> Self {
        Self::with_model(
            StatSnapshot::from_ship(universe, ship_id, consider_refuel),
            model,
        )
    }

    /// The underlying stats.
    #[must_use]
    pub fn stats(&self) -> &StatSnapshot {
        &self.stats
    }

    /// Base combat numbers.
    #[must_use]
    pub fn basic_stats(&self) -> &BasicStats {
        self.stats.basic()
    }

    /// Fighter complement.
    #[must_use]
    pub fn fighter_stats(&self) -> &FighterStats {
        self.stats.fighters()
    }

    /// The model in use.
    #[must_use]
    pub fn model(&self) -> &RatingModel {
        &self.model
    }

    /// Expected combat output, against `enemy` or a neutral baseline.
    ///
    /// Never negative. Zero when the ship has no attacks and no fighters.
    #[must_use]
    pub fn get_rating(&self, enemy: Option<&StatSnapshot>) -> f64 {
        let model = &self.model;
        let mine = self.stats.basic();
        let mut my_structure = mine.structure;
        let mut enemy_avg_attack = 1.0;

        let mut my_attack = match enemy {
            Some(enemy) => {
                let enemy_attacks = enemy.attacks();
                if !enemy_attacks.is_empty() {
                    let enemy_total = enemy_attacks.total_damage();
                    enemy_avg_attack = enemy_total / f64::from(enemy_attacks.shot_count());

                    let enemy_net = enemy_attacks
                        .net_damage(mine.shields, model.min_shot_damage)
                        .max(model.min_net_attack_fraction * enemy_total);
                    if enemy_net > 0.0 {
                        let shield_factor = enemy_total / enemy_net;
                        my_structure *= shield_factor.max(1.0);
                    }
                }
                mine.attacks
                    .net_damage(enemy.shields(), model.min_shot_damage)
            }
            None => {
                my_structure += mine.shields;
                mine.attacks.total_damage()
            }
        };

        let fighters = self.stats.fighters();
        let waves = FighterWaves::from_stats(fighters);
        my_attack += waves.damage_per_bout(fighters.damage, model);
        my_structure += waves.shot_down(model) * enemy_avg_attack;

        let rating = my_attack * my_structure;
        trace!(
            attack = my_attack,
            structure = my_structure,
            rating,
            "Ship rating"
        );
        rating
    }
}

impl From<StatSnapshot> for ShipRating {
    fn from(stats: StatSnapshot) -> Self {
        Self::new(stats)
    }
}
