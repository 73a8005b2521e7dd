//! Per-ship combat statistics.
//!
//! A [`StatSnapshot`] is an immutable record of the numbers the rating model
//! needs: direct-fire attacks, structure, shields and the fighter complement.
//! It is built either from a literal record (synthetic or "standard" ships)
//! or by reading a live ship through [`GameUniverse`].

use std::collections::BTreeMap;
use std::fmt;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::universe::{GameUniverse, MeterKind, PartClass, ShipId, ShipView};

/// Literal stat record: `(attacks, structure, shields, capacity, launch_rate, damage)`.
pub type RawStats = (Vec<(f64, u32)>, f64, f64, f64, f64, f64);

/// Direct-fire attacks: per-shot damage mapped to shot count.
///
/// Counts are always at least one; an empty profile is unarmed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<(f64, u32)>", into = "Vec<(f64, u32)>")]
pub struct Attacks(BTreeMap<OrderedFloat<f64>, u32>);

impl Attacks {
    /// Create an empty (unarmed) profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(damage, count)` pairs. Repeated damages are merged and
    /// zero counts dropped.
    #[must_use]
    pub fn from_pairs(pairs: &[(f64, u32)]) -> Self {
        let mut attacks = Self::new();
        for &(damage, count) in pairs {
            attacks.add_shots(damage, count);
        }
        attacks
    }

    /// Record `count` shots of `damage`.
    pub fn add_shots(&mut self, damage: f64, count: u32) {
        if count == 0 {
            return;
        }
        let total = self.0.entry(OrderedFloat(damage)).or_insert(0);
        *total = total.saturating_add(count);
    }

    /// Record a single shot of `damage`.
    pub fn add_shot(&mut self, damage: f64) {
        self.add_shots(damage, 1);
    }

    /// Whether there are no direct-fire shots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate `(damage, count)` in ascending damage order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, u32)> + '_ {
        self.0.iter().map(|(damage, &count)| (damage.0, count))
    }

    /// Total number of shots per bout, saturating at `u32::MAX`.
    #[must_use]
    pub fn shot_count(&self) -> u32 {
        self.0.values().fold(0, |total, &count| total.saturating_add(count))
    }

    /// Raw damage per bout, ignoring shields.
    #[must_use]
    pub fn total_damage(&self) -> f64 {
        self.iter().map(|(damage, count)| count as f64 * damage).sum()
    }

    /// Damage per bout against `shields`, each shot floored at `min_shot_damage`.
    #[must_use]
    pub fn net_damage(&self, shields: f64, min_shot_damage: f64) -> f64 {
        self.iter()
            .map(|(damage, count)| count as f64 * (damage - shields).max(min_shot_damage))
            .sum()
    }

    /// Sorted `(damage, count)` pairs.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(f64, u32)> {
        self.iter().collect()
    }
}

impl From<Vec<(f64, u32)>> for Attacks {
    fn from(pairs: Vec<(f64, u32)>) -> Self {
        Self::from_pairs(&pairs)
    }
}

impl From<Attacks> for Vec<(f64, u32)> {
    fn from(attacks: Attacks) -> Self {
        attacks.to_pairs()
    }
}

/// Base combat numbers of a ship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicStats {
    /// Direct-fire attacks.
    #[serde(default)]
    pub attacks: Attacks,
    /// Hit-point pool (current or max, depending on how it was read).
    pub structure: f64,
    /// Flat per-hit damage reduction.
    #[serde(default)]
    pub shields: f64,
}

impl BasicStats {
    /// Create basic stats.
    #[must_use]
    pub fn new(attacks: Attacks, structure: f64, shields: f64) -> Self {
        Self {
            attacks,
            structure,
            shields,
        }
    }
}

/// Aggregate fighter complement of a ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FighterStats {
    /// Fighters stored across all hangars.
    pub capacity: f64,
    /// Fighters launchable per bout across all bays.
    pub launch_rate: f64,
    /// Damage per fighter hit.
    pub damage: f64,
}

impl FighterStats {
    /// Create fighter stats.
    #[must_use]
    pub const fn new(capacity: f64, launch_rate: f64, damage: f64) -> Self {
        Self {
            capacity,
            launch_rate,
            damage,
        }
    }

    /// Whether the ship can field any damaging fighters.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.capacity > 0.0 && self.launch_rate > 0.0 && self.damage > 0.0
    }
}

/// Canonical, hashable and totally ordered form of a [`StatSnapshot`].
///
/// Field order matches [`RawStats`]; the derived ordering compares attacks
/// first, then structure, shields and fighter stats.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StatSignature {
    /// Attacks as `(damage, count)` pairs in ascending damage order.
    pub attacks: Vec<(OrderedFloat<f64>, u32)>,
    /// Structure.
    pub structure: OrderedFloat<f64>,
    /// Shields.
    pub shields: OrderedFloat<f64>,
    /// Fighter capacity.
    pub capacity: OrderedFloat<f64>,
    /// Fighter launch rate.
    pub launch_rate: OrderedFloat<f64>,
    /// Fighter damage.
    pub damage: OrderedFloat<f64>,
}

/// Combat-relevant stats of one ship.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatSnapshot {
    basic: BasicStats,
    #[serde(default)]
    fighters: FighterStats,
}

impl StatSnapshot {
    /// Create a snapshot from its parts.
    #[must_use]
    pub fn new(basic: BasicStats, fighters: FighterStats) -> Self {
        Self { basic, fighters }
    }

    /// The all-zero snapshot, used when a ship cannot be resolved.
    ///
    /// Callers should read it as "no data", not as a worthless ship.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Hardcoded fallback profile: one 4.0 damage shot, 15 structure.
    #[must_use]
    pub fn default_ship() -> Self {
        Self::from((vec![(4.0, 1)], 15.0, 0.0, 0.0, 0.0, 0.0))
    }

    /// Read a ship's stats from the host game state.
    ///
    /// With `consider_refuel` the maximum meters are used (the ship after
    /// repair and resupply); otherwise current meters. Fighter bay launch
    /// rate and hangar damage always use current meters.
    pub fn from_ship<U: GameUniverse>(
        universe: &U,
        ship_id: ShipId,
        consider_refuel: bool,
    ) -> Self {
        let Some(ship) = universe.ship(ship_id) else {
            // TODO: estimate stealthed ships from last known design instead of zeroing them.
            debug!(ship = %ship_id, "Ship not resolvable, using empty stats");
            return Self::empty();
        };

        let read = |kind: MeterKind, part: Option<&str>| {
            if consider_refuel {
                ship.max_meter(kind, part)
            } else {
                ship.meter(kind, part)
            }
        };

        let structure = read(MeterKind::Structure, None);
        let shields = read(MeterKind::Shield, None);
        let mut attacks = Attacks::new();
        let mut fighters = FighterStats::default();

        if ship.is_armed() {
            let parts = ship.parts().iter().map(String::as_str);
            for part in parts.filter(|p| !p.is_empty()) {
                match universe.part_class(part) {
                    PartClass::ShortRangeWeapon => {
                        let damage = read(MeterKind::Capacity, Some(part));
                        // Attack keys are positive; disabled weapons add no shots.
                        if damage > 0.0 {
                            attacks.add_shot(damage);
                        }
                    }
                    PartClass::FighterBay => {
                        fighters.launch_rate += ship.meter(MeterKind::Capacity, Some(part));
                    }
                    PartClass::FighterHangar => {
                        fighters.capacity += read(MeterKind::Capacity, Some(part));
                        let part_damage = ship.meter(MeterKind::SecondaryStat, Some(part));
                        if fighters.damage > 0.0 && part_damage != fighters.damage {
                            // Mixed hangar types are not expected from content.
                            warn!(
                                ship = %ship_id,
                                part = %part,
                                part_damage,
                                current_damage = fighters.damage,
                                "Multiple hangar types on one ship, fighter estimate will be wrong"
                            );
                        }
                        fighters.damage = fighters.damage.max(part_damage);
                    }
                    PartClass::Other => {}
                }
            }
        }

        Self::new(BasicStats::new(attacks, structure, shields), fighters)
    }

    /// Rebuild a snapshot from its canonical signature.
    #[must_use]
    pub fn from_signature(signature: &StatSignature) -> Self {
        let mut attacks = Attacks::new();
        for &(damage, count) in &signature.attacks {
            attacks.add_shots(damage.0, count);
        }
        Self::new(
            BasicStats::new(attacks, signature.structure.0, signature.shields.0),
            FighterStats::new(
                signature.capacity.0,
                signature.launch_rate.0,
                signature.damage.0,
            ),
        )
    }

    /// Canonical hashable form, suitable as a statistics key.
    #[must_use]
    pub fn signature(&self) -> StatSignature {
        StatSignature {
            attacks: self
                .basic
                .attacks
                .iter()
                .map(|(damage, count)| (OrderedFloat(damage), count))
                .collect(),
            structure: OrderedFloat(self.basic.structure),
            shields: OrderedFloat(self.basic.shields),
            capacity: OrderedFloat(self.fighters.capacity),
            launch_rate: OrderedFloat(self.fighters.launch_rate),
            damage: OrderedFloat(self.fighters.damage),
        }
    }

    /// Literal record form of this snapshot.
    #[must_use]
    pub fn to_raw(&self) -> RawStats {
        (
            self.basic.attacks.to_pairs(),
            self.basic.structure,
            self.basic.shields,
            self.fighters.capacity,
            self.fighters.launch_rate,
            self.fighters.damage,
        )
    }

    /// Base combat numbers.
    #[must_use]
    pub fn basic(&self) -> &BasicStats {
        &self.basic
    }

    /// Fighter complement.
    #[must_use]
    pub fn fighters(&self) -> &FighterStats {
        &self.fighters
    }

    /// Direct-fire attacks.
    #[must_use]
    pub fn attacks(&self) -> &Attacks {
        &self.basic.attacks
    }

    /// Structure.
    #[must_use]
    pub fn structure(&self) -> f64 {
        self.basic.structure
    }

    /// Shields.
    #[must_use]
    pub fn shields(&self) -> f64 {
        self.basic.shields
    }

    /// Whether the ship has direct-fire weapons or damaging fighters.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        !self.basic.attacks.is_empty() || self.fighters.is_armed()
    }
}

impl From<RawStats> for StatSnapshot {
    fn from(raw: RawStats) -> Self {
        let (attacks, structure, shields, capacity, launch_rate, damage) = raw;
        Self::new(
            BasicStats::new(Attacks::from_pairs(&attacks), structure, shields),
            FighterStats::new(capacity, launch_rate, damage),
        )
    }
}

impl fmt::Display for StatSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attacks [")?;
        for (i, (damage, count)) in self.basic.attacks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{damage}x{count}")?;
        }
        write!(
            f,
            "] structure {} shields {} fighters {}/{}@{}",
            self.basic.structure,
            self.basic.shields,
            self.fighters.capacity,
            self.fighters.launch_rate,
            self.fighters.damage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_round_trip() {
        let raw: RawStats = (vec![(4.0, 1)], 15.0, 0.0, 0.0, 0.0, 0.0);
        let stats = StatSnapshot::from(raw.clone());
        assert_eq!(stats.to_raw(), raw);
    }

    #[test]
    fn test_attacks_merge_and_drop_zero_counts() {
        let attacks = Attacks::from_pairs(&[(3.0, 2), (5.0, 0), (3.0, 1), (1.5, 1)]);
        assert_eq!(attacks.to_pairs(), vec![(1.5, 1), (3.0, 3)]);
        assert_eq!(attacks.shot_count(), 4);
        assert!((attacks.total_damage() - 10.5).abs() < 1e-12);
    }

    #[test]
    fn test_shot_counts_saturate() {
        let attacks = Attacks::from_pairs(&[(3.0, u32::MAX), (3.0, 1), (5.0, 2)]);
        assert_eq!(attacks.to_pairs(), vec![(3.0, u32::MAX), (5.0, 2)]);
        assert_eq!(attacks.shot_count(), u32::MAX);
    }

    #[test]
    fn test_net_damage_floors_each_shot() {
        let attacks = Attacks::from_pairs(&[(5.0, 2), (1.0, 1)]);
        // 2 * (5 - 3) + 1 * 0.001
        let net = attacks.net_damage(3.0, 0.001);
        assert!((net - 4.001).abs() < 1e-12);
    }

    #[test]
    fn test_signature_ignores_pair_order() {
        let a = StatSnapshot::from((vec![(3.0, 1), (6.0, 2)], 10.0, 1.0, 0.0, 0.0, 0.0));
        let b = StatSnapshot::from((vec![(6.0, 2), (3.0, 1)], 10.0, 1.0, 0.0, 0.0, 0.0));
        assert_eq!(a.signature(), b.signature());
    }

    #[test]
    fn test_signature_round_trip() {
        let stats = StatSnapshot::from((vec![(18.0, 3)], 48.0, 4.0, 6.0, 2.0, 6.0));
        assert_eq!(StatSnapshot::from_signature(&stats.signature()), stats);
    }

    #[test]
    fn test_empty_snapshot_is_unarmed() {
        let stats = StatSnapshot::empty();
        assert!(!stats.is_armed());
        assert_eq!(stats.structure(), 0.0);
    }

    #[test]
    fn test_fighters_alone_count_as_armed() {
        let stats = StatSnapshot::from((vec![], 30.0, 0.0, 4.0, 2.0, 6.0));
        assert!(stats.is_armed());
    }

    #[test]
    fn test_display() {
        let stats = StatSnapshot::default_ship();
        assert_eq!(
            stats.to_string(),
            "attacks [4x1] structure 15 shields 0 fighters 0/0@0"
        );
    }
}
