//! Test fixtures and helpers.
//!
//! Pre-built universes and ship profiles for consistent testing.

use std::collections::BTreeMap;

use ratings_core::data::{
    FleetData, Meter, PartMeters, ShipData, SpeciesData, Universe, UniverseData,
};
use ratings_core::stats::StatSnapshot;
use ratings_core::universe::{FleetId, FleetRole, PartClass, ShipId};

/// Direct-fire weapon part name.
pub const WEAPON: &str = "SR_WEAPON";
/// Fighter bay part name.
pub const BAY: &str = "FT_BAY";
/// Fighter hangar part name.
pub const HANGAR: &str = "FT_HANGAR";
/// Armour part name (not combat relevant).
pub const ARMOUR: &str = "AR_PLATE";

/// Stats of a ship without fighters with the given attacks.
#[must_use]
pub fn ship(attacks: &[(f64, u32)], structure: f64, shields: f64) -> StatSnapshot {
    StatSnapshot::from((attacks.to_vec(), structure, shields, 0.0, 0.0, 0.0))
}

/// Stats of a pure carrier.
#[must_use]
pub fn carrier(structure: f64, capacity: f64, launch_rate: f64, damage: f64) -> StatSnapshot {
    StatSnapshot::from((vec![], structure, 0.0, capacity, launch_rate, damage))
}

/// Builder for in-memory universes.
#[derive(Debug, Clone)]
pub struct UniverseBuilder {
    data: UniverseData,
}

impl Default for UniverseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UniverseBuilder {
    /// Start with the standard part classes registered and nothing else.
    #[must_use]
    pub fn new() -> Self {
        let part_classes = BTreeMap::from([
            (WEAPON.to_string(), PartClass::ShortRangeWeapon),
            (BAY.to_string(), PartClass::FighterBay),
            (HANGAR.to_string(), PartClass::FighterHangar),
            (ARMOUR.to_string(), PartClass::Other),
        ]);
        Self {
            data: UniverseData {
                part_classes,
                ..UniverseData::default()
            },
        }
    }

    /// Add a ship with `shots` identical weapons at full meters.
    #[must_use]
    pub fn warship(
        mut self,
        id: i32,
        damage: f64,
        shots: usize,
        structure: f64,
        shields: f64,
    ) -> Self {
        let mut part_meters = BTreeMap::new();
        if shots > 0 {
            part_meters.insert(
                WEAPON.to_string(),
                PartMeters {
                    capacity: Meter::full(damage),
                    ..PartMeters::default()
                },
            );
        }
        let mut parts = vec![WEAPON.to_string(); shots];
        parts.push(ARMOUR.to_string());
        self.data.ships.push(ShipData {
            id: ShipId(id),
            structure: Meter::full(structure),
            shield: Meter::full(shields),
            parts,
            part_meters,
            armed: shots > 0,
            species: None,
        });
        self
    }

    /// Add a carrier with one hangar and one bay at full meters.
    #[must_use]
    pub fn carrier(
        mut self,
        id: i32,
        structure: f64,
        capacity: f64,
        launch_rate: f64,
        damage: f64,
    ) -> Self {
        let part_meters = BTreeMap::from([
            (
                BAY.to_string(),
                PartMeters {
                    capacity: Meter::full(launch_rate),
                    ..PartMeters::default()
                },
            ),
            (
                HANGAR.to_string(),
                PartMeters {
                    capacity: Meter::full(capacity),
                    secondary_stat: Meter::full(damage),
                },
            ),
        ]);
        self.data.ships.push(ShipData {
            id: ShipId(id),
            structure: Meter::full(structure),
            shield: Meter::default(),
            parts: vec![BAY.to_string(), HANGAR.to_string()],
            part_meters,
            armed: true,
            species: None,
        });
        self
    }

    /// Add an arbitrary ship record.
    #[must_use]
    pub fn ship(mut self, ship: ShipData) -> Self {
        self.data.ships.push(ship);
        self
    }

    /// Add a fleet.
    #[must_use]
    pub fn fleet(mut self, id: i32, role: FleetRole, ships: &[i32]) -> Self {
        self.data.fleets.push(FleetData {
            id: FleetId(id),
            role,
            ships: ships.iter().copied().map(ShipId).collect(),
        });
        self
    }

    /// Add a military fleet.
    #[must_use]
    pub fn military_fleet(self, id: i32, ships: &[i32]) -> Self {
        self.fleet(id, FleetRole::Military, ships)
    }

    /// Add a species.
    #[must_use]
    pub fn species(mut self, name: &str, tags: &[&str]) -> Self {
        self.data.species.push(SpeciesData {
            name: name.to_string(),
            tags: tags.iter().map(|tag| (*tag).to_string()).collect(),
        });
        self
    }

    /// The raw snapshot data.
    #[must_use]
    pub fn into_data(self) -> UniverseData {
        self.data
    }

    /// Index the snapshot.
    #[must_use]
    pub fn build(self) -> Universe {
        Universe::from_data(self.data)
    }
}
