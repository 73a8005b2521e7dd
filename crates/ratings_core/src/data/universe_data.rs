//! Universe snapshot: the game state the rating engine reads.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::ship_data::ShipData;
use crate::error::{RatingError, Result};
use crate::universe::{FleetId, FleetRole, GameUniverse, PartClass, ShipId, SpeciesRegistry};

/// One fleet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FleetData {
    /// Fleet identifier.
    pub id: FleetId,
    /// Role assigned by the fleet classifier.
    #[serde(default)]
    pub role: FleetRole,
    /// Member ships.
    pub ships: Vec<ShipId>,
}

/// One species.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesData {
    /// Species name, e.g. `SP_HUMAN`.
    pub name: String,
    /// Trait tags, e.g. `GOOD_WEAPONS`.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Serializable universe snapshot.
///
/// # Example RON
///
/// ```ron
/// UniverseData(
///     part_classes: { "SR_WEAPON_1_1": ShortRangeWeapon },
///     ships: [ShipData(id: 1, structure: (current: 16.0, max: 16.0))],
///     fleets: [FleetData(id: 10, role: Military, ships: [1])],
///     species: [SpeciesData(name: "SP_HUMAN", tags: ["AVERAGE_SUPPLY"])],
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UniverseData {
    /// Combat classification of each part name. Unlisted parts are `Other`.
    #[serde(default)]
    pub part_classes: BTreeMap<String, PartClass>,
    /// All known ships.
    #[serde(default)]
    pub ships: Vec<ShipData>,
    /// All known fleets of the viewing empire.
    #[serde(default)]
    pub fleets: Vec<FleetData>,
    /// All known species.
    #[serde(default)]
    pub species: Vec<SpeciesData>,
}

impl UniverseData {
    /// Parse a snapshot from RON text. `label` names the source in errors.
    pub fn from_ron_str(ron: &str, label: &str) -> Result<Self> {
        ron::from_str(ron).map_err(|e| RatingError::DataParseError {
            path: label.to_string(),
            message: e.to_string(),
        })
    }
}

/// Indexed, queryable universe snapshot.
#[derive(Debug, Clone, Default)]
pub struct Universe {
    part_classes: BTreeMap<String, PartClass>,
    ships: HashMap<ShipId, ShipData>,
    fleets: Vec<FleetData>,
    species: HashMap<String, Vec<String>>,
}

impl Universe {
    /// Index a snapshot. Later duplicates of an id replace earlier ones.
    #[must_use]
    pub fn from_data(data: UniverseData) -> Self {
        Self {
            part_classes: data.part_classes,
            ships: data.ships.into_iter().map(|ship| (ship.id, ship)).collect(),
            fleets: data.fleets,
            species: data
                .species
                .into_iter()
                .map(|species| (species.name, species.tags))
                .collect(),
        }
    }

    /// Parse and index a snapshot from RON text.
    pub fn from_ron_str(ron: &str, label: &str) -> Result<Self> {
        UniverseData::from_ron_str(ron, label).map(Self::from_data)
    }

    /// Look up a fleet, failing if it does not exist.
    pub fn fleet(&self, id: FleetId) -> Result<&FleetData> {
        self.fleets
            .iter()
            .find(|fleet| fleet.id == id)
            .ok_or(RatingError::FleetNotFound(id))
    }

    /// Look up a ship, failing if it does not exist.
    pub fn ship_data(&self, id: ShipId) -> Result<&ShipData> {
        self.ships.get(&id).ok_or(RatingError::ShipNotFound(id))
    }

    /// All fleets in snapshot order.
    #[must_use]
    pub fn fleets(&self) -> &[FleetData] {
        &self.fleets
    }

    /// Report dangling fleet members and unclassified installed parts.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for fleet in &self.fleets {
            for ship in &fleet.ships {
                if !self.ships.contains_key(ship) {
                    errors.push(format!("{} references missing {ship}", fleet.id));
                }
            }
        }

        let mut ships: Vec<&ShipData> = self.ships.values().collect();
        ships.sort_by_key(|ship| ship.id);
        for ship in ships {
            for part in ship.parts.iter().filter(|part| !part.is_empty()) {
                if !self.part_classes.contains_key(part) {
                    errors.push(format!("{} has unclassified part '{part}'", ship.id));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(RatingError::InvalidSnapshot { errors })
        }
    }
}

impl GameUniverse for Universe {
    type Ship = ShipData;

    fn ship(&self, id: ShipId) -> Option<&ShipData> {
        self.ships.get(&id)
    }

    fn part_class(&self, part: &str) -> PartClass {
        self.part_classes.get(part).copied().unwrap_or_default()
    }

    fn fleet_ship_ids(&self, id: FleetId) -> Option<Vec<ShipId>> {
        self.fleet(id).ok().map(|fleet| fleet.ships.clone())
    }

    fn military_fleet_ids(&self) -> Vec<FleetId> {
        self.fleets
            .iter()
            .filter(|fleet| fleet.role == FleetRole::Military)
            .map(|fleet| fleet.id)
            .collect()
    }
}

impl SpeciesRegistry for Universe {
    fn species_tags(&self, name: &str) -> Option<Vec<String>> {
        self.species.get(name).cloned()
    }
}
