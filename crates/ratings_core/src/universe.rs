//! Read-only view of the host game state.
//!
//! The rating engine never owns game objects. It reads them through the
//! traits in this module, which the host engine (or the in-memory
//! [`Universe`](crate::data::Universe) used by tools and tests) implements.
//!
//! All lookups return `Option`: an identity that does not resolve (destroyed,
//! out of sensor range, stealthed) is a normal outcome, not an error.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipId(pub i32);

/// Unique identifier for fleets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FleetId(pub i32);

impl fmt::Display for ShipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ship#{}", self.0)
    }
}

impl fmt::Display for FleetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fleet#{}", self.0)
    }
}

/// Meter kinds the rating engine reads.
///
/// Each kind has a current and a maximum value; see [`ShipView::meter`] and
/// [`ShipView::max_meter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MeterKind {
    /// Hull hit points.
    Structure,
    /// Flat per-hit damage reduction.
    Shield,
    /// Part capacity: weapon damage, hangar fighter count, bay launch rate.
    Capacity,
    /// Part secondary stat: fighter damage for hangars.
    SecondaryStat,
}

/// Combat-relevant classification of a ship part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PartClass {
    /// Short-range direct-fire weapon.
    ShortRangeWeapon,
    /// Fighter launch bay.
    FighterBay,
    /// Fighter storage hangar.
    FighterHangar,
    /// Anything not relevant to combat ratings.
    #[default]
    Other,
}

/// Role a fleet has been assigned by the host's fleet classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FleetRole {
    /// Warships.
    Military,
    /// Scouts and explorers.
    Exploration,
    /// Colony and outpost ships.
    Colonisation,
    /// Troop ships.
    Invasion,
    /// Unclassified.
    #[default]
    Other,
}

/// Read access to a single resolved ship.
pub trait ShipView {
    /// Current value of a ship meter, or of a part meter when `part` is set.
    fn meter(&self, kind: MeterKind, part: Option<&str>) -> f64;

    /// Maximum value of a ship meter, or of a part meter when `part` is set.
    fn max_meter(&self, kind: MeterKind, part: Option<&str>) -> f64;

    /// Installed part names in design order. Empty slots are empty strings.
    fn parts(&self) -> &[String];

    /// Whether the host considers the ship armed.
    fn is_armed(&self) -> bool;
}

/// Read access to ships, fleets and part metadata.
pub trait GameUniverse {
    /// Concrete ship view type.
    type Ship: ShipView;

    /// Resolve a ship identity.
    fn ship(&self, id: ShipId) -> Option<&Self::Ship>;

    /// Classify a part by name.
    fn part_class(&self, part: &str) -> PartClass;

    /// Ship ids of a fleet, or `None` if the fleet does not resolve.
    fn fleet_ship_ids(&self, id: FleetId) -> Option<Vec<ShipId>>;

    /// Every fleet of the viewing empire classified as military.
    fn military_fleet_ids(&self) -> Vec<FleetId>;
}

/// Read access to species metadata.
pub trait SpeciesRegistry {
    /// Trait tags of a species, or `None` if it does not resolve.
    fn species_tags(&self, name: &str) -> Option<Vec<String>>;
}

impl<T: GameUniverse + ?Sized> GameUniverse for &T {
    type Ship = T::Ship;

    fn ship(&self, id: ShipId) -> Option<&Self::Ship> {
        (**self).ship(id)
    }

    fn part_class(&self, part: &str) -> PartClass {
        (**self).part_class(part)
    }

    fn fleet_ship_ids(&self, id: FleetId) -> Option<Vec<ShipId>> {
        (**self).fleet_ship_ids(id)
    }

    fn military_fleet_ids(&self) -> Vec<FleetId> {
        (**self).military_fleet_ids()
    }
}

impl<T: SpeciesRegistry + ?Sized> SpeciesRegistry for &T {
    fn species_tags(&self, name: &str) -> Option<Vec<String>> {
        (**self).species_tags(name)
    }
}
