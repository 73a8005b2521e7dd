//! Ship records of a universe snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::universe::{MeterKind, ShipId, ShipView};

/// Current and maximum value of one meter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Meter {
    /// Current value.
    pub current: f64,
    /// Maximum value.
    pub max: f64,
}

impl Meter {
    /// A meter at full value.
    #[must_use]
    pub const fn full(value: f64) -> Self {
        Self {
            current: value,
            max: value,
        }
    }

    /// A meter with distinct current and maximum values.
    #[must_use]
    pub const fn new(current: f64, max: f64) -> Self {
        Self { current, max }
    }
}

/// Meters of one part type installed on a ship.
///
/// Every installed copy of a part shares these values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PartMeters {
    /// Weapon damage, hangar fighter count or bay launch rate.
    #[serde(default)]
    pub capacity: Meter,
    /// Hangar fighter damage.
    #[serde(default)]
    pub secondary_stat: Meter,
}

/// One ship.
///
/// # Example RON
///
/// ```ron
/// ShipData(
///     id: 7,
///     structure: (current: 12.0, max: 16.0),
///     shield: (current: 0.0, max: 0.0),
///     parts: ["SR_WEAPON_1_1", "SR_WEAPON_1_1", "AR_STD_PLATE"],
///     part_meters: {
///         "SR_WEAPON_1_1": (capacity: (current: 18.0, max: 18.0)),
///     },
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipData {
    /// Ship identifier.
    pub id: ShipId,

    /// Hull hit points.
    pub structure: Meter,

    /// Shields.
    #[serde(default)]
    pub shield: Meter,

    /// Installed parts in design order; empty slots are empty strings.
    #[serde(default)]
    pub parts: Vec<String>,

    /// Meters per installed part name.
    #[serde(default)]
    pub part_meters: BTreeMap<String, PartMeters>,

    /// Whether the ship is armed. Defaults to true.
    #[serde(default = "default_armed")]
    pub armed: bool,

    /// Species crewing the ship, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
}

/// Ships are armed unless stated otherwise.
const fn default_armed() -> bool {
    true
}

impl ShipData {
    fn meter_of(&self, kind: MeterKind, part: Option<&str>) -> Meter {
        match part {
            None => match kind {
                MeterKind::Structure => self.structure,
                MeterKind::Shield => self.shield,
                MeterKind::Capacity | MeterKind::SecondaryStat => Meter::default(),
            },
            Some(name) => {
                let Some(meters) = self.part_meters.get(name) else {
                    return Meter::default();
                };
                match kind {
                    MeterKind::Capacity => meters.capacity,
                    MeterKind::SecondaryStat => meters.secondary_stat,
                    MeterKind::Structure | MeterKind::Shield => Meter::default(),
                }
            }
        }
    }
}

impl ShipView for ShipData {
    fn meter(&self, kind: MeterKind, part: Option<&str>) -> f64 {
        self.meter_of(kind, part).current
    }

    fn max_meter(&self, kind: MeterKind, part: Option<&str>) -> f64 {
        self.meter_of(kind, part).max
    }

    fn parts(&self) -> &[String] {
        &self.parts
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}
