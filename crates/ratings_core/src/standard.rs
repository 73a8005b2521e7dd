//! Representative "average" ship of our own military.
//!
//! Used as a stand-in enemy (or self) profile when no real opposing fleet
//! data is available.

use std::collections::HashMap;

use tracing::debug;

use crate::fleet::FleetRating;
use crate::rating::ShipRating;
use crate::stats::{StatSignature, StatSnapshot};
use crate::universe::GameUniverse;

/// How often each ship profile occurs across the military fleets.
#[derive(Debug, Clone, Default)]
pub struct ShipCensus {
    counts: HashMap<StatSignature, u32>,
}

impl ShipCensus {
    /// Count every ship of every military fleet at full (refuelled) strength.
    pub fn of_military<U: GameUniverse>(universe: &U) -> Self {
        let mut census = Self::default();
        for fleet_id in universe.military_fleet_ids() {
            census.add_fleet(&FleetRating::from_fleet(universe, fleet_id, true));
        }
        census
    }

    /// Count every ship of `fleet`.
    pub fn add_fleet(&mut self, fleet: &FleetRating) {
        for signature in fleet.ship_stats() {
            self.add(signature);
        }
    }

    /// Count one ship profile.
    pub fn add(&mut self, signature: StatSignature) {
        *self.counts.entry(signature).or_insert(0) += 1;
    }

    /// Number of ships counted.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Occurrences of one profile.
    #[must_use]
    pub fn count(&self, signature: &StatSignature) -> u32 {
        self.counts.get(signature).copied().unwrap_or(0)
    }

    /// Most frequent profile; ties go to the greatest signature.
    #[must_use]
    pub fn mode(&self) -> Option<(&StatSignature, u32)> {
        self.counts
            .iter()
            .max_by(|(sig_a, count_a), (sig_b, count_b)| {
                count_a.cmp(count_b).then_with(|| sig_a.cmp(sig_b))
            })
            .map(|(signature, &count)| (signature, count))
    }
}

/// Rating of the most common military ship, or of
/// [`StatSnapshot::default_ship`] when there is none.
pub fn empire_standard_fighter<U: GameUniverse>(universe: &U) -> ShipRating {
    let census = ShipCensus::of_military(universe);
    match census.mode() {
        Some((signature, count)) => {
            debug!(
                ?signature,
                count,
                total = census.total(),
                "Standard fighter chosen"
            );
            ShipRating::new(StatSnapshot::from_signature(signature))
        }
        None => {
            debug!("No military ships, using default standard fighter");
            ShipRating::new(StatSnapshot::default_ship())
        }
    }
}
