//! Tunable constants of the rating model.
//!
//! The defaults reproduce the reference rating law exactly. Overrides are
//! loaded from RON, for example:
//!
//! ```ron
//! RatingModel(
//!     fighter_survival_rate: 0.25,
//! )
//! ```
//!
//! Omitted fields keep their defaults.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::{RatingError, Result};

/// Fraction of first-bout fighters still alive in the last bout.
///
/// Rough estimate; not derived from combat data.
pub const DEFAULT_FIGHTER_SURVIVAL_RATE: f64 = 0.2;

/// Smallest effective damage a single shot can deal after shields.
pub const DEFAULT_MIN_SHOT_DAMAGE: f64 = 0.001;

/// Smallest fraction of enemy damage that always gets through shields.
pub const DEFAULT_MIN_NET_ATTACK_FRACTION: f64 = 0.1;

/// Number of bouts fighter damage is averaged over.
pub const DEFAULT_COMBAT_BOUTS: u32 = 3;

/// Constants used by [`ShipRating`](crate::rating::ShipRating).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingModel {
    /// Fraction of bout-1 fighters alive to strike again in a later bout.
    pub fighter_survival_rate: f64,
    /// Epsilon floor for per-shot damage after shields.
    pub min_shot_damage: f64,
    /// Floor on enemy net damage, as a fraction of its raw damage.
    pub min_net_attack_fraction: f64,
    /// Bouts per combat round.
    pub combat_bouts: u32,
}

impl Default for RatingModel {
    fn default() -> Self {
        Self {
            fighter_survival_rate: DEFAULT_FIGHTER_SURVIVAL_RATE,
            min_shot_damage: DEFAULT_MIN_SHOT_DAMAGE,
            min_net_attack_fraction: DEFAULT_MIN_NET_ATTACK_FRACTION,
            combat_bouts: DEFAULT_COMBAT_BOUTS,
        }
    }
}

impl RatingModel {
    /// Builder method to set the fighter survival rate.
    #[must_use]
    pub const fn with_survival_rate(mut self, rate: f64) -> Self {
        self.fighter_survival_rate = rate;
        self
    }

    /// Parse and validate a model from RON text.
    ///
    /// `label` names the source in error messages.
    pub fn from_ron_str(ron: &str, label: &str) -> Result<Self> {
        let model: Self = ron::from_str(ron).map_err(|e| RatingError::DataParseError {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        model.validate()?;
        Ok(model)
    }

    /// Check every parameter is inside its meaningful range.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.fighter_survival_rate) {
            return Err(RatingError::InvalidParameter(format!(
                "fighter_survival_rate must be within [0, 1], got {}",
                self.fighter_survival_rate
            )));
        }
        if self.min_shot_damage.is_nan() || self.min_shot_damage <= 0.0 {
            return Err(RatingError::InvalidParameter(format!(
                "min_shot_damage must be positive, got {}",
                self.min_shot_damage
            )));
        }
        if self.min_net_attack_fraction.is_nan()
            || self.min_net_attack_fraction <= 0.0
            || self.min_net_attack_fraction > 1.0
        {
            return Err(RatingError::InvalidParameter(format!(
                "min_net_attack_fraction must be within (0, 1], got {}",
                self.min_net_attack_fraction
            )));
        }
        if self.combat_bouts == 0 {
            return Err(RatingError::InvalidParameter(
                "combat_bouts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// This model if it validates, otherwise the default model.
    ///
    /// Rating code never runs with out-of-range constants.
    #[must_use]
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                warn!(error = %e, "Invalid rating model, using defaults");
                Self::default()
            }
        }
    }

    /// Largest factor by which shields can multiply effective structure.
    #[must_use]
    pub fn max_shield_factor(&self) -> f64 {
        1.0 / self.min_net_attack_fraction
    }
}

/// Deserialize a model, replacing an invalid one with the default.
pub(crate) fn deserialize_or_default<'de, D>(
    deserializer: D,
) -> std::result::Result<RatingModel, D::Error>
where
    D: Deserializer<'de>,
{
    RatingModel::deserialize(deserializer).map(RatingModel::or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_validates() {
        assert!(RatingModel::default().validate().is_ok());
    }

    #[test]
    fn test_default_shield_factor_cap_is_ten() {
        assert_eq!(RatingModel::default().max_shield_factor(), 10.0);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        let model = RatingModel::from_ron_str("RatingModel(fighter_survival_rate: 0.5)", "inline")
            .expect("valid model");
        assert_eq!(model.fighter_survival_rate, 0.5);
        assert_eq!(model.min_shot_damage, DEFAULT_MIN_SHOT_DAMAGE);
        assert_eq!(model.combat_bouts, DEFAULT_COMBAT_BOUTS);
    }

    #[test]
    fn test_out_of_range_survival_rate_rejected() {
        let err = RatingModel::default().with_survival_rate(1.5).validate();
        assert!(matches!(err, Err(RatingError::InvalidParameter(_))));
    }

    #[test]
    fn test_malformed_ron_is_parse_error() {
        let err = RatingModel::from_ron_str("RatingModel(", "broken.ron");
        match err {
            Err(RatingError::DataParseError { path, .. }) => assert_eq!(path, "broken.ron"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_bouts_rejected() {
        let model = RatingModel {
            combat_bouts: 0,
            ..RatingModel::default()
        };
        assert!(model.validate().is_err());
        assert_eq!(model.or_default(), RatingModel::default());
    }

    #[test]
    fn test_valid_model_survives_or_default() {
        let model = RatingModel::default().with_survival_rate(0.5);
        assert_eq!(model.or_default(), model);
    }
}
