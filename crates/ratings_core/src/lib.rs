//! # Ratings Core
//!
//! Combat strength estimation for the strategy AI.
//!
//! This crate turns ship stats into comparable numeric ratings:
//! - No rendering
//! - No IO
//! - No combat simulation
//!
//! Ratings drive attack/retreat decisions, fleet composition and threat
//! assessment. They are only meaningful relative to each other.
//!
//! ## Crate Structure
//!
//! - [`stats`] - Per-ship stat snapshots
//! - [`rating`] - Per-ship rating against an optional enemy
//! - [`fleet`] - Fleet and empire aggregates
//! - [`combine`] - The rating combination law
//! - [`grades`] - Species piloting grades and weights
//! - [`standard`] - Representative ship of our own military
//! - [`universe`] - Read-only game state traits
//! - [`data`] - RON universe snapshots implementing those traits
//! - [`model`] - Tunable model constants

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod combine;
pub mod data;
pub mod error;
pub mod fleet;
pub mod grades;
pub mod model;
pub mod rating;
pub mod standard;
pub mod stats;
pub mod universe;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::combine::{combine, combine_all};
    pub use crate::data::{Universe, UniverseData};
    pub use crate::error::{RatingError, Result};
    pub use crate::fleet::{empire_rating, fleet_rating, FleetRating};
    pub use crate::grades::{
        weight_attack_troops, weight_shields, Grade, PilotingGrades, SpeciesGradeCache,
    };
    pub use crate::model::RatingModel;
    pub use crate::rating::ShipRating;
    pub use crate::standard::{empire_standard_fighter, ShipCensus};
    pub use crate::stats::{Attacks, BasicStats, FighterStats, StatSignature, StatSnapshot};
    pub use crate::universe::{FleetId, GameUniverse, ShipId, SpeciesRegistry};
}
