//! Serializable universe snapshots.
//!
//! This module defines plain data structures describing ships, fleets,
//! part classes and species, deserialized from RON, plus [`Universe`], an
//! indexed view implementing the game-state traits.
//!
//! **Note:** This module contains no IO - it only parses text handed to it.
//! File loading is handled by `ratings_tools`.

mod ship_data;
mod universe_data;

pub use ship_data::{Meter, PartMeters, ShipData};
pub use universe_data::{FleetData, SpeciesData, Universe, UniverseData};
