//! Error types for the rating engine.
//!
//! Rating operations themselves never fail: absent ships, fleets and species
//! degrade to zero or neutral values. These errors only surface when loading
//! data, parsing configuration, or performing strict lookups.

use thiserror::Error;

use crate::universe::{FleetId, ShipId};

/// Result type alias using [`RatingError`].
pub type Result<T> = std::result::Result<T, RatingError>;

/// Top-level error type for the rating engine.
#[derive(Debug, Error)]
pub enum RatingError {
    /// Data file parsing error.
    #[error("Failed to parse data file '{path}': {message}")]
    DataParseError {
        /// Path (or label) of the data that failed to parse.
        path: String,
        /// Error message.
        message: String,
    },

    /// Grade string outside the known set.
    #[error("Unknown grade: {0:?}")]
    UnknownGrade(String),

    /// Rating model parameter out of range.
    #[error("Invalid rating parameter: {0}")]
    InvalidParameter(String),

    /// Fleet identifier does not resolve.
    #[error("Fleet not found: {0}")]
    FleetNotFound(FleetId),

    /// Ship identifier does not resolve.
    #[error("Ship not found: {0}")]
    ShipNotFound(ShipId),

    /// Universe snapshot failed validation.
    #[error("Invalid universe snapshot: {errors:?}")]
    InvalidSnapshot {
        /// Every problem found.
        errors: Vec<String>,
    },
}
