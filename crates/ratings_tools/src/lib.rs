//! # Ratings Development Tools
//!
//! Command-line tools for development:
//! - Fleet and empire rating reports
//! - Standard fighter inspection
//! - Universe snapshot validation

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

pub mod load;
pub mod report;
pub mod validate;
