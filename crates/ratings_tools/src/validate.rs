//! Snapshot validation utilities.

use std::path::Path;

use crate::load::{load_universe, Result};

/// Validate a universe snapshot file.
///
/// Checks that the file parses and that fleets only reference known ships
/// and ships only carry classified parts.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or fails validation.
pub fn validate_snapshot(path: &Path) -> Result<()> {
    let universe = load_universe(path)?;
    universe.validate()?;
    tracing::info!(
        path = %path.display(),
        fleets = universe.fleets().len(),
        "Snapshot is valid"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ratings_core::error::RatingError;

    use super::*;
    use crate::load::ToolError;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn test_valid_snapshot() {
        let file = write_snapshot(
            r#"UniverseData(
                part_classes: { "SR_WEAPON": ShortRangeWeapon },
                ships: [ShipData(id: 1, structure: (current: 5.0, max: 5.0), parts: ["SR_WEAPON"])],
                fleets: [FleetData(id: 2, role: Military, ships: [1])],
            )"#,
        );
        assert!(validate_snapshot(file.path()).is_ok());
    }

    #[test]
    fn test_dangling_ship_fails() {
        let file = write_snapshot("UniverseData(fleets: [FleetData(id: 2, ships: [7])])");
        assert!(matches!(
            validate_snapshot(file.path()),
            Err(ToolError::Rating(RatingError::InvalidSnapshot { .. }))
        ));
    }

    #[test]
    fn test_unparsable_snapshot_fails() {
        let file = write_snapshot("UniverseData(ships: [");
        assert!(matches!(
            validate_snapshot(file.path()),
            Err(ToolError::Rating(RatingError::DataParseError { .. }))
        ));
    }
}
