//! File loading for snapshots and model overrides.

use std::path::Path;

use ratings_core::data::Universe;
use ratings_core::error::RatingError;
use ratings_core::model::RatingModel;
use thiserror::Error;

/// Errors raised by the tools.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Failed to read a file.
    #[error("Failed to read '{path}': {source}")]
    IoError {
        /// Path to the file.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Rating engine rejected the input.
    #[error(transparent)]
    Rating(#[from] RatingError),

    /// Failed to serialize a report.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for tool operations.
pub type Result<T> = std::result::Result<T, ToolError>;

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ToolError::IoError {
        path: path.display().to_string(),
        source,
    })
}

/// Load and index a universe snapshot from a RON file.
pub fn load_universe(path: &Path) -> Result<Universe> {
    let contents = read(path)?;
    let universe = Universe::from_ron_str(&contents, &path.display().to_string())?;
    tracing::debug!(path = %path.display(), "Loaded universe snapshot");
    Ok(universe)
}

/// Load a rating model from a RON file, or the default model.
pub fn load_model(path: Option<&Path>) -> Result<RatingModel> {
    let Some(path) = path else {
        return Ok(RatingModel::default());
    };
    let contents = read(path)?;
    Ok(RatingModel::from_ron_str(
        &contents,
        &path.display().to_string(),
    )?)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_universe(Path::new("/definitely/not/here.ron"));
        assert!(matches!(err, Err(ToolError::IoError { .. })));
    }

    #[test]
    fn test_default_model_without_path() {
        assert_eq!(load_model(None).expect("default"), RatingModel::default());
    }

    #[test]
    fn test_model_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "RatingModel(fighter_survival_rate: 0.3)").expect("write");
        let model = load_model(Some(file.path())).expect("valid model");
        assert_eq!(model.fighter_survival_rate, 0.3);
    }

    #[test]
    fn test_invalid_model_is_rating_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "RatingModel(combat_bouts: 0)").expect("write");
        let err = load_model(Some(file.path()));
        assert!(matches!(
            err,
            Err(ToolError::Rating(RatingError::InvalidParameter(_)))
        ));
    }
}
