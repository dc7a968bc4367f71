//! Error types for maze generation and export operations

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::classifier::TileCategory;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum MazeError {
    /// Requested maze dimension is below the minimum viable size
    DimensionTooSmall {
        /// Dimension after odd-coercion
        requested: usize,
        /// Smallest accepted dimension
        minimum: usize,
    },

    /// Start coordinate lies outside the logical cell grid
    InvalidStart {
        /// Requested logical row
        row: usize,
        /// Requested logical column
        col: usize,
        /// Exclusive bound of the logical grid
        limit: usize,
    },

    /// Open marker of 0 would be indistinguishable from wall
    InvalidMarker,

    /// Classifier resolved a category the tile-id table does not define
    ///
    /// Defaulting silently to 0 would write wall values into the visual map,
    /// so an incomplete table rejects the classification call instead.
    MissingTileId {
        /// The category without a configured tile id
        category: TileCategory,
    },

    /// Failed to read the configuration file from disk
    ConfigRead {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Configuration file is not valid JSON for the expected schema
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Configuration parsed but holds an unusable value
    ConfigInvalid {
        /// Name of the offending field
        field: &'static str,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A generation job's thread terminated abnormally
    JobFailed {
        /// 1-based index of the job within the batch
        job: usize,
        /// Description of the failure
        reason: String,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionTooSmall { requested, minimum } => {
                write!(
                    f,
                    "Maze dimension {requested} is below the minimum of {minimum}"
                )
            }
            Self::InvalidStart { row, col, limit } => {
                write!(
                    f,
                    "Start cell ({row}, {col}) is outside the {limit}x{limit} logical grid"
                )
            }
            Self::InvalidMarker => {
                write!(f, "Open marker must be non-zero (0 denotes wall)")
            }
            Self::MissingTileId { category } => {
                write!(f, "No tile id configured for category '{category}'")
            }
            Self::ConfigRead { path, source } => {
                write!(f, "Failed to read config '{}': {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse config '{}': {source}", path.display())
            }
            Self::ConfigInvalid { field, reason } => {
                write!(f, "Invalid config field '{field}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::JobFailed { job, reason } => {
                write!(f, "Generation job {job} failed: {reason}")
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigRead { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tile_id_names_the_category() {
        let err = MazeError::MissingTileId {
            category: TileCategory::HorizontalDown,
        };
        assert_eq!(
            err.to_string(),
            "No tile id configured for category 'horizontal_down'"
        );
    }

    #[test]
    fn test_io_error_conversion_preserves_source() {
        let err: MazeError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing file").into();
        match err {
            MazeError::FileSystem { operation, .. } => assert_eq!(operation, "unknown"),
            _ => unreachable!("Expected FileSystem error type"),
        }
    }
}
