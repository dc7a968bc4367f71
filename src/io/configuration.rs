//! Batch configuration schema and generation defaults
//!
//! Mirrors the JSON layout consumed by the original TMX tooling: one document
//! describing the map name, the tileset, how many mazes to produce, and the
//! optional tile-id table that turns raw mazes into oriented tile maps.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::algorithm::classifier::TileIdTable;
use crate::io::error::{MazeError, Result};

/// Smallest accepted maze dimension; anything below has no interior to carve
pub const MINIMUM_DIMENSION: usize = 5;

/// Fixed base seed for reproducible batches
pub const DEFAULT_SEED: u64 = 42;

/// Tileset tile count when the config does not declare one
pub const DEFAULT_TILE_COUNT: u32 = 35;

/// Tileset column count when the config does not declare one
pub const DEFAULT_TILE_COLUMNS: u32 = 5;

/// Batch generation parameters loaded from a JSON config file
#[derive(Clone, Debug, Deserialize)]
pub struct MapConfig {
    /// Base name for output files (`<name>_<index>.tmx`)
    pub name: String,
    /// Name of the tile layer inside the TMX document
    pub layer: String,
    /// Side length of the first maze in the batch
    pub dimensions: usize,
    /// Added to the side length for each subsequent maze
    #[serde(default)]
    pub dimensions_increment: usize,
    /// Number of mazes to generate
    pub amount: usize,
    /// Path to the tileset image, as referenced from the TMX file
    pub tile_set: String,
    /// Display name of the tileset
    pub tile_set_name: String,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// Marker written into freshly carved cells; must be non-zero
    pub gid_default: u32,
    /// Category-to-tile-id table; when absent, raw mazes are exported unclassified
    #[serde(default)]
    pub gid_mapper: Option<TileIdTable>,
    /// Number of tiles in the tileset
    #[serde(default = "default_tile_count")]
    pub tile_count: u32,
    /// Number of tile columns in the tileset image
    #[serde(default = "default_tile_columns")]
    pub tile_columns: u32,
}

const fn default_tile_count() -> u32 {
    DEFAULT_TILE_COUNT
}

const fn default_tile_columns() -> u32 {
    DEFAULT_TILE_COLUMNS
}

impl MapConfig {
    /// Load and validate a configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::ConfigRead`] when the file cannot be read,
    /// [`MazeError::ConfigParse`] for malformed JSON, and the validation
    /// errors documented on [`Self::validate`].
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| MazeError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self =
            serde_json::from_str(&raw).map_err(|source| MazeError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a configuration from a JSON string
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::ConfigInvalid`] for malformed JSON (no file path is
    /// available to report) and the validation errors documented on
    /// [`Self::validate`].
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|source| MazeError::ConfigInvalid {
                field: "json",
                reason: source.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check semantic constraints that the schema alone cannot express
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::ConfigInvalid`] when `amount` is zero, `dimensions`
    /// is below [`MINIMUM_DIMENSION`], `gid_default` is zero, or a supplied
    /// `gid_mapper` does not cover all 15 tile categories.
    pub fn validate(&self) -> Result<()> {
        if self.amount == 0 {
            return Err(MazeError::ConfigInvalid {
                field: "amount",
                reason: "at least one maze must be requested".to_owned(),
            });
        }

        if self.dimensions < MINIMUM_DIMENSION {
            return Err(MazeError::ConfigInvalid {
                field: "dimensions",
                reason: format!(
                    "{} is below the minimum of {MINIMUM_DIMENSION}",
                    self.dimensions
                ),
            });
        }

        if self.gid_default == 0 {
            return Err(MazeError::ConfigInvalid {
                field: "gid_default",
                reason: "0 denotes wall and cannot mark open cells".to_owned(),
            });
        }

        if let Some(table) = &self.gid_mapper {
            let missing = table.missing_categories();
            if !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(|category| category.key()).collect();
                return Err(MazeError::ConfigInvalid {
                    field: "gid_mapper",
                    reason: format!("missing categories: {}", names.join(", ")),
                });
            }
        }

        Ok(())
    }

    /// Maze side length for the 1-based `job` index
    ///
    /// The batch grows linearly: job 1 uses `dimensions`, each later job adds
    /// `dimensions_increment`.
    pub const fn dimension_for_job(&self, job: usize) -> usize {
        self.dimensions + job.saturating_sub(1) * self.dimensions_increment
    }
}
