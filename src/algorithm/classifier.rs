//! Neighborhood tile classification for carved mazes
//!
//! Every open cell is assigned one of 15 connectivity categories from the
//! open/closed state of its four cardinal neighbors. Diagonal neighbors never
//! influence the result. Category names follow tile-art orientation conventions:
//! a `HorizontalDown` tile is a horizontal corridor with a branch hanging south,
//! an `EndDown` tile is the bottom cap of a corridor (open only to the north).

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::io::error::{MazeError, Result};
use crate::spatial::Grid;

/// Connectivity shape of an open cell, derived from its 4-directional neighbors
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileCategory {
    /// All four neighbors open (4-way junction)
    Cross,
    /// T-junction: west, east, and south open
    HorizontalDown,
    /// T-junction: west, east, and north open
    HorizontalUp,
    /// T-junction: north, south, and west open
    VerticalLeft,
    /// T-junction: north, south, and east open
    VerticalRight,
    /// Corner: south and west open
    BottomLeft,
    /// Corner: south and east open
    BottomRight,
    /// Corner: north and west open
    UpLeft,
    /// Corner: north and east open
    UpRight,
    /// Straight corridor: west and east open
    Horizontal,
    /// Straight corridor: north and south open
    Vertical,
    /// Dead end open only to the north
    EndDown,
    /// Dead end open only to the west
    EndLeft,
    /// Dead end open only to the east
    EndRight,
    /// Dead end open only to the south
    EndUp,
}

impl TileCategory {
    /// Every category, in resolution priority order
    pub const ALL: [Self; 15] = [
        Self::Cross,
        Self::HorizontalDown,
        Self::HorizontalUp,
        Self::VerticalLeft,
        Self::VerticalRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::UpLeft,
        Self::UpRight,
        Self::Horizontal,
        Self::Vertical,
        Self::EndDown,
        Self::EndLeft,
        Self::EndRight,
        Self::EndUp,
    ];

    /// Configuration key for this category (the serde snake_case name)
    pub const fn key(self) -> &'static str {
        match self {
            Self::Cross => "cross",
            Self::HorizontalDown => "horizontal_down",
            Self::HorizontalUp => "horizontal_up",
            Self::VerticalLeft => "vertical_left",
            Self::VerticalRight => "vertical_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
            Self::UpLeft => "up_left",
            Self::UpRight => "up_right",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
            Self::EndDown => "end_down",
            Self::EndLeft => "end_left",
            Self::EndRight => "end_right",
            Self::EndUp => "end_up",
        }
    }
}

impl fmt::Display for TileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Open/closed state of a cell's four cardinal neighbors
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighborhood {
    /// Neighbor at row − 1 is open
    pub north: bool,
    /// Neighbor at row + 1 is open
    pub south: bool,
    /// Neighbor at column − 1 is open
    pub west: bool,
    /// Neighbor at column + 1 is open
    pub east: bool,
}

impl Neighborhood {
    /// Probe the four cardinal neighbors of (`row`, `col`) in `grid`
    ///
    /// Neighbors outside the grid read as wall, so border cells classify from
    /// their in-grid connectivity alone.
    pub fn probe(grid: &Grid, row: usize, col: usize) -> Self {
        Self {
            north: row > 0 && grid.is_open(row - 1, col),
            south: grid.is_open(row + 1, col),
            west: col > 0 && grid.is_open(row, col - 1),
            east: grid.is_open(row, col + 1),
        }
    }

    /// Resolve this neighborhood to its tile category
    ///
    /// The 16 neighbor combinations map onto the 15 categories exhaustively;
    /// junctions win over corners, corners over straights, straights over dead
    /// ends. `None` only for the all-closed combination, which a correctly
    /// carved maze never produces (an isolated cell keeps its raw marker).
    pub const fn category(self) -> Option<TileCategory> {
        match (self.north, self.south, self.west, self.east) {
            (true, true, true, true) => Some(TileCategory::Cross),
            (false, true, true, true) => Some(TileCategory::HorizontalDown),
            (true, false, true, true) => Some(TileCategory::HorizontalUp),
            (true, true, true, false) => Some(TileCategory::VerticalLeft),
            (true, true, false, true) => Some(TileCategory::VerticalRight),
            (false, true, true, false) => Some(TileCategory::BottomLeft),
            (false, true, false, true) => Some(TileCategory::BottomRight),
            (true, false, true, false) => Some(TileCategory::UpLeft),
            (true, false, false, true) => Some(TileCategory::UpRight),
            (false, false, true, true) => Some(TileCategory::Horizontal),
            (true, true, false, false) => Some(TileCategory::Vertical),
            (true, false, false, false) => Some(TileCategory::EndDown),
            (false, false, true, false) => Some(TileCategory::EndLeft),
            (false, false, false, true) => Some(TileCategory::EndRight),
            (false, true, false, false) => Some(TileCategory::EndUp),
            (false, false, false, false) => None,
        }
    }
}

/// Caller-supplied mapping from tile categories to tile-set ids
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TileIdTable {
    ids: BTreeMap<TileCategory, u32>,
}

impl TileIdTable {
    /// Build a table from explicit category/id pairs
    pub fn from_pairs(pairs: impl IntoIterator<Item = (TileCategory, u32)>) -> Self {
        Self {
            ids: pairs.into_iter().collect(),
        }
    }

    /// Tile id for `category`, if one was configured
    pub fn tile_id(&self, category: TileCategory) -> Option<u32> {
        self.ids.get(&category).copied()
    }

    /// Categories with no configured tile id
    pub fn missing_categories(&self) -> Vec<TileCategory> {
        TileCategory::ALL
            .into_iter()
            .filter(|category| !self.ids.contains_key(category))
            .collect()
    }
}

/// Replace every open cell of `grid` with the tile id for its connectivity
///
/// Wall cells pass through untouched. Classification reads the input grid and
/// writes a fresh one, so tile ids never feed back into neighbor probing. An
/// open cell with no open cardinal neighbor is degenerate input and keeps its
/// raw marker.
///
/// # Errors
///
/// Returns [`MazeError::MissingTileId`] when a resolved category has no entry
/// in `table`; a silent fallback to 0 would write walls into the visual map.
pub fn classify(grid: &Grid, table: &TileIdTable) -> Result<Grid> {
    let mut mapped = grid.clone();

    for row in 0..grid.dimension() {
        for col in 0..grid.dimension() {
            if !grid.is_open(row, col) {
                continue;
            }

            let Some(category) = Neighborhood::probe(grid, row, col).category() else {
                continue;
            };

            let id = table
                .tile_id(category)
                .ok_or(MazeError::MissingTileId { category })?;
            mapped.set(row, col, id);
        }
    }

    Ok(mapped)
}
