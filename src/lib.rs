//! Perfect maze generation and connectivity-based tile mapping for Tiled TMX maps
//!
//! The carver builds a random spanning tree over a coarse logical cell grid and
//! materializes it into a physical wall/path grid; the classifier replaces every
//! open cell with a tile id chosen from its 4-directional connectivity. Around
//! that core sit a JSON batch configuration, a parallel batch orchestrator, and
//! a TMX exporter.

#![forbid(unsafe_code)]

/// Maze carving and neighborhood tile classification
pub mod algorithm;
/// Input/output operations: configuration, TMX export, CLI, and error handling
pub mod io;
/// Spatial primitives: coordinate systems and the cell grid
pub mod spatial;

pub use io::error::{MazeError, Result};
