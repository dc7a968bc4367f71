//! Core maze algorithms
/// Randomized backtracking maze carver
pub mod carver;
/// Connectivity-based tile classification
pub mod classifier;

pub use carver::MazeCarver;
pub use classifier::{TileCategory, TileIdTable, classify};
