//! Spatial primitives for maze construction
//!
//! This module contains spatial-related functionality including:
//! - Logical and physical coordinate systems with explicit conversion
//! - The square cell grid that mazes are carved into

/// Logical/physical coordinate types and the direction table
pub mod coords;
/// Bounds-checked square cell grid
pub mod grid;

pub use grid::Grid;
