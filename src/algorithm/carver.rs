//! Randomized backtracking maze carver
//!
//! Builds a uniform spanning tree over the logical cell grid with an explicit
//! frontier stack (the recursive formulation overflows on large mazes) and
//! materializes it into a physical grid: every accepted move opens the wall cell
//! between the cursor and the chosen neighbor plus the neighbor's own cell. The
//! border ring of the physical grid is never touched.

use ndarray::Array2;
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::io::configuration::MINIMUM_DIMENSION;
use crate::io::error::{MazeError, Result};
use crate::spatial::Grid;
use crate::spatial::coords::{Direction, Logical, Physical};

/// Maze carving engine for one generation job
///
/// Owns its random source so concurrent jobs never share RNG state; seed each
/// carver independently for parallel batches.
#[derive(Debug)]
pub struct MazeCarver {
    rng: StdRng,
    dimension: usize,
    logical_side: usize,
}

impl MazeCarver {
    /// Create a carver for a maze of side `dimension`
    ///
    /// An even dimension is incremented by one, matching the requirement that
    /// logical cells sit at odd physical offsets.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::DimensionTooSmall`] when the coerced dimension is
    /// below [`MINIMUM_DIMENSION`]; nothing is allocated in that case.
    pub fn new(dimension: usize, seed: u64) -> Result<Self> {
        let dimension = if dimension % 2 == 0 {
            dimension + 1
        } else {
            dimension
        };

        if dimension < MINIMUM_DIMENSION {
            return Err(MazeError::DimensionTooSmall {
                requested: dimension,
                minimum: MINIMUM_DIMENSION,
            });
        }

        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            dimension,
            logical_side: (dimension - 1) / 2,
        })
    }

    /// Side length of the physical grid this carver produces
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Side length of the logical cell grid
    pub const fn logical_side(&self) -> usize {
        self.logical_side
    }

    /// Carve a perfect maze rooted at `start`, opening cells with `open_marker`
    ///
    /// The start cell and the physical cell at (D − 2, D − 2) are always open on
    /// return, guaranteeing a usable entrance/exit pair.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::InvalidMarker`] for a zero marker (it would alias
    /// walls) and [`MazeError::InvalidStart`] when `start` lies outside the
    /// logical grid. Carving itself cannot fail once begun.
    pub fn generate(&mut self, start: Logical, open_marker: u32) -> Result<Grid> {
        if open_marker == 0 {
            return Err(MazeError::InvalidMarker);
        }
        if start.row >= self.logical_side || start.col >= self.logical_side {
            return Err(MazeError::InvalidStart {
                row: start.row,
                col: start.col,
                limit: self.logical_side,
            });
        }

        let mut grid = Grid::new(self.dimension);
        let mut visited = Array2::from_elem((self.logical_side, self.logical_side), false);
        let mut stack = Vec::with_capacity(self.logical_side * self.logical_side);
        let mut directions = Direction::ALL;

        let mut cursor = start.to_physical();
        grid.mark(cursor, open_marker);
        mark_visited(&mut visited, start);
        stack.push(start);

        while let Some(active) = stack.pop() {
            directions.shuffle(&mut self.rng);

            let mut advanced = false;
            for direction in directions {
                let Some(neighbor) = active.offset(direction, self.logical_side) else {
                    continue;
                };
                if is_visited(&visited, neighbor) {
                    continue;
                }

                cursor = carve_passage(&mut grid, cursor, direction, open_marker);
                mark_visited(&mut visited, neighbor);
                stack.push(active);
                stack.push(neighbor);
                advanced = true;
                break;
            }

            if !advanced {
                // Dead end: return to the predecessor, two physical steps back
                // along the axis that connects it to the abandoned cell
                if let Some(previous) = stack.pop() {
                    cursor = previous.to_physical();
                    stack.push(previous);
                }
            }
        }

        // Entrance/exit pair is guaranteed regardless of the random walk
        grid.mark(start.to_physical(), open_marker);
        grid.set(self.dimension - 2, self.dimension - 2, open_marker);

        Ok(grid)
    }
}

/// Open the wall cell beyond `cursor` and the neighbor cell beyond that,
/// returning the neighbor's physical coordinate as the new cursor
fn carve_passage(grid: &mut Grid, cursor: Physical, direction: Direction, marker: u32) -> Physical {
    let Some(wall) = cursor.step(direction) else {
        return cursor;
    };
    let Some(neighbor) = wall.step(direction) else {
        return cursor;
    };

    grid.mark(wall, marker);
    grid.mark(neighbor, marker);
    neighbor
}

fn mark_visited(visited: &mut Array2<bool>, cell: Logical) {
    if let Some(flag) = visited.get_mut([cell.row, cell.col]) {
        *flag = true;
    }
}

fn is_visited(visited: &Array2<bool>, cell: Logical) -> bool {
    visited.get([cell.row, cell.col]).copied().unwrap_or(true)
}
