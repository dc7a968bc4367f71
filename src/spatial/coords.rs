//! Dual coordinate systems for maze construction
//!
//! Carving reasons about two grids at once: a coarse logical grid whose cells are
//! the nodes of the spanning tree, and the fine physical grid that the maze is
//! materialized into. Logical cell (r, c) sits at physical (2r + 1, 2c + 1), so the
//! physical cells at even offsets are the walls between logical cells. Keeping the
//! two spaces as separate types makes a scale mix-up a compile error instead of a
//! carving bug.

/// A node of the maze's spanning tree on the coarse cell grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Logical {
    /// Row index on the logical grid
    pub row: usize,
    /// Column index on the logical grid
    pub col: usize,
}

/// A cell of the full-resolution output grid, walls included
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Physical {
    /// Row index on the physical grid
    pub row: usize,
    /// Column index on the physical grid
    pub col: usize,
}

impl Logical {
    /// Map this logical cell to its physical coordinate
    pub const fn to_physical(self) -> Physical {
        Physical {
            row: 2 * self.row + 1,
            col: 2 * self.col + 1,
        }
    }

    /// The adjacent logical cell in `direction`, if it lies on a grid of
    /// side `side`
    pub fn offset(self, direction: Direction, side: usize) -> Option<Self> {
        let (row_delta, col_delta) = direction.delta();
        let row = self.row.checked_add_signed(row_delta as isize)?;
        let col = self.col.checked_add_signed(col_delta as isize)?;
        (row < side && col < side).then_some(Self { row, col })
    }
}

impl Physical {
    /// One physical step in `direction`
    ///
    /// Returns `None` when the step would leave the grid on the low side; the
    /// caller is responsible for the high bound, which varies per maze.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (row_delta, col_delta) = direction.delta();
        let row = self.row.checked_add_signed(row_delta as isize)?;
        let col = self.col.checked_add_signed(col_delta as isize)?;
        Some(Self { row, col })
    }
}

/// The four cardinal unit offsets used to enumerate candidate neighbors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Row − 1
    North,
    /// Column + 1
    East,
    /// Row + 1
    South,
    /// Column − 1
    West,
}

impl Direction {
    /// All four directions in fixed order; carving shuffles a copy per iteration
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Unit (row, column) offset for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::East => (0, 1),
            Self::South => (1, 0),
            Self::West => (0, -1),
        }
    }
}
