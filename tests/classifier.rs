//! Validates connectivity classification and tile-id table handling

use mazetiler::MazeError;
use mazetiler::algorithm::carver::MazeCarver;
use mazetiler::algorithm::classifier::{Neighborhood, TileCategory, TileIdTable, classify};
use mazetiler::spatial::Grid;
use mazetiler::spatial::coords::Logical;

const MARKER: u32 = 99;

/// Table mapping each category to 100 + its priority rank
fn full_table() -> TileIdTable {
    TileIdTable::from_pairs(
        TileCategory::ALL
            .into_iter()
            .enumerate()
            .map(|(rank, category)| (category, 100 + rank as u32)),
    )
}

fn expected_id(category: TileCategory) -> u32 {
    let Some(rank) = TileCategory::ALL.iter().position(|&c| c == category) else {
        unreachable!("Category missing from ALL");
    };
    100 + rank as u32
}

/// 3x3 grid with an open center and the given cardinal neighbors open
fn grid_with_neighbors(north: bool, south: bool, west: bool, east: bool) -> Grid {
    let mut grid = Grid::new(3);
    grid.set(1, 1, MARKER);
    if north {
        grid.set(0, 1, MARKER);
    }
    if south {
        grid.set(2, 1, MARKER);
    }
    if west {
        grid.set(1, 0, MARKER);
    }
    if east {
        grid.set(1, 2, MARKER);
    }
    grid
}

#[test]
fn test_every_neighbor_combination_resolves_consistently() {
    let cases = [
        ((true, true, true, true), TileCategory::Cross),
        ((false, true, true, true), TileCategory::HorizontalDown),
        ((true, false, true, true), TileCategory::HorizontalUp),
        ((true, true, true, false), TileCategory::VerticalLeft),
        ((true, true, false, true), TileCategory::VerticalRight),
        ((false, true, true, false), TileCategory::BottomLeft),
        ((false, true, false, true), TileCategory::BottomRight),
        ((true, false, true, false), TileCategory::UpLeft),
        ((true, false, false, true), TileCategory::UpRight),
        ((false, false, true, true), TileCategory::Horizontal),
        ((true, true, false, false), TileCategory::Vertical),
        ((true, false, false, false), TileCategory::EndDown),
        ((false, false, true, false), TileCategory::EndLeft),
        ((false, false, false, true), TileCategory::EndRight),
        ((false, true, false, false), TileCategory::EndUp),
    ];

    let table = full_table();
    for ((north, south, west, east), category) in cases {
        let neighborhood = Neighborhood {
            north,
            south,
            west,
            east,
        };
        assert_eq!(
            neighborhood.category(),
            Some(category),
            "wrong category for N={north} S={south} W={west} E={east}"
        );

        let grid = grid_with_neighbors(north, south, west, east);
        let Ok(mapped) = classify(&grid, &table) else {
            unreachable!("Classification with a complete table cannot fail");
        };
        assert_eq!(
            mapped.get(1, 1),
            Some(expected_id(category)),
            "wrong tile id for {category}"
        );
    }
}

// Two open neighbors never make a T-junction: north + east is the
// north-east corner, not a three-way branch
#[test]
fn test_junctions_require_three_open_neighbors() {
    let neighborhood = Neighborhood {
        north: true,
        east: true,
        ..Neighborhood::default()
    };
    assert_eq!(neighborhood.category(), Some(TileCategory::UpRight));
}

#[test]
fn test_walls_pass_through_untouched() {
    let grid = grid_with_neighbors(true, true, false, false);
    let Ok(mapped) = classify(&grid, &full_table()) else {
        unreachable!("Classification with a complete table cannot fail");
    };

    for (row, col) in [(0, 0), (0, 2), (1, 0), (1, 2), (2, 0), (2, 2)] {
        assert_eq!(mapped.get(row, col), Some(0), "wall rewritten at ({row}, {col})");
    }
}

#[test]
fn test_isolated_open_cell_keeps_its_marker() {
    let grid = grid_with_neighbors(false, false, false, false);
    let Ok(mapped) = classify(&grid, &full_table()) else {
        unreachable!("A degenerate isolated cell must not fail classification");
    };
    assert_eq!(mapped.get(1, 1), Some(MARKER));
}

#[test]
fn test_missing_table_entry_rejects_classification() {
    let table = TileIdTable::from_pairs(
        TileCategory::ALL
            .into_iter()
            .filter(|&category| category != TileCategory::Vertical)
            .map(|category| (category, 1)),
    );
    assert_eq!(table.missing_categories(), vec![TileCategory::Vertical]);

    let grid = grid_with_neighbors(true, true, false, false);
    match classify(&grid, &table) {
        Err(MazeError::MissingTileId { category }) => {
            assert_eq!(category, TileCategory::Vertical);
        }
        _ => unreachable!("Expected MissingTileId error"),
    }
}

// End-to-end: every open cell of a carved maze has at least one open
// neighbor, so a complete table maps all of them to tile ids
#[test]
fn test_carved_maze_classifies_completely() {
    let Ok(mut carver) = MazeCarver::new(21, 77) else {
        unreachable!("Dimension 21 should be accepted");
    };
    let Ok(maze) = carver.generate(Logical { row: 0, col: 0 }, MARKER) else {
        unreachable!("Carving cannot fail once begun");
    };

    let Ok(mapped) = classify(&maze, &full_table()) else {
        unreachable!("Classification of a carved maze cannot fail");
    };

    assert_eq!(mapped.dimension(), maze.dimension());
    assert_eq!(mapped.open_count(), maze.open_count());

    for row in 0..mapped.dimension() {
        for col in 0..mapped.dimension() {
            let Some(value) = mapped.get(row, col) else {
                unreachable!("In-bounds read failed");
            };
            assert!(
                value == 0 || (100..115).contains(&value),
                "cell ({row}, {col}) holds unmapped value {value}"
            );
        }
    }
}
