use teamlife_core::{count_around, next_cell, Cell, Grid, NeighborStats, SimulationEngine};

/// Builds a grid from rows of `.`, `A` and `B`.
fn board(rows: &[&str]) -> Grid {
    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .map(|row| {
            row.chars()
                .map(|ch| match ch {
                    'A' => Cell::TeamA,
                    'B' => Cell::TeamB,
                    _ => Cell::Dead,
                })
                .collect()
        })
        .collect();
    Grid::from_fn(cells.len(), cells[0].len(), |r, c| cells[r][c]).unwrap()
}

fn stats(a: u8, b: u8) -> NeighborStats {
    NeighborStats::from_counts(a, b).unwrap()
}

#[test]
fn test_tie_blocks_birth() {
    assert_eq!(next_cell(Cell::Dead, stats(3, 3)), Cell::Dead);

    let grid = board(&["AAA", "...", "BBB"]);
    let centre = count_around(&grid, 1, 1).unwrap();
    assert_eq!((centre.team_a(), centre.team_b()), (3, 3));

    let mut engine = SimulationEngine::from_grid(grid);
    assert_eq!(engine.step().get(1, 1), Ok(Cell::Dead));
}

#[test]
fn test_birth_with_minority_opponent() {
    assert_eq!(next_cell(Cell::Dead, stats(3, 2)), Cell::TeamA);
    assert_eq!(next_cell(Cell::Dead, stats(2, 3)), Cell::TeamB);

    let grid = board(&["AAA", "...", "B.B"]);
    let mut engine = SimulationEngine::from_grid(grid);
    assert_eq!(engine.step().get(1, 1), Ok(Cell::TeamA));
}

#[test]
fn test_survival_without_majority() {
    assert_eq!(next_cell(Cell::TeamA, stats(1, 1)), Cell::TeamA);

    let grid = board(&["A..", ".A.", "..B"]);
    let mut engine = SimulationEngine::from_grid(grid);
    assert_eq!(engine.step().get(1, 1), Ok(Cell::TeamA));
}

#[test]
fn test_conversion_by_opposing_majority() {
    assert_eq!(next_cell(Cell::TeamA, stats(1, 2)), Cell::TeamB);
    assert_eq!(next_cell(Cell::TeamB, stats(2, 1)), Cell::TeamA);

    let grid = board(&["A.B", ".A.", ".B."]);
    let centre = count_around(&grid, 1, 1).unwrap();
    assert_eq!((centre.total(), centre.team_a(), centre.team_b()), (3, 1, 2));
    let mut engine = SimulationEngine::from_grid(grid);
    assert_eq!(engine.step().get(1, 1), Ok(Cell::TeamB));
}

#[test]
fn test_overcrowded_cell_dies_regardless_of_majority() {
    for (a, b) in [(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)] {
        assert_eq!(next_cell(Cell::TeamA, stats(a, b)), Cell::Dead, "a={a} b={b}");
    }

    let grid = board(&["BBB", ".AB", "..."]);
    let mut engine = SimulationEngine::from_grid(grid);
    assert_eq!(engine.step().get(1, 1), Ok(Cell::Dead));
}

#[test]
fn test_classic_blinker_oscillates() {
    let horizontal = board(&[".....", ".....", ".AAA.", ".....", "....."]);
    let vertical = board(&[".....", "..A..", "..A..", "..A..", "....."]);

    let mut engine = SimulationEngine::from_grid(horizontal.clone());
    assert_eq!(engine.step(), &vertical);
    assert_eq!(engine.step(), &horizontal);
    assert_eq!(engine.generation(), 2);
}

#[test]
fn test_classic_glider_translates() {
    let start = board(&[
        ".A....", "..A...", "AAA...", "......", "......", "......",
    ]);
    let moved = board(&[
        "......", "..A...", "...A..", ".AAA..", "......", "......",
    ]);
    let mut engine = SimulationEngine::from_grid(start);
    assert_eq!(engine.advance(4), &moved);
}

#[test]
fn test_empty_board_stays_empty() {
    for (rows, cols) in [(1, 1), (1, 9), (7, 3), (32, 32)] {
        let mut engine = SimulationEngine::from_grid(Grid::dead(rows, cols).unwrap());
        assert!(engine.step().is_extinct(), "{rows}x{cols}");
        assert!(engine.advance(3).is_extinct(), "{rows}x{cols}");
    }
}

#[test]
fn test_edges_do_not_wrap() {
    // On a torus the left and right columns would be neighbors and this
    // column would keep a birth going on the opposite edge.
    let grid = board(&["A...", "A...", "A..."]);
    let mut engine = SimulationEngine::from_grid(grid);
    let next = engine.step();
    assert_eq!(next, &board(&["....", "AA..", "...."]));
}

#[test]
fn test_generation_counter() {
    let mut engine = SimulationEngine::from_grid(board(&["A.B", "...", "B.A"]));
    for n in 1..=5u64 {
        engine.step();
        assert_eq!(engine.current_state().1, n);
    }
}
