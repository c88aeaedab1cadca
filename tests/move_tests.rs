//! Move engine tests - the reference slide/merge scenarios

use tui_2048::core::{can_shift, has_moves, shift, Grid};
use tui_2048::types::Direction;

#[test]
fn test_single_tile_slides_to_the_far_edge() {
    // One tile at (1, 0); moving down lands it at (1, 3).
    let grid = Grid::from_rows([[0, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);

    let outcome = shift(&grid, Direction::Down);
    assert!(outcome.changed);
    assert_eq!(outcome.score_delta, 0);
    assert_eq!(
        outcome.grid.to_rows(),
        [[0; 4], [0; 4], [0; 4], [0, 2, 0, 0]]
    );
}

#[test]
fn test_equal_pair_merges_at_the_leading_edge() {
    // Tiles {2, (0,3)} and {2, (3,3)}; moving left leaves {4, (0,3)} alone.
    let grid = Grid::from_rows([[0; 4], [0; 4], [0; 4], [2, 0, 0, 2]]);

    let outcome = shift(&grid, Direction::Left);
    assert!(outcome.changed);
    assert_eq!(outcome.score_delta, 4);
    assert_eq!(outcome.grid.to_rows(), [[0; 4], [0; 4], [0; 4], [4, 0, 0, 0]]);

    let tile = outcome.grid.get(0, 3).flatten().unwrap();
    assert_eq!((tile.value, tile.x, tile.y), (4, 0, 3));
}

#[test]
fn test_unequal_tiles_stack_without_merging() {
    // {4, (0,0)} and {2, (0,3)}; moving up stacks them, no merge.
    let grid = Grid::from_rows([[4, 0, 0, 0], [0; 4], [0; 4], [2, 0, 0, 0]]);

    let outcome = shift(&grid, Direction::Up);
    assert!(outcome.changed);
    assert_eq!(outcome.score_delta, 0);
    assert_eq!(
        outcome.grid.to_rows(),
        [[4, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]]
    );
}

#[test]
fn test_triple_merges_exactly_once() {
    // Three equal tiles produce one merge and one leftover, never a chain.
    let grid = Grid::from_rows([[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]]);

    let outcome = shift(&grid, Direction::Left);
    assert_eq!(outcome.grid.to_rows(), [[4, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(outcome.score_delta, 4);
}

#[test]
fn test_four_equal_tiles_merge_pairwise() {
    let grid = Grid::from_rows([[4, 4, 4, 4], [0; 4], [0; 4], [0; 4]]);

    let outcome = shift(&grid, Direction::Right);
    assert_eq!(outcome.grid.to_rows(), [[0, 0, 8, 8], [0; 4], [0; 4], [0; 4]]);
    assert_eq!(outcome.score_delta, 16);
}

#[test]
fn test_compacted_unmergeable_grid_reports_no_change() {
    let grid = Grid::from_rows([[2, 4, 8, 16], [0; 4], [0; 4], [0; 4]]);

    let outcome = shift(&grid, Direction::Left);
    assert!(!outcome.changed);
    assert_eq!(outcome.score_delta, 0);
    assert_eq!(outcome.grid, grid);
}

#[test]
fn test_stuck_checkerboard_has_no_moves() {
    let stuck = Grid::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);

    for dir in Direction::ALL {
        assert!(!can_shift(&stuck, dir), "direction {:?}", dir);
        assert!(!shift(&stuck, dir).changed);
    }
    assert!(!has_moves(&stuck));
}

#[test]
fn test_shift_never_mutates_its_input() {
    let grid = Grid::from_rows([[2, 2, 0, 4], [0, 4, 4, 0], [0; 4], [2, 0, 0, 2]]);
    let copy = grid.clone();

    for dir in Direction::ALL {
        let _ = shift(&grid, dir);
    }
    assert_eq!(grid, copy);
}

#[test]
fn test_score_delta_is_the_sum_of_merged_values() {
    // Row 0 merges 2+2 (4) and 4+4 (8); row 3 merges 8+8 (16).
    let grid = Grid::from_rows([
        [2, 2, 4, 4],
        [0; 4],
        [2, 4, 8, 16],
        [8, 8, 0, 0],
    ]);

    let outcome = shift(&grid, Direction::Left);
    assert_eq!(outcome.score_delta, 4 + 8 + 16);
}

#[test]
fn test_merge_determinism_across_runs() {
    let grid = Grid::from_rows([
        [2, 2, 4, 0],
        [0, 4, 4, 2],
        [2, 0, 2, 2],
        [0, 8, 0, 8],
    ]);

    for dir in Direction::ALL {
        let first = shift(&grid, dir);
        let second = shift(&grid, dir);
        assert_eq!(first.grid, second.grid);
        assert_eq!(first.score_delta, second.score_delta);
        assert_eq!(first.changed, second.changed);
    }
}
