//! Move engine - slide and merge transforms
//!
//! A move slides every tile towards one edge and merges equal neighbors.
//! The transform is pure: it takes a grid by reference and returns a new
//! grid, the score earned by merges, and whether anything moved. No
//! randomness lives here; spawning is a separate policy.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use tui_2048_types::{Direction, Tile, GRID_HEIGHT, GRID_WIDTH};

/// Number of cells in one row or column
const LANE_LEN: usize = GRID_WIDTH as usize;

/// Result of applying a move to a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The grid after sliding and merging (before any spawn).
    pub grid: Grid,
    /// Points earned by merges in this move.
    pub score_delta: u32,
    /// Whether the resulting grid differs from the input grid.
    pub changed: bool,
}

/// Slide and merge the whole grid in the given direction.
///
/// Each row (left/right) or column (up/down) is processed independently:
/// non-empty values are taken in slide order, equal adjacent pairs merge
/// into a doubled tile at the leading position (each input tile merges at
/// most once per move), and the result is compacted against the leading
/// edge. Running the same input twice yields identical output.
pub fn shift(grid: &Grid, direction: Direction) -> MoveOutcome {
    let mut out = Grid::new();
    let mut score_delta = 0;

    for lane in 0..lane_count(direction) {
        let coords = lane_coords(direction, lane);

        let values: ArrayVec<u32, LANE_LEN> = coords
            .iter()
            .filter_map(|&(x, y)| grid.get(x, y).flatten())
            .map(|tile| tile.value)
            .collect();

        let (merged, delta) = merge_line(&values);
        score_delta += delta;

        for (slot, &(x, y)) in coords.iter().enumerate() {
            let cell = merged.get(slot).map(|&value| Tile::new(value, x, y));
            out.set(x, y, cell);
        }
    }

    let changed = out != *grid;
    MoveOutcome {
        grid: out,
        score_delta,
        changed,
    }
}

/// Whether a move in the given direction would change the grid.
pub fn can_shift(grid: &Grid, direction: Direction) -> bool {
    shift(grid, direction).changed
}

/// Whether any of the four directions would change the grid.
///
/// Probes with the pure transform; nothing is committed.
pub fn has_moves(grid: &Grid) -> bool {
    Direction::ALL.iter().any(|&dir| can_shift(grid, dir))
}

/// Number of independent lanes for a direction
fn lane_count(direction: Direction) -> u8 {
    match direction {
        Direction::Left | Direction::Right => GRID_HEIGHT,
        Direction::Up | Direction::Down => GRID_WIDTH,
    }
}

/// Cell coordinates of one lane, leading edge first.
///
/// For `Left` the lane is row `lane` walked left-to-right; for `Right` the
/// same row right-to-left; `Up`/`Down` walk column `lane` top-down or
/// bottom-up.
fn lane_coords(direction: Direction, lane: u8) -> [(u8, u8); LANE_LEN] {
    let mut coords = [(0u8, 0u8); LANE_LEN];
    for (i, slot) in coords.iter_mut().enumerate() {
        let i = i as u8;
        *slot = match direction {
            Direction::Left => (i, lane),
            Direction::Right => (GRID_WIDTH - 1 - i, lane),
            Direction::Up => (lane, i),
            Direction::Down => (lane, GRID_HEIGHT - 1 - i),
        };
    }
    coords
}

/// Merge one lane's non-empty values, already in slide order.
///
/// Walks from the leading edge: an equal adjacent pair becomes a single
/// doubled value and both inputs are consumed, so a freshly merged value
/// never merges again within the same move. Returns the compacted values
/// and the score delta (the sum of merged values).
fn merge_line(values: &[u32]) -> (ArrayVec<u32, LANE_LEN>, u32) {
    let mut merged = ArrayVec::new();
    let mut delta = 0;

    let mut i = 0;
    while i < values.len() {
        if i + 1 < values.len() && values[i] == values[i + 1] {
            let doubled = values[i] * 2;
            merged.push(doubled);
            delta += doubled;
            i += 2;
        } else {
            merged.push(values[i]);
            i += 1;
        }
    }

    (merged, delta)
}
