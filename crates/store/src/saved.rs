//! Saved-state encoding for the on-disk store.
//!
//! The board is stored structurally: grid dimensions, one value per cell in
//! row-major order (0 = empty), and the score. Decoding validates shape and
//! tile values; anything malformed decodes to "no board" rather than a
//! panic, so a corrupt state file degrades to a fresh start.

use serde::{Deserialize, Serialize};

use tui_2048_core::{Board, Grid};
use tui_2048_types::{Tile, GRID_HEIGHT, GRID_WIDTH};

/// Structural board encoding with round-trip fidelity to [`Board`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBoard {
    pub width: u8,
    pub height: u8,
    /// Row-major cell values; 0 encodes an empty cell.
    pub cells: Vec<u32>,
    pub score: u32,
}

impl SavedBoard {
    pub fn from_board(board: &Board) -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            cells: board
                .tiles()
                .iter()
                .map(|(_, _, cell)| cell.map(|tile| tile.value).unwrap_or(0))
                .collect(),
            score: board.score(),
        }
    }

    /// Decode back into a live board.
    ///
    /// Returns `None` when dimensions don't match, the cell count is wrong,
    /// or any value is not 0 or a power of two >= 2.
    pub fn into_board(self) -> Option<Board> {
        if self.width != GRID_WIDTH || self.height != GRID_HEIGHT {
            return None;
        }
        if self.cells.len() != (GRID_WIDTH as usize) * (GRID_HEIGHT as usize) {
            return None;
        }
        if !self
            .cells
            .iter()
            .all(|&v| v == 0 || (v >= 2 && v.is_power_of_two()))
        {
            return None;
        }

        let grid = Grid::generate(|x, y| {
            let value = self.cells[(y as usize) * (GRID_WIDTH as usize) + (x as usize)];
            if value == 0 {
                None
            } else {
                Some(Tile::new(value, x, y))
            }
        });
        Some(Board::new(grid, self.score))
    }
}

/// Everything the store keeps on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SavedState {
    pub highscore: u32,
    pub board: Option<SavedBoard>,
}
