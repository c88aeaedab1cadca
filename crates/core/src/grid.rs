//! Grid module - manages the 4x4 tile grid
//!
//! Each cell can be empty or hold a tile. Uses a flat array for better cache
//! locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..3 (left to right), y ranges 0..3
//! (top to bottom). Enumeration order is row-major: (0,0), (1,0), .. (3,3).

use arrayvec::ArrayVec;

use tui_2048_types::{Cell, Tile, GRID_HEIGHT, GRID_WIDTH};

/// Total number of cells on the grid
const GRID_SIZE: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

/// The tile grid - 4 columns x 4 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Build a grid by invoking the initializer once per cell.
    ///
    /// The initializer is called in row-major order: all of row 0 left to
    /// right, then row 1, and so on.
    pub fn generate(mut init: impl FnMut(u8, u8) -> Cell) -> Self {
        let mut grid = Self::new();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                grid.set(x, y, init(x, y));
            }
        }
        grid
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * (GRID_WIDTH as usize) + (x as usize))
    }

    /// Get width of the grid
    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    /// Get height of the grid
    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) -> bool {
        if let Some(tile) = cell {
            debug_assert_eq!(
                (tile.x, tile.y),
                (x, y),
                "tile position must match its cell"
            );
        }
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Iterate all cells as (x, y, cell) in row-major order.
    ///
    /// The iterator is finite and restartable; every enumeration-dependent
    /// algorithm (rendering, serialization, empty-cell selection) relies on
    /// this fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx as u8 % GRID_WIDTH, idx as u8 / GRID_WIDTH, *cell))
    }

    /// Count of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Positions of all empty cells, in row-major order
    pub fn empty_cells(&self) -> ArrayVec<(u8, u8), GRID_SIZE> {
        self.iter()
            .filter(|(_, _, cell)| cell.is_none())
            .map(|(x, y, _)| (x, y))
            .collect()
    }

    /// Create from a 2D value array; 0 encodes an empty cell
    pub fn from_rows(rows: [[u32; GRID_WIDTH as usize]; GRID_HEIGHT as usize]) -> Self {
        Self::generate(|x, y| {
            let value = rows[y as usize][x as usize];
            if value == 0 {
                None
            } else {
                Some(Tile::new(value, x, y))
            }
        })
    }

    /// Convert to a 2D value array; empty cells become 0
    pub fn to_rows(&self) -> [[u32; GRID_WIDTH as usize]; GRID_HEIGHT as usize] {
        let mut rows = [[0u32; GRID_WIDTH as usize]; GRID_HEIGHT as usize];
        for (x, y, cell) in self.iter() {
            rows[y as usize][x as usize] = cell.map(|tile| tile.value).unwrap_or(0);
        }
        rows
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(3, 0), Some(3));
        assert_eq!(Grid::index(0, 1), Some(4));
        assert_eq!(Grid::index(3, 3), Some(15));
        assert_eq!(Grid::index(4, 0), None);
        assert_eq!(Grid::index(0, 4), None);
    }

    #[test]
    fn test_grid_set_and_get() {
        let mut grid = Grid::new();

        assert!(grid.set(1, 2, Some(Tile::new(4, 1, 2))));
        assert_eq!(grid.get(1, 2), Some(Some(Tile::new(4, 1, 2))));

        // Clear a cell
        assert!(grid.set(1, 2, None));
        assert_eq!(grid.get(1, 2), Some(None));

        // Out of bounds
        assert_eq!(grid.get(4, 0), None);
        assert!(!grid.set(0, 4, None));
    }

    #[test]
    fn test_grid_iteration_is_row_major() {
        let grid = Grid::new();
        let coords: Vec<(u8, u8)> = grid.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords.len(), 16);
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (1, 0));
        assert_eq!(coords[4], (0, 1));
        assert_eq!(coords[15], (3, 3));
    }

    #[test]
    fn test_generate_order_is_row_major() {
        let mut calls = Vec::new();
        let _ = Grid::generate(|x, y| {
            calls.push((x, y));
            None
        });
        assert_eq!(calls[0], (0, 0));
        assert_eq!(calls[3], (3, 0));
        assert_eq!(calls[4], (0, 1));
        assert_eq!(calls.len(), 16);
    }

    #[test]
    fn test_structural_equality() {
        let a = Grid::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 4, 0], [0, 0, 0, 0]]);
        let b = Grid::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 4, 0], [0, 0, 0, 0]]);
        assert_eq!(a, b);

        let c = Grid::from_rows([[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 8, 0], [0, 0, 0, 0]]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_from_rows_round_trip() {
        let rows = [[2, 0, 4, 0], [0, 8, 0, 0], [0, 0, 0, 16], [2, 0, 0, 0]];
        assert_eq!(Grid::from_rows(rows).to_rows(), rows);
    }

    #[test]
    fn test_empty_cells() {
        let mut grid = Grid::new();
        assert_eq!(grid.empty_count(), 16);

        grid.set(0, 0, Some(Tile::new(2, 0, 0)));
        grid.set(3, 3, Some(Tile::new(2, 3, 3)));
        assert_eq!(grid.empty_count(), 14);

        let empties = grid.empty_cells();
        assert_eq!(empties.len(), 14);
        assert!(!empties.contains(&(0, 0)));
        assert!(!empties.contains(&(3, 3)));
        // Row-major order preserved.
        assert_eq!(empties[0], (1, 0));
    }
}
