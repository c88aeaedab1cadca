//! Spawn policy - places a new tile after a successful move
//!
//! Cell choice is uniform over the currently empty cells, using the injected
//! RNG. The spawned value is 2 by default; the classic weighted 2/4 split is
//! available as configuration.

use crate::grid::Grid;
use crate::rng::SimpleRng;
use tui_2048_types::{Tile, SPAWN_VALUE};

/// Tile spawn configuration and placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnPolicy {
    /// Percent chance (0-100) that a spawned tile is a 4 instead of a 2.
    four_percent: u8,
}

impl SpawnPolicy {
    /// Policy that always spawns a 2.
    pub fn new() -> Self {
        Self { four_percent: 0 }
    }

    /// Policy with a weighted 2/4 split; `percent` is the chance of a 4.
    /// The classic game uses 10.
    pub fn with_four_percent(percent: u8) -> Self {
        Self {
            four_percent: percent.min(100),
        }
    }

    /// Place one new tile on a uniformly chosen empty cell.
    ///
    /// Returns the new grid and the spawned tile. A full grid has no space
    /// available: the grid is returned unchanged and the tile is `None` —
    /// callers are expected to check `Grid::empty_count` first, since
    /// game-over detection depends on exactly that check.
    pub fn spawn(&self, grid: &Grid, rng: &mut SimpleRng) -> (Grid, Option<Tile>) {
        let empties = grid.empty_cells();
        if empties.is_empty() {
            return (grid.clone(), None);
        }

        let (x, y) = empties[rng.next_range(empties.len() as u32) as usize];
        let value = if self.four_percent > 0 && rng.next_percent() < self.four_percent {
            SPAWN_VALUE * 2
        } else {
            SPAWN_VALUE
        };

        let tile = Tile::new(value, x, y);
        let mut next = grid.clone();
        next.set(x, y, Some(tile));
        (next, Some(tile))
    }
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_adds_exactly_one_tile() {
        let grid = Grid::new();
        let mut rng = SimpleRng::new(12345);

        let (next, tile) = SpawnPolicy::new().spawn(&grid, &mut rng);
        assert_eq!(next.empty_count(), 15);

        let tile = tile.unwrap();
        assert_eq!(tile.value, 2);
        assert_eq!(next.get(tile.x, tile.y), Some(Some(tile)));
        // Input grid is untouched.
        assert_eq!(grid.empty_count(), 16);
    }

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let full = Grid::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut rng = SimpleRng::new(1);

        let (next, tile) = SpawnPolicy::new().spawn(&full, &mut rng);
        assert!(tile.is_none());
        assert_eq!(next, full);
    }

    #[test]
    fn test_spawn_only_targets_empty_cells() {
        let mut grid = Grid::new();
        // Leave a single empty cell at (2, 1).
        for (x, y) in Grid::new().empty_cells() {
            if (x, y) != (2, 1) {
                grid.set(x, y, Some(Tile::new(4, x, y)));
            }
        }

        let mut rng = SimpleRng::new(99);
        let (next, tile) = SpawnPolicy::new().spawn(&grid, &mut rng);
        let tile = tile.unwrap();
        assert_eq!((tile.x, tile.y), (2, 1));
        assert_eq!(next.empty_count(), 0);
    }

    #[test]
    fn test_spawn_is_deterministic_per_seed() {
        let grid = Grid::new();
        let (a, _) = SpawnPolicy::new().spawn(&grid, &mut SimpleRng::new(7));
        let (b, _) = SpawnPolicy::new().spawn(&grid, &mut SimpleRng::new(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_four_percent_hundred_always_spawns_four() {
        let grid = Grid::new();
        let mut rng = SimpleRng::new(5);
        let policy = SpawnPolicy::with_four_percent(100);

        for _ in 0..10 {
            let (_, tile) = policy.spawn(&grid, &mut rng);
            assert_eq!(tile.unwrap().value, 4);
        }
    }
}
