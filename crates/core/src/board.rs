//! Board module - a grid plus its accumulated score
//!
//! A board is a plain value: the session owns the live one and hands out
//! references; the move engine and spawn policy only ever produce new ones.

use std::fmt;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::spawn::SpawnPolicy;
use tui_2048_types::STARTING_TILES;

/// A grid together with the score earned on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Grid,
    score: u32,
}

impl Board {
    pub fn new(tiles: Grid, score: u32) -> Self {
        Self { tiles, score }
    }

    /// A fresh board: empty grid seeded with the starting tiles, score 0.
    pub fn seeded(rng: &mut SimpleRng, policy: &SpawnPolicy) -> Self {
        let mut grid = Grid::new();
        for _ in 0..STARTING_TILES {
            let (next, _) = policy.spawn(&grid, rng);
            grid = next;
        }
        Self {
            tiles: grid,
            score: 0,
        }
    }

    pub fn tiles(&self) -> &Grid {
        &self.tiles
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Score: {}", self.score)?;
        writeln!(f, "+------+------+------+------+")?;
        for y in 0..self.tiles.height() {
            write!(f, "|")?;
            for x in 0..self.tiles.width() {
                match self.tiles.get(x, y).flatten() {
                    Some(tile) => write!(f, "{:^6}|", tile.value)?,
                    None => write!(f, "      |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "+------+------+------+------+")?;
        }
        Ok(())
    }
}
