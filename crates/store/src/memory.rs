//! In-memory store, for tests and headless embedding.

use std::sync::Mutex;

use crate::saved::{SavedBoard, SavedState};
use tui_2048_core::{Board, PersistError, ScoreStore};

/// A [`ScoreStore`] that lives entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<SavedState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a stored highscore.
    pub fn with_highscore(highscore: u32) -> Self {
        Self {
            state: Mutex::new(SavedState {
                highscore,
                board: None,
            }),
        }
    }

    /// Start with a stored board.
    pub fn with_board(board: &Board) -> Self {
        Self {
            state: Mutex::new(SavedState {
                highscore: 0,
                board: Some(SavedBoard::from_board(board)),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, SavedState>, PersistError> {
        self.state
            .lock()
            .map_err(|_| PersistError("memory store poisoned".into()))
    }
}

impl ScoreStore for MemoryStore {
    fn load_highscore(&self) -> Result<u32, PersistError> {
        Ok(self.lock()?.highscore)
    }

    fn save_highscore(&self, score: u32) -> Result<(), PersistError> {
        self.lock()?.highscore = score;
        Ok(())
    }

    fn load_board(&self) -> Result<Option<Board>, PersistError> {
        Ok(self.lock()?.board.clone().and_then(SavedBoard::into_board))
    }

    fn save_board(&self, board: &Board) -> Result<(), PersistError> {
        self.lock()?.board = Some(SavedBoard::from_board(board));
        Ok(())
    }
}
