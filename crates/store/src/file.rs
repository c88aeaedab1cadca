//! JSON file-backed store.
//!
//! One small state file holds the highscore and (optionally) the last
//! board. Saves are read-modify-write of the whole file; the file is tiny
//! and writes happen at most once per move.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::saved::{SavedBoard, SavedState};
use tui_2048_core::{Board, PersistError, ScoreStore};

/// Environment variable overriding the state file directory.
pub const DATA_DIR_ENV: &str = "GAME_2048_DATA_DIR";

/// State file name inside the data directory.
pub const STATE_FILE: &str = "tui-2048.json";

/// Underlying failure of a file store operation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store io: {0}")]
    Io(#[from] io::Error),
    #[error("store encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl From<StoreError> for PersistError {
    fn from(err: StoreError) -> Self {
        PersistError(err.to_string())
    }
}

/// File-backed [`ScoreStore`].
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the given state file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in `GAME_2048_DATA_DIR` (default: current directory).
    pub fn from_env() -> Self {
        let dir = std::env::var(DATA_DIR_ENV).unwrap_or_else(|_| ".".to_string());
        Self::new(Path::new(&dir).join(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the state file; a missing file is an empty state, not an error.
    pub fn read_state(&self) -> Result<SavedState, StoreError> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(SavedState::default()),
            Err(err) => Err(err.into()),
        }
    }

    /// Read-modify-write the state file.
    pub fn update_state(
        &self,
        update: impl FnOnce(&mut SavedState),
    ) -> Result<(), StoreError> {
        // A corrupt existing file should not block new saves.
        let mut state = self.read_state().unwrap_or_default();
        update(&mut state);
        let bytes = serde_json::to_vec_pretty(&state)?;
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

impl ScoreStore for FileStore {
    fn load_highscore(&self) -> Result<u32, PersistError> {
        Ok(self.read_state().map_err(PersistError::from)?.highscore)
    }

    fn save_highscore(&self, score: u32) -> Result<(), PersistError> {
        self.update_state(|state| state.highscore = score)
            .map_err(PersistError::from)
    }

    fn load_board(&self) -> Result<Option<Board>, PersistError> {
        let state = self.read_state().map_err(PersistError::from)?;
        // A malformed stored board degrades to "no board".
        Ok(state.board.and_then(SavedBoard::into_board))
    }

    fn save_board(&self, board: &Board) -> Result<(), PersistError> {
        let saved = SavedBoard::from_board(board);
        self.update_state(|state| state.board = Some(saved))
            .map_err(PersistError::from)
    }
}
