//! Store runtime integration.
//!
//! Bridges the sync game loop with an async file writer. Saves are queued
//! over a channel and written by a background task, so a slow or failing
//! disk never stalls gameplay: the in-memory state transition has already
//! happened by the time a request is queued. Write failures are logged and
//! dropped, never surfaced as gameplay errors.

use anyhow::Result;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::file::FileStore;
use crate::saved::SavedBoard;
use tui_2048_core::{Board, PersistError, ScoreStore};

/// Environment variable that disables persistence entirely.
pub const STORE_DISABLED_ENV: &str = "GAME_2048_STORE_DISABLED";

/// Save request delivered to the writer task.
#[derive(Debug, Clone)]
pub enum StoreRequest {
    SaveHighscore(u32),
    SaveBoard(SavedBoard),
}

/// Running store instance: sync loads, queued fire-and-forget saves.
#[derive(Debug)]
pub struct StoreRuntime {
    _rt: Runtime,
    tx: mpsc::UnboundedSender<StoreRequest>,
    file: FileStore,
}

impl StoreRuntime {
    /// Start the store from environment variables.
    ///
    /// Returns None if `GAME_2048_STORE_DISABLED` is set.
    pub fn start_from_env() -> Option<Self> {
        if is_disabled() {
            return None;
        }
        Self::start(FileStore::from_env()).ok()
    }

    /// Start the writer task over the given file store.
    pub fn start(file: FileStore) -> Result<Self> {
        let (tx, mut rx) = mpsc::unbounded_channel::<StoreRequest>();

        let rt = Runtime::new()?;
        let writer = file.clone();
        rt.spawn(async move {
            while let Some(request) = rx.recv().await {
                let result = match request {
                    StoreRequest::SaveHighscore(score) => {
                        writer.update_state(|state| state.highscore = score)
                    }
                    StoreRequest::SaveBoard(saved) => {
                        writer.update_state(|state| state.board = Some(saved))
                    }
                };
                if let Err(err) = result {
                    eprintln!("[store] save failed: {}", err);
                }
            }
        });

        Ok(Self { _rt: rt, tx, file })
    }

    fn queue(&self, request: StoreRequest) -> Result<(), PersistError> {
        self.tx
            .send(request)
            .map_err(|_| PersistError("store writer stopped".into()))
    }
}

impl ScoreStore for StoreRuntime {
    fn load_highscore(&self) -> Result<u32, PersistError> {
        self.file.load_highscore()
    }

    fn save_highscore(&self, score: u32) -> Result<(), PersistError> {
        self.queue(StoreRequest::SaveHighscore(score))
    }

    fn load_board(&self) -> Result<Option<Board>, PersistError> {
        self.file.load_board()
    }

    fn save_board(&self, board: &Board) -> Result<(), PersistError> {
        self.queue(StoreRequest::SaveBoard(SavedBoard::from_board(board)))
    }
}

fn is_disabled() -> bool {
    match std::env::var(STORE_DISABLED_ENV) {
        Ok(value) => value == "1" || value.eq_ignore_ascii_case("true"),
        Err(_) => false,
    }
}
