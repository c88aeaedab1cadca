//! Persistence boundary - what the engine asks of the outside world
//!
//! The session talks to storage only through [`ScoreStore`]. Implementations
//! live outside the core (file-backed, in-memory, remote); the core never
//! performs I/O itself. Every hook is allowed to fail with
//! [`PersistError`] and the session recovers locally: highscore falls back
//! to 0, a missing board means a fresh start, and saves are best-effort.

use thiserror::Error;

use crate::board::Board;

/// Storage was unreachable or returned unusable data.
///
/// Recoverable by design: gameplay continues on local defaults and the
/// failure is reported, never propagated out of a session operation.
#[derive(Debug, Error)]
#[error("persistence unavailable: {0}")]
pub struct PersistError(pub String);

/// External storage hooks for highscore and board state.
///
/// `load_board`/`save_board` have no-op defaults: a store that does not
/// support cross-session resume simply never returns a board, and every
/// game starts fresh.
pub trait ScoreStore {
    fn load_highscore(&self) -> Result<u32, PersistError>;

    fn save_highscore(&self, score: u32) -> Result<(), PersistError>;

    fn load_board(&self) -> Result<Option<Board>, PersistError> {
        Ok(None)
    }

    fn save_board(&self, _board: &Board) -> Result<(), PersistError> {
        Ok(())
    }
}

/// A store that persists nothing: highscore is always 0, boards are never
/// saved or resumed. Keeps the engine usable without any storage wired up.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl ScoreStore for NullStore {
    fn load_highscore(&self) -> Result<u32, PersistError> {
        Ok(0)
    }

    fn save_highscore(&self, _score: u32) -> Result<(), PersistError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_store_defaults() {
        let store = NullStore;
        assert_eq!(store.load_highscore().unwrap(), 0);
        assert!(store.load_board().unwrap().is_none());
        assert!(store.save_highscore(100).is_ok());
    }
}
