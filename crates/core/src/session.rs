//! Game session - owns the live board and drives a game
//!
//! The session is the single writer of game state: it lazily seeds the
//! current board, runs the move engine and spawn policy per player input,
//! keeps the pre-move snapshot, tracks the lifecycle phase, and talks to
//! the persistence boundary. The engine pieces it orchestrates are pure;
//! all mutation funnels through here.

use crate::board::Board;
use crate::moves::{has_moves, shift};
use crate::persist::ScoreStore;
use crate::rng::SimpleRng;
use crate::spawn::SpawnPolicy;
use tui_2048_types::Direction;

/// Game lifecycle phase.
///
/// `Initial` until the board is first touched, `Playing` while moves are
/// possible, `GameOver` once the grid is full and no direction would change
/// it. `GameOver` is terminal until [`GameSession::reset_board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initial,
    Playing,
    GameOver,
}

/// Owns current/previous board, score bookkeeping, and the store handle.
#[derive(Debug)]
pub struct GameSession<S> {
    store: S,
    policy: SpawnPolicy,
    rng: SimpleRng,
    current: Option<Board>,
    previous: Option<Board>,
    phase: Phase,
    persist_failures: u32,
}

impl<S: ScoreStore> GameSession<S> {
    /// Create a session with the default spawn policy (always 2).
    pub fn new(seed: u32, store: S) -> Self {
        Self::with_policy(seed, SpawnPolicy::new(), store)
    }

    pub fn with_policy(seed: u32, policy: SpawnPolicy, store: S) -> Self {
        Self {
            store,
            policy,
            rng: SimpleRng::new(seed),
            current: None,
            previous: None,
            phase: Phase::Initial,
            persist_failures: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Count of persistence calls that failed and were recovered locally.
    pub fn persist_failures(&self) -> u32 {
        self.persist_failures
    }

    /// The persistence boundary this session delegates to.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The live board, seeding it on first access.
    ///
    /// A stored board (if the boundary has one) is resumed; otherwise a
    /// fresh board with the two starting tiles is generated. Subsequent
    /// calls return the same board without mutation.
    pub fn current_board(&mut self) -> &Board {
        self.ensure_board();
        self.current.as_ref().unwrap()
    }

    /// Discard current and previous board state.
    ///
    /// The next `current_board` call seeds a new board; the RNG stream
    /// continues, so the new board is (probabilistically) distinct from
    /// the discarded one.
    pub fn reset_board(&mut self) {
        self.current = None;
        self.previous = None;
        self.phase = Phase::Initial;
    }

    /// Apply one move to the current board.
    ///
    /// If the move does not change the grid this is a no-op: no spawn, no
    /// score change, and the previous-board snapshot is left untouched.
    /// Otherwise the pre-move board becomes the snapshot, a tile is spawned
    /// on the merged grid (when space remains), the merge score is added,
    /// and the result becomes the current board — synchronously, before any
    /// persistence call is issued. The new board is saved and, when the
    /// score strictly exceeds the stored highscore, the highscore is saved
    /// too. A full grid with no possible move transitions to `GameOver`.
    pub fn update_board(&mut self, direction: Direction) -> &Board {
        self.ensure_board();
        if self.phase == Phase::GameOver {
            return self.current.as_ref().unwrap();
        }

        let board = self.current.take().unwrap();
        let outcome = shift(board.tiles(), direction);
        if !outcome.changed {
            self.current = Some(board);
            return self.current.as_ref().unwrap();
        }

        let grid = if outcome.grid.empty_count() > 0 {
            let (spawned, _) = self.policy.spawn(&outcome.grid, &mut self.rng);
            spawned
        } else {
            outcome.grid
        };
        let score = board.score() + outcome.score_delta;

        self.previous = Some(board);
        self.current = Some(Board::new(grid, score));

        let next = self.current.as_ref().unwrap();
        if next.tiles().empty_count() == 0 && !has_moves(next.tiles()) {
            self.phase = Phase::GameOver;
        }

        if self.store.save_board(next).is_err() {
            self.persist_failures += 1;
        }

        let stored = match self.store.load_highscore() {
            Ok(value) => value,
            Err(_) => {
                self.persist_failures += 1;
                0
            }
        };
        if score > stored && self.store.save_highscore(score).is_err() {
            self.persist_failures += 1;
        }

        self.current.as_ref().unwrap()
    }

    /// Snapshot of the board before the most recent successful move.
    ///
    /// `None` until a move has changed the grid; a rejected (no-op) move
    /// leaves the last snapshot in place.
    pub fn previous_board(&self) -> Option<&Board> {
        self.previous.as_ref()
    }

    /// The stored highscore, falling back to 0 when storage is unavailable.
    pub fn highscore(&mut self) -> u32 {
        match self.store.load_highscore() {
            Ok(value) => value,
            Err(_) => {
                self.persist_failures += 1;
                0
            }
        }
    }

    fn ensure_board(&mut self) {
        if self.current.is_some() {
            return;
        }

        let board = match self.store.load_board() {
            Ok(Some(stored)) => stored,
            Ok(None) => Board::seeded(&mut self.rng, &self.policy),
            Err(_) => {
                self.persist_failures += 1;
                Board::seeded(&mut self.rng, &self.policy)
            }
        };

        self.phase = if board.tiles().empty_count() == 0 && !has_moves(board.tiles()) {
            Phase::GameOver
        } else {
            Phase::Playing
        };
        self.current = Some(board);
    }
}
