//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the
//! persistence boundary the engine calls out through. It performs no I/O
//! and depends on no UI, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile grid with bounds-checked access and row-major iteration
//! - [`moves`]: the pure slide/merge transform, plus move probing
//! - [`spawn`]: tile spawn policy over an injected RNG
//! - [`board`]: grid + score value object
//! - [`session`]: the game state tracker orchestrating a whole game
//! - [`rng`]: seedable LCG randomness
//! - [`persist`]: the storage trait the session delegates to
//!
//! # Game Rules
//!
//! Classic 2048 semantics:
//!
//! - A move slides all tiles towards one edge; equal neighbors (in slide
//!   order) merge into a doubled tile, each tile merging at most once per move
//! - Every merge adds the merged value to the score
//! - A move that changes the grid spawns one new tile on a random empty cell
//! - A move that changes nothing spawns nothing and scores nothing
//! - The game is over when the grid is full and no direction would change it
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameSession, NullStore, Phase};
//! use tui_2048_types::Direction;
//!
//! let mut session = GameSession::new(12345, NullStore);
//!
//! // First access seeds a board with two starting tiles.
//! assert_eq!(session.current_board().tiles().empty_count(), 14);
//!
//! session.update_board(Direction::Left);
//! assert_eq!(session.phase(), Phase::Playing);
//! ```

pub mod board;
pub mod grid;
pub mod moves;
pub mod persist;
pub mod rng;
pub mod session;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use grid::Grid;
pub use moves::{can_shift, has_moves, shift, MoveOutcome};
pub use persist::{NullStore, PersistError, ScoreStore};
pub use rng::SimpleRng;
pub use session::{GameSession, Phase};
pub use spawn::SpawnPolicy;
