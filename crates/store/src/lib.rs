//! Store module - the persistence boundary implementation
//!
//! Implements the engine's [`ScoreStore`](tui_2048_core::ScoreStore) trait
//! over a small JSON state file, plus an async writer runtime that keeps
//! disk I/O off the game loop.
//!
//! # Layers
//!
//! - [`saved`]: the structural on-disk encoding (dimensions, row-major cell
//!   values, score) with validated round-trip to [`Board`](tui_2048_core::Board)
//! - [`file`]: synchronous JSON file store
//! - [`runtime`]: tokio-backed writer; saves are queued fire-and-forget and
//!   failures are logged, never fatal
//! - [`memory`]: in-memory store for tests and headless embedding
//!
//! # Environment Variables
//!
//! - `GAME_2048_DATA_DIR`: directory holding the state file (default: ".")
//! - `GAME_2048_STORE_DISABLED`: set to "1" or "true" to disable persistence

pub mod file;
pub mod memory;
pub mod runtime;
pub mod saved;

// Re-export the working set for convenience
pub use file::{FileStore, StoreError};
pub use memory::MemoryStore;
pub use runtime::{StoreRequest, StoreRuntime};
pub use saved::{SavedBoard, SavedState};
