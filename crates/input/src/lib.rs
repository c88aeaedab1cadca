//! Input crate - keyboard handling for the terminal game.

pub mod map;

pub use map::{handle_key_event, should_quit};
