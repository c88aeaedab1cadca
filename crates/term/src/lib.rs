//! Terminal crate - rendering for the 2048 board.
//!
//! [`TerminalRenderer`] owns the terminal session (raw mode, alternate
//! screen) and [`GameView`] encodes a frame; the two are wired together by
//! the binary's game loop.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{GameView, Hud};
