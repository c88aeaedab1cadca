//! Terminal 2048 runner (default binary).
//!
//! Wires the store runtime, game session, key handling, and renderer into a
//! blocking event loop. The game is turn-based, so the loop simply waits for
//! the next key instead of ticking.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameSession, NullStore, Phase, ScoreStore};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::store::StoreRuntime;
use tui_2048::term::{GameView, Hud, TerminalRenderer};
use tui_2048::types::Command;

/// Environment variable forcing a fixed RNG seed (for reproducible games).
const SEED_ENV: &str = "GAME_2048_SEED";

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = seed_from_env();

    match StoreRuntime::start_from_env() {
        Some(store) => run_loop(GameSession::new(seed, store), term),
        None => run_loop(GameSession::new(seed, NullStore), term),
    }
}

fn run_loop<S: ScoreStore>(
    mut session: GameSession<S>,
    term: &mut TerminalRenderer,
) -> Result<()> {
    let view = GameView;

    loop {
        // Render.
        let grid = session.current_board().tiles().clone();
        let score = session.current_board().score();
        let hud = Hud {
            score,
            highscore: session.highscore(),
            game_over: session.phase() == Phase::GameOver,
        };
        term.draw(|out| view.encode_into(out, &grid, &hud))?;

        // Block for input; resize events fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            match handle_key_event(key) {
                Some(Command::Move(direction)) => {
                    session.update_board(direction);
                }
                Some(Command::Restart) => session.reset_board(),
                None => {}
            }
        }
    }
}

fn seed_from_env() -> u32 {
    if let Some(seed) = std::env::var(SEED_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
    {
        return seed;
    }

    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(elapsed) => elapsed.subsec_nanos() ^ (elapsed.as_secs() as u32),
        Err(_) => 1,
    }
}
