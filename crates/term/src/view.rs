//! GameView: encodes a board and HUD into terminal draw commands.
//!
//! The view is pure with respect to the terminal: it only queues commands
//! into a byte buffer, so it can be exercised in tests without a tty.

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use tui_2048_core::Grid;

/// Cell width in terminal columns (room for a centered 4-digit value).
const CELL_W: u16 = 6;

/// Top-left corner of the board frame.
const ORIGIN_X: u16 = 2;
const ORIGIN_Y: u16 = 3;

/// Header values shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub highscore: u32,
    pub game_over: bool,
}

/// Encodes the play field into crossterm commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Encode one full frame (header, framed grid, footer) into `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>, grid: &Grid, hud: &Hud) -> Result<()> {
        out.queue(terminal::Clear(terminal::ClearType::All))?;

        out.queue(cursor::MoveTo(ORIGIN_X, 1))?;
        out.queue(ResetColor)?;
        out.queue(Print(format!(
            "2048   score {}   best {}",
            hud.score, hud.highscore
        )))?;

        let border = "+------+------+------+------+";
        for y in 0..grid.height() {
            let row_top = ORIGIN_Y + (y as u16) * 2;
            out.queue(cursor::MoveTo(ORIGIN_X, row_top))?;
            out.queue(Print(border))?;

            out.queue(cursor::MoveTo(ORIGIN_X, row_top + 1))?;
            out.queue(Print("|"))?;
            for x in 0..grid.width() {
                match grid.get(x, y).flatten() {
                    Some(tile) => {
                        out.queue(SetBackgroundColor(tile_bg(tile.value)))?;
                        out.queue(SetForegroundColor(tile_fg(tile.value)))?;
                        out.queue(Print(format!("{:^width$}", tile.value, width = CELL_W as usize)))?;
                    }
                    None => {
                        out.queue(SetBackgroundColor(EMPTY_BG))?;
                        out.queue(Print(" ".repeat(CELL_W as usize)))?;
                    }
                }
                out.queue(ResetColor)?;
                out.queue(Print("|"))?;
            }
        }
        let bottom = ORIGIN_Y + (grid.height() as u16) * 2;
        out.queue(cursor::MoveTo(ORIGIN_X, bottom))?;
        out.queue(Print(border))?;

        out.queue(cursor::MoveTo(ORIGIN_X, bottom + 2))?;
        if hud.game_over {
            out.queue(SetForegroundColor(Color::Rgb {
                r: 246,
                g: 94,
                b: 59,
            }))?;
            out.queue(Print("GAME OVER - press r to restart, q to quit"))?;
            out.queue(ResetColor)?;
        } else {
            out.queue(Print("arrows/hjkl/wasd move - r restart - q quit"))?;
        }

        Ok(())
    }
}

const EMPTY_BG: Color = Color::Rgb {
    r: 40,
    g: 38,
    b: 34,
};

/// Tile background, following the classic value palette.
fn tile_bg(value: u32) -> Color {
    let (r, g, b) = match value {
        2 => (238, 228, 218),
        4 => (237, 224, 200),
        8 => (242, 177, 121),
        16 => (245, 149, 99),
        32 => (246, 124, 95),
        64 => (246, 94, 59),
        128 => (237, 207, 114),
        256 => (237, 204, 97),
        512 => (237, 200, 80),
        1024 => (237, 197, 63),
        2048 => (237, 194, 46),
        _ => (60, 58, 50),
    };
    Color::Rgb { r, g, b }
}

/// Dark text on the light low tiles, light text everywhere else.
fn tile_fg(value: u32) -> Color {
    if value <= 4 {
        Color::Rgb {
            r: 119,
            g: 110,
            b: 101,
        }
    } else {
        Color::Rgb {
            r: 249,
            g: 246,
            b: 242,
        }
    }
}
