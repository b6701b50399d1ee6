//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Frame layout, top to bottom:
//!
//! ```text
//! Score: 0 | Has Key: false | Time Left: 60 seconds
//! Navigate the maze ...
//! ┌──────────┐
//! │##########│
//! │#C #   #E#│
//! ...
//! └──────────┘
//! You found a key!
//! ```

use crate::core::GameSession;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, GameEvent, Position, INSTRUCTIONS, PLAYER_GLYPH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Per-tick values that do not live in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hud {
    pub remaining_secs: u64,
    /// Latest notice, shown under the maze.
    pub notice: Option<GameEvent>,
}

/// Rows above the maze frame (status + instructions).
const HEADER_ROWS: u16 = 2;

const FLOOR_BG: Rgb = Rgb::new(20, 20, 28);

/// A lightweight terminal renderer for the maze.
pub struct GameView {
    /// Maze cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 1 }
    }
}

impl GameView {
    /// `cell_w` of 2 roughly squares cells on typical terminal fonts.
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// The status line shown at the top of every frame.
    pub fn status_line(session: &GameSession, hud: &Hud) -> String {
        let player = session.player();
        format!(
            "Score: {} | Has Key: {} | Time Left: {} seconds",
            player.score(),
            player.has_key(),
            hud.remaining_secs
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        session: &GameSession,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear();

        let label = CellStyle::fg(Rgb::new(230, 230, 230)).bold();
        let hint = CellStyle::fg(Rgb::new(150, 150, 160)).dim();

        fb.put_str(0, 0, &Self::status_line(session, hud), label);
        fb.put_str(0, 1, INSTRUCTIONS, hint);

        let grid = session.grid();
        let frame_w = clamp_u16(grid.width())
            .saturating_mul(self.cell_w)
            .saturating_add(2);
        let frame_h = clamp_u16(grid.height()).saturating_add(2);
        let border = CellStyle::fg(Rgb::new(200, 200, 200));
        self.draw_border(fb, 0, HEADER_ROWS, frame_w, frame_h, border);

        // Cells past the viewport edge are never drawn.
        let visible_rows = usize::from(viewport.height);
        let visible_cols = usize::from(viewport.width);
        let player_pos = session.player().position();
        let has_key = session.player().has_key();
        for (row, cells) in (0u16..).zip(grid.rows().take(visible_rows)) {
            for (col, cell) in (0u16..).zip(cells.iter().take(visible_cols)) {
                let pos = Position::new(i32::from(row), i32::from(col));
                if pos == player_pos {
                    self.draw_player(fb, row, col);
                } else {
                    self.draw_cell(fb, row, col, *cell, has_key);
                }
            }
        }

        if let Some(notice) = hud.notice {
            let style = match notice {
                GameEvent::DoorLocked => CellStyle::fg(Rgb::new(240, 110, 90)).bold(),
                _ => CellStyle::fg(Rgb::new(240, 220, 80)).bold(),
            };
            let y = HEADER_ROWS.saturating_add(frame_h);
            fb.put_str(0, y, &notice.message(), style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, hud, viewport, &mut fb);
        fb
    }

    /// Terminal coordinates of a maze cell's first column.
    pub fn cell_origin(&self, row: u16, col: u16) -> (u16, u16) {
        (
            col.saturating_mul(self.cell_w).saturating_add(1),
            HEADER_ROWS.saturating_add(1).saturating_add(row),
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '┌', style);
        fb.put_char(right, y, '┐', style);
        fb.put_char(x, bottom, '└', style);
        fb.put_char(right, bottom, '┘', style);

        for px in x.saturating_add(1)..right.min(fb.width()) {
            fb.put_char(px, y, '─', style);
            fb.put_char(px, bottom, '─', style);
        }
        for py in y.saturating_add(1)..bottom.min(fb.height()) {
            fb.put_char(x, py, '│', style);
            fb.put_char(right, py, '│', style);
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, row: u16, col: u16, cell: Cell, has_key: bool) {
        let style = match cell {
            Cell::Wall => CellStyle::fg(Rgb::new(120, 120, 140)).on(Rgb::new(50, 50, 64)),
            Cell::Floor => CellStyle::fg(Rgb::new(90, 90, 100)).on(FLOOR_BG),
            Cell::Key => CellStyle::fg(Rgb::new(240, 220, 80)).on(FLOOR_BG).bold(),
            Cell::Item => CellStyle::fg(Rgb::new(80, 220, 220)).on(FLOOR_BG).bold(),
            Cell::Exit if has_key => CellStyle::fg(Rgb::new(100, 220, 120)).on(FLOOR_BG).bold(),
            Cell::Exit => CellStyle::fg(Rgb::new(220, 80, 80)).on(FLOOR_BG).bold(),
        };
        // Walls fill the whole cell; everything else pads with blanks.
        let pad = if cell == Cell::Wall { cell.glyph() } else { ' ' };
        self.fill_cell(fb, row, col, cell.glyph(), pad, style);
    }

    fn draw_player(&self, fb: &mut FrameBuffer, row: u16, col: u16) {
        let style = CellStyle::fg(Rgb::new(255, 120, 220)).on(FLOOR_BG).bold();
        self.fill_cell(fb, row, col, PLAYER_GLYPH, ' ', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        row: u16,
        col: u16,
        ch: char,
        pad: char,
        style: CellStyle,
    ) {
        let (x, y) = self.cell_origin(row, col);
        fb.put_char(x, y, ch, style);
        for dx in 1..self.cell_w {
            fb.put_char(x.saturating_add(dx), y, pad, style);
        }
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
