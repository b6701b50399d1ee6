//! Terminal rendering for the maze.
//!
//! The view renders a [`core::GameSession`] into a plain framebuffer, which
//! keeps the layout testable without a terminal. [`TerminalRenderer`] then
//! flushes frames through crossterm, diffing against the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_maze_core as core;
pub use tui_maze_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
