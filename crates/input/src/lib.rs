//! Terminal input module.
//!
//! Maps `crossterm` key events onto maze moves and the quit command. Nothing
//! here blocks or reads the terminal; the game loop owns the event source.

pub mod map;

pub use tui_maze_types as types;

pub use map::{command_for, handle_key_event, should_quit, Command};
