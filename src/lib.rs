//! TUI Maze (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_maze::{core,input,term,types}` and
//! hosts the runtime configuration used by the binary.

pub mod config;

pub use tui_maze_core as core;
pub use tui_maze_input as input;
pub use tui_maze_term as term;
pub use tui_maze_types as types;
