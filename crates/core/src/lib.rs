//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the maze rules and session state. It has no
//! dependencies on terminal I/O or clocks: elapsed time is passed in by the
//! caller, which keeps every rule reproducible in tests.
//!
//! # Module Structure
//!
//! - [`grid`]: maze parsing, walkability and cell clearing
//! - [`player`]: position, key possession and score
//! - [`items`]: pickup cell to point value table
//! - [`engine`]: one move plus its pickup side effects
//! - [`session`]: time check, win check and the terminal outcome
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_maze_core::{GameSession, TickStatus};
//! use tui_maze_types::{Direction, Outcome};
//!
//! let mut session = GameSession::from_layout("#####\n#C*k#\n##E##").unwrap();
//! assert_eq!(
//!     session.check_time(Duration::from_secs(5)),
//!     TickStatus::Running { remaining_secs: 55 }
//! );
//!
//! session.apply_move(Direction::Right); // '*' worth 10
//! session.apply_move(Direction::Right); // key
//! session.apply_move(Direction::Left);
//! session.apply_move(Direction::Down); // exit
//!
//! assert_eq!(session.outcome(), Some(Outcome::Victory { score: 10 }));
//! ```

pub mod engine;
pub mod grid;
pub mod items;
pub mod player;
pub mod session;

pub use tui_maze_types as types;

pub use engine::{block_reason, interact, step, StepOutcome};
pub use grid::{Grid, ParseError};
pub use items::ItemTable;
pub use player::Player;
pub use session::{GameSession, MoveReport, TickStatus};
