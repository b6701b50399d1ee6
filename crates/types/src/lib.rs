//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Cell Glyphs
//!
//! | Glyph | Cell | Notes |
//! |-------|------|-------|
//! | `#` | Wall | never walkable |
//! | ` ` | Floor | walkable |
//! | `k` | Key | unlocks the exit, cleared on pickup |
//! | `*` | Item | worth [`ITEM_POINTS`], cleared on pickup |
//! | `E` | Exit | walkable only while holding the key |
//! | `C` | Start marker | floor after parsing |
//!
//! # Examples
//!
//! ```
//! use tui_maze_types::{Cell, Direction, Position};
//!
//! assert_eq!(Cell::from_glyph('#'), Cell::Wall);
//! assert_eq!(Cell::Exit.glyph(), 'E');
//!
//! let pos = Position::new(1, 1).step(Direction::Right);
//! assert_eq!(pos, Position::new(1, 2));
//! ```

/// Time budget for a session, in seconds.
pub const TIME_LIMIT_SECS: u64 = 60;

/// Points awarded for a `*` pickup.
pub const ITEM_POINTS: u32 = 10;

/// Points awarded for the key pickup.
pub const KEY_POINTS: u32 = 0;

/// Glyph used for the player overlay.
pub const PLAYER_GLYPH: char = 'C';

/// Reference 10x10 layout: walls, start, key and exit only.
pub const REFERENCE_LAYOUT: &str = r"
    ##########
    #C #   #E#
    #  # #   #
    # ## # # #
    #      # #
    # # ## # #
    # #      #
    ## ## ## #
    #      #k#
    ##########";

/// The layout played when none is configured.
///
/// [`REFERENCE_LAYOUT`] with three `*` items on cells that are floor there,
/// at `(4, 3)`, `(6, 6)` and `(8, 1)`. Every other cell is identical.
pub const DEFAULT_LAYOUT: &str = r"
    ##########
    #C #   #E#
    #  # #   #
    # ## # # #
    #  *   # #
    # # ## # #
    # #   *  #
    ## ## ## #
    #*     #k#
    ##########";

/// Instructions shown while playing.
pub const INSTRUCTIONS: &str =
    "Navigate the maze to reach the endpoint 'E'. Use W A S D to move. Collect items (*) for points.";

/// A single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Wall,
    #[default]
    Floor,
    Key,
    Item,
    Exit,
}

impl Cell {
    /// Map a layout glyph to a cell.
    ///
    /// The start marker and unknown glyphs map to [`Cell::Floor`].
    pub fn from_glyph(ch: char) -> Self {
        match ch {
            '#' => Cell::Wall,
            'k' => Cell::Key,
            '*' => Cell::Item,
            'E' => Cell::Exit,
            _ => Cell::Floor,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => ' ',
            Cell::Key => 'k',
            Cell::Item => '*',
            Cell::Exit => 'E',
        }
    }

    /// True for cells that are cleared when the player steps on them.
    pub fn is_pickup(&self) -> bool {
        matches!(self, Cell::Key | Cell::Item)
    }
}

/// Grid coordinate: `row` grows downward, `col` grows to the right.
///
/// Signed so that a step off the top/left edge is representable and can be
/// rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn offset(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.offset(d_row, d_col)
    }
}

/// The four move vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(d_row, d_col)` for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    OutOfBounds,
    Wall,
    /// The exit was entered without holding the key.
    LockedDoor,
}

/// Notifications produced by the interaction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Emitted once, on the first key pickup.
    KeyFound,
    /// A point item was collected; `score` is the new total.
    ItemCollected { points: u32, score: u32 },
    /// A move into the exit was rejected for lack of a key.
    DoorLocked,
}

impl GameEvent {
    /// Player-facing notice text.
    pub fn message(&self) -> String {
        match self {
            GameEvent::KeyFound => "You found a key!".to_string(),
            GameEvent::ItemCollected { score, .. } => {
                format!("Collected an item! Current score: {}", score)
            }
            GameEvent::DoorLocked => "The door is locked. You need a key to exit!".to_string(),
        }
    }
}

/// Terminal session states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Victory { score: u32 },
    Timeout,
    /// The player left with Esc / Ctrl-C.
    Quit,
}

impl Outcome {
    /// Lines printed after the terminal is restored.
    pub fn farewell(&self) -> Vec<String> {
        match self {
            Outcome::Victory { score } => vec![
                "Congratulations! You reached the endpoint and unlocked the door.".to_string(),
                format!("Final Score: {}", score),
            ],
            Outcome::Timeout => vec!["Time's up! Game over.".to_string()],
            Outcome::Quit => vec!["Game abandoned.".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_mapping_is_stable() {
        for cell in [Cell::Wall, Cell::Floor, Cell::Key, Cell::Item, Cell::Exit] {
            assert_eq!(Cell::from_glyph(cell.glyph()), cell);
        }
        assert_eq!(Cell::from_glyph('C'), Cell::Floor);
        assert_eq!(Cell::from_glyph('?'), Cell::Floor);
    }

    #[test]
    fn directions_move_one_cell() {
        let origin = Position::new(5, 5);
        assert_eq!(origin.step(Direction::Up), Position::new(4, 5));
        assert_eq!(origin.step(Direction::Down), Position::new(6, 5));
        assert_eq!(origin.step(Direction::Left), Position::new(5, 4));
        assert_eq!(origin.step(Direction::Right), Position::new(5, 6));
    }

    #[test]
    fn default_constants() {
        assert_eq!(TIME_LIMIT_SECS, 60);
        assert_eq!(ITEM_POINTS, 10);
        assert_eq!(KEY_POINTS, 0);
    }

    #[test]
    fn notice_text() {
        assert_eq!(GameEvent::KeyFound.message(), "You found a key!");
        assert_eq!(
            GameEvent::ItemCollected { points: 10, score: 30 }.message(),
            "Collected an item! Current score: 30"
        );
        assert_eq!(
            Outcome::Victory { score: 20 }.farewell(),
            vec![
                "Congratulations! You reached the endpoint and unlocked the door.".to_string(),
                "Final Score: 20".to_string()
            ]
        );
    }
}
