//! Player state: position, key possession and score.

use crate::grid::Grid;
use crate::types::{Direction, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: Position,
    has_key: bool,
    score: u32,
}

impl Player {
    pub fn new(start: Position) -> Self {
        Self {
            position: start,
            has_key: false,
            score: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_key(&self) -> bool {
        self.has_key
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Step one cell if the target is walkable.
    ///
    /// Returns false and leaves the position untouched otherwise.
    pub fn try_move(&mut self, direction: Direction, grid: &Grid) -> bool {
        let candidate = self.position.step(direction);
        if !grid.is_walkable(candidate, self.has_key) {
            return false;
        }
        self.position = candidate;
        true
    }

    /// Take the key. Returns true only on the first call.
    pub fn collect_key(&mut self) -> bool {
        let first = !self.has_key;
        self.has_key = true;
        first
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
