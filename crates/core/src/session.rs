//! Game session - grid, player, item table and time budget
//!
//! The session owns all mutable game state and drives the tick state machine:
//!
//! ```text
//! Running --check_time--> Timeout
//! Running --apply_move--> Running | Victory
//! Running --quit-------->  Quit
//! ```
//!
//! Time is passed in by the caller as elapsed wall-clock time since the
//! session started. The session never reads a clock, so tests can simulate
//! any amount of elapsed time.

use std::time::Duration;

use log::info;

use crate::engine::{self, StepOutcome};
use crate::grid::{Grid, ParseError};
use crate::items::ItemTable;
use crate::player::Player;
use crate::types::{Direction, GameEvent, Outcome, TIME_LIMIT_SECS};

/// Result of the per-tick time check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Running { remaining_secs: u64 },
    TimedOut,
}

/// What one move did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub step: StepOutcome,
    /// Set when this move ended the session.
    pub outcome: Option<Outcome>,
}

impl MoveReport {
    pub fn event(&self) -> Option<GameEvent> {
        self.step.event()
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    grid: Grid,
    player: Player,
    items: ItemTable,
    time_limit: Duration,
    outcome: Option<Outcome>,
    moves: u32,
}

impl GameSession {
    /// Create a session with the default item values and time budget.
    pub fn new(grid: Grid) -> Self {
        Self::with_items(grid, ItemTable::default())
    }

    pub fn with_items(grid: Grid, items: ItemTable) -> Self {
        let player = Player::new(grid.start());
        Self {
            grid,
            player,
            items,
            time_limit: Duration::from_secs(TIME_LIMIT_SECS),
            outcome: None,
            moves: 0,
        }
    }

    /// Parse `layout` and start a session on it.
    pub fn from_layout(layout: &str) -> Result<Self, ParseError> {
        Grid::parse(layout).map(Self::new)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Successful moves so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whole seconds left after `elapsed`, truncating partial seconds.
    pub fn remaining_secs(&self, elapsed: Duration) -> u64 {
        self.time_limit.as_secs().saturating_sub(elapsed.as_secs())
    }

    /// Start-of-tick time check.
    ///
    /// Once the budget is used up the session ends in [`Outcome::Timeout`]
    /// and no further moves are accepted. A session that already ended some
    /// other way keeps its outcome.
    pub fn check_time(&mut self, elapsed: Duration) -> TickStatus {
        let remaining_secs = self.remaining_secs(elapsed);
        match self.outcome {
            Some(Outcome::Timeout) => return TickStatus::TimedOut,
            // Already won or quit; the clock no longer matters.
            Some(_) => return TickStatus::Running { remaining_secs },
            None => {}
        }

        if remaining_secs == 0 {
            info!("time budget exhausted after {:?}", elapsed);
            self.outcome = Some(Outcome::Timeout);
            return TickStatus::TimedOut;
        }
        TickStatus::Running { remaining_secs }
    }

    /// Apply one move, then check the win condition.
    ///
    /// Returns `None` once the session has ended; state is left untouched.
    pub fn apply_move(&mut self, direction: Direction) -> Option<MoveReport> {
        if self.outcome.is_some() {
            return None;
        }

        let step = engine::step(&mut self.player, &mut self.grid, &self.items, direction);
        if step.moved() {
            self.moves += 1;
        }

        let outcome = self.check_victory();
        Some(MoveReport { step, outcome })
    }

    /// Player is on the exit holding the key.
    pub fn has_won(&self) -> bool {
        let pos = self.player.position();
        self.grid.is_exit(pos) && self.player.has_key()
    }

    fn check_victory(&mut self) -> Option<Outcome> {
        if !self.has_won() {
            return None;
        }
        let outcome = Outcome::Victory {
            score: self.player.score(),
        };
        info!(
            "victory after {} moves with score {}",
            self.moves,
            self.player.score()
        );
        self.outcome = Some(outcome);
        Some(outcome)
    }

    /// End the session at the player's request.
    pub fn quit(&mut self) {
        if self.outcome.is_none() {
            info!("session abandoned");
            self.outcome = Some(Outcome::Quit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    #[test]
    fn remaining_truncates_partial_seconds() {
        let session = GameSession::from_layout("#C#").unwrap();
        assert_eq!(session.remaining_secs(Duration::from_millis(0)), 60);
        assert_eq!(session.remaining_secs(Duration::from_millis(999)), 60);
        assert_eq!(session.remaining_secs(Duration::from_millis(1_000)), 59);
        assert_eq!(session.remaining_secs(Duration::from_millis(59_999)), 1);
        assert_eq!(session.remaining_secs(Duration::from_secs(600)), 0);
    }

    #[test]
    fn quit_ends_session_once() {
        let mut session = GameSession::from_layout("#C #").unwrap();
        session.quit();
        assert_eq!(session.outcome(), Some(Outcome::Quit));
        assert!(session.apply_move(Direction::Right).is_none());
        assert_eq!(session.player().position(), Position::new(0, 1));
    }

    #[test]
    fn empty_layout_is_rejected() {
        assert_eq!(
            GameSession::from_layout("  \n \n").unwrap_err(),
            ParseError::Empty
        );
    }
}
