//! Movement and interaction rules
//!
//! One call to [`step`] is one player move:
//!
//! 1. The target cell is checked with [`Grid::is_walkable`]. Walls, the grid
//!    edge, and the exit without a key reject the move and nothing else
//!    happens.
//! 2. After a successful move the cell under the player is inspected. The key
//!    is taken (once) and a point item adds its value; either way the cell is
//!    cleared so it cannot trigger again.
//!
//! The walkability check is the only door rule. A keyless player can never
//! stand on the exit, so a rejected exit move is what reports the locked door.

use log::{debug, info};

use crate::grid::Grid;
use crate::items::ItemTable;
use crate::player::Player;
use crate::types::{BlockReason, Cell, Direction, GameEvent, Position};

/// Result of a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved {
        to: Position,
        event: Option<GameEvent>,
    },
    Blocked(BlockReason),
}

impl StepOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, StepOutcome::Moved { .. })
    }

    /// The notice this step produced, if any.
    pub fn event(&self) -> Option<GameEvent> {
        match self {
            StepOutcome::Moved { event, .. } => *event,
            StepOutcome::Blocked(BlockReason::LockedDoor) => Some(GameEvent::DoorLocked),
            StepOutcome::Blocked(_) => None,
        }
    }
}

/// Classify why `pos` is not walkable. `None` means it is.
pub fn block_reason(grid: &Grid, pos: Position, has_key: bool) -> Option<BlockReason> {
    match grid.cell_at(pos) {
        None => Some(BlockReason::OutOfBounds),
        Some(Cell::Wall) => Some(BlockReason::Wall),
        Some(Cell::Exit) if !has_key => Some(BlockReason::LockedDoor),
        Some(_) => None,
    }
}

/// Apply one move and its pickup side effects.
pub fn step(
    player: &mut Player,
    grid: &mut Grid,
    items: &ItemTable,
    direction: Direction,
) -> StepOutcome {
    if !player.try_move(direction, grid) {
        let target = player.position().step(direction);
        let reason =
            block_reason(grid, target, player.has_key()).unwrap_or(BlockReason::OutOfBounds);
        debug!("move {} blocked: {:?}", direction.as_str(), reason);
        return StepOutcome::Blocked(reason);
    }

    let to = player.position();
    debug!("moved {} to ({}, {})", direction.as_str(), to.row, to.col);
    StepOutcome::Moved {
        to,
        event: interact(player, grid, items),
    }
}

/// Resolve the pickup (if any) under the player.
pub fn interact(player: &mut Player, grid: &mut Grid, items: &ItemTable) -> Option<GameEvent> {
    let pos = player.position();
    let cell = grid.cell_at(pos)?;
    let points = items.points(cell)?;

    let event = match cell {
        Cell::Key => {
            player.add_score(points);
            player.collect_key().then_some(GameEvent::KeyFound)
        }
        Cell::Item => {
            player.add_score(points);
            Some(GameEvent::ItemCollected {
                points,
                score: player.score(),
            })
        }
        _ => None,
    };
    grid.clear_cell(pos);

    if let Some(ev) = event {
        info!("{:?} at ({}, {})", ev, pos.row, pos.col);
    }
    event
}
