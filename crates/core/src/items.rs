//! Item value table
//!
//! Maps pickup cells to the points they award. The table is owned by the
//! session and handed to the interaction engine; nothing reads a global.

use arrayvec::ArrayVec;

use crate::types::{Cell, ITEM_POINTS, KEY_POINTS};

/// Pickup cell -> points. Bounded, since only a few cell kinds exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTable {
    entries: ArrayVec<(Cell, u32), 4>,
}

impl ItemTable {
    /// A table with no entries; nothing can be picked up.
    pub fn empty() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// Builder-style insert. Non-pickup cells are ignored.
    pub fn with(mut self, cell: Cell, points: u32) -> Self {
        self.set(cell, points);
        self
    }

    pub fn set(&mut self, cell: Cell, points: u32) {
        if !cell.is_pickup() {
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == cell) {
            entry.1 = points;
        } else if !self.entries.is_full() {
            self.entries.push((cell, points));
        }
    }

    /// Points for `cell`, or `None` if it is not a pickup in this table.
    pub fn points(&self, cell: Cell) -> Option<u32> {
        self.entries
            .iter()
            .find(|(c, _)| *c == cell)
            .map(|&(_, points)| points)
    }
}

impl Default for ItemTable {
    fn default() -> Self {
        Self::empty()
            .with(Cell::Key, KEY_POINTS)
            .with(Cell::Item, ITEM_POINTS)
    }
}
