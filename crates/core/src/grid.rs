//! Grid module - the maze cell store
//!
//! The grid is parsed once from a text template and never changes shape.
//! Cells live in a flat row-major `Vec` with bounds-checked accessors.
//! Coordinates: `(row, col)` with row 0 at the top and col 0 on the left.
//!
//! The only permitted mutation is [`Grid::clear_cell`], used when an item or
//! the key is picked up.

use log::debug;
use thiserror::Error;

use crate::types::{Cell, Position, PLAYER_GLYPH};

/// Layout parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("maze layout is empty")]
    Empty,
}

/// The maze: fixed `width x height` cells, flat row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
    start: Position,
}

impl Grid {
    /// Parse a layout template.
    ///
    /// The whole text and every line are trimmed. The first line fixes the
    /// width; shorter lines are padded with walls and longer ones truncated.
    /// `C` marks the start and is stored as floor.
    pub fn parse(layout: &str) -> Result<Self, ParseError> {
        let lines: Vec<&str> = layout.trim().lines().map(str::trim).collect();
        let width = lines.first().map(|l| l.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::Empty);
        }
        let height = lines.len();

        let mut cells = Vec::with_capacity(width * height);
        let mut marker: Option<Position> = None;
        for (row, line) in lines.iter().enumerate() {
            let mut chars = line.chars();
            for col in 0..width {
                let cell = match chars.next() {
                    Some(ch) => {
                        if ch == PLAYER_GLYPH && marker.is_none() {
                            marker = Some(Position::new(row as i32, col as i32));
                        }
                        Cell::from_glyph(ch)
                    }
                    None => Cell::Wall,
                };
                cells.push(cell);
            }
        }

        let mut grid = Self {
            width,
            height,
            cells,
            start: Position::default(),
        };
        grid.start = marker
            .or_else(|| grid.first_floor())
            .unwrap_or_default();

        debug!(
            "parsed {}x{} grid, start at ({}, {})",
            grid.width, grid.height, grid.start.row, grid.start.col
        );
        Ok(grid)
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    fn first_floor(&self) -> Option<Position> {
        self.cells
            .iter()
            .position(|c| *c == Cell::Floor)
            .map(|i| Position::new((i / self.width) as i32, (i % self.width) as i32))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Where the player starts.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Get cell at `pos`; `None` if out of bounds.
    pub fn cell_at(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Whether a player with the given key status may occupy `pos`.
    pub fn is_walkable(&self, pos: Position, has_key: bool) -> bool {
        match self.cell_at(pos) {
            None | Some(Cell::Wall) => false,
            Some(Cell::Exit) => has_key,
            Some(_) => true,
        }
    }

    pub fn is_exit(&self, pos: Position) -> bool {
        self.cell_at(pos) == Some(Cell::Exit)
    }

    /// Turn the cell at `pos` into floor. Out of bounds is a no-op.
    pub fn clear_cell(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Cell::Floor;
        }
    }

    /// Number of cells of the given kind.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width)
    }
}
