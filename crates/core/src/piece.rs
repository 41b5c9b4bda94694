//! Piece module - four cells moving and rotating as one
//!
//! A piece aggregates per-cell feasibility: it can move only if every cell
//! can, and rotate only if every cell can rotate about the pivot. Each cell
//! is judged against the grid as it stands before anything moves; cells of
//! one piece never share a slot, so that is sound for translation.

use tracing::trace;

use crate::cell::Cell;
use crate::error::CoreError;
use crate::grid::Grid;
use crate::pieces::positions_at;
use crate::types::{Color, Direction, Position, Shape, PIECE_CELLS, PIVOT_INDEX, SPAWN_ANCHOR};

/// Result of [`Piece::try_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Every cell stepped once.
    Moved,
    /// The move was infeasible; nothing changed.
    Blocked,
    /// A downward move was blocked. The piece is now immobile for good and
    /// should be written into the grid.
    Frozen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    shape: Shape,
    cells: [Cell; PIECE_CELLS],
    frozen: bool,
}

impl Piece {
    /// Place `shape` with its pivot on `anchor`.
    ///
    /// Fails if any cell would fall off the grid.
    pub fn new(anchor: Position, shape: Shape) -> Result<Self, CoreError> {
        // Offsets span at most two slots, so an on-grid anchor cannot overflow.
        if !anchor.in_bounds() {
            return Err(CoreError::out_of_bounds(anchor.row, anchor.col));
        }
        let color = shape.color();
        let positions = positions_at(shape, anchor);
        let mut cells = [Cell::new(anchor.row, anchor.col, color, true)?; PIECE_CELLS];
        for (cell, pos) in cells.iter_mut().zip(positions) {
            *cell = Cell::new(pos.row, pos.col, color, true)?;
        }
        Ok(Self {
            shape,
            cells,
            frozen: false,
        })
    }

    /// Place `shape` at the spawn anchor.
    pub fn spawn(shape: Shape) -> Result<Self, CoreError> {
        Self::new(SPAWN_ANCHOR, shape)
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Color {
        self.cells[0].color()
    }

    pub fn cells(&self) -> &[Cell; PIECE_CELLS] {
        &self.cells
    }

    pub fn pivot(&self) -> Position {
        self.cells[PIVOT_INDEX].position()
    }

    /// Grid positions covered by the piece, in cell order
    pub fn positions(&self) -> [Position; PIECE_CELLS] {
        self.cells.map(|cell| cell.position())
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Whether any cell sits on an occupied grid slot
    pub fn overlaps(&self, grid: &Grid) -> bool {
        self.cells
            .iter()
            .any(|cell| grid.is_occupied(cell.row(), cell.col()))
    }

    pub fn can_move(&self, grid: &Grid, direction: Direction) -> bool {
        !self.frozen && self.cells.iter().all(|cell| cell.can_move(grid, direction))
    }

    /// Move every cell one step, or freeze if a downward move is blocked.
    pub fn try_move(&mut self, grid: &Grid, direction: Direction) -> MoveOutcome {
        if self.can_move(grid, direction) {
            for cell in &mut self.cells {
                cell.try_move(grid, direction);
            }
            return MoveOutcome::Moved;
        }

        if direction == Direction::Down {
            self.freeze();
            return MoveOutcome::Frozen;
        }
        trace!(shape = self.shape.as_str(), dir = direction.as_str(), "move blocked");
        MoveOutcome::Blocked
    }

    fn freeze(&mut self) {
        self.frozen = true;
        for cell in &mut self.cells {
            cell.freeze();
        }
    }

    pub fn can_rotate(&self, grid: &Grid) -> bool {
        let pivot = self.pivot();
        self.cells
            .iter()
            .all(|cell| cell.can_rotate_about(grid, pivot))
    }

    /// Rotate 90° about the pivot if every cell's L-path is clear.
    ///
    /// Returns whether the piece rotated.
    pub fn rotate(&mut self, grid: &Grid) -> bool {
        if !self.can_rotate(grid) {
            trace!(shape = self.shape.as_str(), "rotation blocked");
            return false;
        }
        let pivot = self.pivot();
        for cell in &mut self.cells {
            cell.rotate_about(grid, pivot);
        }
        true
    }
}
