//! Cell module - one square of a falling piece
//!
//! A cell knows its own position, color and whether it may still move. It
//! never holds the grid; every feasibility query takes the grid by reference
//! so the only path that writes the grid stays with the controller.
//!
//! # Rotation
//!
//! A cell rotates 90° clockwise (in grid coordinates) about a pivot:
//!
//! ```text
//! new_row = pivot.row + (col - pivot.col)
//! new_col = pivot.col + (pivot.row - row)
//! ```
//!
//! Approval does not sweep the true rotated footprint. It walks an
//! axis-aligned L-shaped path from the current position to the destination,
//! with the leg order picked by the quadrant the destination lies in:
//!
//! | Destination | First leg | Second leg |
//! |-------------|-----------|------------|
//! | up, right | up column `col` | right along destination row |
//! | up, left | left along `row` | up destination column |
//! | down, left | down column `col` | left along destination row |
//! | down, right | right along `row` | down destination column |
//!
//! A destination on the same row or column as the cell satisfies two rows of
//! the table and both paths must be clear.

use crate::error::CoreError;
use crate::grid::Grid;
use crate::types::{Color, Direction, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pos: Position,
    color: Color,
    mobile: bool,
}

impl Cell {
    /// Create a cell at (row, col).
    ///
    /// Fails with [`CoreError::OutOfBounds`] when the position is off the grid.
    pub fn new(row: i8, col: i8, color: Color, mobile: bool) -> Result<Self, CoreError> {
        let pos = Position::new(row, col);
        if !pos.in_bounds() {
            return Err(CoreError::out_of_bounds(row, col));
        }
        Ok(Self { pos, color, mobile })
    }

    pub fn row(&self) -> i8 {
        self.pos.row
    }

    pub fn col(&self) -> i8 {
        self.pos.col
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_mobile(&self) -> bool {
        self.mobile
    }

    /// Make the cell immobile for good.
    pub fn freeze(&mut self) {
        self.mobile = false;
    }

    /// Whether a single step in `direction` stays on the grid and lands on an
    /// empty slot. Always false for immobile cells and for `Drop`/`Rotate`.
    pub fn can_move(&self, grid: &Grid, direction: Direction) -> bool {
        if !self.mobile {
            return false;
        }
        let Some((d_row, d_col)) = direction.delta() else {
            return false;
        };
        let next = self.pos.offset(d_row, d_col);
        next.in_bounds() && !grid.is_occupied(next.row, next.col)
    }

    /// Step once in `direction` if [`Cell::can_move`] allows it.
    ///
    /// Returns whether the cell moved.
    pub fn try_move(&mut self, grid: &Grid, direction: Direction) -> bool {
        if !self.can_move(grid, direction) {
            return false;
        }
        if let Some((d_row, d_col)) = direction.delta() {
            self.pos = self.pos.offset(d_row, d_col);
        }
        true
    }

    /// Destination of a 90° rotation about `pivot`. May be off the grid.
    ///
    /// `pivot` may be any position. A destination that does not fit in `i8`
    /// is reported as an off-grid position rather than wrapping.
    pub fn rotation_target(&self, pivot: Position) -> Position {
        let (row, col) = (i16::from(self.pos.row), i16::from(self.pos.col));
        let (p_row, p_col) = (i16::from(pivot.row), i16::from(pivot.col));
        Position::new(
            narrow(p_row + (col - p_col)),
            narrow(p_col + (p_row - row)),
        )
    }

    /// Whether this cell may rotate about `pivot`.
    ///
    /// False for immobile cells, for destinations off the grid, and when any
    /// slot on the quadrant's L-path (endpoints included) is occupied.
    pub fn can_rotate_about(&self, grid: &Grid, pivot: Position) -> bool {
        if !self.mobile {
            return false;
        }
        let to = self.rotation_target(pivot);
        if !to.in_bounds() {
            return false;
        }

        let from = self.pos;
        let rows = (to.row - from.row).abs();
        let cols = (to.col - from.col).abs();
        let up = to.row <= from.row;
        let down = to.row >= from.row;
        let left = to.col <= from.col;
        let right = to.col >= from.col;

        if up && right
            && !(walk_clear(grid, from, (-1, 0), rows)
                && walk_clear(grid, Position::new(to.row, from.col), (0, 1), cols))
        {
            return false;
        }
        if up && left
            && !(walk_clear(grid, from, (0, -1), cols)
                && walk_clear(grid, Position::new(from.row, to.col), (-1, 0), rows))
        {
            return false;
        }
        if down && left
            && !(walk_clear(grid, from, (1, 0), rows)
                && walk_clear(grid, Position::new(to.row, from.col), (0, -1), cols))
        {
            return false;
        }
        if down && right
            && !(walk_clear(grid, from, (0, 1), cols)
                && walk_clear(grid, Position::new(from.row, to.col), (1, 0), rows))
        {
            return false;
        }
        true
    }

    /// Walk to the rotation destination one step at a time: rows first, then
    /// columns.
    ///
    /// Each step goes through [`Cell::try_move`], so a blocked step leaves the
    /// cell short of the destination. Only call this after
    /// [`Cell::can_rotate_about`] approved the rotation.
    pub fn rotate_about(&mut self, grid: &Grid, pivot: Position) {
        let to = self.rotation_target(pivot);
        let d_row = i16::from(to.row) - i16::from(self.pos.row);
        let d_col = i16::from(to.col) - i16::from(self.pos.col);

        let vertical = if d_row < 0 { Direction::Up } else { Direction::Down };
        for _ in 0..d_row.abs() {
            self.try_move(grid, vertical);
        }
        let horizontal = if d_col < 0 { Direction::Left } else { Direction::Right };
        for _ in 0..d_col.abs() {
            self.try_move(grid, horizontal);
        }
    }
}

/// Off-grid stand-in for coordinates outside the `i8` range.
fn narrow(value: i16) -> i8 {
    i8::try_from(value).unwrap_or(i8::MAX)
}

/// True if `start` and the `steps` slots after it along `step` are all empty.
fn walk_clear(grid: &Grid, start: Position, step: (i8, i8), steps: i8) -> bool {
    (0..=steps).all(|i| {
        let pos = start.offset(step.0 * i, step.1 * i);
        !grid.is_occupied(pos.row, pos.col)
    })
}
