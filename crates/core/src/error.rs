//! Errors raised by the core.
//!
//! Only construction can fail. Infeasible moves and rotations are reported
//! through `bool` queries and [`crate::piece::MoveOutcome`], and game over is a
//! state, not an error.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A cell (or a piece cell) was requested outside the grid.
    #[error("position ({row}, {col}) is outside the {height}x{width} grid")]
    OutOfBounds {
        row: i8,
        col: i8,
        height: u8,
        width: u8,
    },
}

impl CoreError {
    pub(crate) fn out_of_bounds(row: i8, col: i8) -> Self {
        CoreError::OutOfBounds {
            row,
            col,
            height: crate::types::GRID_HEIGHT,
            width: crate::types::GRID_WIDTH,
        }
    }
}
