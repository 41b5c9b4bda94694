//! Read-only copy of the game state for renderers.

use crate::piece::Piece;
use crate::types::{Color, Position, Shape, Slot, GRID_HEIGHT, GRID_WIDTH, PIECE_CELLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub color: Color,
    pub cells: [Position; PIECE_CELLS],
}

impl From<&Piece> for ActiveSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            shape: piece.shape(),
            color: piece.color(),
            cells: piece.positions(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: [[Slot; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub game_over: bool,
}

impl GameSnapshot {
    /// Slot a renderer should draw at (row, col): the active piece wins over
    /// the grid underneath it.
    pub fn visible_slot(&self, row: usize, col: usize) -> Slot {
        if let Some(active) = &self.active {
            let hit = active
                .cells
                .iter()
                .any(|p| p.row as usize == row && p.col as usize == col);
            if hit {
                return Some(active.color);
            }
        }
        self.grid.get(row).and_then(|r| r.get(col)).copied().flatten()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[None; GRID_WIDTH as usize]; GRID_HEIGHT as usize],
            active: None,
            game_over: false,
        }
    }
}
