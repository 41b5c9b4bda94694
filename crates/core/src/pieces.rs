//! Pieces module - spawn offsets for the seven shapes
//!
//! Every shape is a fixed pattern of four (row, col) offsets from the spawn
//! anchor. Offset index 1 is always (0, 0): the pivot sits on the anchor and
//! every rotation turns about it.

use crate::types::{Position, Shape, PIECE_CELLS, PIVOT_INDEX};

/// Offset of a single cell relative to the piece anchor, as (d_row, d_col)
pub type CellOffset = (i8, i8);

/// Offsets of the four cells of a piece
pub type PieceOffsets = [CellOffset; PIECE_CELLS];

const S_OFFSETS: PieceOffsets = [(0, 1), (0, 0), (1, 0), (1, -1)];
const SQUARE_OFFSETS: PieceOffsets = [(-1, 0), (0, 0), (-1, 1), (0, 1)];
const REVERSE_L_OFFSETS: PieceOffsets = [(-1, 0), (0, 0), (1, 0), (1, -1)];
const T_OFFSETS: PieceOffsets = [(0, -1), (0, 0), (0, 1), (1, 0)];
const REVERSE_S_OFFSETS: PieceOffsets = [(0, -1), (0, 0), (1, 0), (1, 1)];
const STRAIGHT_OFFSETS: PieceOffsets = [(0, -1), (0, 0), (0, 1), (0, 2)];
const L_OFFSETS: PieceOffsets = [(-1, 0), (0, 0), (1, 0), (1, 1)];

/// Cell offsets for a shape
pub fn get_offsets(shape: Shape) -> &'static PieceOffsets {
    match shape {
        Shape::S => &S_OFFSETS,
        Shape::Square => &SQUARE_OFFSETS,
        Shape::ReverseL => &REVERSE_L_OFFSETS,
        Shape::T => &T_OFFSETS,
        Shape::ReverseS => &REVERSE_S_OFFSETS,
        Shape::Straight => &STRAIGHT_OFFSETS,
        Shape::L => &L_OFFSETS,
    }
}

/// Positions a shape occupies when anchored at `anchor`
pub fn positions_at(shape: Shape, anchor: Position) -> [Position; PIECE_CELLS] {
    get_offsets(shape).map(|(d_row, d_col)| anchor.offset(d_row, d_col))
}

const _: () = {
    // The pivot offset must be the anchor itself for every shape.
    let all = [
        S_OFFSETS,
        SQUARE_OFFSETS,
        REVERSE_L_OFFSETS,
        T_OFFSETS,
        REVERSE_S_OFFSETS,
        STRAIGHT_OFFSETS,
        L_OFFSETS,
    ];
    let mut i = 0;
    while i < all.len() {
        assert!(all[i][PIVOT_INDEX].0 == 0 && all[i][PIVOT_INDEX].1 == 0);
        i += 1;
    }
};
