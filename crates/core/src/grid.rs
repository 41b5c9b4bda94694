//! Grid module - the fixed occupancy matrix frozen cells are written into
//!
//! The grid is 20 rows by 10 columns stored as a flat row-major array.
//! Coordinates are (row, col): row 0 is the top, col 0 is the left edge.
//!
//! Occupancy queries and writes are bounds-checked and panic when handed an
//! off-grid coordinate. Movement and rotation code always checks bounds first,
//! so reaching the panic is a bug in the caller. [`Grid::get`] is the
//! non-panicking probe.

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Color, Position, Slot, GRID_HEIGHT, GRID_WIDTH};

const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_HEIGHT as usize);
const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

/// Row indices removed by one [`Grid::clear_completed_rows`] pass.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major slots (row * WIDTH + col)
    slots: [Slot; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            slots: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if Position::new(row, col).in_bounds() {
            Some((row as usize) * WIDTH + (col as usize))
        } else {
            None
        }
    }

    #[inline]
    fn checked_index(row: i8, col: i8) -> usize {
        match Self::index(row, col) {
            Some(idx) => idx,
            None => panic!(
                "grid access out of bounds: ({}, {}) not in {}x{}",
                row, col, GRID_HEIGHT, GRID_WIDTH
            ),
        }
    }

    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Slot at (row, col), or `None` when off the grid
    pub fn get(&self, row: i8, col: i8) -> Option<Slot> {
        Self::index(row, col).map(|idx| self.slots[idx])
    }

    /// Whether (row, col) holds frozen content.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is off the grid.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.slots[Self::checked_index(row, col)].is_some()
    }

    /// Mark (row, col) occupied with `color`.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is off the grid.
    pub fn set(&mut self, row: i8, col: i8, color: Color) {
        self.slots[Self::checked_index(row, col)] = Some(color);
    }

    /// Empty (row, col).
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is off the grid.
    pub fn clear(&mut self, row: i8, col: i8) {
        self.slots[Self::checked_index(row, col)] = None;
    }

    /// Write every position with one color (freezing a piece)
    pub fn lock_cells(&mut self, positions: &[Position], color: Color) {
        for pos in positions {
            self.set(pos.row, pos.col, color);
        }
    }

    fn row_slice(&self, row: usize) -> &[Slot] {
        let start = row * WIDTH;
        &self.slots[start..start + WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < HEIGHT && self.row_slice(row).iter().all(|slot| slot.is_some())
    }

    /// Number of occupied slots in a row (0 for rows off the grid)
    pub fn occupied_in_row(&self, row: usize) -> usize {
        if row >= HEIGHT {
            return 0;
        }
        self.row_slice(row).iter().filter(|slot| slot.is_some()).count()
    }

    /// Remove every complete row and compact the rest downward.
    ///
    /// Scans bottom to top with a read and a write cursor: incomplete rows are
    /// copied down to the write cursor, complete rows are skipped, and the rows
    /// left above the write cursor are emptied. This is the same end state as
    /// removing each complete row and shifting everything above it down by one,
    /// including when the complete rows are not contiguous.
    ///
    /// Returns the removed row indices (pre-clear coordinates), bottom to top.
    pub fn clear_completed_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = HEIGHT;

        for read_row in (0..HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * WIDTH;
                self.slots.copy_within(src..src + WIDTH, write_row * WIDTH);
            }
        }

        self.slots[..write_row * WIDTH].fill(None);
        cleared
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Slot]> + '_ {
        self.slots.chunks_exact(WIDTH)
    }

    /// Flat row-major slot storage
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for slot in row {
                f.write_str(if slot.is_some() { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fill `count` slots of a row, centered, the way the row-clear fixtures do.
    fn fill_centered(grid: &mut Grid, row: usize, count: usize) {
        let start = (WIDTH - count) / 2;
        for col in start..start + count {
            grid.set(row as i8, col as i8, Color::Magenta);
        }
    }

    fn counts(grid: &Grid) -> Vec<usize> {
        (0..HEIGHT).map(|r| grid.occupied_in_row(r)).collect()
    }

    #[test]
    fn test_index_calculation() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(0, 9), Some(9));
        assert_eq!(Grid::index(1, 0), Some(10));
        assert_eq!(Grid::index(19, 9), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(0, 10), None);
        assert_eq!(Grid::index(20, 0), None);
    }

    #[test]
    fn test_set_clear_and_occupancy() {
        let mut grid = Grid::new();
        assert!(!grid.is_occupied(4, 5));

        grid.set(4, 5, Color::Yellow);
        assert!(grid.is_occupied(4, 5));
        assert_eq!(grid.get(4, 5), Some(Some(Color::Yellow)));

        grid.clear(4, 5);
        assert!(!grid.is_occupied(4, 5));
        assert_eq!(grid.get(4, 5), Some(None));
        assert_eq!(grid.get(-1, 5), None);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_is_occupied_row_out_of_bounds() {
        Grid::new().is_occupied(GRID_HEIGHT as i8, 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_set_col_out_of_bounds() {
        Grid::new().set(0, -1, Color::Red);
    }

    #[test]
    fn test_clear_rows_non_contiguous() {
        let mut grid = Grid::new();
        let before = [0, 10, 4, 2, 2, 10, 2, 2, 10, 2];
        for (row, &count) in before.iter().enumerate() {
            fill_centered(&mut grid, row, count);
        }

        let cleared = grid.clear_completed_rows();
        assert_eq!(cleared.as_slice(), &[8, 5, 1]);

        let mut expected = vec![0; HEIGHT];
        expected[..10].copy_from_slice(&[0, 0, 0, 0, 4, 2, 2, 2, 2, 2]);
        assert_eq!(counts(&grid), expected);
    }

    #[test]
    fn test_clear_rows_keeps_slot_contents() {
        let mut grid = Grid::new();
        grid.set(2, 0, Color::Blue);
        grid.set(2, 9, Color::Red);
        fill_centered(&mut grid, 3, 10);

        grid.clear_completed_rows();

        assert_eq!(grid.get(3, 0), Some(Some(Color::Blue)));
        assert_eq!(grid.get(3, 9), Some(Some(Color::Red)));
        assert_eq!(grid.occupied_in_row(2), 0);
    }

    #[test]
    fn test_clear_everything_but_one_row() {
        let mut grid = Grid::new();
        for row in 0..HEIGHT {
            if row == 10 {
                grid.set(row as i8, 6, Color::Red);
                grid.set(row as i8, 7, Color::Red);
            } else {
                fill_centered(&mut grid, row, WIDTH);
            }
        }

        let cleared = grid.clear_completed_rows();
        assert_eq!(cleared.len(), HEIGHT - 1);

        for row in 0..HEIGHT - 1 {
            assert_eq!(grid.occupied_in_row(row), 0, "row {} should be empty", row);
        }
        let bottom = HEIGHT as i8 - 1;
        for col in 0..WIDTH as i8 {
            assert_eq!(grid.is_occupied(bottom, col), col == 6 || col == 7);
        }
    }

    #[test]
    fn test_display_marks_occupied_slots() {
        let mut grid = Grid::new();
        grid.set(0, 0, Color::Green);
        grid.set(0, 9, Color::Green);

        let text = grid.to_string();
        let first = text.lines().next().unwrap();
        assert_eq!(first, "#........#");
        assert_eq!(text.lines().count(), HEIGHT);
    }
}
