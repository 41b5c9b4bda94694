//! Game module - the controller that owns the grid and the falling piece
//!
//! One piece falls at a time. Every command runs to completion and then
//! the controller advances its state machine:
//!
//! ```text
//! no piece --spawn--> falling --blocked down--> freeze into grid
//!    ^                                               |
//!    +------------------ clear full rows <-----------+
//! ```
//!
//! A frozen piece is written into the grid at the end of the command that
//! froze it (or that found it unable to descend) and the replacement spawns
//! at the end of the following command. The game is over, for good, as soon
//! as a freshly spawned piece overlaps frozen cells.
//!
//! Pacing is the caller's job: a timer issuing [`Direction::Down`] plays the
//! role of gravity.

use tracing::{debug, info};

use crate::error::CoreError;
use crate::grid::{ClearedRows, Grid};
use crate::piece::Piece;
use crate::rng::{ShapeSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Direction, Shape, SHAPE_COUNT};

/// What one command did beyond moving the piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutcome {
    /// The active piece was written into the grid.
    pub frozen: bool,
    /// Rows removed afterwards (pre-clear indices, bottom to top).
    pub rows_cleared: ClearedRows,
}

#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    grid: Grid,
    active: Option<Piece>,
    source: R,
    over: bool,
}

impl<R: ShapeSource> Game<R> {
    /// Start a game on an empty grid; the first piece spawns immediately.
    pub fn new(source: R) -> Result<Self, CoreError> {
        Self::with_grid(Grid::new(), source)
    }

    /// Start a game on a prepared grid.
    pub fn with_grid(grid: Grid, source: R) -> Result<Self, CoreError> {
        let mut game = Self {
            grid,
            active: None,
            source,
            over: false,
        };
        game.spawn()?;
        Ok(game)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn is_game_over(&self) -> bool {
        self.over
    }

    /// Advance the piece lifecycle.
    ///
    /// With no active piece, a random shape spawns at the top. With an active
    /// piece that cannot move down, its cells are written into the grid and
    /// the slot is emptied for the next call.
    ///
    /// Returns whether a piece was frozen.
    pub fn spawn(&mut self) -> Result<bool, CoreError> {
        let piece = match self.active.as_ref() {
            Some(piece) => piece,
            None => {
                self.spawn_new()?;
                return Ok(false);
            }
        };
        if piece.can_move(&self.grid, Direction::Down) {
            return Ok(false);
        }

        let positions = piece.positions();
        self.grid.lock_cells(&positions, piece.color());
        debug!(shape = piece.shape().as_str(), cells = ?positions, "froze piece");
        self.active = None;
        Ok(true)
    }

    fn spawn_new(&mut self) -> Result<(), CoreError> {
        let shape = Shape::ALL[self.source.next_index(SHAPE_COUNT) % SHAPE_COUNT];
        let piece = Piece::spawn(shape)?;
        debug!(shape = shape.as_str(), anchor = %piece.pivot(), "spawned piece");

        if !self.over && piece.overlaps(&self.grid) {
            self.over = true;
            info!(shape = shape.as_str(), "spawned piece overlaps the grid, game over");
        }
        self.active = Some(piece);
        Ok(())
    }

    /// Apply one command, then advance the lifecycle and clear full rows.
    ///
    /// `Drop` moves down until blocked, `Rotate` turns the piece about its
    /// pivot, anything else is a single step. Commands are ignored once the
    /// game is over.
    pub fn apply_command(&mut self, direction: Direction) -> Result<CommandOutcome, CoreError> {
        if self.over {
            return Ok(CommandOutcome::default());
        }

        if let Some(piece) = self.active.as_mut() {
            match direction {
                Direction::Drop => {
                    while piece.can_move(&self.grid, Direction::Down) {
                        piece.try_move(&self.grid, Direction::Down);
                    }
                }
                Direction::Rotate => {
                    piece.rotate(&self.grid);
                }
                _ => {
                    piece.try_move(&self.grid, direction);
                }
            }
        }

        let frozen = self.spawn()?;
        let rows_cleared = self.grid.clear_completed_rows();
        if !rows_cleared.is_empty() {
            debug!(rows = ?rows_cleared.as_slice(), "cleared rows");
        }
        Ok(CommandOutcome {
            frozen,
            rows_cleared,
        })
    }

    /// Copy of everything a renderer needs.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot without allocating.
    pub fn snapshot_into(&self, snap: &mut GameSnapshot) {
        for (dst, src) in snap.grid.iter_mut().zip(self.grid.rows()) {
            dst.copy_from_slice(src);
        }
        snap.active = self.active.as_ref().map(ActiveSnapshot::from);
        snap.game_over = self.over;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::MoveOutcome;
    use crate::rng::ScriptedSource;
    use crate::types::{Color, Position, GRID_HEIGHT, GRID_WIDTH};

    fn scripted(shapes: &[Shape]) -> ScriptedSource {
        ScriptedSource::new(shapes.iter().map(|s| s.index()).collect::<Vec<_>>())
    }

    #[test]
    fn test_spawn_follows_the_source() {
        let mut game = Game::new(scripted(&[Shape::T, Shape::Square])).unwrap();
        assert_eq!(game.active().unwrap().shape(), Shape::T);
        assert_eq!(game.active().unwrap().pivot(), Position::new(1, 4));

        game.apply_command(Direction::Drop).unwrap();
        assert!(game.active().is_none());

        game.apply_command(Direction::Down).unwrap();
        assert_eq!(game.active().unwrap().shape(), Shape::Square);
    }

    #[test]
    fn test_drop_freezes_into_bottom_rows() {
        let mut game = Game::new(scripted(&[Shape::Straight])).unwrap();
        let outcome = game.apply_command(Direction::Drop).unwrap();

        assert!(outcome.frozen);
        assert!(outcome.rows_cleared.is_empty());
        let bottom = GRID_HEIGHT as i8 - 1;
        for col in 3..=6 {
            assert_eq!(game.grid().get(bottom, col), Some(Some(Color::Cyan)));
        }
        assert_eq!(game.grid().occupied_in_row(bottom as usize), 4);
    }

    #[test]
    fn test_freeze_happens_on_the_next_update() {
        let mut grid = Grid::new();
        // Shelf under the spawned Square (cells rows 0-1, cols 4-5).
        grid.set(2, 4, Color::Red);
        let mut game = Game::with_grid(grid, scripted(&[Shape::Square])).unwrap();
        assert!(!game.is_game_over());

        let piece = game.active.as_mut().unwrap();
        assert_eq!(piece.try_move(&game.grid, Direction::Down), MoveOutcome::Frozen);
        assert!(game.spawn().unwrap());

        assert!(game.active().is_none());
        for (row, col) in [(0, 4), (0, 5), (1, 4), (1, 5)] {
            assert_eq!(game.grid().get(row, col), Some(Some(Color::Yellow)));
        }
    }

    #[test]
    fn test_sideways_command_moves_piece() {
        let mut game = Game::new(scripted(&[Shape::T])).unwrap();
        let before = game.active().unwrap().positions();

        let outcome = game.apply_command(Direction::Left).unwrap();
        assert!(!outcome.frozen);

        let after = game.active().unwrap().positions();
        for (a, b) in before.iter().zip(after.iter()) {
            assert_eq!(b.col, a.col - 1);
            assert_eq!(b.row, a.row);
        }
    }

    #[test]
    fn test_line_clear_after_freeze() {
        let mut grid = Grid::new();
        let bottom = GRID_HEIGHT as i8 - 1;
        // Leave exactly the Straight's footprint (cols 3-6) open on the bottom row.
        for col in 0..GRID_WIDTH as i8 {
            if !(3..=6).contains(&col) {
                grid.set(bottom, col, Color::Green);
            }
        }
        grid.set(bottom - 1, 0, Color::Red);

        let mut game = Game::with_grid(grid, scripted(&[Shape::Straight])).unwrap();
        let outcome = game.apply_command(Direction::Drop).unwrap();

        assert!(outcome.frozen);
        assert_eq!(outcome.rows_cleared.as_slice(), &[GRID_HEIGHT as usize - 1]);
        assert_eq!(game.grid().get(bottom, 0), Some(Some(Color::Red)));
        assert_eq!(game.grid().occupied_in_row(bottom as usize), 1);
    }

    #[test]
    fn test_game_over_is_sticky() {
        let mut grid = Grid::new();
        grid.set(1, 4, Color::Red);
        let mut game = Game::with_grid(grid, scripted(&[Shape::T])).unwrap();
        assert!(game.is_game_over());

        game.grid.clear(1, 4);
        assert!(game.is_game_over());
        assert_eq!(
            game.apply_command(Direction::Drop).unwrap(),
            CommandOutcome::default()
        );
        assert!(game.is_game_over());
    }

    #[test]
    fn test_stacking_to_the_top_ends_the_game() {
        let mut game = Game::new(scripted(&[Shape::Square])).unwrap();
        for _ in 0..40 {
            if game.is_game_over() {
                break;
            }
            game.apply_command(Direction::Drop).unwrap();
        }
        assert!(game.is_game_over());
        // Ten Squares stacked in columns 4-5 fill all twenty rows.
        assert_eq!(game.grid().occupied_in_row(0), 2);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let game = Game::new(scripted(&[Shape::ReverseL])).unwrap();
        let snap = game.snapshot();
        let active = snap.active.unwrap();
        assert_eq!(active.shape, Shape::ReverseL);
        assert_eq!(active.color, Color::Blue);
        assert_eq!(active.cells, game.active().unwrap().positions());
        assert!(!snap.game_over);
        assert!(snap.grid.iter().flatten().all(|slot| slot.is_none()));
    }
}
