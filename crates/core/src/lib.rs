//! Core game logic - pure, deterministic, and testable
//!
//! This crate owns every rule of the game and has no dependencies on the
//! terminal, input handling or timing:
//!
//! - **Deterministic**: shapes come from an injected [`ShapeSource`], so a
//!   seed or a script reproduces a game exactly
//! - **Synchronous**: each command runs to completion before the next
//! - **Fast**: fixed-size storage, no allocation on the command path
//!
//! # Module Structure
//!
//! - [`grid`]: 20x10 occupancy matrix and completed-row clearing
//! - [`cell`]: single-cell moves and pivot rotation with the L-path check
//! - [`pieces`]: spawn offsets for the seven shapes
//! - [`piece`]: four cells moving and rotating together, freeze detection
//! - [`game`]: the controller (spawn, commands, freeze, clear, game over)
//! - [`rng`]: shape sources (seeded LCG, scripted sequence)
//! - [`snapshot`]: read-only state for renderers
//!
//! # Example
//!
//! ```
//! use tetris_pivot_core::{Game, ScriptedSource};
//! use tetris_pivot_types::{Direction, Shape};
//!
//! let mut game = Game::new(ScriptedSource::new(vec![Shape::Straight.index()])).unwrap();
//! game.apply_command(Direction::Left).unwrap();
//! game.apply_command(Direction::Rotate).unwrap();
//!
//! let outcome = game.apply_command(Direction::Drop).unwrap();
//! assert!(outcome.frozen);
//! assert!(!game.is_game_over());
//! ```

pub mod cell;
pub mod error;
pub mod game;
pub mod grid;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use tetris_pivot_types as types;

pub use cell::Cell;
pub use error::CoreError;
pub use game::{CommandOutcome, Game};
pub use grid::{ClearedRows, Grid};
pub use piece::{MoveOutcome, Piece};
pub use pieces::{get_offsets, positions_at};
pub use rng::{ScriptedSource, ShapeSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
