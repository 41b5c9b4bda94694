//! Terminal presentation for the game.
//!
//! Rendering is split in two so the interesting half stays testable:
//!
//! - [`view`] composes a [`Frame`] from a [`core::GameSnapshot`] with no I/O
//! - [`renderer`] flushes frames to the real terminal through crossterm,
//!   rewriting only the rows that changed since the previous frame

pub mod frame;
pub mod renderer;
pub mod view;

pub use tetris_pivot_core as core;
pub use tetris_pivot_types as types;

pub use frame::{Frame, Glyph, Rgb, Style};
pub use renderer::TerminalRenderer;
pub use view::{BoardView, Viewport};
