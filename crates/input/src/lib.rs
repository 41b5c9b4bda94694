//! Terminal input mapping.
//!
//! Translates `crossterm` key events into [`crate::types::Direction`]
//! commands for the game controller. There is no auto-repeat handling: each
//! key press is one command, and gravity comes from the caller's timer.

pub mod map;

pub use tetris_pivot_types as types;

pub use map::{handle_key_event, should_quit};
