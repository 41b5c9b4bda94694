//! Tetris Pivot (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_pivot::{core,input,term,types}`
//! so the binary, integration tests and benches share one import surface.

pub use tetris_pivot_core as core;
pub use tetris_pivot_input as input;
pub use tetris_pivot_term as term;
pub use tetris_pivot_types as types;
