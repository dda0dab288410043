//! Gravity Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `gravity_tetris::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use gravity_tetris_core as core;
pub use gravity_tetris_input as input;
pub use gravity_tetris_term as term;
pub use gravity_tetris_types as types;
